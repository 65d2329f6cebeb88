//! Podium Table Engine
//!
//! Grouped leaderboard tables: resolves span-merged headers to true
//! column indices, applies a per-column value-to-color gradient, and
//! sorts group members by a clicked column without ever moving a
//! group-header row or reordering groups relative to each other.

mod color;
mod engine;
mod error;
mod header;
mod markers;
mod sort;

pub use color::{ColorScheme, ColumnColorProfile};
pub use engine::GroupedTableEngine;
pub use error::TableError;
pub use header::{true_column_index, HeaderMatrix};
pub use markers::TableMarkers;

pub type Result<T> = std::result::Result<T, TableError>;
