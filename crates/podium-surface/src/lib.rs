//! Podium Render Surface
//!
//! The mutable document model the tab and table engines operate on.
//! All engine output is presentational mutation of this surface: class
//! toggling, inline style writes, and body-row reordering. Documents
//! are either built programmatically or loaded from producer-emitted
//! leaderboard HTML.

mod document;
mod error;
mod parse;
mod table;

pub use document::{Document, NodeId};
pub use error::SurfaceError;

pub type Result<T> = std::result::Result<T, SurfaceError>;
