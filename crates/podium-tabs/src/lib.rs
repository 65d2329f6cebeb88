//! Podium Tab Switching
//!
//! Click-driven pane switching for tab-group containers. Containers are
//! isolated from each other: selecting a tab in one never touches the
//! active markers of another.

mod controller;
mod error;
mod markers;

pub use controller::TabController;
pub use error::TabError;
pub use markers::TabMarkers;

pub type Result<T> = std::result::Result<T, TabError>;
