//! Table engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("node is not a table: <{0}>")]
    NotATable(String),

    #[error("surface error: {0}")]
    Surface(#[from] podium_surface::SurfaceError),
}
