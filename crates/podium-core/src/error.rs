//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("surface error: {0}")]
    Surface(#[from] podium_surface::SurfaceError),

    #[error("tab error: {0}")]
    Tab(#[from] podium_tabs::TabError),

    #[error("table error: {0}")]
    Table(#[from] podium_table::TableError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
