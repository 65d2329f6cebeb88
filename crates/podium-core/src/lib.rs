//! Podium Core
//!
//! Coordination layer for the Podium leaderboard engine: the page
//! coordinator, configuration, and error rollup. The page owns the
//! document; every engine operation is a synchronous presentational
//! mutation triggered by a dispatched click.

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::Page;

// Re-export engine components
pub use podium_surface::{Document, NodeId, SurfaceError};
pub use podium_table::{
    true_column_index, ColorScheme, ColumnColorProfile, GroupedTableEngine, HeaderMatrix,
    TableError, TableMarkers,
};
pub use podium_tabs::{TabController, TabError, TabMarkers};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
