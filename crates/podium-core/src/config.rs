//! Page configuration
//!
//! The marker-class vocabulary of the input contract plus the color
//! encoding constants, bundled so an embedding shell can override the
//! producer's naming without recompiling. Defaults match the
//! leaderboard pages this engine was written for.

use serde::{Deserialize, Serialize};

use podium_table::{ColorScheme, TableMarkers};
use podium_tabs::TabMarkers;

use crate::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tab-group container, link, pane, and active-marker classes
    pub tabs: TabMarkers,
    /// Sortable-table and group-header classes, placeholder token
    pub table: TableMarkers,
    /// Fixed-hue gradient parameters for column coloring
    pub colors: ColorScheme,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
