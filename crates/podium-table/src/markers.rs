//! Marker-class vocabulary for table markup

use serde::{Deserialize, Serialize};

/// Class names and tokens the page producer uses for sortable tables.
/// Defaults match the leaderboard pages this engine was written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMarkers {
    /// Class on tables opting into sorting and coloring
    pub table_class: String,
    /// Class on body rows that open a group
    pub group_header_class: String,
    /// Cell text meaning "no data"; always sorts last
    pub placeholder: String,
}

impl Default for TableMarkers {
    fn default() -> Self {
        Self {
            table_class: "sortable".to_string(),
            group_header_class: "group-header".to_string(),
            placeholder: "-".to_string(),
        }
    }
}
