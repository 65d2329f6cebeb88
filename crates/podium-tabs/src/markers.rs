//! Marker-class vocabulary for tab markup

use serde::{Deserialize, Serialize};

/// Class and attribute names the page producer uses for tab markup.
/// Defaults match the leaderboard pages this engine was written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabMarkers {
    /// Class on the container wrapping one tab-link/tab-pane set
    pub group_class: String,
    /// Class on clickable tab links
    pub link_class: String,
    /// Class on tab panes
    pub pane_class: String,
    /// Class marking the active link and the visible pane
    pub active_class: String,
    /// Link attribute naming the target pane's element id
    pub target_attr: String,
}

impl Default for TabMarkers {
    fn default() -> Self {
        Self {
            group_class: "tab-group".to_string(),
            link_class: "tab-link".to_string(),
            pane_class: "tab-pane".to_string(),
            active_class: "active".to_string(),
            target_attr: "data-tab".to_string(),
        }
    }
}
