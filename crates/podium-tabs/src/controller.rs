//! Tab controller
//!
//! Deactivate-all-then-activate semantics scoped to one container. A
//! link whose target pane does not exist still becomes the active link;
//! the missing pane is a silent no-op, never an error.

use podium_surface::{Document, NodeId};

use crate::error::TabError;
use crate::markers::TabMarkers;
use crate::Result;

pub struct TabController {
    markers: TabMarkers,
}

impl TabController {
    pub fn new(markers: TabMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &TabMarkers {
        &self.markers
    }

    /// Tab-group containers in the document, in document order.
    pub fn discover(&self, doc: &Document) -> Vec<NodeId> {
        doc.find_by_class(doc.root(), &self.markers.group_class)
    }

    /// Clickable tab links inside one container.
    pub fn links(&self, doc: &Document, container: NodeId) -> Vec<NodeId> {
        doc.find_by_class(container, &self.markers.link_class)
    }

    /// The pane id a link targets, if it declares one.
    pub fn link_target(&self, doc: &Document, link: NodeId) -> Option<String> {
        doc.attr(link, &self.markers.target_attr).map(str::to_string)
    }

    /// Activate the link and pane matching `tab_id` within `container`,
    /// deactivating every other link and pane in that container only.
    pub fn select_tab(&self, doc: &mut Document, container: NodeId, tab_id: &str) -> Result<()> {
        if !doc.has_class(container, &self.markers.group_class) {
            return Err(TabError::NotAContainer(doc.tag(container).to_string()));
        }

        for link in doc.find_by_class(container, &self.markers.link_class) {
            doc.remove_class(link, &self.markers.active_class);
        }
        for pane in doc.find_by_class(container, &self.markers.pane_class) {
            doc.remove_class(pane, &self.markers.active_class);
        }

        if let Some(link) = self.link_for(doc, container, tab_id) {
            doc.add_class(link, &self.markers.active_class);
        }

        match doc.find_by_id(container, tab_id) {
            Some(pane) if doc.has_class(pane, &self.markers.pane_class) => {
                doc.add_class(pane, &self.markers.active_class);
            }
            _ => {
                // Link stays active with no pane shown.
                tracing::debug!(tab_id, "no pane matches selected tab");
            }
        }

        Ok(())
    }

    fn link_for(&self, doc: &Document, container: NodeId, tab_id: &str) -> Option<NodeId> {
        doc.find_by_class(container, &self.markers.link_class)
            .into_iter()
            .find(|&link| doc.attr(link, &self.markers.target_attr) == Some(tab_id))
    }
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(TabMarkers::default())
    }
}
