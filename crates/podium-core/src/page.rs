//! Page coordinator
//!
//! One `Page` owns one document and stands in for the browser event
//! layer: `initialize` discovers tab groups and sortable tables, runs
//! the one-time header resolution and coloring pass, and records which
//! elements are wired; `click` dispatches synchronously to the tab
//! controller or the table engine. Everything runs to completion on
//! the caller's thread.

use std::collections::HashMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use podium_surface::{Document, NodeId};
use podium_table::GroupedTableEngine;
use podium_tabs::TabController;

use crate::config::Config;
use crate::Result;

pub struct Page {
    config: Config,
    document: RwLock<Document>,
    tabs: TabController,
    tables: GroupedTableEngine,
    /// Wired tab links, keyed by element identity; value is the
    /// link's container.
    wired_links: RwLock<HashMap<NodeId, NodeId>>,
    /// Wired header cells, keyed by element identity; value is the
    /// cell's table.
    wired_headers: RwLock<HashMap<NodeId, NodeId>>,
    initialized: RwLock<bool>,
}

impl Page {
    pub fn new(config: Config, document: Document) -> Self {
        let tabs = TabController::new(config.tabs.clone());
        let tables = GroupedTableEngine::new(config.table.clone(), config.colors.clone());
        Self {
            config,
            document: RwLock::new(document),
            tabs,
            tables,
            wired_links: RwLock::new(HashMap::new()),
            wired_headers: RwLock::new(HashMap::new()),
            initialized: RwLock::new(false),
        }
    }

    /// Parse producer-emitted HTML and wrap it in a page.
    pub fn from_html(config: Config, html: &str) -> Self {
        Self::new(config, Document::parse_html(html))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> RwLockReadGuard<'_, Document> {
        self.document.read()
    }

    pub fn document_mut(&self) -> RwLockWriteGuard<'_, Document> {
        self.document.write()
    }

    /// Wire the page: register every tab link and every resolvable
    /// header cell, and run the initial coloring pass over each
    /// resolved column. Calling this again is a no-op; handlers are
    /// never double-registered and coloring never re-runs.
    pub fn initialize(&self) -> Result<()> {
        {
            let mut initialized = self.initialized.write();
            if *initialized {
                tracing::debug!("page already initialized");
                return Ok(());
            }
            *initialized = true;
        }

        let mut doc = self.document.write();

        let mut links = self.wired_links.write();
        for container in self.tabs.discover(&doc) {
            for link in self.tabs.links(&doc, container) {
                links.insert(link, container);
            }
        }

        let mut headers = self.wired_headers.write();
        for table in self.tables.discover(&doc) {
            for (cell, _) in self.tables.prepare(&mut doc, table)? {
                headers.insert(cell, table);
            }
        }

        tracing::info!(
            tab_links = links.len(),
            header_cells = headers.len(),
            "page initialized"
        );
        Ok(())
    }

    /// Synchronous click dispatch. A wired tab link selects its pane
    /// within its own container; a wired header cell re-resolves its
    /// column and sorts its table (never re-coloring). Clicks on
    /// unwired nodes are no-ops.
    pub fn click(&self, node: NodeId) -> Result<()> {
        if let Some(&container) = self.wired_links.read().get(&node) {
            let mut doc = self.document.write();
            match self.tabs.link_target(&doc, node) {
                Some(tab_id) => self.tabs.select_tab(&mut doc, container, &tab_id)?,
                None => tracing::debug!(link = ?node, "tab link lost its target attribute"),
            }
            return Ok(());
        }

        if let Some(&table) = self.wired_headers.read().get(&node) {
            let mut doc = self.document.write();
            match self.tables.resolve_column(&doc, table, node) {
                Some(column) => self.tables.sort_by_column(&mut doc, table, column)?,
                None => tracing::debug!(cell = ?node, "header cell no longer resolvable"),
            }
            return Ok(());
        }

        tracing::trace!(node = ?node, "click on unwired node");
        Ok(())
    }
}
