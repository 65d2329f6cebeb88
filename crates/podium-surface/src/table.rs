//! Table-region queries
//!
//! Read access to the parts of a table the engines care about: header
//! rows, body rows, per-row cells, and span attributes. Missing regions
//! (no thead, no tbody) yield empty results rather than errors.

use crate::document::{Document, NodeId};

impl Document {
    /// The table's `tbody`, if it has one.
    pub fn table_body(&self, table: NodeId) -> Option<NodeId> {
        self.children(table)
            .iter()
            .copied()
            .find(|&c| self.tag(c) == "tbody")
    }

    /// `tr` elements under the table's `thead`, top to bottom.
    pub fn header_rows(&self, table: NodeId) -> Vec<NodeId> {
        let Some(head) = self
            .children(table)
            .iter()
            .copied()
            .find(|&c| self.tag(c) == "thead")
        else {
            return Vec::new();
        };
        self.children(head)
            .iter()
            .copied()
            .filter(|&c| self.tag(c) == "tr")
            .collect()
    }

    /// `tr` elements under the table's `tbody`, top to bottom.
    pub fn body_rows(&self, table: NodeId) -> Vec<NodeId> {
        let Some(body) = self.table_body(table) else {
            return Vec::new();
        };
        self.children(body)
            .iter()
            .copied()
            .filter(|&c| self.tag(c) == "tr")
            .collect()
    }

    /// Cell elements (`th`/`td`) of a row, left to right.
    pub fn row_cells(&self, row: NodeId) -> Vec<NodeId> {
        self.children(row)
            .iter()
            .copied()
            .filter(|&c| matches!(self.tag(c), "th" | "td"))
            .collect()
    }

    /// The nth cell of a row, counting rendered cell elements only.
    pub fn cell_at(&self, row: NodeId, index: usize) -> Option<NodeId> {
        self.row_cells(row).get(index).copied()
    }

    pub fn col_span(&self, cell: NodeId) -> usize {
        self.span_attr(cell, "colspan")
    }

    pub fn row_span(&self, cell: NodeId) -> usize {
        self.span_attr(cell, "rowspan")
    }

    // Span attributes floor at 1: absent, unparseable, and zero all
    // render as a single-cell footprint.
    fn span_attr(&self, cell: NodeId, name: &str) -> usize {
        self.attr(cell, name)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(|v| v.max(1))
            .unwrap_or(1)
    }
}
