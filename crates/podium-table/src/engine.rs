//! Grouped table engine
//!
//! Per-table wiring over the header resolver, the color pass, and the
//! grouped sort. `prepare` runs once per table at page load: it
//! resolves every header cell and colors each resolved column.
//! Header clicks afterwards re-resolve and sort only; coloring is a
//! one-time initial pass and sorting never re-runs it.

use std::collections::BTreeSet;

use podium_surface::{Document, NodeId};

use crate::color::{self, ColorScheme};
use crate::error::TableError;
use crate::header::{true_column_index, HeaderMatrix};
use crate::markers::TableMarkers;
use crate::sort;
use crate::Result;

pub struct GroupedTableEngine {
    markers: TableMarkers,
    scheme: ColorScheme,
}

impl GroupedTableEngine {
    pub fn new(markers: TableMarkers, scheme: ColorScheme) -> Self {
        Self { markers, scheme }
    }

    pub fn markers(&self) -> &TableMarkers {
        &self.markers
    }

    /// Tables opting into the engine via the marker class.
    pub fn discover(&self, doc: &Document) -> Vec<NodeId> {
        doc.find_by_class(doc.root(), &self.markers.table_class)
            .into_iter()
            .filter(|&node| doc.tag(node) == "table")
            .collect()
    }

    /// Header cells of a table, across all header rows, top to bottom.
    pub fn header_cells(&self, doc: &Document, table: NodeId) -> Vec<NodeId> {
        doc.header_rows(table)
            .into_iter()
            .flat_map(|row| doc.row_cells(row))
            .collect()
    }

    /// True column index of one header cell; `None` means skip it.
    pub fn resolve_column(&self, doc: &Document, table: NodeId, cell: NodeId) -> Option<usize> {
        true_column_index(doc, table, cell)
    }

    /// One-time per-table setup: resolve every header cell and run the
    /// initial coloring pass over each distinct resolved column.
    /// Returns the resolved `(cell, column)` pairs for click wiring;
    /// unresolvable cells are skipped.
    pub fn prepare(&self, doc: &mut Document, table: NodeId) -> Result<Vec<(NodeId, usize)>> {
        self.ensure_table(doc, table)?;

        let matrix = HeaderMatrix::build(doc, table);
        let mut wired = Vec::new();
        for cell in self.header_cells(doc, table) {
            match matrix.column_of(cell) {
                Some(column) => wired.push((cell, column)),
                None => tracing::debug!(cell = ?cell, "header cell unresolved, skipping"),
            }
        }

        let columns: BTreeSet<usize> = wired.iter().map(|&(_, column)| column).collect();
        for column in columns {
            color::apply_column_coloring(doc, table, column, &self.markers, &self.scheme);
        }

        tracing::debug!(table = ?table, headers = wired.len(), "table prepared");
        Ok(wired)
    }

    pub fn apply_column_coloring(
        &self,
        doc: &mut Document,
        table: NodeId,
        column: usize,
    ) -> Result<()> {
        self.ensure_table(doc, table)?;
        color::apply_column_coloring(doc, table, column, &self.markers, &self.scheme);
        Ok(())
    }

    pub fn sort_by_column(&self, doc: &mut Document, table: NodeId, column: usize) -> Result<()> {
        self.ensure_table(doc, table)?;
        sort::sort_table_by_column(doc, table, column, &self.markers)?;
        Ok(())
    }

    fn ensure_table(&self, doc: &Document, table: NodeId) -> Result<()> {
        if doc.tag(table) != "table" {
            return Err(TableError::NotATable(doc.tag(table).to_string()));
        }
        Ok(())
    }
}

impl Default for GroupedTableEngine {
    fn default() -> Self {
        Self::new(TableMarkers::default(), ColorScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEADERBOARD: &str = r#"
        <table class="sortable">
          <thead>
            <tr><th rowspan="2">Model</th><th colspan="2">Scores</th></tr>
            <tr><th>easy</th><th>hard</th></tr>
          </thead>
          <tbody>
            <tr class="group-header"><td colspan="3">7B models</td></tr>
            <tr><td>alpha</td><td>10</td><td>3</td></tr>
            <tr><td>beta</td><td>30</td><td>1</td></tr>
            <tr><td>gamma</td><td>20</td><td>-</td></tr>
          </tbody>
        </table>"#;

    fn sortable_table(doc: &Document) -> NodeId {
        doc.find_by_class(doc.root(), "sortable")[0]
    }

    #[test]
    fn test_discover_filters_non_tables() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.add_class(div, "sortable");
        let table = doc.create_element("table");
        doc.add_class(table, "sortable");
        doc.append_child(doc.root(), div).unwrap();
        doc.append_child(doc.root(), table).unwrap();

        let engine = GroupedTableEngine::default();
        assert_eq!(engine.discover(&doc), vec![table]);
    }

    #[test]
    fn test_non_table_rejected() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.append_child(doc.root(), div).unwrap();

        let engine = GroupedTableEngine::default();
        assert!(engine.sort_by_column(&mut doc, div, 0).is_err());
        assert!(engine.apply_column_coloring(&mut doc, div, 0).is_err());
    }

    #[test]
    fn test_prepare_resolves_merged_headers() {
        let mut doc = Document::parse_html(LEADERBOARD);
        let table = sortable_table(&doc);
        let engine = GroupedTableEngine::default();

        let wired = engine.prepare(&mut doc, table).unwrap();
        let columns: Vec<usize> = wired.iter().map(|&(_, c)| c).collect();
        // Model=0, Scores=1, easy=1, hard=2.
        assert_eq!(columns, vec![0, 1, 1, 2]);
    }

    #[test]
    fn test_prepare_colors_numeric_columns() {
        let mut doc = Document::parse_html(LEADERBOARD);
        let table = sortable_table(&doc);
        let engine = GroupedTableEngine::default();
        engine.prepare(&mut doc, table).unwrap();

        let rows = doc.body_rows(table);
        let easy_beta = doc.cell_at(rows[2], 1).unwrap();
        let easy_alpha = doc.cell_at(rows[1], 1).unwrap();
        assert_eq!(
            doc.style(easy_beta, "background-color"),
            Some("hsl(214, 100%, 60.0%)")
        );
        assert_eq!(
            doc.style(easy_alpha, "background-color"),
            Some("hsl(214, 100%, 97.0%)")
        );
        // Name column has no numbers; untouched.
        let name = doc.cell_at(rows[1], 0).unwrap();
        assert_eq!(doc.style(name, "background-color"), None);
    }

    #[test]
    fn test_sort_by_resolved_column() {
        let mut doc = Document::parse_html(LEADERBOARD);
        let table = sortable_table(&doc);
        let engine = GroupedTableEngine::default();
        engine.prepare(&mut doc, table).unwrap();
        engine.sort_by_column(&mut doc, table, 1).unwrap();

        let names: Vec<String> = doc
            .body_rows(table)
            .into_iter()
            .skip(1)
            .map(|row| doc.text(doc.cell_at(row, 0).unwrap()).to_string())
            .collect();
        assert_eq!(names, vec!["beta", "gamma", "alpha"]);
    }
}
