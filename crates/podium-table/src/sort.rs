//! Grouped stable sorting
//!
//! Body rows partition into groups at each group-header row; rows are
//! sorted within their group only. Group-header rows never move
//! relative to each other and never participate in comparisons. Rows
//! preceding the first group-header belong to no group and are dropped
//! when the body is rebuilt.

use std::cmp::Ordering;

use podium_surface::{Document, NodeId};

use crate::markers::TableMarkers;

/// Stable-sort each group's member rows by the text of the cell at
/// `column`, then rebuild the body as each group-header followed by its
/// reordered members. Malformed tables (no tbody, no groups) are
/// no-ops.
pub(crate) fn sort_table_by_column(
    doc: &mut Document,
    table: NodeId,
    column: usize,
    markers: &TableMarkers,
) -> podium_surface::Result<()> {
    let Some(body) = doc.table_body(table) else {
        return Ok(());
    };

    let mut groups: Vec<(NodeId, Vec<NodeId>)> = Vec::new();
    for row in doc.body_rows(table) {
        if doc.has_class(row, &markers.group_header_class) {
            groups.push((row, Vec::new()));
        } else if let Some((_, members)) = groups.last_mut() {
            members.push(row);
        }
    }
    if groups.is_empty() {
        return Ok(());
    }

    let mut rebuilt = Vec::new();
    for (header, mut members) in groups {
        members.sort_by(|&a, &b| {
            compare_cells(&sort_key(doc, a, column), &sort_key(doc, b, column), markers)
        });
        rebuilt.push(header);
        rebuilt.extend(members);
    }

    tracing::debug!(table = ?table, column, rows = rebuilt.len(), "sorted table body");
    doc.set_children(body, rebuilt)
}

fn sort_key(doc: &Document, row: NodeId, column: usize) -> String {
    doc.cell_at(row, column)
        .map(|cell| doc.text(cell).trim().to_string())
        .unwrap_or_default()
}

/// Descending comparison: the placeholder always loses, numbers beat
/// text order when both sides parse, and equal keys stay put
/// (`sort_by` is stable).
fn compare_cells(a: &str, b: &str, markers: &TableMarkers) -> Ordering {
    match (a == markers.placeholder, b == markers.placeholder) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(x), Ok(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            _ => b.cmp(a),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        doc: Document,
        table: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut doc = Document::new();
            let table = doc.create_element("table");
            let body = doc.create_element("tbody");
            doc.append_child(doc.root(), table).unwrap();
            doc.append_child(table, body).unwrap();
            Self { doc, table }
        }

        fn group(&mut self, label: &str) {
            let body = self.doc.table_body(self.table).unwrap();
            let row = self.doc.create_element("tr");
            self.doc.add_class(row, "group-header");
            let td = self.doc.create_element("td");
            self.doc.set_text(td, label);
            self.doc.append_child(body, row).unwrap();
            self.doc.append_child(row, td).unwrap();
        }

        fn row(&mut self, cells: &[&str]) {
            let body = self.doc.table_body(self.table).unwrap();
            let row = self.doc.create_element("tr");
            self.doc.append_child(body, row).unwrap();
            for text in cells {
                let td = self.doc.create_element("td");
                self.doc.set_text(td, text);
                self.doc.append_child(row, td).unwrap();
            }
        }

        fn sort(&mut self, column: usize) {
            sort_table_by_column(&mut self.doc, self.table, column, &TableMarkers::default())
                .unwrap();
        }

        /// First-cell text of every body row, top to bottom.
        fn column_texts(&self, column: usize) -> Vec<String> {
            self.doc
                .body_rows(self.table)
                .into_iter()
                .map(|row| sort_key(&self.doc, row, column))
                .collect()
        }
    }

    #[test]
    fn test_placeholder_sorts_last() {
        let mut fx = Fixture::new();
        fx.group("7B");
        fx.row(&["-"]);
        fx.row(&["5"]);
        fx.row(&["3"]);
        fx.sort(0);

        assert_eq!(fx.column_texts(0), vec!["7B", "5", "3", "-"]);
    }

    #[test]
    fn test_numeric_descending() {
        let mut fx = Fixture::new();
        fx.group("g");
        fx.row(&["2.5"]);
        fx.row(&["10"]);
        fx.row(&["9"]);
        fx.sort(0);

        assert_eq!(fx.column_texts(0), vec!["g", "10", "9", "2.5"]);
    }

    #[test]
    fn test_lexicographic_fallback_descending() {
        let mut fx = Fixture::new();
        fx.group("g");
        fx.row(&["alpha"]);
        fx.row(&["gamma"]);
        fx.row(&["beta"]);
        fx.sort(0);

        assert_eq!(fx.column_texts(0), vec!["g", "gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut fx = Fixture::new();
        fx.group("g");
        fx.row(&["7", "first"]);
        fx.row(&["7", "second"]);
        fx.row(&["9", "top"]);
        fx.sort(0);

        assert_eq!(fx.column_texts(1), vec!["", "top", "first", "second"]);
    }

    #[test]
    fn test_groups_never_interleave() {
        let mut fx = Fixture::new();
        fx.group("one");
        fx.row(&["A", "3"]);
        fx.row(&["B", "1"]);
        fx.group("two");
        fx.row(&["C", "2"]);
        fx.row(&["D", "4"]);
        fx.sort(1);

        assert_eq!(fx.column_texts(0), vec!["one", "A", "B", "two", "D", "C"]);
    }

    #[test]
    fn test_rows_before_first_group_dropped() {
        let mut fx = Fixture::new();
        fx.row(&["orphan"]);
        fx.group("g");
        fx.row(&["1"]);
        fx.sort(0);

        assert_eq!(fx.column_texts(0), vec!["g", "1"]);
    }

    #[test]
    fn test_missing_cells_degrade() {
        let mut fx = Fixture::new();
        fx.group("g");
        fx.row(&["only one cell"]);
        fx.row(&["a", "5"]);
        // Sorting by a column the first row lacks must not error.
        fx.sort(1);
        assert_eq!(fx.column_texts(0), vec!["g", "a", "only one cell"]);
    }

    #[test]
    fn test_no_tbody_is_noop() {
        let mut doc = Document::new();
        let table = doc.create_element("table");
        doc.append_child(doc.root(), table).unwrap();
        sort_table_by_column(&mut doc, table, 0, &TableMarkers::default()).unwrap();
    }

    #[test]
    fn test_resort_is_stable_noop() {
        let mut fx = Fixture::new();
        fx.group("g");
        fx.row(&["3"]);
        fx.row(&["8"]);
        fx.sort(0);
        let once = fx.column_texts(0);
        fx.sort(0);
        assert_eq!(fx.column_texts(0), once);
    }
}
