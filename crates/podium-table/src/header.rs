//! Header matrix resolution
//!
//! Once a header carries colspan or rowspan attributes, a cell's true
//! column is no longer its ordinal position among siblings. The matrix
//! replays the header's layout: rows walk top to bottom, cells left to
//! right, and a column cursor skips positions an earlier row's rowspan
//! already claimed. A cell's true column index is the leftmost matrix
//! position it occupies.
//!
//! The grid is sized from the header content itself, growing as spans
//! are placed. The matrix is rebuilt on every resolution call; nothing
//! is cached between calls.

use podium_surface::{Document, NodeId};

/// Occupancy grid over a table's header region: one slot per resolved
/// (row, column) position, filled by the cell whose span covers it.
pub struct HeaderMatrix {
    grid: Vec<Vec<Option<NodeId>>>,
}

impl HeaderMatrix {
    /// Replay the header layout of `table` into an occupancy grid.
    pub fn build(doc: &Document, table: NodeId) -> Self {
        let rows = doc.header_rows(table);
        let mut grid: Vec<Vec<Option<NodeId>>> = vec![Vec::new(); rows.len()];

        for (r, &row) in rows.iter().enumerate() {
            let mut cursor = 0usize;
            for cell in doc.row_cells(row) {
                while grid[r].get(cursor).is_some_and(|slot| slot.is_some()) {
                    cursor += 1;
                }
                let col_span = doc.col_span(cell);
                let row_span = doc.row_span(cell);
                for rr in r..(r + row_span).min(grid.len()) {
                    for cc in cursor..cursor + col_span {
                        if grid[rr].len() <= cc {
                            grid[rr].resize(cc + 1, None);
                        }
                        // Malformed overlapping spans keep the first
                        // occupant rather than clobbering it.
                        if grid[rr][cc].is_none() {
                            grid[rr][cc] = Some(cell);
                        }
                    }
                }
                cursor += col_span;
            }
        }

        Self { grid }
    }

    /// Leftmost column occupied by `cell`, or `None` if the cell is not
    /// part of this header.
    pub fn column_of(&self, cell: NodeId) -> Option<usize> {
        self.grid
            .iter()
            .find_map(|row| row.iter().position(|&slot| slot == Some(cell)))
    }

    /// Resolved column count (widest row of the grid).
    pub fn width(&self) -> usize {
        self.grid.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row_count(&self) -> usize {
        self.grid.len()
    }
}

/// True zero-based column index of a header cell, span-merging
/// resolved. `None` means the cell could not be located; callers must
/// skip coloring and sorting for that header.
pub fn true_column_index(doc: &Document, table: NodeId, cell: NodeId) -> Option<usize> {
    HeaderMatrix::build(doc, table).column_of(cell)
}
