//! Column color encoding
//!
//! A per-column value-to-lightness gradient on a fixed hue: the lowest
//! value renders near-white, the highest fully saturated. The encoding
//! is one-directional (higher is better); per-column "lower is better"
//! semantics are not detected.

use serde::{Deserialize, Serialize};

use podium_surface::{Document, NodeId};

use crate::markers::TableMarkers;

/// Fixed-hue gradient parameters. Lightness interpolates linearly from
/// `lightness_max` (lowest value) down to `lightness_min` (highest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub hue: f64,
    pub saturation: f64,
    pub lightness_min: f64,
    pub lightness_max: f64,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            hue: 214.0,
            saturation: 100.0,
            lightness_min: 60.0,
            lightness_max: 97.0,
        }
    }
}

impl ColorScheme {
    pub fn lightness(&self, normalized: f64) -> f64 {
        self.lightness_max - normalized * (self.lightness_max - self.lightness_min)
    }

    /// CSS color string for a normalized value in `[0, 1]`.
    pub fn css(&self, normalized: f64) -> String {
        format!(
            "hsl({}, {}%, {:.1}%)",
            self.hue,
            self.saturation,
            self.lightness(normalized)
        )
    }
}

/// Min/max statistics of one column's numeric cells. Recomputed per
/// coloring call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnColorProfile {
    pub min: f64,
    pub max: f64,
}

impl ColumnColorProfile {
    /// `None` when fewer than two numeric samples exist; a gradient
    /// needs a range.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.len() < 2 {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self { min, max })
    }

    /// Position of `value` in the column's range. An all-equal column
    /// maps every cell to 1.0 (most saturated end), not 0.
    pub fn normalized(&self, value: f64) -> f64 {
        if self.max == self.min {
            1.0
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }
}

/// Color every numeric cell in `column`, skipping group-header rows.
/// Non-numeric cells drop out of the statistics and stay uncolored.
pub(crate) fn apply_column_coloring(
    doc: &mut Document,
    table: NodeId,
    column: usize,
    markers: &TableMarkers,
    scheme: &ColorScheme,
) {
    let mut samples: Vec<(NodeId, f64)> = Vec::new();
    for row in doc.body_rows(table) {
        if doc.has_class(row, &markers.group_header_class) {
            continue;
        }
        let Some(cell) = doc.cell_at(row, column) else {
            continue;
        };
        if let Ok(value) = doc.text(cell).trim().parse::<f64>() {
            samples.push((cell, value));
        }
    }

    let values: Vec<f64> = samples.iter().map(|&(_, v)| v).collect();
    let Some(profile) = ColumnColorProfile::from_values(&values) else {
        tracing::debug!(column, "fewer than two numeric cells, not coloring");
        return;
    };

    for (cell, value) in samples {
        let color = scheme.css(profile.normalized(value));
        doc.set_style(cell, "background-color", &color);
    }
}
