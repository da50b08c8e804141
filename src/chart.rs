//! Chart-ready presentation structures.
//!
//! The assembler is a structural mapping stage: it copies an already sorted
//! and truncated [`AggregationResult`] into a [`ChartSpec`] pair for pair,
//! with no recomputation, filtering, or further sorting. The rendering
//! collaborator consumes specs as-is; a spec is never mutated after assembly.

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregationResult;

/// Kind of chart a spec targets.
///
/// A closed enum rather than a string tag, so the assembler and renderer
/// cannot desynchronize on unrecognized kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Vertical bars, one per category.
    Bar,
    /// Proportional slices, one per category.
    Pie,
    /// A line over the category sequence.
    Line,
}

/// A presentation-ready, chart-kind-tagged series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart kind.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// X-axis label; empty for kinds without axes (pie).
    pub x_label: String,
    /// Y-axis label; empty for kinds without axes (pie).
    pub y_label: String,
    /// Draw point markers on line charts. Presentation detail only.
    pub markers: bool,
    /// `(label, value)` pairs in the exact order the aggregation produced.
    pub series: Vec<(String, f64)>,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            markers: false,
            series: Vec::new(),
        }
    }

    /// Start a bar chart spec.
    #[must_use]
    pub fn bar(title: impl Into<String>) -> Self {
        Self::new(ChartKind::Bar, title)
    }

    /// Start a pie chart spec.
    #[must_use]
    pub fn pie(title: impl Into<String>) -> Self {
        Self::new(ChartKind::Pie, title)
    }

    /// Start a line chart spec.
    #[must_use]
    pub fn line(title: impl Into<String>) -> Self {
        Self::new(ChartKind::Line, title)
    }

    /// Set the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Set the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Enable point markers (line charts).
    #[must_use]
    pub fn markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Copy an aggregation result's pairs into the series, order preserved.
    #[must_use]
    pub fn series(mut self, result: &AggregationResult) -> Self {
        self.series = result.entries().to_vec();
        self
    }
}
