//! # Commerce-Insights
//!
//! Aggregation pipeline turning a table of e-commerce purchase records into
//! (a) scalar insight values (mean, mode) and (b) ranked, size-bounded
//! grouped series (sum/count/mean per category, sorted and truncated to
//! top-N), packaged as chart-ready specs for an external rendering layer.
//!
//! The core contract with the renderer is small: a fixed-order list of
//! [`ChartSpec`](chart::ChartSpec)s and a map of named scalar
//! [`Insight`](insight::Insight)s. Layout, styling, and page serving belong
//! to the renderer; parsing and validating the input rows belong to the
//! loader.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use commerce_insights::prelude::*;
//!
//! let store: RecordStore = load_purchases()?; // loader collaborator
//! let dashboard = Dashboard::build(&store)?;
//!
//! render(&dashboard.charts, &dashboard.insights); // renderer collaborator
//! ```
//!
//! ## Ordering guarantees
//!
//! The record store preserves input row order, grouping records first-seen
//! category order, and every sort is stable — so equal-valued categories
//! always appear in the order their first records appeared in the input.
//!
//! ## Feature Flags
//!
//! - `telemetry`: helper to initialize a default `tracing` subscriber

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Purchase records, typed field selectors, and the immutable record store.
pub mod record;

/// Group-by/reduce/sort/truncate primitives.
pub mod aggregate;

/// Scalar summary statistics (mean, mode).
pub mod insight;

// ============================================================================
// Presentation Boundary
// ============================================================================

/// Chart-kind-tagged, presentation-ready series.
pub mod chart;

/// The fixed dashboard: five chart specs plus named insights.
pub mod dashboard;

/// Opt-in tracing subscriber setup.
pub mod telemetry;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for commerce-insights operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use commerce_insights::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{group_reduce, value_counts, AggregationResult, Reducer, SortOrder};
    pub use crate::chart::{ChartKind, ChartSpec};
    pub use crate::dashboard::{charts, insights, Dashboard, AVG_PURCHASE_PRICE, TOP_LANGUAGE};
    pub use crate::error::{Error, Result};
    pub use crate::insight::{mean, mode, Insight};
    pub use crate::record::{
        CategoricalField, Meridiem, NumericField, Record, RecordBuilder, RecordStore,
    };
}
