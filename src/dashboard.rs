//! The fixed set of charts and insights exposed to the rendering collaborator.
//!
//! Five chart specs in a fixed order plus a map of named scalar insights.
//! Everything here is derived and stateless; it is recomputed from the store
//! on each call, since the store never changes during a run.

use indexmap::IndexMap;
use tracing::debug;

use crate::aggregate::{group_reduce, value_counts, Reducer, SortOrder};
use crate::chart::ChartSpec;
use crate::error::Result;
use crate::insight::{mean, mode, Insight};
use crate::record::{CategoricalField, NumericField, RecordStore};

/// Insight name for the mean purchase price.
pub const AVG_PURCHASE_PRICE: &str = "avgPurchasePrice";

/// Insight name for the most common language.
pub const TOP_LANGUAGE: &str = "topLanguage";

/// Everything the rendering collaborator needs for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// The five chart specs, in fixed display order.
    pub charts: Vec<ChartSpec>,
    /// Named scalar insights.
    pub insights: IndexMap<String, Insight>,
}

impl Dashboard {
    /// Compute all charts and insights from the store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyInput`] on an empty store, because the
    /// scalar insights are undefined over zero records. Callers that want the
    /// (empty-series) charts regardless can use [`charts`] directly.
    pub fn build(store: &RecordStore) -> Result<Self> {
        let dashboard = Self {
            charts: charts(store),
            insights: insights(store)?,
        };
        debug!(records = store.len(), charts = dashboard.charts.len(), "dashboard assembled");
        Ok(dashboard)
    }
}

/// Build the five fixed chart specs, in display order.
///
/// Total over any store: an empty store yields five specs with empty series.
#[must_use]
pub fn charts(store: &RecordStore) -> Vec<ChartSpec> {
    let top_companies = group_reduce(
        store,
        CategoricalField::Company,
        NumericField::PurchasePrice,
        Reducer::Mean,
    )
    .top_n(5, SortOrder::Descending);

    let am_pm = value_counts(store, CategoricalField::Meridiem);

    let top_providers = group_reduce(
        store,
        CategoricalField::CcProvider,
        NumericField::PurchasePrice,
        Reducer::Sum,
    )
    .top_n(5, SortOrder::Descending);

    let languages =
        value_counts(store, CategoricalField::Language).sorted_by_value(SortOrder::Descending);

    let top_jobs = value_counts(store, CategoricalField::Job).top_n(10, SortOrder::Descending);

    vec![
        ChartSpec::bar("Top 5 Companies by Avg Purchase Price")
            .x_label("Company")
            .y_label("Avg Purchase Price")
            .series(&top_companies),
        ChartSpec::pie("AM vs PM Purchases").series(&am_pm),
        ChartSpec::bar("Top 5 Credit Card Providers by Purchase Value")
            .x_label("Credit Card Provider")
            .y_label("Total Purchase Value")
            .series(&top_providers),
        ChartSpec::bar("Language Distribution")
            .x_label("Language")
            .y_label("Count")
            .series(&languages),
        ChartSpec::line("Top 10 Job Titles")
            .x_label("Job Title")
            .y_label("Count")
            .markers(true)
            .series(&top_jobs),
    ]
}

/// Compute the named scalar insights.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyInput`] on an empty store.
pub fn insights(store: &RecordStore) -> Result<IndexMap<String, Insight>> {
    let mut map = IndexMap::new();
    map.insert(
        AVG_PURCHASE_PRICE.to_string(),
        Insight::Number(mean(store, NumericField::PurchasePrice)?),
    );
    map.insert(
        TOP_LANGUAGE.to_string(),
        Insight::Label(mode(store, CategoricalField::Language)?),
    );
    Ok(map)
}
