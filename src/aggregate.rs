//! Group-by/reduce/sort/truncate primitives.
//!
//! Every chart in the pipeline is built from one `(group key, metric)` pair
//! fed through [`group_reduce`] or [`value_counts`], then ordered and bounded
//! with [`AggregationResult::sorted_by_value`] / [`AggregationResult::top_n`].
//!
//! First-seen category order is recorded during the grouping pass and carried
//! through every stable sort: given two categories with equal value, the one
//! whose first record appears earlier in the store always precedes the other.
//! That is a correctness contract, not an implementation detail — category
//! insertion order is meaningful to a human reading a frequency chart.

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use crate::record::{CategoricalField, NumericField, RecordStore};

/// Reduction applied per category after the grouping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    /// Sum of the metric over the category's members.
    Sum,
    /// Arithmetic mean of the metric over the category's members.
    Mean,
    /// Number of members; ignores the metric.
    Count,
}

/// Sort direction for grouped series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Largest value first.
    #[default]
    Descending,
    /// Smallest value first.
    Ascending,
}

/// An ordered sequence of `(label, value)` pairs from one group-by-reduce pass.
///
/// Fresh from [`group_reduce`] or [`value_counts`] the pairs are in first-seen
/// category order; after [`sorted_by_value`](Self::sorted_by_value) or
/// [`top_n`](Self::top_n) they are in value order with first-seen tie-break.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationResult {
    entries: Vec<(String, f64)>,
}

impl AggregationResult {
    /// Build a result from pairs already in a meaningful order.
    #[must_use]
    pub fn from_pairs(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// The `(label, value)` pairs in their current order.
    #[must_use]
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pair at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&str, f64)> {
        self.entries.get(index).map(|(label, value)| (label.as_str(), *value))
    }

    /// Category labels in their current order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Values in their current order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    /// Iterate `(label, value)` pairs in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Sort by value in the requested order, keeping all entries.
    ///
    /// The sort is stable, so categories with equal values keep their
    /// relative (first-seen) order.
    #[must_use]
    pub fn sorted_by_value(mut self, order: SortOrder) -> Self {
        // Values are finite by loader contract; Equal fallback keeps the sort
        // total and preserves entry order for incomparable pairs.
        self.entries.sort_by(|(_, a), (_, b)| match order {
            SortOrder::Descending => b.partial_cmp(a).unwrap_or(Ordering::Equal),
            SortOrder::Ascending => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        });
        self
    }

    /// Sort by value, then keep only the first `n` entries.
    ///
    /// Returns `min(n, len)` entries; a short result is returned whole, with
    /// no padding and no error. Idempotent for a fixed `(n, order)`.
    #[must_use]
    pub fn top_n(self, n: usize, order: SortOrder) -> Self {
        let mut sorted = self.sorted_by_value(order);
        sorted.entries.truncate(n);
        sorted
    }
}

impl<'a> IntoIterator for &'a AggregationResult {
    type Item = &'a (String, f64);
    type IntoIter = std::slice::Iter<'a, (String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group records by a categorical field and reduce a numeric field per group.
///
/// Single pass over the store: each category accumulates a running sum and
/// count in an insertion-ordered map, so first-seen category order is recorded
/// for tie-breaking. The requested reduction is applied per category after the
/// pass. Categories are discovered from data, never predeclared, so a grouped
/// category always has at least one member and [`Reducer::Mean`] cannot divide
/// by zero.
///
/// An empty store yields an empty result; this is not an error.
#[must_use]
pub fn group_reduce(
    store: &RecordStore,
    key: CategoricalField,
    metric: NumericField,
    reducer: Reducer,
) -> AggregationResult {
    let mut groups: IndexMap<String, (f64, usize)> = IndexMap::new();

    for record in store {
        let entry = groups.entry(key.get(record).to_string()).or_insert((0.0, 0));
        entry.0 += metric.get(record);
        entry.1 += 1;
    }

    debug!(
        records = store.len(),
        categories = groups.len(),
        ?key,
        ?reducer,
        "group pass complete"
    );

    let entries = groups
        .into_iter()
        .map(|(label, (sum, count))| {
            let value = match reducer {
                Reducer::Sum => sum,
                Reducer::Mean => sum / count as f64,
                Reducer::Count => count as f64,
            };
            (label, value)
        })
        .collect();

    AggregationResult { entries }
}

/// Count how often each category of a field occurs.
///
/// Pure frequency pass with no metric; the result is unsorted (first-seen
/// category order). Apply [`AggregationResult::sorted_by_value`] or
/// [`AggregationResult::top_n`] as the consuming chart requires.
#[must_use]
pub fn value_counts(store: &RecordStore, key: CategoricalField) -> AggregationResult {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for record in store {
        *counts.entry(key.get(record).to_string()).or_insert(0) += 1;
    }

    debug!(records = store.len(), categories = counts.len(), ?key, "count pass complete");

    AggregationResult {
        entries: counts.into_iter().map(|(label, n)| (label, n as f64)).collect(),
    }
}
