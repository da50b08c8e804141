//! Scalar summary statistics over the whole store.

use serde::{Deserialize, Serialize};

use crate::aggregate::value_counts;
use crate::error::{Error, Result};
use crate::record::{CategoricalField, NumericField, RecordStore};

/// A single named scalar summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Insight {
    /// A numeric summary, e.g. a mean.
    Number(f64),
    /// A categorical summary, e.g. a mode.
    Label(String),
}

impl Insight {
    /// Get as f64, or None if this is a label.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Insight::Number(n) => Some(*n),
            Insight::Label(_) => None,
        }
    }

    /// Get as string, or None if this is a number.
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Insight::Label(s) => Some(s.as_str()),
            Insight::Number(_) => None,
        }
    }
}

/// Arithmetic mean of a numeric field across all records.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] on an empty store; a mean over zero records
/// is undefined, not silently zero.
pub fn mean(store: &RecordStore, field: NumericField) -> Result<f64> {
    if store.is_empty() {
        return Err(Error::EmptyInput);
    }
    let sum: f64 = store.iter().map(|record| field.get(record)).sum();
    Ok(sum / store.len() as f64)
}

/// Most frequent category of a field, ties broken by first-seen order.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] on an empty store.
pub fn mode(store: &RecordStore, field: CategoricalField) -> Result<String> {
    let counts = value_counts(store, field);

    // Strictly-greater scan over first-seen order keeps the earliest of the
    // maximal-frequency categories.
    let mut best: Option<(&str, f64)> = None;
    for (label, count) in counts.iter() {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((label, count)),
        }
    }

    best.map(|(label, _)| label.to_string()).ok_or(Error::EmptyInput)
}
