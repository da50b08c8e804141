//! Purchase records and the immutable store that holds them.
//!
//! The store is built once from an already-parsed, already-validated sequence
//! of records supplied by a loader collaborator, and is read-only thereafter.
//! Insertion order equals input row order and is preserved end-to-end; every
//! tie-break downstream depends on it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Time-of-day half for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon or later.
    Pm,
}

impl Meridiem {
    /// Category label used in grouped series.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// One purchase transaction.
///
/// The loader guarantees all six fields are populated with correctly typed
/// values; a fully constructed `Record` is well-formed by construction.
/// `purchase_price` is finite by loader contract (non-negative by domain
/// convention, not enforced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Company the purchase was made from.
    pub company: String,
    /// Price paid for the purchase.
    pub purchase_price: f64,
    /// Whether the purchase happened before or after noon.
    pub meridiem: Meridiem,
    /// Credit card provider used.
    pub cc_provider: String,
    /// Buyer's language.
    pub language: String,
    /// Buyer's job title.
    pub job: String,
}

impl Record {
    /// Start assembling a record field by field.
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }
}

/// Loader-facing record assembler.
///
/// [`RecordBuilder::build`] is the one place a field can be absent in this
/// otherwise fully typed pipeline, so it is where a loader contract violation
/// surfaces as [`Error::MissingField`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    company: Option<String>,
    purchase_price: Option<f64>,
    meridiem: Option<Meridiem>,
    cc_provider: Option<String>,
    language: Option<String>,
    job: Option<String>,
}

impl RecordBuilder {
    /// Set the company.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the purchase price.
    #[must_use]
    pub fn purchase_price(mut self, price: f64) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Set the time-of-day half.
    #[must_use]
    pub fn meridiem(mut self, meridiem: Meridiem) -> Self {
        self.meridiem = Some(meridiem);
        self
    }

    /// Set the credit card provider.
    #[must_use]
    pub fn cc_provider(mut self, provider: impl Into<String>) -> Self {
        self.cc_provider = Some(provider.into());
        self
    }

    /// Set the buyer's language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the buyer's job title.
    #[must_use]
    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Finish the record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first field that was never
    /// set.
    pub fn build(self) -> Result<Record> {
        Ok(Record {
            company: self
                .company
                .ok_or(Error::MissingField { field: "company" })?,
            purchase_price: self.purchase_price.ok_or(Error::MissingField {
                field: "purchase_price",
            })?,
            meridiem: self
                .meridiem
                .ok_or(Error::MissingField { field: "meridiem" })?,
            cc_provider: self.cc_provider.ok_or(Error::MissingField {
                field: "cc_provider",
            })?,
            language: self
                .language
                .ok_or(Error::MissingField { field: "language" })?,
            job: self.job.ok_or(Error::MissingField { field: "job" })?,
        })
    }
}

/// Typed selector for the categorical columns of a [`Record`].
///
/// Resolved once at call-site construction; the aggregation pass never does
/// per-record string lookups to find a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalField {
    /// `company` column.
    Company,
    /// `cc_provider` column.
    CcProvider,
    /// `language` column.
    Language,
    /// `job` column.
    Job,
    /// `meridiem` column, labeled "AM"/"PM".
    Meridiem,
}

impl CategoricalField {
    /// Read this field's category label from a record.
    #[must_use]
    pub fn get<'a>(self, record: &'a Record) -> &'a str {
        match self {
            CategoricalField::Company => &record.company,
            CategoricalField::CcProvider => &record.cc_provider,
            CategoricalField::Language => &record.language,
            CategoricalField::Job => &record.job,
            CategoricalField::Meridiem => record.meridiem.as_str(),
        }
    }
}

/// Typed selector for the numeric columns of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// `purchase_price` column.
    PurchasePrice,
}

impl NumericField {
    /// Read this field's value from a record.
    #[must_use]
    pub fn get(self, record: &Record) -> f64 {
        match self {
            NumericField::PurchasePrice => record.purchase_price,
        }
    }
}

/// An ordered, immutable sequence of purchase records.
///
/// Built once at startup and shared read-only afterwards; concurrent
/// aggregations need only `&RecordStore`, no locking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store from loaded records, preserving their order.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
