//! Core data types for the avocado sales dataset
//!
//! - `SalesRecord`: one weekly observation for a region and avocado type
//! - `Table`: the loaded, date-sorted dataset
//! - `View`: a borrowed, filtered subset of a table
//! - `FilterSelection`: the filter predicate driven by the dashboard controls
//! - `FieldValue`: a single cell looked up by column name

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column holding the observation date
pub const DATE_COLUMN: &str = "Date";
/// Column holding the average unit price
pub const PRICE_COLUMN: &str = "AveragePrice";
/// Column holding the number of avocados sold
pub const VOLUME_COLUMN: &str = "Total Volume";
/// Column holding the sales region
pub const REGION_COLUMN: &str = "region";
/// Column holding the avocado type (organic, conventional)
pub const TYPE_COLUMN: &str = "type";

/// Columns the dashboard reads; every other non-index column passes through
pub const REQUIRED_COLUMNS: [&str; 5] = [
    DATE_COLUMN,
    PRICE_COLUMN,
    VOLUME_COLUMN,
    REGION_COLUMN,
    TYPE_COLUMN,
];

/// A single row of the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRecord {
    /// Observation date (no time component)
    pub date: NaiveDate,
    /// Average price of a single avocado
    pub average_price: f64,
    /// Avocados sold, rounded half to even at load
    pub total_volume: i64,
    /// Sales region
    pub region: String,
    /// Avocado type (`type` column)
    pub kind: String,
    /// Raw values of the pass-through columns, aligned with [`Table::columns`]
    #[serde(default)]
    pub extra: Vec<String>,
}

impl SalesRecord {
    /// Create a record with no pass-through values
    pub fn new(
        date: NaiveDate,
        region: impl Into<String>,
        kind: impl Into<String>,
        average_price: f64,
        total_volume: i64,
    ) -> Self {
        Self {
            date,
            average_price,
            total_volume,
            region: region.into(),
            kind: kind.into(),
            extra: Vec::new(),
        }
    }
}

/// A cell value resolved from a column name
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Date(NaiveDate),
    Float(f64),
    Int(i64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Date(_) => None,
        }
    }
}

/// The loaded dataset
///
/// Built once by the loader and never mutated afterwards. Records are kept
/// in ascending date order; filtering only ever borrows from it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<SalesRecord>,
}

impl Table {
    /// Build a table, sorting records by date
    ///
    /// The sort is stable so rows sharing a date keep their input order.
    pub fn new(columns: Vec<String>, mut records: Vec<SalesRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { columns, records }
    }

    /// Build a table with no pass-through columns
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self::new(Vec::new(), records)
    }

    /// Pass-through column names, in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `name` resolves to a column of this table
    pub fn has_field(&self, name: &str) -> bool {
        REQUIRED_COLUMNS.contains(&name) || self.columns.iter().any(|c| c == name)
    }

    /// Look up a cell of `record` by column name
    pub fn field(&self, record: &SalesRecord, name: &str) -> Option<FieldValue> {
        match name {
            DATE_COLUMN => Some(FieldValue::Date(record.date)),
            PRICE_COLUMN => Some(FieldValue::Float(record.average_price)),
            VOLUME_COLUMN => Some(FieldValue::Int(record.total_volume)),
            REGION_COLUMN => Some(FieldValue::Text(record.region.clone())),
            TYPE_COLUMN => Some(FieldValue::Text(record.kind.clone())),
            other => {
                let idx = self.columns.iter().position(|c| c == other)?;
                Some(FieldValue::Text(
                    record.extra.get(idx).cloned().unwrap_or_default(),
                ))
            }
        }
    }

    /// Distinct regions, sorted ascending
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.records.iter().map(|r| r.region.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Distinct avocado types, in first-seen order
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = Vec::new();
        for record in &self.records {
            if !kinds.contains(&record.kind) {
                kinds.push(record.kind.clone());
            }
        }
        kinds
    }

    /// Earliest and latest date, or `None` for an empty table
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date, last.date))
    }

    /// View over every record
    pub fn view(&self) -> View<'_> {
        View {
            table: self,
            rows: self.records.iter().collect(),
        }
    }

    /// Records matching `selection`, in date order
    pub fn filter(&self, selection: &FilterSelection) -> View<'_> {
        View {
            table: self,
            rows: self
                .records
                .iter()
                .filter(|r| selection.matches(r))
                .collect(),
        }
    }
}

/// A borrowed subset of a [`Table`]
#[derive(Debug, Clone)]
pub struct View<'a> {
    table: &'a Table,
    rows: Vec<&'a SalesRecord>,
}

impl<'a> View<'a> {
    /// The table this view borrows from
    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn rows(&self) -> &[&'a SalesRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Current values of the four dashboard filter controls
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSelection {
    pub region: String,
    /// Avocado type
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSelection {
    pub fn new(
        region: impl Into<String>,
        kind: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            region: region.into(),
            kind: kind.into(),
            start_date,
            end_date,
        }
    }

    /// Region and type equality plus an inclusive date range
    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.region == self.region
            && record.kind == self.kind
            && self.start_date <= record.date
            && record.date <= self.end_date
    }
}
