//! Dataset Loader
//!
//! Reads the avocado sales CSV into a [`Table`]. The loader:
//!
//! 1. drops the unnamed row-index column left behind by the exporter,
//! 2. parses `Date` as `YYYY-MM-DD`,
//! 3. rounds `Total Volume` half to even,
//! 4. sorts rows by date ascending.
//!
//! Every other column is passed through verbatim without validation.

use chrono::NaiveDate;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::{LoadError, LoadResult};
use super::types::{
    SalesRecord, Table, DATE_COLUMN, PRICE_COLUMN, REGION_COLUMN, TYPE_COLUMN, VOLUME_COLUMN,
};

/// Date format of the `Date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load the dataset from a CSV file
pub fn load(path: &Path) -> LoadResult<Table> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = load_from_reader(file)?;

    match table.date_bounds() {
        Some((first, last)) => tracing::info!(
            path = %path.display(),
            rows = table.len(),
            first = %first,
            last = %last,
            "Loaded dataset"
        ),
        None => tracing::warn!(path = %path.display(), "Loaded dataset is empty"),
    }

    Ok(table)
}

/// Load the dataset from any reader (useful for testing)
pub fn load_from_reader<R: Read>(reader: R) -> LoadResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(layout.parse_row(&row)?);
    }

    Ok(Table::new(layout.passthrough_names, records))
}

/// Round a volume to the nearest integer, ties to even
///
/// Idempotent: rounding an already integral value returns it unchanged.
/// Returns `None` for NaN, infinities and values outside the `i64` range.
pub fn round_volume(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let rounded = value.round_ties_even();
    if !rounded.is_finite() || rounded < -LIMIT || rounded >= LIMIT {
        return None;
    }
    Some(rounded as i64)
}

/// Whether a header names a pure row-index artifact
fn is_index_column(header: &str) -> bool {
    let header = header.trim();
    header.is_empty() || header.starts_with("Unnamed:")
}

/// Column positions resolved from the header row
struct ColumnLayout {
    date: usize,
    price: usize,
    volume: usize,
    region: usize,
    kind: usize,
    passthrough: Vec<usize>,
    passthrough_names: Vec<String>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        let date = find(DATE_COLUMN)?;
        let price = find(PRICE_COLUMN)?;
        let volume = find(VOLUME_COLUMN)?;
        let region = find(REGION_COLUMN)?;
        let kind = find(TYPE_COLUMN)?;
        let known = [date, price, volume, region, kind];

        let mut passthrough = Vec::new();
        let mut passthrough_names = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if known.contains(&idx) {
                continue;
            }
            if is_index_column(header) {
                tracing::debug!(column = idx, header = %header, "Dropping index column");
                continue;
            }
            passthrough.push(idx);
            passthrough_names.push(header.trim().to_string());
        }

        Ok(Self {
            date,
            price,
            volume,
            region,
            kind,
            passthrough,
            passthrough_names,
        })
    }

    fn parse_row(&self, row: &csv::StringRecord) -> LoadResult<SalesRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let date_str = cell(self.date);
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| {
            LoadError::InvalidDate {
                line,
                value: date_str.to_string(),
            }
        })?;

        let number = |idx: usize, column: &str| -> LoadResult<f64> {
            let value = cell(idx);
            value.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                line,
                column: column.to_string(),
                value: value.to_string(),
            })
        };

        let average_price = number(self.price, PRICE_COLUMN)?;
        let total_volume =
            round_volume(number(self.volume, VOLUME_COLUMN)?).ok_or_else(|| {
                LoadError::InvalidNumber {
                    line,
                    column: VOLUME_COLUMN.to_string(),
                    value: cell(self.volume).to_string(),
                }
            })?;

        Ok(SalesRecord {
            date,
            average_price,
            total_volume,
            region: cell(self.region).to_string(),
            kind: cell(self.kind).to_string(),
            extra: self
                .passthrough
                .iter()
                .map(|&idx| row.get(idx).unwrap_or("").to_string())
                .collect(),
        })
    }
}
