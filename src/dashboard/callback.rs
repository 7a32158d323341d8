//! Update Callback
//!
//! The single reactive unit of the dashboard. Whenever any of the four filter
//! controls changes, the browser sends their current values and receives the
//! two figures to redraw.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::BindingError;
use super::{DATE_RANGE_ID, PRICE_CHART_ID, REGION_FILTER_ID, TYPE_FILTER_ID, VOLUME_CHART_ID};
use crate::chart::{self, ChartResult, ChartStyle, Figure};
use crate::dataset::{FilterSelection, Table, DATE_COLUMN, PRICE_COLUMN, VOLUME_COLUMN};

/// A control attribute bound to the callback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Binding {
    pub id: String,
    pub property: String,
}

impl Binding {
    fn new(id: &str, property: &str) -> Self {
        Self {
            id: id.to_string(),
            property: property.to_string(),
        }
    }
}

/// Declared inputs and outputs of the update callback
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallbackSpec {
    pub inputs: Vec<Binding>,
    pub outputs: Vec<Binding>,
}

/// The binding contract between the page controls and [`update`]
pub fn bindings() -> CallbackSpec {
    CallbackSpec {
        inputs: vec![
            Binding::new(REGION_FILTER_ID, "value"),
            Binding::new(TYPE_FILTER_ID, "value"),
            Binding::new(DATE_RANGE_ID, "start_date"),
            Binding::new(DATE_RANGE_ID, "end_date"),
        ],
        outputs: vec![
            Binding::new(PRICE_CHART_ID, "figure"),
            Binding::new(VOLUME_CHART_ID, "figure"),
        ],
    }
}

/// Current value of one bound input
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Decode the callback inputs into a filter selection
pub fn selection_from_inputs(inputs: &[InputValue]) -> Result<FilterSelection, BindingError> {
    let string_input = |id: &str, property: &str| -> Result<String, BindingError> {
        let input = inputs
            .iter()
            .find(|i| i.id == id && i.property == property)
            .ok_or_else(|| BindingError::MissingInput {
                id: id.to_string(),
                property: property.to_string(),
            })?;
        input
            .value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| BindingError::NotAString {
                id: id.to_string(),
                property: property.to_string(),
            })
    };

    let date_input = |id: &str, property: &str| -> Result<NaiveDate, BindingError> {
        let value = string_input(id, property)?;
        parse_picker_date(&value).ok_or_else(|| BindingError::InvalidDate {
            id: id.to_string(),
            property: property.to_string(),
            value,
        })
    };

    Ok(FilterSelection {
        region: string_input(REGION_FILTER_ID, "value")?,
        kind: string_input(TYPE_FILTER_ID, "value")?,
        start_date: date_input(DATE_RANGE_ID, "start_date")?,
        end_date: date_input(DATE_RANGE_ID, "end_date")?,
    })
}

/// Parse a date picker value, either a bare date or a date-time
fn parse_picker_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Styling of the average price chart
pub fn price_chart_style() -> ChartStyle {
    ChartStyle::new("Average Price of Avocados", "#17B897")
        .tick_prefix("$")
        .hover_template("$%{y:.2f}<extra></extra>")
}

/// Styling of the sales volume chart
pub fn volume_chart_style() -> ChartStyle {
    ChartStyle::new("Avocados Sold", "#E12D39")
}

/// Filter the table and build the price and volume charts
///
/// An empty selection yields two empty figures; only a chart/field mismatch
/// is an error.
pub fn update(table: &Table, selection: &FilterSelection) -> ChartResult<(Figure, Figure)> {
    let view = table.filter(selection);

    let price = chart::build(&view, DATE_COLUMN, PRICE_COLUMN, &price_chart_style())?;
    let volume = chart::build(&view, DATE_COLUMN, VOLUME_COLUMN, &volume_chart_style())?;

    Ok((price, volume))
}
