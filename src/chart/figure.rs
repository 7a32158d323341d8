//! Chart object types
//!
//! A [`Figure`] is the in-memory chart handed to the browser. It serializes
//! to the figure JSON understood by Plotly.js (`{"data": [...], "layout": {...}}`),
//! so the page can render it without any further translation.

use serde::Serialize;

use crate::dataset::FieldValue;

/// A line chart: zero or more traces plus layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Number of traces carrying data
    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    /// Total number of points across all traces
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|t| t.x.len()).sum()
    }

    /// Y values of every trace, in order, for numeric cells
    pub fn y_values(&self) -> Vec<f64> {
        self.data
            .iter()
            .flat_map(|t| t.y.iter().filter_map(FieldValue::as_f64))
            .collect()
    }
}

/// One line series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub x: Vec<FieldValue>,
    pub y: Vec<FieldValue>,
    pub line: Line,
    /// `None` keeps the renderer's default hover label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Line stroke styling
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Line {
    pub color: String,
}

/// Figure layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: Title,
    /// Hover mode; `"x"` shows every trace at the cursor's x position
    pub hovermode: &'static str,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

/// Chart title, `x` is the horizontal anchor in [0, 1]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: AxisTitle,
    /// Disables zoom and pan on this axis
    pub fixedrange: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickprefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisTitle {
    pub text: String,
}
