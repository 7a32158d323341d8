//! Chart Builder
//!
//! Turns a filtered view of the dataset into a styled line [`Figure`].
//! The layout policy is fixed: centered title, unified x hover, both axes
//! locked against zoom and pan.

use super::error::{ChartResult, FieldError};
use super::figure::{Axis, AxisTitle, Figure, Layout, Line, Title, Trace};
use crate::dataset::View;

/// Styling for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    /// CSS color of the line stroke
    pub line_color: String,
    /// Prefix for y-axis tick labels, e.g. `"$"`
    pub tick_prefix: Option<String>,
    /// Hover label template; `None` keeps the renderer default
    pub hover_template: Option<String>,
}

impl ChartStyle {
    pub fn new(title: impl Into<String>, line_color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            line_color: line_color.into(),
            tick_prefix: None,
            hover_template: None,
        }
    }

    /// Builder method: set the y-axis tick prefix
    pub fn tick_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tick_prefix = Some(prefix.into());
        self
    }

    /// Builder method: set the hover template
    pub fn hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }
}

/// Build a line chart of `y_field` against `x_field`
///
/// Points are connected in view order. An empty view produces a figure with
/// no traces. Fields are validated against the table even when the view is
/// empty, so a misconfigured chart fails on every call.
pub fn build(view: &View<'_>, x_field: &str, y_field: &str, style: &ChartStyle) -> ChartResult<Figure> {
    let table = view.table();
    for field in [x_field, y_field] {
        if !table.has_field(field) {
            return Err(FieldError::UnknownField(field.to_string()));
        }
    }

    let mut data = Vec::new();
    if !view.is_empty() {
        let mut x = Vec::with_capacity(view.len());
        let mut y = Vec::with_capacity(view.len());
        for record in view.rows() {
            x.push(
                table
                    .field(record, x_field)
                    .ok_or_else(|| FieldError::UnknownField(x_field.to_string()))?,
            );
            y.push(
                table
                    .field(record, y_field)
                    .ok_or_else(|| FieldError::UnknownField(y_field.to_string()))?,
            );
        }

        data.push(Trace {
            trace_type: "scatter",
            mode: "lines",
            x,
            y,
            line: Line {
                color: style.line_color.clone(),
            },
            hovertemplate: style.hover_template.clone(),
        });
    }

    Ok(Figure {
        data,
        layout: Layout {
            title: Title {
                text: style.title.clone(),
                x: 0.5,
            },
            hovermode: "x",
            xaxis: Axis {
                title: AxisTitle {
                    text: x_field.to_string(),
                },
                fixedrange: true,
                tickprefix: None,
            },
            yaxis: Axis {
                title: AxisTitle {
                    text: y_field.to_string(),
                },
                fixedrange: true,
                tickprefix: style.tick_prefix.clone(),
            },
        },
    })
}
