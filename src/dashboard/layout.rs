//! Layout Builder
//!
//! Declares the static component tree of the dashboard page. The tree is
//! built once at startup from the loaded table, serialized to JSON and
//! rendered by the browser script. Dropdown options and date bounds come
//! straight from the data.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::LayoutError;
use super::{DATE_RANGE_ID, PRICE_CHART_ID, REGION_FILTER_ID, TYPE_FILTER_ID, VOLUME_CHART_ID};
use crate::config::{DashboardConfig, InitialSelection};
use crate::dataset::Table;

/// Browser tab title
pub const PAGE_TITLE: &str = "Avocado Analytics: Understand Your Avocados!";

/// The full page: title plus component tree
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UiTree {
    pub title: String,
    pub root: Component,
}

impl UiTree {
    /// Find a component by id anywhere in the tree
    pub fn find(&self, id: &str) -> Option<&Component> {
        self.root.find(id)
    }
}

/// A node of the component tree
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Component {
    Div {
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        /// Text content rendered before any children
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        children: Vec<Component>,
    },
    H1 {
        class_name: String,
        text: String,
    },
    P {
        class_name: String,
        text: String,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: Option<String>,
        clearable: bool,
        searchable: bool,
        class_name: String,
    },
    DatePickerRange {
        id: String,
        min_date_allowed: Option<NaiveDate>,
        max_date_allowed: Option<NaiveDate>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    },
    Graph {
        id: String,
        /// Whether the zoom/export toolbar is shown
        display_mode_bar: bool,
    },
}

impl Component {
    fn div(class_name: &str, children: Vec<Component>) -> Self {
        Component::Div {
            class_name: Some(class_name.to_string()),
            text: None,
            children,
        }
    }

    fn text_div(class_name: &str, text: &str) -> Self {
        Component::Div {
            class_name: Some(class_name.to_string()),
            text: Some(text.to_string()),
            children: Vec::new(),
        }
    }

    /// Id of an interactive component
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown { id, .. }
            | Component::DatePickerRange { id, .. }
            | Component::Graph { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Component> {
        if self.id() == Some(id) {
            return Some(self);
        }
        match self {
            Component::Div { children, .. } => children.iter().find_map(|c| c.find(id)),
            _ => None,
        }
    }
}

/// One dropdown entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    fn same(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Build the page layout for `table`
pub fn build(table: &Table, config: &DashboardConfig) -> Result<UiTree, LayoutError> {
    let regions = table.regions();
    let kinds = table.kinds();

    let region = resolve_initial(
        REGION_FILTER_ID,
        &regions,
        &config.initial_region,
        config.initial_selection,
    )?;
    let kind = resolve_initial(
        TYPE_FILTER_ID,
        &kinds,
        &config.initial_type,
        config.initial_selection,
    )?;
    let bounds = table.date_bounds();

    let header = Component::div(
        "header",
        vec![
            Component::P {
                class_name: "header-emoji".to_string(),
                text: "🥑".to_string(),
            },
            Component::H1 {
                class_name: "header-title".to_string(),
                text: "Avocado Analytics".to_string(),
            },
            Component::P {
                class_name: "header-description".to_string(),
                text: "Analyze the behavior of avocado prices and the # \
                       of avocados sold in the US between 2015 and 2018"
                    .to_string(),
            },
        ],
    );

    let menu = Component::div(
        "menu",
        vec![
            Component::Div {
                class_name: None,
                text: None,
                children: vec![
                    Component::text_div("menu-title", "Region"),
                    Component::Dropdown {
                        id: REGION_FILTER_ID.to_string(),
                        options: regions.iter().map(|r| DropdownOption::same(r)).collect(),
                        value: region,
                        clearable: false,
                        searchable: true,
                        class_name: "dropdown".to_string(),
                    },
                ],
            },
            Component::Div {
                class_name: None,
                text: None,
                children: vec![
                    Component::text_div("menu-title", "Type"),
                    Component::Dropdown {
                        id: TYPE_FILTER_ID.to_string(),
                        options: kinds.iter().map(|k| DropdownOption::same(k)).collect(),
                        value: kind,
                        clearable: false,
                        searchable: false,
                        class_name: "dropdown".to_string(),
                    },
                ],
            },
            Component::Div {
                class_name: None,
                text: None,
                children: vec![
                    Component::text_div("menu-title", "Date Range"),
                    Component::DatePickerRange {
                        id: DATE_RANGE_ID.to_string(),
                        min_date_allowed: bounds.map(|(min, _)| min),
                        max_date_allowed: bounds.map(|(_, max)| max),
                        start_date: bounds.map(|(min, _)| min),
                        end_date: bounds.map(|(_, max)| max),
                    },
                ],
            },
        ],
    );

    let graphs = Component::div(
        "wrapper",
        [PRICE_CHART_ID, VOLUME_CHART_ID]
            .iter()
            .map(|id| {
                Component::div(
                    "card",
                    vec![Component::Graph {
                        id: id.to_string(),
                        display_mode_bar: false,
                    }],
                )
            })
            .collect(),
    );

    Ok(UiTree {
        title: PAGE_TITLE.to_string(),
        root: Component::Div {
            class_name: None,
            text: None,
            children: vec![header, menu, graphs],
        },
    })
}

/// Pick the initial value of a dropdown according to the selection policy
fn resolve_initial(
    control: &str,
    options: &[String],
    wanted: &str,
    policy: InitialSelection,
) -> Result<Option<String>, LayoutError> {
    if options.iter().any(|o| o == wanted) {
        return Ok(Some(wanted.to_string()));
    }

    match policy {
        InitialSelection::Strict => Err(LayoutError::MissingInitialValue {
            control: control.to_string(),
            value: wanted.to_string(),
        }),
        InitialSelection::Fallback => {
            let fallback = options.first().cloned();
            tracing::warn!(
                control = %control,
                wanted = %wanted,
                fallback = ?fallback,
                "Initial value not in dataset, falling back to first option"
            );
            Ok(fallback)
        }
    }
}
