//! Dashboard Routes
//!
//! - GET /api/v1/layout - The page component tree
//! - GET /api/v1/callbacks - Input/output bindings of the update callback
//! - POST /api/v1/callback - Run the update callback

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse, GraphOutput};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::{self, CallbackSpec, UiTree, PRICE_CHART_ID, VOLUME_CHART_ID};

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<UiTree> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/callbacks
pub async fn get_callbacks() -> Json<CallbackSpec> {
    Json(dashboard::bindings())
}

/// POST /api/v1/callback
///
/// Decodes the four filter inputs, filters the dataset and returns the
/// price and volume figures keyed by graph id.
pub async fn run_callback(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    let selection = dashboard::selection_from_inputs(&request.inputs)?;

    tracing::debug!(
        region = %selection.region,
        kind = %selection.kind,
        start = %selection.start_date,
        end = %selection.end_date,
        "Running update callback"
    );

    let (price, volume) = dashboard::update(&state.table, &selection)?;

    let mut response = BTreeMap::new();
    response.insert(PRICE_CHART_ID.to_string(), GraphOutput { figure: price });
    response.insert(VOLUME_CHART_ID.to_string(), GraphOutput { figure: volume });

    Ok(Json(CallbackResponse { response }))
}
