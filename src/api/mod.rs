//! Avocado Analytics HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page
//! - `GET /assets/style.css` - Stylesheet
//! - `GET /assets/dashboard.js` - Renderer script
//!
//! ## Dashboard
//! - `GET /api/v1/layout` - Component tree
//! - `GET /api/v1/callbacks` - Callback bindings
//! - `POST /api/v1/callback` - Run the update callback
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use avocado_analytics::api::{serve, AppState};
//! use avocado_analytics::config::Config;
//! use avocado_analytics::{dashboard, dataset};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let table = Arc::new(dataset::load(&config.dataset.path)?);
//!     let layout = dashboard::layout::build(&table, &config.dashboard)?;
//!
//!     let state = AppState::new(table, layout, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/layout", get(routes::dashboard::get_layout))
        .route("/callbacks", get(routes::dashboard::get_callbacks))
        .route("/callback", post(routes::dashboard::run_callback));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::assets::index))
        .route("/assets/style.css", get(routes::assets::style_css))
        .route("/assets/dashboard.js", get(routes::assets::dashboard_js))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Avocado Analytics listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Avocado Analytics shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard;
    use crate::dataset::{SalesRecord, Table};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app(table: Table) -> Router {
        let table = Arc::new(table);
        let layout = dashboard::layout::build(&table, &DashboardConfig::default()).unwrap();
        let state = AppState::new(table, layout, ServerConfig::default());
        build_router(state)
    }

    fn two_row_table() -> Table {
        let d = |day| NaiveDate::from_ymd_opt(2015, 1, day).unwrap();
        Table::from_records(vec![
            SalesRecord::new(d(4), "Albany", "organic", 1.20, 1000),
            SalesRecord::new(d(11), "Albany", "organic", 1.35, 1100),
        ])
    }

    fn callback_body(kind: &str, start: &str) -> String {
        serde_json::json!({
            "inputs": [
                {"id": "region-filter", "property": "value", "value": "Albany"},
                {"id": "type-filter", "property": "value", "value": kind},
                {"id": "date-range", "property": "start_date", "value": start},
                {"id": "date-range", "property": "end_date", "value": "2015-01-31"}
            ]
        })
        .to_string()
    }

    async fn post_callback(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/callback")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_status(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(two_row_table());
        assert_eq!(get_status(app, "/health/live").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app(two_row_table());
        assert_eq!(get_status(app, "/health/ready").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_not_ready_without_data() {
        let app = create_test_app(Table::default());
        assert_eq!(
            get_status(app, "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app(two_row_table());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["rows"], 2);
        assert_eq!(json["regions"], 1);
        assert_eq!(json["types"], 1);
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["uptime_seconds"].is_u64());
    }

    #[tokio::test]
    async fn test_health_full_without_data() {
        let app = create_test_app(Table::default());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["rows"], 0);
    }

    #[tokio::test]
    async fn test_index_and_assets() {
        let app = create_test_app(two_row_table());
        assert_eq!(get_status(app.clone(), "/").await, StatusCode::OK);
        assert_eq!(get_status(app.clone(), "/assets/style.css").await, StatusCode::OK);
        assert_eq!(get_status(app, "/assets/dashboard.js").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_layout() {
        let app = create_test_app(two_row_table());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/layout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["title"], dashboard::PAGE_TITLE);
    }

    #[tokio::test]
    async fn test_callback() {
        let app = create_test_app(two_row_table());
        let (status, json) = post_callback(app, callback_body("organic", "2015-01-01")).await;

        assert_eq!(status, StatusCode::OK);
        let price = &json["response"]["price-chart"]["figure"];
        assert_eq!(price["data"][0]["y"], serde_json::json!([1.2, 1.35]));
        assert_eq!(price["layout"]["title"]["text"], "Average Price of Avocados");
        let volume = &json["response"]["volume-chart"]["figure"];
        assert_eq!(volume["data"][0]["y"], serde_json::json!([1000, 1100]));
    }

    #[tokio::test]
    async fn test_callback_empty_selection() {
        let app = create_test_app(two_row_table());
        let (status, json) =
            post_callback(app, callback_body("conventional", "2015-01-01")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["response"]["price-chart"]["figure"]["data"],
            serde_json::json!([])
        );
        assert_eq!(
            json["response"]["volume-chart"]["figure"]["data"],
            serde_json::json!([])
        );
    }

    #[tokio::test]
    async fn test_callback_invalid_date() {
        let app = create_test_app(two_row_table());
        let (status, json) = post_callback(app, callback_body("organic", "yesterday")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_callback_invalid_json() {
        let app = create_test_app(two_row_table());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/callback")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
