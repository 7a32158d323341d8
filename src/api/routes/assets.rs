//! Static Assets
//!
//! The page shell, stylesheet and renderer script are compiled into the
//! binary.
//!
//! - GET / - HTML shell
//! - GET /assets/style.css - Stylesheet
//! - GET /assets/dashboard.js - Layout renderer and callback wiring

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use crate::api::state::AppState;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");
const STYLE_CSS: &str = include_str!("../../../assets/style.css");
const DASHBOARD_JS: &str = include_str!("../../../assets/dashboard.js");

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(INDEX_HTML.replace("{{title}}", &state.layout.title))
}

/// GET /assets/style.css
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

/// GET /assets/dashboard.js
pub async fn dashboard_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}
