//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the chat endpoint, the health probes, the widget bundle, and the
//! demo page under a single Axum router. CORS is wide open because the
//! widget runs on third-party pages and calls back here.

pub mod chat;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const DEMO_PAGE: &str = include_str!("../../demo/index.html");

/// Full application router.
///
/// `widget_dir` is served at `/api/widget`; it should hold the wasm-bindgen
/// output (`chat_widget.js`, `chat_widget_bg.wasm`).
pub fn app(state: AppState, widget_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/home", get(home))
        .route("/api/chat", post(chat::post_chat))
        .route("/demo", get(demo))
        .with_state(state)
        .nest_service("/api/widget", ServeDir::new(widget_dir))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /api/home`: liveness message.
async fn home() -> Json<Value> {
    Json(json!({ "message": "Application is running." }))
}

/// `GET /demo`: a bare page with the widget embedded.
async fn demo() -> Html<&'static str> {
    Html(DEMO_PAGE)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
