//! HTTP surface for the event handler.
//!
//! `POST /invoke` accepts the same event envelope as the cloud-function
//! shape and returns its `{statusCode, body}` response verbatim. Handler
//! construction failures (deployment misconfiguration) map to a bare 500.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use newsq_core::AppConfig;
use newsq_pipeline::{handle_event, Event, EventResponse};

pub fn build_app(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/invoke", post(invoke))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn invoke(
    State(config): State<Arc<AppConfig>>,
    Json(event): Json<Event>,
) -> Result<Json<EventResponse>, StatusCode> {
    match handle_event(&config, event).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!(error = %e, "event handler could not be constructed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
