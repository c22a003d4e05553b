//! Banner and operational routes.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

const BANNER: &str = "<h1>Bakery GET-POST-PATCH-DELETE API</h1>";

async fn home() -> Html<&'static str> {
    Html(BANNER)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 503 with the usual error body when the store does not answer.
async fn ready(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "readiness check failed");
        AppError::Unavailable("Database unavailable.".into())
    })?;
    Ok(Json(json!({ "status": "ok", "database": "ok" })))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
