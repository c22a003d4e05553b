//! Router assembly.

mod common;
mod resources;

pub use common::common_routes;
pub use resources::resource_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: banner, health routes and resource routes behind request tracing and a body size cap.
/// The cap is enforced when a handler reads the body, so oversized requests get the usual error body.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
}
