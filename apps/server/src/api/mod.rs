//! HTTP API surface.
//!
//! Routes are grouped per resource; everything under the data routers is
//! gated behind the bearer-token middleware.

pub mod auth;
pub mod health;
pub mod metrics;
pub mod snapshots;

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let public = Router::new()
        .merge(health::router())
        .merge(auth::router());

    let protected = Router::new()
        .merge(snapshots::router())
        .merge(metrics::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/api", public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
