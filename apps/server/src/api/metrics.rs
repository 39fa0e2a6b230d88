//! Trend-report endpoint.

use std::sync::Arc;

use axum::extract::{Extension, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::MetricsResponse;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(get_metrics))
}

async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<MetricsResponse>> {
    let rows = state.metrics_service.compute_series(&user.id)?;
    Ok(Json(MetricsResponse::new(rows)))
}
