//! Snapshot CRUD endpoints.
//!
//! The period segment in item routes is URL-encoded (`01%2F2024`); the path
//! extractor hands it back with the slash restored.

use std::sync::Arc;

use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use balanco_core::periods::Period;
use balanco_core::snapshots::{NewSnapshot, SnapshotUpdate};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{SnapshotView, StatusMessage};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/snapshots",
            get(list_snapshots).post(create_snapshot).put(update_snapshot),
        )
        .route("/snapshots/periods", get(list_periods))
        .route("/snapshots/{period}", get(get_snapshot).delete(delete_snapshot))
}

async fn list_snapshots(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<SnapshotView>>> {
    let snapshots = state.snapshot_service.get_snapshots(&user.id)?;
    Ok(Json(snapshots.into_iter().map(SnapshotView::from).collect()))
}

async fn list_periods(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Period>>> {
    Ok(Json(state.snapshot_service.get_periods(&user.id)?))
}

async fn get_snapshot(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(period): Path<String>,
) -> ApiResult<Json<SnapshotView>> {
    let snapshot = state.snapshot_service.get_snapshot(&user.id, &period)?;
    Ok(Json(snapshot.into()))
}

async fn create_snapshot(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<NewSnapshot>,
) -> ApiResult<(StatusCode, Json<StatusMessage>)> {
    let snapshot = state.snapshot_service.create_snapshot(&user.id, input).await?;
    tracing::info!(user_id = %user.id, period = %snapshot.period, "Created snapshot");
    Ok((
        StatusCode::CREATED,
        Json(StatusMessage::success("Snapshot saved")),
    ))
}

async fn update_snapshot(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(input): Json<SnapshotUpdate>,
) -> ApiResult<Json<StatusMessage>> {
    let snapshot = state.snapshot_service.update_snapshot(&user.id, input).await?;
    tracing::info!(user_id = %user.id, period = %snapshot.period, "Updated snapshot");
    Ok(Json(StatusMessage::success("Snapshot updated")))
}

async fn delete_snapshot(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Path(period): Path<String>,
) -> ApiResult<Json<StatusMessage>> {
    state.snapshot_service.delete_snapshot(&user.id, &period).await?;
    tracing::info!(user_id = %user.id, period = %period, "Deleted snapshot");
    Ok(Json(StatusMessage::success("Snapshot deleted")))
}
