//! Registration and login endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use balanco_core::errors::{DatabaseError, Error};
use balanco_core::users::{NewUser, UserRegistration};

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{LoginRequest, StatusMessage, TokenResponse};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<StatusMessage>)> {
    let email = input.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::bad_request("A valid email address is required"));
    }
    if input.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    if state.user_repository.find_by_email(&email)?.is_some() {
        return Err(ApiError::bad_request("Email is already registered"));
    }

    let registration = UserRegistration {
        email,
        name: input.name.trim().to_string(),
        password_hash: state.auth.hash_password(&input.password)?,
    };

    // The pre-check above races with concurrent registrations; the unique
    // index on email is the real arbiter.
    let user = match state.user_repository.insert(registration).await {
        Ok(user) => user,
        Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
            return Err(ApiError::bad_request("Email is already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.id, "Registered new user");
    Ok((
        StatusCode::CREATED,
        Json(StatusMessage::success("Account created")),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let email = input.email.trim().to_lowercase();

    let credentials = state
        .user_repository
        .find_by_email(&email)?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    if !state.auth.verify_password(&input.password, &credentials.password_hash) {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let access_token = state.auth.issue_token(&credentials.id)?;
    Ok(Json(TokenResponse { access_token }))
}
