//! The access boundary: password hashing, access tokens, and the request
//! middleware that resolves the calling user.
//!
//! Everything below the API layer works with an opaque user id; this module
//! is the only place that knows how that id is established.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use balanco_core::errors::Error;

use crate::error::ApiError;
use crate::main_lib::AppState;

/// Access-token lifetime. Sessions are re-established by logging in again.
const TOKEN_TTL_SECS: i64 = 60 * 60 * 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// The authenticated caller, inserted as a request extension by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
}

pub struct AuthManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthManager {
    pub fn new(secret_key: &str) -> Self {
        AuthManager {
            encoding: EncodingKey::from_secret(secret_key.as_bytes()),
            decoding: DecodingKey::from_secret(secret_key.as_bytes()),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Unexpected(format!("Failed to hash password: {e}")))
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn issue_token(&self, user_id: &str) -> Result<String, Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: chrono::Utc::now().timestamp() + TOKEN_TTL_SECS,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| Error::Unexpected(format!("Failed to issue token: {e}")))
    }

    pub fn verify_token(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .ok()
    }
}

/// Middleware guarding every data route: turns a bearer token into a
/// [`CurrentUser`] extension or rejects the request with 401.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::unauthorized("Missing or malformed Authorization header"))?;

    let claims = state
        .auth
        .verify_token(token)
        .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))?;

    // A token for a deleted account must not grant access.
    if state.user_repository.find_by_id(&claims.sub)?.is_none() {
        return Err(ApiError::unauthorized("Unknown user"));
    }

    request.extensions_mut().insert(CurrentUser { id: claims.sub });
    Ok(next.run(request).await)
}
