//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered account as exposed to the rest of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Registration input as received over the API. The plaintext password is
/// hashed by the access boundary before it ever reaches a repository.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// A registration ready for persistence: the password is already hashed.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// A user record including its credential hash. Only the access boundary
/// sees this type; it is deliberately not serializable.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl From<UserCredentials> for User {
    fn from(credentials: UserCredentials) -> Self {
        Self {
            id: credentials.id,
            email: credentials.email,
            name: credentials.name,
            created_at: credentials.created_at,
        }
    }
}
