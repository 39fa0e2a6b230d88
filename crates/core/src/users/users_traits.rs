use crate::errors::Result;
use crate::users::users_model::{User, UserCredentials, UserRegistration};
use async_trait::async_trait;

/// Trait for user repository operations.
///
/// Email uniqueness is enforced by the storage layer; a duplicate insert
/// surfaces as a unique-violation database error.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn insert(&self, registration: UserRegistration) -> Result<User>;
}
