//! Users module - account identity for the access boundary.

mod users_model;
mod users_traits;

pub use users_model::{NewUser, User, UserCredentials, UserRegistration};
pub use users_traits::UserRepositoryTrait;
