//! User services behind the `UserService` abstraction

use crate::{
    error::{AppError, AppResult},
    models::User,
};

/// User operations, and nothing else
///
/// Implementations must be interchangeable behind `Arc<dyn UserService>`: an
/// implementation may refuse `create_user`, but `get_user` always returns.
#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn create_user(&self, user: &User) -> AppResult<()>;

    fn get_user(&self, id: &str);
}

/// Default user service
#[derive(Debug, Clone, Default)]
pub struct StandardUserService;

impl StandardUserService {
    pub fn new() -> Self {
        Self
    }
}

impl UserService for StandardUserService {
    fn create_user(&self, user: &User) -> AppResult<()> {
        tracing::debug!(user_id = %user.id, name = %user.name, "Creating user");
        Ok(())
    }

    fn get_user(&self, id: &str) {
        tracing::debug!(user_id = %id, "Fetching user");
    }
}

/// User service for read-only access
///
/// A drop-in replacement for `StandardUserService` that refuses creation.
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyUserService;

impl ReadOnlyUserService {
    pub fn new() -> Self {
        Self
    }
}

impl UserService for ReadOnlyUserService {
    fn create_user(&self, user: &User) -> AppResult<()> {
        tracing::debug!(user_id = %user.id, "Refusing user creation in read-only mode");
        Err(AppError::UnsupportedOperation(
            "Read-only users cannot be created".to_string(),
        ))
    }

    fn get_user(&self, id: &str) {
        tracing::debug!(user_id = %id, "Fetching user (read-only)");
    }
}
