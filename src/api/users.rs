//! User controller

use std::sync::Arc;

use crate::{error::AppResult, models::User, services::UserService};

/// Entry point for user requests
///
/// Only knows the `UserService` abstraction; the implementation is injected.
#[derive(Clone)]
pub struct UserController {
    user_service: Arc<dyn UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create a new user
    pub fn create_user(&self, user: &User) -> AppResult<()> {
        self.user_service.create_user(user)
    }

    /// Get user by ID
    pub fn get_user(&self, id: &str) {
        self.user_service.get_user(id);
    }
}
