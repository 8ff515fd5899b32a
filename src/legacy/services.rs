//! Monolithic user service
//!
//! One trait covers users and books alike, so every implementor has to carry
//! book operations whether it wants them or not.

use crate::models::User;

/// Every library operation in a single interface
pub trait LibraryService {
    fn create_user(&self, user: &User);

    fn get_user(&self, id: &str);

    fn get_books(&self, message: &str);

    fn create_book(&self, name: &str);
}

/// Concrete user service the legacy controller is hard-wired to
#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryService for UserService {
    fn create_user(&self, user: &User) {
        tracing::debug!(user_id = %user.id, "Legacy: creating user");
    }

    fn get_user(&self, id: &str) {
        // Changing this body in place breaks every existing caller.
        tracing::debug!(user_id = %id, "Legacy: fetching user");
    }

    fn get_books(&self, message: &str) {
        tracing::debug!(query = %message, "Legacy: fetching books");
    }

    fn create_book(&self, name: &str) {
        tracing::debug!(title = %name, "Legacy: creating book");
    }
}

/// Variant that extends `UserService` and overrides most of it
///
/// The legacy controller takes it wherever the base type is expected, yet
/// its user and listing behavior differ from the base.
#[derive(Debug, Clone, Default)]
pub struct SomeOtherUserService {
    base: UserService,
}

impl SomeOtherUserService {
    pub fn new() -> Self {
        Self {
            base: UserService::new(),
        }
    }
}

impl AsRef<UserService> for UserService {
    fn as_ref(&self) -> &UserService {
        self
    }
}

impl AsRef<UserService> for SomeOtherUserService {
    fn as_ref(&self) -> &UserService {
        &self.base
    }
}

impl LibraryService for SomeOtherUserService {
    fn create_user(&self, user: &User) {
        tracing::debug!(user_id = %user.id, "Legacy variant: creating user");
    }

    fn get_user(&self, id: &str) {
        tracing::debug!(user_id = %id, "Legacy variant: fetching user");
    }

    fn get_books(&self, message: &str) {
        tracing::debug!(query = %message, "Legacy variant: fetching books");
    }

    fn create_book(&self, name: &str) {
        self.base.create_book(name);
    }
}
