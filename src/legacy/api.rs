//! Legacy user controller

use crate::models::User;

use super::services::{LibraryService, UserService};

/// Controller bound to the concrete `UserService`
///
/// Anything that is a `UserService` (the base type or a wrapper around it)
/// is accepted, and the wrapper's overrides are the ones that run. It also
/// serves book listings, so user and book changes both land here.
#[derive(Debug, Clone)]
pub struct UserController<S = UserService> {
    user_service: S,
}

impl<S> UserController<S>
where
    S: LibraryService + AsRef<UserService>,
{
    pub fn new(user_service: S) -> Self {
        Self { user_service }
    }

    pub fn create_user(&self, user: &User) {
        self.user_service.create_user(user);
    }

    pub fn get_user(&self, id: &str) {
        self.user_service.get_user(id);
    }

    pub fn get_books(&self, message: &str) {
        self.user_service.get_books(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::services::SomeOtherUserService;

    #[test]
    fn test_controller_delegates() {
        let controller = UserController::new(UserService::new());
        controller.create_user(&User::new("1", "Ada", "pw"));
        controller.get_user("1");
        controller.get_books("all");
    }

    #[test]
    fn test_controller_accepts_overriding_variant() {
        let controller = UserController::new(SomeOtherUserService::new());
        controller.create_user(&User::new("1", "Ada", "pw"));
        controller.get_user("1");
        controller.get_books("all");
    }
}
