//! Controllers for user and book requests

pub mod books;
pub mod users;

pub use books::BookController;
pub use users::UserController;

use crate::services::Services;

/// One controller per responsibility
#[derive(Clone)]
pub struct Controllers {
    pub users: UserController,
    pub books: BookController,
}

impl Controllers {
    pub fn new(services: &Services) -> Self {
        Self {
            users: UserController::new(services.users.clone()),
            books: BookController::new(services.books.clone()),
        }
    }
}
