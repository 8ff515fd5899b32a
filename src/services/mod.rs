//! Business logic services

pub mod books;
pub mod users;

use std::sync::Arc;

use crate::config::UsersConfig;

pub use books::{BookService, StandardBookService};
pub use users::{ReadOnlyUserService, StandardUserService, UserService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: Arc<dyn UserService>,
    pub books: Arc<dyn BookService>,
}

impl Services {
    /// Create the services selected by configuration
    pub fn new(config: &UsersConfig) -> Self {
        let users: Arc<dyn UserService> = if config.read_only {
            tracing::info!("Using read-only user service");
            Arc::new(ReadOnlyUserService::new())
        } else {
            Arc::new(StandardUserService::new())
        };

        Self::with(users, Arc::new(StandardBookService::new()))
    }

    /// Assemble services from arbitrary implementations
    pub fn with(users: Arc<dyn UserService>, books: Arc<dyn BookService>) -> Self {
        Self { users, books }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, models::User};

    #[test]
    fn test_read_only_selected_by_config() {
        let services = Services::new(&UsersConfig { read_only: true });
        let result = services.users.create_user(&User::new("1", "Ada", "pw"));
        assert!(matches!(result, Err(AppError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_standard_selected_by_default() {
        let services = Services::new(&UsersConfig::default());
        assert!(services.users.create_user(&User::new("1", "Ada", "pw")).is_ok());
        assert!(services.books.create_book("Dune").is_ok());
    }
}
