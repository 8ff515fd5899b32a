//! Book services behind the `BookService` abstraction

use crate::error::AppResult;

/// Book operations, kept apart from user operations
#[cfg_attr(test, mockall::automock)]
pub trait BookService: Send + Sync {
    fn get_books(&self, message: &str);

    fn create_book(&self, name: &str) -> AppResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct StandardBookService;

impl StandardBookService {
    pub fn new() -> Self {
        Self
    }
}

impl BookService for StandardBookService {
    fn get_books(&self, message: &str) {
        tracing::debug!(query = %message, "Fetching books");
    }

    fn create_book(&self, name: &str) -> AppResult<()> {
        tracing::debug!(title = %name, "Creating book");
        Ok(())
    }
}
