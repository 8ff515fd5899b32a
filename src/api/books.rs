//! Book controller

use std::sync::Arc;

use crate::{error::AppResult, services::BookService};

/// Entry point for book requests, separate from `UserController`
#[derive(Clone)]
pub struct BookController {
    book_service: Arc<dyn BookService>,
}

impl BookController {
    pub fn new(book_service: Arc<dyn BookService>) -> Self {
        Self { book_service }
    }

    pub fn get_books(&self, message: &str) {
        self.book_service.get_books(message);
    }

    pub fn create_book(&self, name: &str) -> AppResult<()> {
        self.book_service.create_book(name)
    }
}
