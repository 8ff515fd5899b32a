//! Legacy design, kept for comparison with `api` and `services`
//!
//! The controller depends on a concrete service, mixes user and book
//! requests, and the service implements one oversized trait.

pub mod api;
pub mod services;

pub use api::UserController;
pub use services::{LibraryService, SomeOtherUserService, UserService};
