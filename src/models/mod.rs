//! Data models for the library system

pub mod user;

pub use user::User;
