//! Solid Library
//!
//! A small library system (users and books) written twice: once in the
//! `legacy` shape, with a controller wired to a concrete all-in-one service,
//! and once with narrow traits injected into per-responsibility controllers.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod legacy;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared by the entry points
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub controllers: api::Controllers,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let services = services::Services::new(&config.users);
        Self::with_services(config, services)
    }

    pub fn with_services(config: AppConfig, services: services::Services) -> Self {
        let controllers = api::Controllers::new(&services);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            controllers,
        }
    }
}
