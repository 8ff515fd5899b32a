//! Solid Library - walks a request through both designs

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solid_library::{config::AppConfig, legacy, models::User, AppState};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("solid_library={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Solid Library v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config);
    let user = User::new("1", "Ada Lovelace", "analytical-engine");

    let controllers = &state.controllers;
    match controllers.users.create_user(&user) {
        Ok(()) => tracing::info!(user_id = %user.id, "User created"),
        Err(e) => tracing::warn!(code = ?e.code(), "User not created: {}", e),
    }
    controllers.users.get_user(&user.id);
    controllers.books.get_books("computing history");
    if let Err(e) = controllers.books.create_book("Sketch of the Analytical Engine") {
        tracing::warn!(code = ?e.code(), "Book not created: {}", e);
    }

    let legacy_controller = legacy::UserController::new(legacy::UserService::new());
    legacy_controller.create_user(&user);
    legacy_controller.get_user(&user.id);
    legacy_controller.get_books("computing history");

    let variant_controller = legacy::UserController::new(legacy::SomeOtherUserService::new());
    variant_controller.create_user(&user);
    variant_controller.get_user(&user.id);

    tracing::info!("Done");

    Ok(())
}
