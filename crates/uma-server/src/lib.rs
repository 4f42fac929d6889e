//! UMA server - HTTP transport layer
//!
//! Mounts the authentication and user routes on Rocket, registers the JSON
//! error catchers, and owns process startup: configuration loading, logging
//! initialization, service wiring, and launch.

pub mod dto;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod permissions;
pub mod state;

use rocket::{catchers, routes, Build, Rocket};
use std::path::Path;
use tracing::info;
use uma_infrastructure::config::ConfigLoader;
use uma_infrastructure::logging::init_logging;

pub use state::AppState;

/// Assemble the Rocket instance: managed state, routes, and catchers.
///
/// Network configuration is left to the caller so tests can drive this with
/// a local client.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            "/auth",
            routes![
                handlers::auth::login,
                handlers::auth::register,
                handlers::auth::forget,
                handlers::auth::reset,
            ],
        )
        .mount(
            "/user",
            routes![
                handlers::user::create,
                handlers::user::list,
                handlers::user::find,
                handlers::user::search,
                handlers::user::replace,
                handlers::user::update,
                handlers::user::remove,
            ],
        )
        .register(
            "/",
            catchers![
                error::unauthorized,
                error::forbidden,
                error::not_found,
                error::unprocessable,
                error::internal,
            ],
        )
}

/// Load configuration, initialize logging, wire the services, and serve
/// until shutdown.
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let state = AppState::from_config(&config)?;

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    info!(host = %config.server.host, port = config.server.port, "starting HTTP server");
    build_rocket(state).configure(figment).launch().await?;
    Ok(())
}
