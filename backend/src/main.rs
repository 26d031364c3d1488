//! Backend entry-point: loads configuration and serves the blog list API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use bloglist::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| std::io::Error::other(format!("failed to load configuration: {err}")))?;
    let config = ServerConfig::from_settings(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
