//! Backend entry-point: loads settings, wires the document store and serves
//! the blog API.

mod server;

use std::net::{SocketAddr, ToSocketAddrs};

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::settings::AppSettings;
use server::{ServerConfig, build_store, create_server};

fn resolve_bind_addr(settings: &AppSettings) -> std::io::Result<SocketAddr> {
    (settings.host(), settings.port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            std::io::Error::other(format!(
                "bind address {}:{} did not resolve",
                settings.host(),
                settings.port
            ))
        })
}

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

    let settings = AppSettings::load()
        .map_err(|error| std::io::Error::other(format!("failed to load settings: {error}")))?;
    let bind_addr = resolve_bind_addr(&settings)?;
    let store = build_store(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, store))?;
    info!(%bind_addr, "blog server listening");

    let result = server.await;
    health_state.mark_unhealthy();
    info!("blog server stopped");
    result
}
