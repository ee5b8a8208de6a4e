//! Builders for the document store and HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::{info, warn};

use backend::domain::ports::DocumentStore;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselDocumentStore, InMemoryDocumentStore, apply_migrations,
};
use backend::settings::AppSettings;

use super::ServerConfig;

/// Errors raised while preparing the document store at startup.
#[derive(Debug, thiserror::Error)]
pub enum StoreSetupError {
    /// Schema migrations could not be applied.
    #[error(transparent)]
    Migration(#[from] backend::outbound::persistence::MigrationError),
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] backend::outbound::persistence::PoolError),
}

impl From<StoreSetupError> for std::io::Error {
    fn from(error: StoreSetupError) -> Self {
        Self::other(error.to_string())
    }
}

/// Build the document store selected by `settings`.
///
/// A configured database URL gets migrations applied and a Diesel-backed
/// store; otherwise documents are kept in memory.
///
/// # Errors
/// Returns [`StoreSetupError`] when migrations or pool construction fail.
pub async fn build_store(
    settings: &AppSettings,
) -> Result<Arc<dyn DocumentStore>, StoreSetupError> {
    match settings.pool_config() {
        Some(pool_config) => {
            apply_migrations(pool_config.database_url()).await?;
            let max_size = pool_config.max_size();
            let pool = DbPool::new(pool_config).await?;
            info!(max_size, "using PostgreSQL document store");
            Ok(Arc::new(DieselDocumentStore::new(pool)))
        }
        None => {
            warn!("no database URL configured; documents are kept in memory and lost on exit");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
    }
}

/// Build the HTTP state shared by every worker.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::from_store(
        Arc::clone(&config.store),
        Arc::new(DefaultClock),
    ))
}
