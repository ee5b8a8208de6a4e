//! Health endpoints: liveness and readiness probes for orchestrators and load
//! balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::inbound::http::state::HttpState;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 once the server is bound and the document store
/// answers a ping, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is starting or the document store is unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(health: web::Data<HealthState>, state: web::Data<HttpState>) -> HttpResponse {
    if !health.is_ready() {
        return HealthState::probe_response(false);
    }
    let store_ok = match state.store.ping().await {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "readiness probe failed to reach the document store");
            false
        }
    };
    HealthState::probe_response(store_ok)
}

/// Liveness probe: 200 while the process is marked alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(health: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(health.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use crate::domain::ports::{
        DocumentStoreError, MockAuthorsCommand, MockDocumentStore, MockPostsCommand,
        MockPostsQuery,
    };

    fn http_state(store: MockDocumentStore) -> HttpState {
        HttpState {
            authors: Arc::new(MockAuthorsCommand::new()),
            posts: Arc::new(MockPostsCommand::new()),
            posts_query: Arc::new(MockPostsQuery::new()),
            store: Arc::new(store),
        }
    }

    async fn probe(uri: &str, health: HealthState, store: MockDocumentStore) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(health))
                .app_data(web::Data::new(http_state(store)))
                .service(ready)
                .service(live),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(b"no-store".as_slice())
        );
        response.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn ready_is_unavailable_until_marked() {
        let mut store = MockDocumentStore::new();
        store.expect_ping().times(0);

        let status = probe("/health/ready", HealthState::new(), store).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[case(true, StatusCode::OK)]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn ready_reflects_store_ping(#[case] reachable: bool, #[case] expected: StatusCode) {
        let health = HealthState::new();
        health.mark_ready();
        let mut store = MockDocumentStore::new();
        store.expect_ping().times(1).return_once(move || {
            if reachable {
                Ok(())
            } else {
                Err(DocumentStoreError::connection("refused"))
            }
        });

        let status = probe("/health/ready", health, store).await;

        assert_eq!(status, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn live_turns_unavailable_when_draining() {
        let health = HealthState::new();
        health.mark_unhealthy();

        let status = probe("/health/live", health, MockDocumentStore::new()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
