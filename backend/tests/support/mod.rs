//! Shared helpers for blog API integration tests.
//!
//! The app mirrors the production wiring (trace middleware, API routes,
//! health probes and the JSON not-found fallback) over an in-memory document
//! store so suites run without PostgreSQL.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::TRACE_ID_HEADER;
use backend::domain::ports::DocumentStore;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::{configure_api, not_found};
use backend::outbound::persistence::InMemoryDocumentStore;
use mockable::DefaultClock;
use serde_json::{Value, json};

/// Handles shared between a test and the app it drives.
#[derive(Clone)]
pub struct TestBackend {
    pub store: Arc<InMemoryDocumentStore>,
    pub health: web::Data<HealthState>,
    pub state: web::Data<HttpState>,
}

impl TestBackend {
    /// Fresh backend with an empty store, already marked ready.
    pub fn new() -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        let dyn_store: Arc<dyn DocumentStore> = store.clone();
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        Self {
            store,
            health,
            state: web::Data::new(HttpState::from_store(dyn_store, Arc::new(DefaultClock))),
        }
    }
}

/// Full application wired over the given handles.
///
/// Takes owned handles so the returned factory borrows nothing and can be
/// handed to `test::init_service`.
pub fn build_app(
    health: web::Data<HealthState>,
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health)
        .app_data(state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live)
        .default_service(web::to(not_found))
}

/// Status, trace header and decoded JSON body of a response.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// Send `request` through a freshly initialised app over `backend`.
pub async fn send(backend: &TestBackend, request: test::TestRequest) -> Reply {
    let app = test::init_service(build_app(
        backend.health.clone(),
        backend.state.clone(),
    ))
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    Reply {
        status,
        trace_id,
        body,
    }
}

/// Register an author and return its identifier.
pub async fn create_author(backend: &TestBackend, first: &str, last: &str, user: &str) -> String {
    let reply = send(
        backend,
        test::TestRequest::post().uri("/authors").set_json(json!({
            "firstName": first,
            "lastName": last,
            "userName": user,
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{:?}", reply.body);
    reply.body["id"].as_str().expect("author id").to_owned()
}

/// Publish a post for `author_id` and return its identifier.
pub async fn create_post(backend: &TestBackend, title: &str, author_id: &str) -> String {
    let reply = send(
        backend,
        test::TestRequest::post().uri("/posts").set_json(json!({
            "title": title,
            "content": format!("{title} body"),
            "author_id": author_id,
        })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{:?}", reply.body);
    reply.body["id"].as_str().expect("post id").to_owned()
}

/// Titles of every listed post, in response order.
pub async fn listed_titles(backend: &TestBackend) -> Vec<String> {
    let reply = send(backend, test::TestRequest::get().uri("/posts")).await;
    assert_eq!(reply.status, StatusCode::OK);
    reply.body["posts"]
        .as_array()
        .expect("posts array")
        .iter()
        .map(|post| post["title"].as_str().expect("title").to_owned())
        .collect()
}
