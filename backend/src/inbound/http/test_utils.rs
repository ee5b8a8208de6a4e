//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::configure_api;
use super::error::not_found;
use super::state::HttpState;
use crate::domain::ports::{
    MockAuthorsCommand, MockDocumentStore, MockPostsCommand, MockPostsQuery,
};

/// Mocked driving ports for handler tests.
#[derive(Default)]
pub struct MockPorts {
    /// Expectations for author writes.
    pub authors: MockAuthorsCommand,
    /// Expectations for post writes.
    pub posts: MockPostsCommand,
    /// Expectations for post reads.
    pub posts_query: MockPostsQuery,
}

impl MockPorts {
    /// Wrap the mocks in handler state; the store mock expects no calls.
    pub fn into_state(self) -> HttpState {
        HttpState {
            authors: Arc::new(self.authors),
            posts: Arc::new(self.posts),
            posts_query: Arc::new(self.posts_query),
            store: Arc::new(MockDocumentStore::new()),
        }
    }
}

/// Build an app serving the API over `state` with the JSON not-found fallback.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_api)
        .default_service(web::to(not_found))
}
