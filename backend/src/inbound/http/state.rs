//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{AuthorsCommand, DocumentStore, PostsCommand, PostsQuery};
use crate::domain::{AuthorService, PostService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Author registration, updates and removal.
    pub authors: Arc<dyn AuthorsCommand>,
    /// Post writes.
    pub posts: Arc<dyn PostsCommand>,
    /// Post reads with author names resolved.
    pub posts_query: Arc<dyn PostsQuery>,
    /// Connectivity probe consulted by the readiness endpoint.
    pub store: Arc<dyn DocumentStore>,
}

impl HttpState {
    /// Wire the domain services over a single document store.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::DocumentStore;
    /// use backend::inbound::http::state::HttpState;
    /// use mockable::DefaultClock;
    ///
    /// fn build(store: Arc<dyn DocumentStore>) -> HttpState {
    ///     HttpState::from_store(store, Arc::new(DefaultClock))
    /// }
    /// ```
    #[must_use]
    pub fn from_store(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        let posts = Arc::new(PostService::new(Arc::clone(&store), clock));
        Self {
            authors: Arc::new(AuthorService::new(Arc::clone(&store))),
            posts: posts.clone(),
            posts_query: posts,
            store,
        }
    }
}
