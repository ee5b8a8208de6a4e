//! Blog API backend: authors, posts and their comments over a document store.
//!
//! The crate follows a hexagonal layout. `domain` holds the entities, the
//! services and the ports they depend on; `inbound::http` exposes them over
//! Actix Web; `outbound::persistence` provides PostgreSQL and in-memory
//! document stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
