//! Document store adapters.
//!
//! [`DieselDocumentStore`] keeps documents in PostgreSQL through Diesel with
//! async support from `diesel-async` and `bb8` pooling.
//! [`InMemoryDocumentStore`] keeps them in process memory for local runs and
//! tests. Diesel row structs and schema definitions stay private to this
//! module.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselDocumentStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/blog")).await?;
//! let store = DieselDocumentStore::new(pool);
//! ```

mod diesel_document_store;
mod diesel_error_mapping;
mod in_memory_document_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_document_store::DieselDocumentStore;
pub use in_memory_document_store::InMemoryDocumentStore;
pub use migrations::{MIGRATIONS, MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
