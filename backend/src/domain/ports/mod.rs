//! Domain ports and supporting types for the hexagonal boundary.
//!
//! [`DocumentStore`] is the driven port implemented by outbound adapters.
//! [`AuthorsCommand`], [`PostsCommand`] and [`PostsQuery`] are driving ports
//! consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod authors_command;
mod document_store;
mod posts_command;
mod posts_query;

#[cfg(test)]
pub use authors_command::MockAuthorsCommand;
pub use authors_command::AuthorsCommand;
#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{
    Collection, Document, DocumentFields, DocumentFilter, DocumentStore, DocumentStoreError,
};
#[cfg(test)]
pub use posts_command::MockPostsCommand;
pub use posts_command::PostsCommand;
#[cfg(test)]
pub use posts_query::MockPostsQuery;
pub use posts_query::PostsQuery;
