//! Driving port for author mutations.
//!
//! The HTTP adapter validates request shape and hands typed drafts to this
//! port; uniqueness and existence rules live behind it.

use async_trait::async_trait;

use crate::domain::{Author, AuthorDraft, AuthorUpdate, DocumentId, Error};

/// Domain use-case port for registering, editing and removing authors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorsCommand: Send + Sync {
    /// Register a new author. Fails when the username is already taken.
    async fn create_author(&self, draft: AuthorDraft) -> Result<Author, Error>;

    /// Apply a partial update to an existing author.
    ///
    /// Fails when no author has `id`, or when the update renames the author to
    /// a username that is already taken.
    async fn update_author(&self, id: DocumentId, update: AuthorUpdate) -> Result<Author, Error>;

    /// Remove an author together with every post referencing them.
    async fn delete_author(&self, id: DocumentId) -> Result<(), Error>;
}
