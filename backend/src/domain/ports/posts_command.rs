//! Driving port for post mutations.

use async_trait::async_trait;

use crate::domain::{AuthoredPost, DocumentId, Error, PostDraft, PostUpdate};

/// Domain use-case port for creating, editing and removing posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Create a post for an existing author, stamped with the current time.
    async fn create_post(&self, draft: PostDraft) -> Result<AuthoredPost, Error>;

    /// Apply a partial update to an existing post.
    async fn update_post(&self, id: DocumentId, update: PostUpdate) -> Result<AuthoredPost, Error>;

    /// Remove a post. Removing an unknown post succeeds.
    async fn delete_post(&self, id: DocumentId) -> Result<(), Error>;
}
