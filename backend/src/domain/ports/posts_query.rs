//! Driving port for post reads.

use async_trait::async_trait;

use crate::domain::{AuthoredPost, DocumentId, Error};

/// Domain use-case port for reading posts with their author names resolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Every post in insertion order.
    async fn list_posts(&self) -> Result<Vec<AuthoredPost>, Error>;

    /// A single post, or a not-found error.
    async fn get_post(&self, id: DocumentId) -> Result<AuthoredPost, Error>;
}
