//! Post and comment data model.
//!
//! A post references its author by identifier only; the author's display
//! name is resolved when the post is read (see [`AuthoredPost`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DocumentId;

/// Stored field holding the referenced author's identifier.
pub const AUTHOR_FIELD: &str = "author";

/// Comment embedded in a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier.
    pub id: DocumentId,
    /// Comment text.
    pub content: String,
}

/// Persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: DocumentId,
    record: PostRecord,
}

impl Post {
    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.record.title
    }

    /// Post body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.record.content
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.record.created
    }

    /// Identifier of the referenced author.
    #[must_use]
    pub const fn author_id(&self) -> &DocumentId {
        &self.record.author
    }

    /// Comments in insertion order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.record.comments
    }
}

/// Post document as kept in the store.
///
/// `created` is written as an RFC 3339 string and `author` as the author's
/// identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Creation timestamp, set once when the post is created.
    pub created: DateTime<Utc>,
    /// Identifier of the author who wrote the post.
    pub author: DocumentId,
    /// Comments in insertion order; absent in the store means none.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl PostRecord {
    /// Record for a freshly created post with no comments.
    #[must_use]
    pub fn new(draft: PostDraft, created: DateTime<Utc>) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            created,
            author: draft.author_id,
            comments: Vec::new(),
        }
    }

    /// Pair the record with its store-assigned identifier.
    #[must_use]
    pub fn into_post(self, id: DocumentId) -> Post {
        Post { id, record: self }
    }
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Author the post is attributed to; must exist.
    pub author_id: DocumentId,
}

/// Partial post update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostUpdate {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Post paired with its resolved author display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoredPost {
    /// The stored post.
    pub post: Post,
    /// Empty when the referenced author no longer exists.
    pub author_name: String,
}
