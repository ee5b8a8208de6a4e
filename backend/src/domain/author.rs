//! Author data model and its stored document shape.

use serde::{Deserialize, Serialize};

use super::DocumentId;

/// Stored field holding the author's unique handle.
pub const USER_NAME_FIELD: &str = "userName";

/// Registered blog author.
///
/// # Examples
/// ```
/// use backend::domain::{Author, AuthorDraft, DocumentId};
///
/// let author = Author::new(
///     DocumentId::random(),
///     AuthorDraft {
///         first_name: "Ada".into(),
///         last_name: "Lovelace".into(),
///         user_name: "ada".into(),
///     },
/// );
/// assert_eq!(author.full_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: DocumentId,
    first_name: String,
    last_name: String,
    user_name: String,
}

impl Author {
    /// Attach an identifier to a draft.
    #[must_use]
    pub fn new(id: DocumentId, draft: AuthorDraft) -> Self {
        let AuthorDraft {
            first_name,
            last_name,
            user_name,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
            user_name,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Unique handle.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Display name: first and last name joined by a space, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Fields required to register an author. Doubles as the stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Handle unique across all authors.
    pub user_name: String,
}

/// Partial author update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUpdate {
    /// Replacement given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Replacement family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Replacement handle; checked for uniqueness before the write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}
