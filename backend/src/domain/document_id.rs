//! Store-assigned document identifier shared by authors, posts and comments.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`DocumentId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdError {
    /// The input was empty or whitespace.
    #[error("identifier must not be empty")]
    Empty,
    /// The input is not a UUID.
    #[error("identifier must be a valid UUID")]
    Invalid,
}

/// Opaque identifier of a stored document, backed by a UUID.
///
/// Identifiers are compared and serialised in their canonical hyphenated
/// lowercase form.
///
/// # Examples
/// ```
/// use backend::domain::DocumentId;
///
/// let id = DocumentId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!(DocumentId::new("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Validate and construct a [`DocumentId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, DocumentIdError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        if id.trim() != id {
            return Err(DocumentIdError::Invalid);
        }
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| DocumentIdError::Invalid)
    }

    /// Generate a new random [`DocumentId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DocumentId {
    type Error = DocumentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocumentId> for String {
    fn from(value: DocumentId) -> Self {
        value.to_string()
    }
}
