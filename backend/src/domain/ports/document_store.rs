//! Persistence gateway over a schema-flexible document store.
//!
//! Documents are JSON objects addressed by [`Collection`] and [`DocumentId`].
//! Services express everything they need through the operations below; the
//! adapters decide how documents are actually kept.

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::define_port_error;
use crate::domain::DocumentId;

/// Top-level fields of a stored document, keyed by their wire names.
pub type DocumentFields = Map<String, Value>;

/// Named collection of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Blog authors.
    Authors,
    /// Blog posts with their embedded comments.
    Posts,
}

impl Collection {
    /// Stable collection name used by adapters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Posts => "posts",
        }
    }

    /// Fields whose values must be unique within the collection.
    ///
    /// Adapters enforce these with an index and report clashes as
    /// [`DocumentStoreError::UniqueViolation`].
    #[must_use]
    pub const fn unique_fields(self) -> &'static [&'static str] {
        match self {
            Self::Authors => &["userName"],
            Self::Posts => &[],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document: its identifier plus its top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Top-level fields, excluding the identifier.
    pub fields: DocumentFields,
}

impl Document {
    /// Build a document from an identifier and its fields.
    #[must_use]
    pub const fn new(id: DocumentId, fields: DocumentFields) -> Self {
        Self { id, fields }
    }
}

/// Conjunction of top-level `field == value` checks.
///
/// An empty filter matches every document in a collection.
///
/// # Examples
/// ```
/// use backend::domain::ports::DocumentFilter;
/// use serde_json::json;
///
/// let filter = DocumentFilter::new().field_eq("userName", "ada");
/// let fields = json!({ "userName": "ada", "firstName": "Ada" });
/// assert!(filter.matches(fields.as_object().expect("object")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter(DocumentFields);

impl DocumentFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    #[must_use]
    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Returns `true` when every condition holds for `fields`.
    #[must_use]
    pub fn matches(&self, fields: &DocumentFields) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| fields.get(field) == Some(expected))
    }

    /// Conditions as a JSON object, suitable for containment queries.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum DocumentStoreError {
        /// The store could not be reached or a connection could not be checked out.
        Connection {
            /// Adapter-specific description.
            message: String,
        } => "document store connection failed: {message}",
        /// A query or command failed during execution.
        Query {
            /// Adapter-specific description.
            message: String,
        } => "document store query failed: {message}",
        /// A write would duplicate a value in a uniquely indexed field.
        UniqueViolation {
            /// Wire name of the unique field.
            field: String,
            /// Value that is already taken.
            value: String,
        } => "document store unique index violated on {field} = {value}",
    }
}

/// Gateway over the document store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by identifier.
    async fn find_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Fetch the first document matching `filter`, in insertion order.
    async fn find_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Fetch every document of a collection in insertion order.
    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, DocumentStoreError>;

    /// Insert a new document and return it with its assigned identifier.
    async fn create(
        &self,
        collection: Collection,
        fields: DocumentFields,
    ) -> Result<Document, DocumentStoreError>;

    /// Merge `fields` into the top level of an existing document.
    ///
    /// Returns the post-update document, or `None` when no document has the
    /// identifier. Fields not named in `fields` are left untouched.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
        fields: DocumentFields,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Remove a document. Returns whether one was removed.
    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<bool, DocumentStoreError>;

    /// Remove every document matching `filter`. Returns the removal count.
    async fn delete_many(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError>;

    /// Cheap connectivity probe.
    async fn ping(&self) -> Result<(), DocumentStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn fields(value: Value) -> DocumentFields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[rstest]
    #[case(DocumentFilter::new(), true)]
    #[case(DocumentFilter::new().field_eq("author", "a1"), true)]
    #[case(DocumentFilter::new().field_eq("author", "a1").field_eq("title", "Hi"), true)]
    #[case(DocumentFilter::new().field_eq("author", "a2"), false)]
    #[case(DocumentFilter::new().field_eq("missing", "a1"), false)]
    fn filter_is_a_conjunction(#[case] filter: DocumentFilter, #[case] expected: bool) {
        let document = fields(json!({ "author": "a1", "title": "Hi" }));
        assert_eq!(filter.matches(&document), expected);
    }

    #[rstest]
    fn filter_compares_json_values_exactly() {
        let document = fields(json!({ "count": 1 }));
        assert!(!DocumentFilter::new().field_eq("count", "1").matches(&document));
        assert!(DocumentFilter::new().field_eq("count", 1).matches(&document));
    }

    #[rstest]
    fn only_authors_declare_unique_fields() {
        assert_eq!(Collection::Authors.unique_fields(), &["userName"]);
        assert!(Collection::Posts.unique_fields().is_empty());
    }

    #[rstest]
    fn unique_violation_message_names_field_and_value() {
        let err = DocumentStoreError::unique_violation("userName", "ada");
        assert_eq!(
            err.to_string(),
            "document store unique index violated on userName = ada"
        );
    }
}
