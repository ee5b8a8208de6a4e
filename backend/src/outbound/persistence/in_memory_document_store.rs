//! Process-local `DocumentStore` used when no database is configured.
//!
//! Documents live in insertion-ordered vectors per collection behind a Tokio
//! `RwLock`. Unique fields declared by [`Collection::unique_fields`] are
//! enforced on every write so behaviour matches the PostgreSQL adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::DocumentId;
use crate::domain::ports::{
    Collection, Document, DocumentFields, DocumentFilter, DocumentStore, DocumentStoreError,
};

/// In-memory implementation of the [`DocumentStore`] port.
///
/// # Examples
/// ```
/// use backend::domain::ports::{Collection, DocumentStore};
/// use backend::outbound::persistence::InMemoryDocumentStore;
///
/// let rt = tokio::runtime::Runtime::new().expect("runtime");
/// rt.block_on(async {
///     let store = InMemoryDocumentStore::new();
///     let all = store.find_all(Collection::Posts).await.expect("listing");
///     assert!(all.is_empty());
/// });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reject `fields` when a unique field clashes with another document.
fn check_unique(
    collection: Collection,
    documents: &[Document],
    fields: &DocumentFields,
    skip: Option<&DocumentId>,
) -> Result<(), DocumentStoreError> {
    for field in collection.unique_fields() {
        let Some(value) = fields.get(*field) else {
            continue;
        };
        let clash = documents
            .iter()
            .filter(|document| Some(&document.id) != skip)
            .any(|document| document.fields.get(*field) == Some(value));
        if clash {
            let value = value
                .as_str()
                .map_or_else(|| value.to_string(), str::to_owned);
            return Err(DocumentStoreError::unique_violation(*field, value));
        }
    }
    Ok(())
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|documents| documents.iter().find(|document| document.id == *id))
            .cloned())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|documents| {
                documents
                    .iter()
                    .find(|document| filter.matches(&document.fields))
            })
            .cloned())
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, DocumentStoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn create(
        &self,
        collection: Collection,
        fields: DocumentFields,
    ) -> Result<Document, DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();
        check_unique(collection, documents, &fields, None)?;

        let document = Document::new(DocumentId::random(), fields);
        documents.push(document.clone());
        Ok(document)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
        fields: DocumentFields,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(None);
        };
        check_unique(collection, documents, &fields, Some(id))?;

        let Some(document) = documents.iter_mut().find(|document| document.id == *id) else {
            return Ok(None);
        };
        document.fields.extend(fields);
        Ok(Some(document.clone()))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<bool, DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(false);
        };
        let before = documents.len();
        documents.retain(|document| document.id != *id);
        Ok(documents.len() < before)
    }

    async fn delete_many(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(0);
        };
        let before = documents.len();
        documents.retain(|document| !filter.matches(&document.fields));
        Ok(u64::try_from(before - documents.len()).unwrap_or(u64::MAX))
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Ok(())
    }
}
