//! Author domain service.
//!
//! Enforces the username uniqueness rule and cascades author removal to the
//! author's posts. Each step is an independent store call; nothing here is
//! transactional.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::documents::{decode_fields, encode_fields, store_failure};
use crate::domain::ports::{
    AuthorsCommand, Collection, Document, DocumentFilter, DocumentStore, DocumentStoreError,
};
use crate::domain::{
    AUTHOR_FIELD, Author, AuthorDraft, AuthorUpdate, DocumentId, Error, USER_NAME_FIELD,
};

fn username_taken(user_name: &str) -> Error {
    warn!(user_name, "rejected duplicate username");
    Error::invalid_request(format!("The username `{user_name}` is taken"))
}

pub(crate) fn unknown_author(id: &DocumentId) -> Error {
    warn!(author_id = %id, "referenced author does not exist");
    Error::invalid_request(format!("There is no author with ID `{id}`"))
}

fn map_store_error(error: DocumentStoreError) -> Error {
    match error {
        DocumentStoreError::UniqueViolation { field, value } if field == USER_NAME_FIELD => {
            username_taken(&value)
        }
        other => store_failure(other),
    }
}

pub(crate) fn author_from_document(document: Document) -> Result<Author, Error> {
    let id = document.id;
    let draft: AuthorDraft = decode_fields(Collection::Authors, document)?;
    Ok(Author::new(id, draft))
}

/// Author service implementing [`AuthorsCommand`] on top of a document store.
#[derive(Clone)]
pub struct AuthorService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> AuthorService<S> {
    /// Create a new service backed by `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> AuthorService<S>
where
    S: DocumentStore + ?Sized,
{
    async fn ensure_user_name_available(&self, user_name: &str) -> Result<(), Error> {
        let filter = DocumentFilter::new().field_eq(USER_NAME_FIELD, user_name);
        let existing = self
            .store
            .find_one(Collection::Authors, &filter)
            .await
            .map_err(map_store_error)?;
        match existing {
            Some(_) => Err(username_taken(user_name)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<S> AuthorsCommand for AuthorService<S>
where
    S: DocumentStore + ?Sized,
{
    async fn create_author(&self, draft: AuthorDraft) -> Result<Author, Error> {
        self.ensure_user_name_available(&draft.user_name).await?;

        let fields = encode_fields(Collection::Authors, &draft)?;
        let document = self
            .store
            .create(Collection::Authors, fields)
            .await
            .map_err(map_store_error)?;
        let author = author_from_document(document)?;
        info!(author_id = %author.id(), user_name = author.user_name(), "created author");
        Ok(author)
    }

    async fn update_author(&self, id: DocumentId, update: AuthorUpdate) -> Result<Author, Error> {
        self.store
            .find_by_id(Collection::Authors, &id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| unknown_author(&id))?;

        if let Some(user_name) = update.user_name.as_deref() {
            self.ensure_user_name_available(user_name).await?;
        }

        let fields = encode_fields(Collection::Authors, &update)?;
        let document = self
            .store
            .update_by_id(Collection::Authors, &id, fields)
            .await
            .map_err(map_store_error)?
            // Removed between the existence check and the write.
            .ok_or_else(|| unknown_author(&id))?;
        author_from_document(document)
    }

    async fn delete_author(&self, id: DocumentId) -> Result<(), Error> {
        let posts = DocumentFilter::new().field_eq(AUTHOR_FIELD, id.to_string());
        let posts_removed = self
            .store
            .delete_many(Collection::Posts, &posts)
            .await
            .map_err(map_store_error)?;
        let author_removed = self
            .store
            .delete_by_id(Collection::Authors, &id)
            .await
            .map_err(map_store_error)?;
        info!(author_id = %id, posts_removed, author_removed, "deleted author and their posts");
        Ok(())
    }
}

#[cfg(test)]
#[path = "author_service_tests.rs"]
mod tests;
