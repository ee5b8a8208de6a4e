//! Post domain service.
//!
//! Implements the post driving ports. Author names are resolved in a
//! separate join step after posts are loaded: each distinct author is
//! fetched once, and a dangling reference resolves to an empty name.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::author_service::{author_from_document, unknown_author};
use crate::domain::documents::{decode_fields, encode_fields, store_failure};
use crate::domain::ports::{Collection, Document, DocumentStore, PostsCommand, PostsQuery};
use crate::domain::{
    AuthoredPost, DocumentId, Error, Post, PostDraft, PostRecord, PostUpdate,
};

fn unknown_post(id: &DocumentId) -> Error {
    Error::not_found(format!("There is no post with ID `{id}`"))
}

fn post_from_document(document: Document) -> Result<Post, Error> {
    let id = document.id;
    let record: PostRecord = decode_fields(Collection::Posts, document)?;
    Ok(record.into_post(id))
}

/// Post service implementing [`PostsCommand`] and [`PostsQuery`].
#[derive(Clone)]
pub struct PostService<S: ?Sized> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: ?Sized> PostService<S> {
    /// Create a new service backed by `store`, stamping posts with `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use backend::domain::PostService;
    /// # use backend::domain::ports::DocumentStore;
    /// # use mockable::DefaultClock;
    /// # fn example(store: Arc<dyn DocumentStore>) {
    /// let service = PostService::new(store, Arc::new(DefaultClock));
    /// # let _ = service;
    /// # }
    /// ```
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl<S> PostService<S>
where
    S: DocumentStore + ?Sized,
{
    /// Display name of an author, or an empty string when it no longer exists.
    async fn author_name(&self, author_id: &DocumentId) -> Result<String, Error> {
        let document = self
            .store
            .find_by_id(Collection::Authors, author_id)
            .await
            .map_err(store_failure)?;
        match document {
            Some(document) => Ok(author_from_document(document)?.full_name()),
            None => {
                warn!(author_id = %author_id, "post references a missing author");
                Ok(String::new())
            }
        }
    }

    /// Display names keyed by author, each author looked up once.
    async fn resolve_author_names(
        &self,
        posts: &[Post],
    ) -> Result<HashMap<DocumentId, String>, Error> {
        let mut names = HashMap::new();
        for author_id in posts.iter().map(Post::author_id) {
            if names.contains_key(author_id) {
                continue;
            }
            let name = self.author_name(author_id).await?;
            names.insert(*author_id, name);
        }
        Ok(names)
    }

    /// Pair a single post with its author's display name.
    async fn with_author_name(&self, post: Post) -> Result<AuthoredPost, Error> {
        let author_name = self.author_name(post.author_id()).await?;
        Ok(AuthoredPost { post, author_name })
    }
}

#[async_trait]
impl<S> PostsCommand for PostService<S>
where
    S: DocumentStore + ?Sized,
{
    async fn create_post(&self, draft: PostDraft) -> Result<AuthoredPost, Error> {
        let author = self
            .store
            .find_by_id(Collection::Authors, &draft.author_id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| unknown_author(&draft.author_id))
            .and_then(author_from_document)?;

        let record = PostRecord::new(draft, self.clock.utc());
        let fields = encode_fields(Collection::Posts, &record)?;
        let document = self
            .store
            .create(Collection::Posts, fields)
            .await
            .map_err(store_failure)?;
        let post = post_from_document(document)?;
        info!(post_id = %post.id(), author_id = %author.id(), "created post");
        Ok(AuthoredPost {
            post,
            author_name: author.full_name(),
        })
    }

    async fn update_post(&self, id: DocumentId, update: PostUpdate) -> Result<AuthoredPost, Error> {
        let fields = encode_fields(Collection::Posts, &update)?;
        let document = self
            .store
            .update_by_id(Collection::Posts, &id, fields)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| unknown_post(&id))?;
        let post = post_from_document(document)?;
        self.with_author_name(post).await
    }

    async fn delete_post(&self, id: DocumentId) -> Result<(), Error> {
        let removed = self
            .store
            .delete_by_id(Collection::Posts, &id)
            .await
            .map_err(store_failure)?;
        debug!(post_id = %id, removed, "deleted post");
        Ok(())
    }
}

#[async_trait]
impl<S> PostsQuery for PostService<S>
where
    S: DocumentStore + ?Sized,
{
    async fn list_posts(&self) -> Result<Vec<AuthoredPost>, Error> {
        let posts = self
            .store
            .find_all(Collection::Posts)
            .await
            .map_err(store_failure)?
            .into_iter()
            .map(post_from_document)
            .collect::<Result<Vec<_>, _>>()?;

        let names = self.resolve_author_names(&posts).await?;
        Ok(posts
            .into_iter()
            .map(|post| {
                let author_name = names.get(post.author_id()).cloned().unwrap_or_default();
                AuthoredPost { post, author_name }
            })
            .collect())
    }

    async fn get_post(&self, id: DocumentId) -> Result<AuthoredPost, Error> {
        let post = self
            .store
            .find_by_id(Collection::Posts, &id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| unknown_post(&id))
            .and_then(post_from_document)?;
        self.with_author_name(post).await
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
