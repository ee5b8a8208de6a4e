//! PostgreSQL-backed `DocumentStore` implementation using Diesel ORM.
//!
//! Every collection shares the `documents` table. Filters become JSONB
//! containment checks (`body @> filter`) and partial updates use JSONB
//! concatenation, so untouched fields survive a merge.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;
use tracing::debug;

use crate::domain::DocumentId;
use crate::domain::ports::{
    Collection, Document, DocumentFields, DocumentFilter, DocumentStore, DocumentStoreError,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, map_write_error};
use super::models::{DocumentRow, NewDocumentRow};
use super::pool::DbPool;
use super::schema::documents;

/// Diesel-backed implementation of the [`DocumentStore`] port.
#[derive(Clone)]
pub struct DieselDocumentStore {
    pool: DbPool,
}

impl DieselDocumentStore {
    /// Create a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a row into a domain document, rejecting non-object bodies.
fn row_to_document(row: DocumentRow) -> Result<Document, DocumentStoreError> {
    match row.body {
        Value::Object(fields) => Ok(Document::new(DocumentId::from_uuid(row.id), fields)),
        _ => Err(DocumentStoreError::query(format!(
            "stored document {} is not a JSON object",
            row.id
        ))),
    }
}

fn rows_to_documents(rows: Vec<DocumentRow>) -> Result<Vec<Document>, DocumentStoreError> {
    rows.into_iter().map(row_to_document).collect()
}

#[async_trait]
impl DocumentStore for DieselDocumentStore {
    async fn find_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .filter(documents::id.eq(id.as_uuid()))
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_document).transpose()
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .filter(documents::body.contains(filter.to_json()))
            .order(documents::seq.asc())
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_document).transpose()
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .order(documents::seq.asc())
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_documents(rows)
    }

    async fn create(
        &self,
        collection: Collection,
        fields: DocumentFields,
    ) -> Result<Document, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = DocumentId::random();
        let new_row = NewDocumentRow {
            id: *id.as_uuid(),
            collection: collection.as_str(),
            body: Value::Object(fields.clone()),
        };

        diesel::insert_into(documents::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|error| map_write_error(error, collection, &fields))?;

        debug!(%collection, %id, "document created");
        Ok(Document::new(id, fields))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
        fields: DocumentFields,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let patch = Value::Object(fields.clone());
        let row: Option<DocumentRow> = diesel::update(
            documents::table
                .filter(documents::collection.eq(collection.as_str()))
                .filter(documents::id.eq(id.as_uuid())),
        )
        .set(documents::body.eq(documents::body.concat(patch)))
        .returning(DocumentRow::as_returning())
        .get_result(&mut conn)
        .await
        .optional()
        .map_err(|error| map_write_error(error, collection, &fields))?;

        row.map(row_to_document).transpose()
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<bool, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            documents::table
                .filter(documents::collection.eq(collection.as_str()))
                .filter(documents::id.eq(id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn delete_many(
        &self,
        collection: Collection,
        filter: &DocumentFilter,
    ) -> Result<u64, DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            documents::table
                .filter(documents::collection.eq(collection.as_str()))
                .filter(documents::body.contains(filter.to_json())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
