//! Internal Diesel row structs for the `documents` table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use super::schema::documents;

/// Row struct for reading documents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DocumentRow {
    pub id: Uuid,
    pub body: Value,
}

/// Insertable struct for new documents. `seq` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = documents)]
pub(crate) struct NewDocumentRow<'a> {
    pub id: Uuid,
    pub collection: &'a str,
    pub body: Value,
}
