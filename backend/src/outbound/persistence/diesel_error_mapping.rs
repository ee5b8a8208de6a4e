//! Diesel error mapping for the document store adapter.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::{Collection, DocumentFields, DocumentStoreError};

use super::pool::PoolError;

/// Unique indexes created by the migrations, with the field each guards.
const UNIQUE_CONSTRAINTS: &[(&str, Collection, &str)] = &[(
    "documents_authors_user_name_key",
    Collection::Authors,
    "userName",
)];

/// Map pool errors to connection failures.
pub(crate) fn map_pool_error(error: PoolError) -> DocumentStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DocumentStoreError::connection(message)
        }
    }
}

/// Map Diesel errors raised by reads and deletes.
pub(crate) fn map_diesel_error(error: DieselError) -> DocumentStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DocumentStoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => DocumentStoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DocumentStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => DocumentStoreError::query("database error"),
        _ => DocumentStoreError::query("database error"),
    }
}

/// Map Diesel errors raised by writes, recognising unique index clashes.
///
/// `fields` are the values being written; the clashing value is read from
/// them because PostgreSQL only reports the constraint name.
pub(crate) fn map_write_error(
    error: DieselError,
    collection: Collection,
    fields: &DocumentFields,
) -> DocumentStoreError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        if let Some(violation) = unique_violation(collection, fields, info.constraint_name()) {
            return violation;
        }
    }
    map_diesel_error(error)
}

/// Resolve the field behind a unique violation.
///
/// Falls back to the collection's first unique field when the constraint is
/// unknown. Returns `None` when the collection declares no unique field or
/// the written fields do not include it.
pub(crate) fn unique_violation(
    collection: Collection,
    fields: &DocumentFields,
    constraint: Option<&str>,
) -> Option<DocumentStoreError> {
    let known = constraint.and_then(|name| {
        UNIQUE_CONSTRAINTS
            .iter()
            .find(|(constraint_name, owner, _)| *constraint_name == name && *owner == collection)
            .map(|(_, _, field)| *field)
    });
    let field = match known {
        Some(field) => field,
        None => {
            warn!(
                ?constraint,
                %collection,
                "unrecognised unique constraint, falling back to collection unique field"
            );
            collection.unique_fields().first().copied()?
        }
    };
    let value = match fields.get(field)? {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    Some(DocumentStoreError::unique_violation(field, value))
}
