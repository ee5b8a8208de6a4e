//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. The
//! `diesel print-schema` command regenerates them from a live database.

diesel::table! {
    /// Schema-flexible documents shared by every collection.
    ///
    /// `seq` records insertion order; `body` holds the top-level fields as a
    /// JSON object.
    documents (id) {
        id -> Uuid,
        seq -> Int8,
        collection -> Text,
        body -> Jsonb,
    }
}
