//! Conversions between domain records and store documents.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use super::Error;
use super::ports::{Collection, Document, DocumentFields, DocumentStoreError};

/// Map an unexpected store failure to an internal error, logging the cause.
///
/// The message is redacted by the HTTP adapter; the log line keeps it.
pub(crate) fn store_failure(error: DocumentStoreError) -> Error {
    error!(error = %error, "document store operation failed");
    Error::internal(error.to_string())
}

/// Serialise a record into top-level document fields.
pub(crate) fn encode_fields<T: Serialize>(
    collection: Collection,
    record: &T,
) -> Result<DocumentFields, Error> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => {
            error!(%collection, kind = json_kind(&other), "record did not serialise to an object");
            Err(Error::internal(format!(
                "{collection} record did not serialise to an object"
            )))
        }
        Err(err) => {
            error!(%collection, error = %err, "failed to serialise record");
            Err(Error::internal(format!(
                "failed to serialise {collection} record: {err}"
            )))
        }
    }
}

/// Deserialise the fields of a stored document into a record.
pub(crate) fn decode_fields<T: DeserializeOwned>(
    collection: Collection,
    document: Document,
) -> Result<T, Error> {
    let Document { id, fields } = document;
    serde_json::from_value(Value::Object(fields)).map_err(|err| {
        error!(%collection, document_id = %id, error = %err, "stored document is malformed");
        Error::internal(format!("stored {collection} document {id} is malformed: {err}"))
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthorDraft, DocumentId, ErrorCode};
    use serde_json::json;

    #[test]
    fn store_failures_are_internal_errors() {
        let err = store_failure(DocumentStoreError::connection("refused"));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "document store connection failed: refused");
    }

    #[test]
    fn encode_rejects_non_object_records() {
        let err = encode_fields(Collection::Posts, &"plain").expect_err("string is not an object");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn decode_reports_malformed_documents_as_internal() {
        let fields = json!({ "firstName": "Ada" });
        let Value::Object(fields) = fields else {
            panic!("object literal");
        };
        let document = Document::new(DocumentId::random(), fields);
        let err = decode_fields::<AuthorDraft>(Collection::Authors, document)
            .expect_err("missing fields");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
