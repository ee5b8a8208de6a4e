//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies arrive as untyped JSON objects so that presence can be
//! checked field by field, in declaration order, before any typed
//! extraction happens. All helpers are pure.

use serde_json::{Map, Value, json};

use crate::domain::{DocumentId, Error};

/// Untyped JSON request body.
pub(crate) type JsonObject = Map<String, Value>;

/// Field carrying the record identifier in update bodies.
pub(crate) const ID: FieldName = FieldName::new("id");

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCode {
    MissingField,
    IdMismatch,
    InvalidId,
    InvalidType,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::IdMismatch => "id_mismatch",
            Self::InvalidId => "invalid_id",
            Self::InvalidType => "invalid_type",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    ValidationError::new(field, format!("Missing `{}` in request body", field.as_str()))
        .with_code(ErrorCode::MissingField)
}

/// Succeed when every field is present, otherwise name the first absent one.
///
/// A key holding `null` counts as present.
pub(crate) fn require_fields(payload: &JsonObject, required: &[FieldName]) -> Result<(), Error> {
    match required
        .iter()
        .find(|field| !payload.contains_key(field.as_str()))
    {
        Some(field) => Err(missing_field_error(*field)),
        None => Ok(()),
    }
}

/// Check that the body `id` matches the path identifier exactly.
pub(crate) fn ensure_ids_match(path_id: &str, payload: &JsonObject) -> Result<(), Error> {
    let body_id = match payload.get(ID.as_str()) {
        Some(Value::String(body_id)) if body_id == path_id => return Ok(()),
        Some(Value::String(body_id)) => body_id.clone(),
        Some(other) => other.to_string(),
        None => "(none)".to_owned(),
    };
    Err(ValidationError::new(
        ID,
        format!("Request path ID `{path_id}` and request body id `{body_id}` must match"),
    )
    .with_value(ErrorCode::IdMismatch, body_id))
}

pub(crate) fn parse_document_id(value: &str, field: FieldName) -> Result<DocumentId, Error> {
    DocumentId::new(value).map_err(|_| {
        ValidationError::new(
            field,
            format!("`{}` must be a valid identifier", field.as_str()),
        )
        .with_value(ErrorCode::InvalidId, value)
    })
}

fn invalid_type_error(field: FieldName) -> Error {
    ValidationError::new(field, format!("`{}` must be a string", field.as_str()))
        .with_code(ErrorCode::InvalidType)
}

/// Extract a string field that [`require_fields`] has already checked.
pub(crate) fn required_string(payload: &JsonObject, field: FieldName) -> Result<String, Error> {
    optional_string(payload, field)?.ok_or_else(|| missing_field_error(field))
}

/// Extract a string field that may be absent. `null` is not a string.
pub(crate) fn optional_string(
    payload: &JsonObject,
    field: FieldName,
) -> Result<Option<String>, Error> {
    match payload.get(field.as_str()) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid_type_error(field)),
    }
}
