//! OpenAPI schema definitions for domain types and untyped request bodies.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`, and
//! handlers read request bodies as raw JSON objects so that presence can be
//! validated field by field. The wrappers here exist only so the generated
//! OpenAPI document describes those shapes.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed, fails validation, or violates a constraint.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Missing `title` in request body")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Validation context such as `{ "field": "title", "code": "missing_field" }`.
    details: Option<serde_json::Value>,
}

/// Request body for registering an author.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreateAuthorRequestSchema {
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    /// Must not be used by another author.
    #[schema(example = "ada")]
    user_name: String,
}

/// Request body for updating an author. Absent fields are left unchanged.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdateAuthorRequestSchema {
    /// Must equal the identifier in the request path.
    #[schema(format = "uuid")]
    id: String,
    first_name: Option<String>,
    last_name: Option<String>,
    user_name: Option<String>,
}

/// Request body for creating a post.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreatePostRequestSchema {
    title: String,
    content: String,
    /// Identifier of an existing author.
    #[schema(format = "uuid")]
    author_id: String,
}

/// Request body for updating a post. Absent fields are left unchanged.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UpdatePostRequestSchema {
    /// Must equal the identifier in the request path.
    #[schema(format = "uuid")]
    id: String,
    title: Option<String>,
    content: Option<String>,
}
