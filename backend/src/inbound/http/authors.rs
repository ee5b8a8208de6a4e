//! Author HTTP handlers.
//!
//! ```text
//! POST   /authors
//! PUT    /authors/{id}
//! DELETE /authors/{id}
//! ```

use actix_web::{HttpResponse, delete, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Author, AuthorDraft, AuthorUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CreateAuthorRequestSchema, ErrorSchema, UpdateAuthorRequestSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, ID, JsonObject, ensure_ids_match, optional_string, parse_document_id,
    require_fields, required_string,
};

const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const USER_NAME: FieldName = FieldName::new("userName");

/// Author representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponseBody {
    /// Author identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// First and last name joined by a space.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Unique handle.
    #[schema(example = "ada")]
    pub user_name: String,
}

impl From<Author> for AuthorResponseBody {
    fn from(author: Author) -> Self {
        Self {
            id: author.id().to_string(),
            name: author.full_name(),
            user_name: author.user_name().to_owned(),
        }
    }
}

/// Register a new author.
#[utoipa::path(
    post,
    path = "/authors",
    request_body = CreateAuthorRequestSchema,
    responses(
        (status = 201, description = "Author created", body = AuthorResponseBody),
        (status = 400, description = "Missing field or username taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "createAuthor"
)]
#[post("/authors")]
pub async fn create_author(
    state: web::Data<HttpState>,
    payload: web::Json<JsonObject>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    require_fields(&payload, &[FIRST_NAME, LAST_NAME, USER_NAME])?;
    let draft = AuthorDraft {
        first_name: required_string(&payload, FIRST_NAME)?,
        last_name: required_string(&payload, LAST_NAME)?,
        user_name: required_string(&payload, USER_NAME)?,
    };

    let author = state.authors.create_author(draft).await?;
    Ok(HttpResponse::Created().json(AuthorResponseBody::from(author)))
}

/// Update any of an author's name fields.
///
/// The body must repeat the path identifier as `id`.
#[utoipa::path(
    put,
    path = "/authors/{id}",
    params(("id" = String, Path, description = "Author identifier")),
    request_body = UpdateAuthorRequestSchema,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponseBody),
        (status = 400, description = "Invalid request, unknown author, or username taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "updateAuthor"
)]
#[put("/authors/{id}")]
pub async fn update_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<JsonObject>,
) -> ApiResult<web::Json<AuthorResponseBody>> {
    let path_id = path.into_inner();
    let payload = payload.into_inner();
    ensure_ids_match(&path_id, &payload)?;
    let id = parse_document_id(&path_id, ID)?;
    let update = AuthorUpdate {
        first_name: optional_string(&payload, FIRST_NAME)?,
        last_name: optional_string(&payload, LAST_NAME)?,
        user_name: optional_string(&payload, USER_NAME)?,
    };

    let author = state.authors.update_author(id, update).await?;
    Ok(web::Json(author.into()))
}

/// Delete an author and every post they wrote.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    params(("id" = String, Path, description = "Author identifier")),
    responses(
        (status = 204, description = "Author and their posts deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "deleteAuthor"
)]
#[delete("/authors/{id}")]
pub async fn delete_author(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_document_id(&path.into_inner(), ID)?;
    state.authors.delete_author(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "authors_tests.rs"]
mod tests;
