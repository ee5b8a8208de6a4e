//! Post HTTP handlers.
//!
//! ```text
//! GET    /posts
//! GET    /posts/{id}
//! POST   /posts
//! PUT    /posts/{id}
//! DELETE /posts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AuthoredPost, Comment, PostDraft, PostUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CreatePostRequestSchema, ErrorSchema, UpdatePostRequestSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, ID, JsonObject, ensure_ids_match, optional_string, parse_document_id,
    require_fields, required_string,
};

const TITLE: FieldName = FieldName::new("title");
const CONTENT: FieldName = FieldName::new("content");
const AUTHOR_ID: FieldName = FieldName::new("author_id");

/// Brief post representation used by listings and updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryBody {
    /// Post identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Display name of the author; empty when the author no longer exists.
    #[schema(example = "Ada Lovelace")]
    pub author: String,
    /// Creation timestamp in RFC 3339 form.
    #[schema(format = "date-time")]
    pub created: String,
}

/// Envelope returned by `GET /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostListBody {
    /// Every post, oldest first.
    pub posts: Vec<PostSummaryBody>,
}

/// Comment representation embedded in [`PostDetailBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentBody {
    /// Comment identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Comment text.
    pub content: String,
}

/// Full post representation including comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostDetailBody {
    /// Post identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Display name of the author; empty when the author no longer exists.
    #[schema(example = "Ada Lovelace")]
    pub author: String,
    /// Creation timestamp in RFC 3339 form.
    #[schema(format = "date-time")]
    pub created: String,
    /// Comments in the order they were added.
    pub comments: Vec<CommentBody>,
}

impl From<&Comment> for CommentBody {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content: comment.content.clone(),
        }
    }
}

impl From<AuthoredPost> for PostSummaryBody {
    fn from(value: AuthoredPost) -> Self {
        let AuthoredPost { post, author_name } = value;
        Self {
            id: post.id().to_string(),
            title: post.title().to_owned(),
            content: post.content().to_owned(),
            author: author_name,
            created: post.created().to_rfc3339(),
        }
    }
}

impl From<AuthoredPost> for PostDetailBody {
    fn from(value: AuthoredPost) -> Self {
        let comments = value.post.comments().iter().map(CommentBody::from).collect();
        let PostSummaryBody {
            id,
            title,
            content,
            author,
            created,
        } = PostSummaryBody::from(value);
        Self {
            id,
            title,
            content,
            author,
            created,
            comments,
        }
    }
}

/// List every post in creation order.
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "All posts", body = PostListBody),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<PostListBody>> {
    let posts = state.posts_query.list_posts().await?;
    Ok(web::Json(PostListBody {
        posts: posts.into_iter().map(PostSummaryBody::from).collect(),
    }))
}

/// Fetch a single post with its comments.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post found", body = PostDetailBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost"
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PostDetailBody>> {
    let id = parse_document_id(&path.into_inner(), ID)?;
    let post = state.posts_query.get_post(id).await?;
    Ok(web::Json(post.into()))
}

/// Create a post for an existing author.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequestSchema,
    responses(
        (status = 201, description = "Post created", body = PostDetailBody),
        (status = 400, description = "Missing field or unknown author", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<JsonObject>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    require_fields(&payload, &[TITLE, CONTENT, AUTHOR_ID])?;
    let title = required_string(&payload, TITLE)?;
    let content = required_string(&payload, CONTENT)?;
    let author_id = parse_document_id(&required_string(&payload, AUTHOR_ID)?, AUTHOR_ID)?;

    let post = state
        .posts
        .create_post(PostDraft {
            title,
            content,
            author_id,
        })
        .await?;
    Ok(HttpResponse::Created().json(PostDetailBody::from(post)))
}

/// Update a post's title and/or content.
///
/// The body must repeat the path identifier as `id`.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    request_body = UpdatePostRequestSchema,
    responses(
        (status = 200, description = "Post updated", body = PostSummaryBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "updatePost"
)]
#[put("/posts/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<JsonObject>,
) -> ApiResult<web::Json<PostSummaryBody>> {
    let path_id = path.into_inner();
    let payload = payload.into_inner();
    ensure_ids_match(&path_id, &payload)?;
    let id = parse_document_id(&path_id, ID)?;
    let update = PostUpdate {
        title: optional_string(&payload, TITLE)?,
        content: optional_string(&payload, CONTENT)?,
    };

    let post = state.posts.update_post(id, update).await?;
    Ok(web::Json(post.into()))
}

/// Delete a post. Deleting an unknown post still succeeds.
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePost"
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_document_id(&path.into_inner(), ID)?;
    state.posts.delete_post(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
