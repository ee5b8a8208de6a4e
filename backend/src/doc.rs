//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every author, post and health endpoint together with
//! the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves the generated document in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::authors::AuthorResponseBody;
use crate::inbound::http::posts::{CommentBody, PostDetailBody, PostListBody, PostSummaryBody};
use crate::inbound::http::schemas::{
    CreateAuthorRequestSchema, CreatePostRequestSchema, ErrorCodeSchema, ErrorSchema,
    UpdateAuthorRequestSchema, UpdatePostRequestSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        description = "CRUD endpoints for blog posts and their authors."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::authors::create_author,
        crate::inbound::http::authors::update_author,
        crate::inbound::http::authors::delete_author,
        crate::inbound::http::posts::list_posts,
        crate::inbound::http::posts::get_post,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::posts::update_post,
        crate::inbound::http::posts::delete_post,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AuthorResponseBody,
        PostListBody,
        PostSummaryBody,
        PostDetailBody,
        CommentBody,
        CreateAuthorRequestSchema,
        UpdateAuthorRequestSchema,
        CreatePostRequestSchema,
        UpdatePostRequestSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "authors", description = "Author registration and maintenance"),
        (name = "posts", description = "Blog posts and their comments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
