//! Domain primitives, services and ports.
//!
//! Purpose: define the blog's entities and the rules that govern them,
//! independent of HTTP and of the document store in use.
//!
//! Public surface:
//! - [`Author`], [`Post`], [`Comment`] and their drafts and partial updates.
//! - [`DocumentId`]: the store-assigned identifier shared by every entity.
//! - [`Error`] / [`ErrorCode`]: transport agnostic error payload.
//! - [`AuthorService`] / [`PostService`]: driving port implementations.
//! - [`ports`]: the boundary traits.

pub mod author;
pub mod author_service;
pub mod document_id;
pub(crate) mod documents;
pub mod error;
pub mod ports;
pub mod post;
pub mod post_service;
pub mod trace_id;

pub use self::author::{Author, AuthorDraft, AuthorUpdate, USER_NAME_FIELD};
pub use self::author_service::AuthorService;
pub use self::document_id::{DocumentId, DocumentIdError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::post::{
    AUTHOR_FIELD, AuthoredPost, Comment, Post, PostDraft, PostRecord, PostUpdate,
};
pub use self::post_service::PostService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
