//! HTTP inbound adapter exposing REST endpoints.

pub mod authors;
pub mod error;
pub mod health;
pub mod posts;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, json_config, not_found};

/// Register the author and post endpoints plus the JSON body configuration.
///
/// Health probes and the not-found fallback are wired by the caller so the
/// probes can be mounted without the API.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(authors::create_author)
        .service(authors::update_author)
        .service(authors::delete_author)
        .service(posts::list_posts)
        .service(posts::get_post)
        .service(posts::create_post)
        .service(posts::update_post)
        .service(posts::delete_post);
}
