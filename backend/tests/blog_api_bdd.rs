//! Behavioural tests for author and post lifecycles.

mod support;

use std::collections::HashMap;

use actix_rt::SystemRunner;
use actix_web::test::TestRequest;
use backend::domain::DocumentId;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use support::{Reply, TestBackend, create_author, create_post, listed_titles, send};

struct BlogWorld {
    runtime: SystemRunner,
    backend: TestBackend,
    authors: HashMap<String, String>,
    last: Option<Reply>,
}

impl BlogWorld {
    fn author_id(&self, user_name: &str) -> String {
        self.authors
            .get(user_name)
            .cloned()
            .unwrap_or_else(|| panic!("author {user_name} was not registered"))
    }

    fn send(&mut self, request: TestRequest) {
        let reply = self.runtime.block_on(send(&self.backend, request));
        self.last = Some(reply);
    }

    fn last(&self) -> &Reply {
        self.last.as_ref().expect("a request should have been sent")
    }

    fn titles(&self) -> Vec<String> {
        self.runtime.block_on(listed_titles(&self.backend))
    }
}

#[fixture]
fn world() -> BlogWorld {
    BlogWorld {
        runtime: actix_rt::System::new(),
        backend: TestBackend::new(),
        authors: HashMap::new(),
        last: None,
    }
}

#[given("an author named {user_name}")]
fn an_author_named(world: &mut BlogWorld, user_name: String) {
    let id = world
        .runtime
        .block_on(create_author(&world.backend, &user_name, "Tester", &user_name));
    world.authors.insert(user_name, id);
}

#[given("{user_name} has published a post titled {title}")]
fn has_published_a_post_titled(world: &mut BlogWorld, user_name: String, title: String) {
    let author_id = world.author_id(&user_name);
    world
        .runtime
        .block_on(create_post(&world.backend, &title, &author_id));
}

#[when("the author {user_name} is deleted")]
fn the_author_is_deleted(world: &mut BlogWorld, user_name: String) {
    let author_id = world.author_id(&user_name);
    world.send(TestRequest::delete().uri(&format!("/authors/{author_id}")));
}

#[when("another author registers as {user_name}")]
fn another_author_registers_as(world: &mut BlogWorld, user_name: String) {
    world.send(TestRequest::post().uri("/authors").set_json(json!({
        "firstName": "Someone",
        "lastName": "Else",
        "userName": user_name,
    })));
}

#[when("a post is submitted for an unknown author")]
fn a_post_is_submitted_for_an_unknown_author(world: &mut BlogWorld) {
    world.send(TestRequest::post().uri("/posts").set_json(json!({
        "title": "Orphan",
        "content": "Nobody wrote this",
        "author_id": DocumentId::random().to_string(),
    })));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &mut BlogWorld, status: u16) {
    assert_eq!(world.last().status.as_u16(), status, "{:?}", world.last().body);
}

#[then("the error reports that {user_name} is taken")]
fn the_error_reports_that_is_taken(world: &mut BlogWorld, user_name: String) {
    let reply = world.last();
    assert_eq!(reply.body["code"], json!("invalid_request"));
    assert_eq!(
        reply.body["message"],
        json!(format!("The username `{user_name}` is taken"))
    );
}

#[then("the post list contains only {title}")]
fn the_post_list_contains_only(world: &mut BlogWorld, title: String) {
    assert_eq!(world.titles(), vec![title]);
}

#[then("the post list is empty")]
fn the_post_list_is_empty(world: &mut BlogWorld) {
    assert!(world.titles().is_empty());
}

#[scenario(
    path = "tests/features/blog_api.feature",
    name = "Deleting an author removes their posts"
)]
fn deleting_an_author_removes_their_posts(world: BlogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/blog_api.feature",
    name = "Usernames cannot be reused"
)]
fn usernames_cannot_be_reused(world: BlogWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/blog_api.feature",
    name = "Posts need an existing author"
)]
fn posts_need_an_existing_author(world: BlogWorld) {
    drop(world);
}
