//! Optional PostgreSQL integration test for the Diesel document store.
//! Use `cargo test -- --ignored` with `RUN_PG_EMBEDDED=1` to run it.

use backend::domain::ports::{
    Collection, DocumentFields, DocumentFilter, DocumentStore, DocumentStoreError,
};
use backend::outbound::persistence::{DbPool, DieselDocumentStore, PoolConfig, apply_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use serde_json::{Value, json};

fn fields(value: Value) -> DocumentFields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

async fn exercise_store(database_url: String) {
    apply_migrations(&database_url)
        .await
        .expect("migrations apply");
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("pool builds");
    let store = DieselDocumentStore::new(pool);
    store.ping().await.expect("ping");

    let ada = store
        .create(
            Collection::Authors,
            fields(json!({ "firstName": "Ada", "lastName": "Lovelace", "userName": "ada" })),
        )
        .await
        .expect("create author");
    let clash = store
        .create(Collection::Authors, fields(json!({ "userName": "ada" })))
        .await
        .expect_err("duplicate username");
    assert_eq!(clash, DocumentStoreError::unique_violation("userName", "ada"));

    let author_ref = ada.id.to_string();
    for title in ["first", "second"] {
        store
            .create(
                Collection::Posts,
                fields(json!({ "title": title, "author": author_ref, "comments": [] })),
            )
            .await
            .expect("create post");
    }
    let titles: Vec<Value> = store
        .find_all(Collection::Posts)
        .await
        .expect("list posts")
        .into_iter()
        .map(|document| document.fields["title"].clone())
        .collect();
    assert_eq!(titles, vec![json!("first"), json!("second")]);

    let renamed = store
        .update_by_id(
            Collection::Authors,
            &ada.id,
            fields(json!({ "firstName": "Augusta" })),
        )
        .await
        .expect("update")
        .expect("author exists");
    assert_eq!(renamed.fields["userName"], json!("ada"));
    assert_eq!(renamed.fields["firstName"], json!("Augusta"));

    let found = store
        .find_one(
            Collection::Authors,
            &DocumentFilter::new().field_eq("userName", "ada"),
        )
        .await
        .expect("find one")
        .expect("match");
    assert_eq!(found.id, ada.id);

    let removed = store
        .delete_many(
            Collection::Posts,
            &DocumentFilter::new().field_eq("author", author_ref),
        )
        .await
        .expect("cascade");
    assert_eq!(removed, 2);
    assert!(
        store
            .delete_by_id(Collection::Authors, &ada.id)
            .await
            .expect("delete author")
    );
    assert!(
        store
            .find_by_id(Collection::Authors, &ada.id)
            .await
            .expect("lookup")
            .is_none()
    );
}

/// Optional round trip against embedded PostgreSQL; enable with `RUN_PG_EMBEDDED=1`.
#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_document_store_round_trip() {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() != Ok("1") {
        eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
        return;
    }

    let test_cluster = TestCluster::new().expect("embedded Postgres should start");
    let database_url = test_cluster.connection().database_url("postgres");
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    runtime.block_on(exercise_store(database_url));
}
