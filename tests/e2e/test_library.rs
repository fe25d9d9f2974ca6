use crate::e2e::helpers;

use bedtime_stories::domain::library::{decode_collection, SavedStoryRecord};
use bedtime_stories::infrastructure::repositories::InMemoryStoryStore;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_start_with_empty_library_when_nothing_persisted(ctx: &TestContext) {
    let response = ctx.client.get("/api/library").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!([])));
}

#[tokio::test]
async fn it_should_start_with_empty_library_when_persisted_data_is_malformed() {
    let ctx = TestContext::start(InMemoryStoryStore::with_entry("[{\"id\": oops"))
        .await
        .unwrap();

    let response = ctx.client.get("/api/library").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body, Some(json!([])));
}

#[tokio::test]
async fn it_should_load_previously_saved_stories() {
    let existing = r#"[{"id":1729350000000,"title":"The Fox","content":"A fox story","character":"Leo","theme":"animals","date":"10/19/2024"}]"#;
    let ctx = TestContext::start(InMemoryStoryStore::with_entry(existing))
        .await
        .unwrap();

    let response = ctx.client.get("/api/library").await.unwrap();

    response.assert_status(StatusCode::OK);
    let stories: Vec<SavedStoryRecord> = response.json().unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "The Fox");
    assert_eq!(stories[0].theme, "animals");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_save_without_title(ctx: &TestContext) {
    ctx.client.post_empty("/api/studio/generate").await.unwrap();

    let response = ctx.client.post_empty("/api/library").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(ctx.store.snapshot().await.is_none());
    let library = ctx.client.get("/api/library").await.unwrap();
    assert_eq!(library.body, Some(json!([])));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_save_without_story(ctx: &TestContext) {
    ctx.client
        .put("/api/studio/title", &json!({"title": "Untold"}))
        .await
        .unwrap();

    let response = ctx.client.post_empty("/api/library").await.unwrap();

    response.assert_status(StatusCode::OK);
    // Nothing saved, so the title is kept for the next attempt
    assert_eq!(response.body.as_ref().unwrap()["title"], json!("Untold"));
    assert!(ctx.store.snapshot().await.is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_save_story_with_current_character_and_theme(ctx: &TestContext) {
    ctx.generator.answer("C");
    ctx.client
        .put(
            "/api/studio/settings",
            &json!({"mainCharacter": "Mia", "age": "5", "theme": "ocean", "mood": "gentle"}),
        )
        .await
        .unwrap();
    ctx.client.post_empty("/api/studio/generate").await.unwrap();
    ctx.client
        .put("/api/studio/title", &json!({"title": "T"}))
        .await
        .unwrap();

    let response = ctx.client.post_empty("/api/library").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body.as_ref().unwrap()["title"], json!(""));

    let persisted = decode_collection(ctx.store.snapshot().await.as_deref());
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].title, "T");
    assert_eq!(persisted[0].content, "C");
    assert_eq!(persisted[0].character, "Mia");
    assert_eq!(persisted[0].theme, "ocean");

    let library: Vec<SavedStoryRecord> =
        ctx.client.get("/api/library").await.unwrap().json().unwrap();
    assert_eq!(library, persisted);
}

#[tokio::test]
async fn it_should_append_to_existing_library() {
    let existing = r#"[{"id":1,"title":"Old","content":"Old story","character":"Leo","theme":"magic","date":"1/2/2024"}]"#;
    let ctx = TestContext::start(InMemoryStoryStore::with_entry(existing))
        .await
        .unwrap();

    ctx.client.post_empty("/api/studio/generate").await.unwrap();
    ctx.client
        .put("/api/studio/title", &json!({"title": "New"}))
        .await
        .unwrap();
    ctx.client
        .post_empty("/api/library")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let persisted = decode_collection(ctx.store.snapshot().await.as_deref());
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].title, "Old");
    assert_eq!(persisted[1].title, "New");
    assert!(persisted[1].id > persisted[0].id);
}
