use super::*;

/// Tests reading a stored document.
///
/// Expected: Ok(Document) with Appwrite metadata stripped
#[tokio::test]
async fn reads_document_without_metadata() {
    let test = TestBuilder::new().with_appwrite().build().await;
    test.appwrite()
        .insert("users", "discord", "u1", json!({"id": "u1", "name": "A"}));
    let store = store(&test);

    let document = store.get(&users(), "u1").await.unwrap();

    assert_eq!(document.id, "u1");
    assert_eq!(Value::Object(document.data), json!({"id": "u1", "name": "A"}));
}

/// Tests reading a document that does not exist.
///
/// Expected: Err(StoreError::NotFound)
#[tokio::test]
async fn missing_document_is_not_found() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);

    let result = store.get(&users(), "nope").await;

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

/// Tests the health probe against a reachable store.
///
/// Expected: Ok(())
#[tokio::test]
async fn health_probe_succeeds() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);

    store.health().await.unwrap();
}
