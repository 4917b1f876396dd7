use super::*;

/// Tests writing a document id that does not exist yet.
///
/// Verifies that the upsert takes the create path only and stores the data as given.
///
/// Expected: Ok(Created), one create call, no update call
#[tokio::test]
async fn creates_missing_document() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let data = object(json!({"id": "u1", "name": "A"}));

    let outcome = create_or_update(&store, &users(), "u1", &data).await.unwrap();

    let appwrite = test.appwrite();
    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(appwrite.create_calls(), 1);
    assert_eq!(appwrite.update_calls(), 0);
    assert_eq!(
        appwrite.document("users", "discord", "u1"),
        Some(json!({"id": "u1", "name": "A"}))
    );
}

/// Tests writing a document id that already exists.
///
/// Verifies that the conflict on create falls back to an update which replaces the
/// stored data entirely, even though the store merges updates: fields missing from the
/// new data are cleared.
///
/// Expected: Ok(Updated), one create and one update call, data overwritten
#[tokio::test]
async fn overwrites_existing_document() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let appwrite = test.appwrite();
    appwrite.insert("users", "discord", "u1", json!({"id": "u1", "name": "A", "email": "a@example.com"}));
    let store = store(&test);

    let outcome = create_or_update(&store, &users(), "u1", &object(json!({"id": "u1", "name": "B"})))
        .await
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(appwrite.create_calls(), 1);
    assert_eq!(appwrite.update_calls(), 1);
    assert_eq!(
        appwrite.document("users", "discord", "u1"),
        Some(json!({"id": "u1", "name": "B", "email": null}))
    );
    assert_eq!(appwrite.document_count("users", "discord"), 1);
}

/// Tests writing the same data twice.
///
/// Expected: one document equal to the data after both writes
#[tokio::test]
async fn repeated_writes_are_idempotent() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let data = object(json!({"id": "u1", "name": "A"}));

    create_or_update(&store, &users(), "u1", &data).await.unwrap();
    let first = test.appwrite().document("users", "discord", "u1");
    create_or_update(&store, &users(), "u1", &data).await.unwrap();

    assert_eq!(test.appwrite().document("users", "discord", "u1"), first);
    assert_eq!(test.appwrite().document_count("users", "discord"), 1);
}

/// Tests a create refused for a reason other than a conflict.
///
/// Verifies that no update is attempted and that the failure names the stage, the
/// document location and the store's status and message.
///
/// Expected: Err(PersistenceError) at the create stage, no update call
#[tokio::test]
async fn create_failure_is_not_retried_as_update() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let appwrite = test.appwrite();
    appwrite.reject_creates(401);
    let store = store(&test);

    let err = create_or_update(&store, &users(), "u1", &object(json!({"id": "u1"})))
        .await
        .unwrap_err();

    assert_eq!(appwrite.update_calls(), 0);
    assert_eq!(err.stage, WriteStage::Create);
    assert_eq!(err.document_id, "u1");
    assert_eq!(err.database_id, "users");
    assert_eq!(err.collection_id, "discord");
    assert_eq!(err.project.as_deref(), Some(test_utils::appwrite::PROJECT_ID));
    assert!(matches!(err.source, StoreError::Rejected { status: 401, .. }));
}

/// Tests an update failure after a conflict.
///
/// Expected: Err(PersistenceError) at the update stage, stored data unchanged
#[tokio::test]
async fn update_failure_reports_update_stage() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let appwrite = test.appwrite();
    appwrite.insert("users", "discord", "u1", json!({"id": "u1", "name": "A"}));
    appwrite.reject_updates(500);
    let store = store(&test);

    let err = create_or_update(&store, &users(), "u1", &object(json!({"id": "u1", "name": "B"})))
        .await
        .unwrap_err();

    assert_eq!(err.stage, WriteStage::Update);
    assert!(matches!(err.source, StoreError::Rejected { status: 500, .. }));
    assert_eq!(
        appwrite.document("users", "discord", "u1"),
        Some(json!({"id": "u1", "name": "A"}))
    );
}

/// Tests writing without any store configured.
///
/// Expected: Err(PersistenceError) wrapping StoreError::Config, nothing sent
#[tokio::test]
async fn unconfigured_store_fails_before_sending() {
    let test = TestBuilder::new().build().await;
    let store = store(&test);

    let err = create_or_update(&store, &users(), "u1", &object(json!({"id": "u1"})))
        .await
        .unwrap_err();

    assert!(matches!(err.source, StoreError::Config(_)));
    assert!(store.location().endpoint.is_none());
}
