use super::*;

/// Tests finding a stored plan.
///
/// Expected: Ok(Some(Document)) with the plan data
#[tokio::test]
async fn finds_stored_plan() {
    let test = TestBuilder::new().with_appwrite().build().await;
    test.appwrite().insert(
        "subscriptions",
        "plans",
        "u1",
        json!({"discord_id": "u1", "plan": "premium", "expires_at": "2026-11-18T12:00:00+00:00"}),
    );
    let store = store(&test);
    let collection = plans();
    let repo = SubscriptionRepository::new(&store, &collection);

    let document = repo.find_by_discord_id("u1").await.unwrap().unwrap();

    assert_eq!(document.id, "u1");
    assert_eq!(document.data["plan"], json!("premium"));
}

/// Tests a user without a plan.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_plan() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = plans();
    let repo = SubscriptionRepository::new(&store, &collection);

    assert!(repo.find_by_discord_id("u1").await.unwrap().is_none());
}
