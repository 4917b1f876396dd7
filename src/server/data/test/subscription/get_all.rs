use super::*;

/// Tests listing every plan document.
///
/// Expected: one document per stored plan, identities collection not included
#[tokio::test]
async fn lists_plans_only() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let appwrite = test.appwrite();
    for id in ["u1", "u2"] {
        appwrite.insert(
            "subscriptions",
            "plans",
            id,
            json!({"discord_id": id, "plan": "premium", "expires_at": "2026-11-18T12:00:00+00:00"}),
        );
    }
    appwrite.insert("users", "discord", "u3", json!({"id": "u3"}));
    let store = store(&test);
    let collection = plans();
    let repo = SubscriptionRepository::new(&store, &collection);

    let mut ids: Vec<String> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|document| document.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["u1", "u2"]);
}

/// Tests listing an empty collection.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn lists_nothing_when_empty() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = plans();
    let repo = SubscriptionRepository::new(&store, &collection);

    assert!(repo.get_all().await.unwrap().is_empty());
}
