use super::*;

/// Tests granting a plan to a user without one.
///
/// Expected: Ok(Created), plan document keyed by the Discord id
#[tokio::test]
async fn creates_plan() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = plans();
    let repo = SubscriptionRepository::new(&store, &collection);
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

    let outcome = repo
        .upsert(&UpsertSubscriptionParam::premium("u1".to_string(), now))
        .await
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(
        test.appwrite().document("subscriptions", "plans", "u1"),
        Some(json!({
            "discord_id": "u1",
            "plan": "premium",
            "expires_at": "2026-11-18T12:00:00+00:00"
        }))
    );
}

/// Tests renewing an existing plan.
///
/// Expected: Ok(Updated), expiry moved to the new period end
#[tokio::test]
async fn renews_existing_plan() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = plans();
    let repo = SubscriptionRepository::new(&store, &collection);
    let first = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let renewal = Utc.with_ymd_and_hms(2026, 11, 18, 12, 0, 0).unwrap();

    repo.upsert(&UpsertSubscriptionParam::premium("u1".to_string(), first))
        .await
        .unwrap();
    let outcome = repo
        .upsert(&UpsertSubscriptionParam::premium("u1".to_string(), renewal))
        .await
        .unwrap();

    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(
        test.appwrite().document("subscriptions", "plans", "u1").unwrap()["expires_at"],
        json!("2026-12-18T12:00:00+00:00")
    );
}
