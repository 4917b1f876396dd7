use super::*;

/// Tests the first login of a Discord user.
///
/// Expected: Ok(Created), document keyed by the Discord id holding the full profile
#[tokio::test]
async fn stores_new_identity() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = users();
    let repo = DiscordUserRepository::new(&store, &collection);

    let outcome = repo.upsert(&identity("u1", "nelly")).await.unwrap();

    assert_eq!(outcome, UpsertOutcome::Created);
    assert_eq!(
        test.appwrite().document("users", "discord", "u1"),
        Some(fixture::discord_profile("u1", "nelly"))
    );
}

/// Tests a returning user whose profile changed.
///
/// Expected: Ok(Updated), one document holding the newer profile
#[tokio::test]
async fn replaces_profile_of_returning_user() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = users();
    let repo = DiscordUserRepository::new(&store, &collection);

    repo.upsert(&identity("u1", "A")).await.unwrap();
    let outcome = repo.upsert(&identity("u1", "B")).await.unwrap();

    let appwrite = test.appwrite();
    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(appwrite.document_count("users", "discord"), 1);
    assert_eq!(
        appwrite.document("users", "discord", "u1"),
        Some(fixture::discord_profile("u1", "B"))
    );
    assert_eq!(appwrite.create_calls(), 2);
    assert_eq!(appwrite.update_calls(), 1);
}

/// Tests a returning user whose new profile lacks a field stored earlier.
///
/// Verifies that the stored profile does not keep the old email once Discord stops
/// sending it.
///
/// Expected: Ok(Updated), email cleared, other fields from the new profile
#[tokio::test]
async fn clears_fields_missing_from_new_profile() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = users();
    let repo = DiscordUserRepository::new(&store, &collection);

    repo.upsert(&identity("u1", "A")).await.unwrap();
    let mut profile = fixture::discord_profile("u1", "B");
    profile.as_object_mut().unwrap().remove("email");
    let outcome = repo
        .upsert(&DiscordIdentity::from_profile(profile.clone()).unwrap())
        .await
        .unwrap();

    profile["email"] = Value::Null;
    assert_eq!(outcome, UpsertOutcome::Updated);
    assert_eq!(test.appwrite().document("users", "discord", "u1"), Some(profile));
}
