use super::*;

/// Tests finding a stored identity.
///
/// Expected: Ok(Some(identity)) equal to what was stored
#[tokio::test]
async fn finds_stored_identity() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = users();
    let repo = DiscordUserRepository::new(&store, &collection);
    repo.upsert(&identity("u1", "nelly")).await.unwrap();

    let found = repo.find_by_id("u1").await.unwrap();

    assert_eq!(found, Some(identity("u1", "nelly")));
}

/// Tests querying an id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let test = TestBuilder::new().with_appwrite().build().await;
    let store = store(&test);
    let collection = users();
    let repo = DiscordUserRepository::new(&store, &collection);

    let found = repo.find_by_id("u404").await.unwrap();

    assert!(found.is_none());
}
