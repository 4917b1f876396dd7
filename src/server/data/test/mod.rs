use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, fixture};

use crate::server::{
    data::{
        appwrite::AppwriteStore,
        document::{CollectionRef, UpsertOutcome},
    },
    error::store::{StoreError, WriteStage},
    model::identity::DiscordIdentity,
    testing::test_config,
};

mod discord_user;
mod document;
mod subscription;

/// Store client wired to the fake Appwrite of a test context.
fn store(test: &TestContext) -> AppwriteStore {
    AppwriteStore::new(reqwest::Client::new(), &test_config(test).appwrite)
}

fn users() -> CollectionRef {
    CollectionRef::new("users", "discord")
}

fn plans() -> CollectionRef {
    CollectionRef::new("subscriptions", "plans")
}

fn identity(id: &str, username: &str) -> DiscordIdentity {
    DiscordIdentity::from_profile(fixture::discord_profile(id, username)).unwrap()
}

fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test data must be a JSON object"),
    }
}
