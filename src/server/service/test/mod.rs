use chrono::{TimeZone, Utc};
use serde_json::json;
use test_utils::{builder::TestBuilder, fixture};

use crate::server::{
    data::{appwrite::AppwriteStore, document::UpsertOutcome},
    error::{config::ConfigError, stripe::StripeError, AppError},
    testing::test_config,
};

mod stripe;
