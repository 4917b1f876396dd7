use chrono::{TimeZone, Utc};

use super::*;
use crate::server::{
    data::subscription::SubscriptionRepository, model::subscription::UpsertSubscriptionParam,
};

mod find_by_discord_id;
mod get_all;
mod upsert;
