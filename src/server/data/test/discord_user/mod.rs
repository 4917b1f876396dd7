use super::*;
use crate::server::data::discord_user::DiscordUserRepository;

mod find_by_id;
mod upsert;
