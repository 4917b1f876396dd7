use super::*;
use crate::server::data::document::{create_or_update, DocumentStore};

mod create_or_update;
mod get;
