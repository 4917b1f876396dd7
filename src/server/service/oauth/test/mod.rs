use test_utils::{builder::TestBuilder, fixture};

use super::*;
use crate::server::{
    error::{auth::AuthError, config::ConfigError, AppError},
    testing::{test_config, CLIENT_ID, CLIENT_SECRET, REDIRECT_URI, STATE_SECRET},
};
