//! Environment-based application configuration.
//!
//! `Config::from_env` is called once at startup and the resulting value is shared
//! read-only (behind an `Arc`) for the lifetime of the process. Settings that are only
//! needed by a single endpoint (Discord credentials, Appwrite location, Stripe keys) are
//! optional here and checked when that endpoint runs, so a partially configured
//! deployment still serves everything it can.

use std::time::Duration;

use crate::server::error::config::ConfigError;

const DISCORD_AUTH_URL: &str = "https://discord.com/api/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api";
const STRIPE_API_URL: &str = "https://api.stripe.com/v1";

/// Placeholder used when `OAUTH_STATE_SECRET` is not set. Startup warns when it is in use.
pub const DEFAULT_STATE_SECRET: &str = "change_this_state_secret";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variables checked, in order, for the Appwrite project id.
const APPWRITE_PROJECT_VARS: [&str; 5] = [
    "APPWRITE_PROJECT_ID",
    "APPWRITE_PROJECT",
    "VITE_APPWRITE_PROJECT_ID",
    "VITE_APPWRITE_PROJECT",
    "REACT_APP_APPWRITE_PROJECT",
];

pub struct Config {
    pub bind_address: String,
    /// Timeout applied to every outbound HTTP request.
    pub request_timeout: Duration,

    /// Origin the browser is sent back to after a successful login.
    pub frontend_origin: String,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,

    /// Secret used to sign the OAuth2 `state` parameter.
    pub state_secret: String,

    pub discord: DiscordConfig,
    pub appwrite: AppwriteConfig,
    pub stripe: StripeConfig,
}

pub struct DiscordConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_url: Option<String>,

    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub scopes: Vec<String>,
}

pub struct AppwriteConfig {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub api_key: Option<String>,

    pub users_database_id: String,
    pub discord_collection_id: String,
    pub subscriptions_database_id: String,
    pub plans_collection_id: String,
}

pub struct StripeConfig {
    pub api_key: Option<String>,
    pub webhook_secret: Option<String>,
    pub price_id: Option<String>,
    pub success_url: Option<String>,
    pub cancel_url: Option<String>,

    pub api_url: String,
}

impl Config {
    /// Builds the configuration from process environment variables.
    ///
    /// Empty variables are treated the same as unset ones.
    ///
    /// # Returns
    /// - `Ok(Config)` - Resolved configuration
    /// - `Err(ConfigError::InvalidEnvVar)` - `REQUEST_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        let request_timeout = match optional_var("REQUEST_TIMEOUT_SECS") {
            Some(value) => parse_timeout_secs("REQUEST_TIMEOUT_SECS", &value)?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let frontend_origin = var_or("FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN);
        let cors_origins = split_origins(&var_or("FRONTEND_ORIGINS", &frontend_origin));

        Ok(Self {
            bind_address: var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            request_timeout,
            frontend_origin,
            cors_origins,
            state_secret: var_or("OAUTH_STATE_SECRET", DEFAULT_STATE_SECRET),
            discord: DiscordConfig {
                client_id: optional_var("DISCORD_CLIENT_ID"),
                client_secret: optional_var("DISCORD_CLIENT_SECRET"),
                redirect_url: optional_var("DISCORD_REDIRECT_URI"),
                ..DiscordConfig::default()
            },
            appwrite: AppwriteConfig {
                endpoint: optional_var("APPWRITE_ENDPOINT"),
                project_id: APPWRITE_PROJECT_VARS.iter().find_map(|name| optional_var(name)),
                api_key: optional_var("APPWRITE_API_KEY"),
                users_database_id: var_or("APPWRITE_DB_USERS_ID", "users"),
                discord_collection_id: var_or("APPWRITE_COLLECTION_DISCORD_ID", "discord"),
                subscriptions_database_id: var_or("APPWRITE_DB_SUBSCRIPTIONS_ID", "subscriptions"),
                plans_collection_id: var_or("APPWRITE_COLLECTION_PLANS_ID", "plans"),
            },
            stripe: StripeConfig {
                api_key: optional_var("STRIPE_API_KEY"),
                webhook_secret: optional_var("STRIPE_WEBHOOK_SECRET"),
                price_id: optional_var("STRIPE_PRICE_ID"),
                success_url: optional_var("STRIPE_SUCCESS_URL"),
                cancel_url: optional_var("STRIPE_CANCEL_URL"),
                ..StripeConfig::default()
            },
        })
    }

    /// Whether the state secret is still the insecure placeholder.
    pub fn uses_default_state_secret(&self) -> bool {
        self.state_secret == DEFAULT_STATE_SECRET
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_url: None,
            auth_url: DISCORD_AUTH_URL.to_string(),
            token_url: DISCORD_TOKEN_URL.to_string(),
            api_url: DISCORD_API_URL.to_string(),
            scopes: vec!["identify".to_string(), "email".to_string()],
        }
    }
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            webhook_secret: None,
            price_id: None,
            success_url: None,
            cancel_url: None,
            api_url: STRIPE_API_URL.to_string(),
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn var_or(name: &str, default: &str) -> String {
    optional_var(name).unwrap_or_else(|| default.to_string())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timeout_secs(name: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
