//! OAuth2 login with Discord
//!
//! `login_url` starts the authorization-code flow with a signed `state`; `callback`
//! verifies that state, exchanges the code and fetches the user's profile. Persisting
//! the resulting identity is left to `IdentityService`.

use oauth2::{basic::BasicClient, AuthType, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use crate::server::{
    config::DiscordConfig, error::config::ConfigError,
    service::oauth::state_token::StateTokenSigner, state::OAuth2Client,
};

pub mod callback;
pub mod login;
pub mod state_token;

#[cfg(test)]
mod test;

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub config: &'a DiscordConfig,
    pub signer: &'a StateTokenSigner,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        config: &'a DiscordConfig,
        signer: &'a StateTokenSigner,
    ) -> Self {
        Self {
            http_client,
            config,
            signer,
        }
    }

    /// Builds the OAuth2 client from the Discord settings.
    ///
    /// Client credentials are sent in the token request body, which is what Discord
    /// documents for confidential clients.
    ///
    /// # Arguments
    /// - `require_secret` - Whether `DISCORD_CLIENT_SECRET` must be set (token exchange)
    ///
    /// # Returns
    /// - `Ok(OAuth2Client)` - Client with authorize and token endpoints set
    /// - `Err(ConfigError::MissingEnvVars)` - Required Discord settings are unset
    /// - `Err(ConfigError::InvalidUrl)` - A configured URL does not parse
    fn oauth_client(&self, require_secret: bool) -> Result<OAuth2Client, ConfigError> {
        let mut required = vec![
            ("DISCORD_CLIENT_ID", self.config.client_id.is_some()),
            ("DISCORD_REDIRECT_URI", self.config.redirect_url.is_some()),
        ];
        if require_secret {
            required.push(("DISCORD_CLIENT_SECRET", self.config.client_secret.is_some()));
        }
        ConfigError::require(&required)?;

        let client_id = self.config.client_id.clone().unwrap_or_default();
        let redirect_url = self.config.redirect_url.clone().unwrap_or_default();

        let auth_url = AuthUrl::new(self.config.auth_url.clone())
            .map_err(|source| invalid_url("DISCORD_AUTH_URL", source))?;
        let token_url = TokenUrl::new(self.config.token_url.clone())
            .map_err(|source| invalid_url("DISCORD_TOKEN_URL", source))?;
        let redirect_url = RedirectUrl::new(redirect_url)
            .map_err(|source| invalid_url("DISCORD_REDIRECT_URI", source))?;

        let mut client = BasicClient::new(ClientId::new(client_id))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url)
            .set_auth_type(AuthType::RequestBody);

        if let Some(client_secret) = &self.config.client_secret {
            client = client.set_client_secret(ClientSecret::new(client_secret.clone()));
        }

        Ok(client)
    }
}

fn invalid_url(name: &'static str, source: url::ParseError) -> ConfigError {
    ConfigError::InvalidUrl { name, source }
}
