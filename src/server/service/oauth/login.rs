use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::{error::AppError, service::oauth::DiscordAuthService};

impl DiscordAuthService<'_> {
    /// Builds the Discord authorization URL the browser is redirected to.
    ///
    /// Configuration is checked before a state token is issued, so an unconfigured
    /// deployment fails without generating anything.
    ///
    /// # Returns
    /// - `Ok(Url)` - Authorization URL carrying `client_id`, `redirect_uri`,
    ///   `response_type=code`, the configured scopes and a freshly signed `state`
    /// - `Err(AppError::ConfigErr)` - Client id or redirect URI not configured
    pub fn login_url(&self) -> Result<Url, AppError> {
        let oauth_client = self.oauth_client(false)?;

        let (authorize_url, _state) = oauth_client
            .authorize_url(|| CsrfToken::new(self.signer.issue()))
            .add_scopes(self.config.scopes.iter().cloned().map(Scope::new))
            .url();

        Ok(authorize_url)
    }
}
