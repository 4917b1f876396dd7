use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variables are not set.
    ///
    /// Raised at request time by the endpoint that needs the settings, so the rest of the
    /// service keeps working. Check `.env` for the listed variables. Results in a 500
    /// Internal Server Error naming the missing variables (never their values).
    #[error("Missing required environment variable(s): {}", .0.join(", "))]
    MissingEnvVars(Vec<&'static str>),

    /// Environment variable is set but cannot be used.
    ///
    /// Only raised during startup.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },

    /// A configured URL could not be parsed.
    #[error("Invalid URL configured for {name}: {source}")]
    InvalidUrl {
        /// Which setting held the URL
        name: &'static str,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}

impl ConfigError {
    /// Collects the names of every unset setting into a single error.
    ///
    /// # Arguments
    /// - `settings` - Pairs of environment variable name and whether it is present
    ///
    /// # Returns
    /// - `Ok(())` - All settings present
    /// - `Err(ConfigError::MissingEnvVars)` - At least one setting missing
    pub fn require(settings: &[(&'static str, bool)]) -> Result<(), ConfigError> {
        let missing: Vec<&'static str> = settings
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingEnvVars(missing))
        }
    }
}
