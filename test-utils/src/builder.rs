use crate::{appwrite::FakeAppwrite, context::TestContext, discord::MockDiscord, stripe::MockStripe};

/// Builder for creating test contexts with the fake services a test needs.
///
/// Each `with_*` call marks a service to start; `build()` starts them on random local
/// ports. Services that are not requested are not started.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_discord()
///     .with_appwrite()
///     .build()
///     .await;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    discord: bool,
    appwrite: bool,
    stripe: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no services configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a mock Discord API (authorize, token and profile endpoints).
    pub fn with_discord(mut self) -> Self {
        self.discord = true;
        self
    }

    /// Starts a fake Appwrite documents API.
    pub fn with_appwrite(mut self) -> Self {
        self.appwrite = true;
        self
    }

    /// Starts a mock Stripe API.
    pub fn with_stripe(mut self) -> Self {
        self.stripe = true;
        self
    }

    /// Starts every requested service.
    ///
    /// # Returns
    /// - `TestContext` - Context owning the started services; they stop when it is dropped
    pub async fn build(self) -> TestContext {
        let discord = match self.discord {
            true => Some(MockDiscord::start().await),
            false => None,
        };
        let appwrite = match self.appwrite {
            true => Some(FakeAppwrite::start().await),
            false => None,
        };
        let stripe = match self.stripe {
            true => Some(MockStripe::start().await),
            false => None,
        };

        TestContext {
            discord,
            appwrite,
            stripe,
        }
    }
}
