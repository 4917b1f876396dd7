use crate::{appwrite::FakeAppwrite, discord::MockDiscord, stripe::MockStripe};

/// Test context owning the fake external services started by `TestBuilder`.
///
/// Services are `None` unless requested on the builder. The accessors panic when a test
/// asks for a service it did not request, which is always a bug in the test itself.
pub struct TestContext {
    pub discord: Option<MockDiscord>,
    pub appwrite: Option<FakeAppwrite>,
    pub stripe: Option<MockStripe>,
}

impl TestContext {
    /// The mock Discord API.
    ///
    /// # Panics
    /// When the context was built without `with_discord()`.
    pub fn discord(&self) -> &MockDiscord {
        self.discord
            .as_ref()
            .expect("test context built without with_discord()")
    }

    /// The fake Appwrite API.
    ///
    /// # Panics
    /// When the context was built without `with_appwrite()`.
    pub fn appwrite(&self) -> &FakeAppwrite {
        self.appwrite
            .as_ref()
            .expect("test context built without with_appwrite()")
    }

    /// The mock Stripe API.
    ///
    /// # Panics
    /// When the context was built without `with_stripe()`.
    pub fn stripe(&self) -> &MockStripe {
        self.stripe
            .as_ref()
            .expect("test context built without with_stripe()")
    }
}
