//! Recruitbot Test Utils
//!
//! Provides shared testing utilities for the recruitbot backend. Every external service
//! the backend talks to is replaced by a local HTTP server so tests exercise the real
//! HTTP clients end to end.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder selecting which fake services a test needs
//! - **TestContext**: The started fakes, with accessors for their URLs and recorded calls
//! - **FakeAppwrite**: Stateful in-memory implementation of the Appwrite documents API
//! - **MockDiscord** / **MockStripe**: `wiremock` servers with helpers for the endpoints
//!   the backend calls
//! - **fixture**: JSON payloads (Discord profiles, Stripe events) and signature helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn stores_identity() {
//!     let test = TestBuilder::new().with_appwrite().build().await;
//!     let appwrite = test.appwrite();
//!
//!     // Point the store at appwrite.endpoint() and run the code under test...
//!
//!     assert_eq!(appwrite.create_calls(), 1);
//! }
//! ```

pub mod appwrite;
pub mod builder;
pub mod context;
pub mod discord;
pub mod fixture;
pub mod stripe;
