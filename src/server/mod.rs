//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application:
//! Discord login, identity storage and Stripe-backed subscriptions. The backend uses
//! Axum as the web framework, the `oauth2` crate for the Discord authorization-code
//! flow and an Appwrite project as its document database.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Login flow, plan grants and Stripe calls
//! - **Data Layer** (`data/`) - Document store client and repositories
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (config, HTTP client, store, signer)
//! - **Startup** (`startup`) - Tracing, HTTP client, store client and startup checks
//! - **Router** (`router`) - Axum route configuration, CORS and request tracing
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts parameters and calls the service
//! 3. **Service** executes business logic, calling Discord, Stripe or repositories
//! 4. **Data** talks to the document store and converts documents to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//!
//! # Login Flow
//!
//! `/auth/login` redirects to Discord with a signed `state`. Discord sends the browser
//! back to `/auth/callback`, where the state is verified, the code exchanged and the
//! profile stored under the Discord id before redirecting to the frontend.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
