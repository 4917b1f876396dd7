//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Login flow, plan grants and webhook authentication
//! - **Orchestration**: Coordinating repository calls with Discord and Stripe
//! - **Domain Models**: Working with domain models rather than DTOs or raw documents

pub mod identity;
pub mod oauth;
pub mod stripe;
pub mod subscription;

#[cfg(test)]
mod test;
