//! Server-side domain models and parameter types.
//!
//! Domain models are converted from stored documents at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod identity;
pub mod subscription;
pub mod stripe;
