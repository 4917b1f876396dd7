//! API data transfer objects serialized in HTTP responses and request bodies.

pub mod api;
pub mod identity;
pub mod subscription;
