//! Document store repository layer.
//!
//! Repositories wrap a `DocumentStore` and a collection reference and expose the
//! operations the services need. They return domain models or raw documents and leave
//! HTTP concerns to the layers above.

pub mod appwrite;
pub mod discord_user;
pub mod document;
pub mod subscription;

#[cfg(test)]
mod test;
