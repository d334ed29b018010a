//! Async Rust client for the IBM Watson Compare and Comply v1 REST API.
//!
//! See [`compare_comply::CompareComply`] for the service client and a usage
//! example, [`auth::Authenticator`] for credentials, and [`error::Error`] for
//! the failure surface.

pub mod auth;
pub mod compare_comply;
pub mod error;

mod request;

// Re-export commonly used items for convenience
pub use auth::Authenticator;
pub use compare_comply::CompareComply;
pub use error::{Error, Result};
