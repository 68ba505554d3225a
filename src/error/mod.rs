//! Error types for the fundbank client.
//!
//! Errors fall into four groups: transport failures (`reqwest`), non-2xx responses
//! ([`ApiError`]), malformed response bodies (`serde_json`) and local input validation
//! ([`ValidationError`]). None of them is fatal; each is surfaced to the user as a
//! dismissable notification, and [`Error::to_retry_strategy`] decides whether that
//! notification offers a retry.

pub mod api;
pub mod config;
pub mod retry;
pub mod validation;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError, validation::ValidationError};

pub use retry::ErrorRetryStrategy;

/// Main error type for the fundbank client.
///
/// Aggregates the domain-specific error enums and the external library errors into a
/// single type so that `?` works across layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Backend answered with a non-2xx status.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Input rejected before any request was made.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Transport failure (connection refused, DNS, TLS, interrupted body).
    #[error("Network error: {0}")]
    RequestError(#[from] reqwest::Error),
    /// Response body could not be decoded.
    #[error("Malformed response: {0}")]
    ParseError(#[from] serde_json::Error),
    /// Internal error indicating a bug in fundbank's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
}
