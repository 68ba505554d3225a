use super::Error;

/// Whether a failed operation may be offered again to the user.
///
/// There is no automatic retry: the strategy only decides if the error notification carries
/// a retry affordance that re-invokes the failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Offer a retry (network, server or malformed-response errors)
    Retry,
    /// Failed permanently (invalid input, configuration, bugs)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Connection refused, DNS failure, interrupted body - the next attempt may succeed
            Self::RequestError(_) => ErrorRetryStrategy::Retry,

            // Any non-2xx status, including a 409 from a duplicate id race: the backend is the
            // arbiter and the user decides whether to try again
            Self::ApiError(_) => ErrorRetryStrategy::Retry,

            // Malformed body - possibly a proxy error page or a backend mid-deploy
            Self::ParseError(_) => ErrorRetryStrategy::Retry,

            // Validation errors - resubmitting the same input fails the same way
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within fundbank's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }

    /// Whether the error should be presented with a retry affordance.
    pub fn is_retryable(&self) -> bool {
        self.to_retry_strategy() == ErrorRetryStrategy::Retry
    }
}
