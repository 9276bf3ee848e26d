//! Failures reported by transit sources.

use thiserror::Error;

/// Errors from [`crate::transit::TransitTimeSource::transit_minutes`].
///
/// None of these reach the caller of the planner: the estimator replaces a
/// failed lookup with a simulated duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitTimeError {
    /// Live lookups are switched off for this source.
    #[error("live transit lookups are disabled")]
    Disabled,

    /// Network error communicating with the transit planner.
    #[error("network error querying {url}: {message}")]
    NetworkError {
        /// The URL that was requested.
        url: String,
        /// Description of the network failure.
        message: String,
    },

    /// Request timed out.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// The URL that was requested.
        url: String,
        /// Timeout duration in seconds.
        timeout_secs: u64,
    },

    /// The planner answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to parse transit planner response: {message}")]
    ParseError {
        /// Description of the parse failure.
        message: String,
    },

    /// The response decoded but carried no trip option with a duration.
    #[error("transit planner response from {url} contained no trip duration")]
    MissingDuration {
        /// The URL that was requested.
        url: String,
    },
}
