//! Failure type for users API calls.

use reqwest::StatusCode;

/// Any way a request can fail.
///
/// Callers treat every variant the same: record a diagnostic and leave
/// local state untouched. There is no retry and no partial-failure
/// handling.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, IO, or body-decode failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server answered {0}")]
    Status(StatusCode),
}
