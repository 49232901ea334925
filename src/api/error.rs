use std::fmt;

use thiserror::Error;

/// Maximum number of characters of an error response body kept for display.
const BODY_PREVIEW_CHARS: usize = 300;

/// Failure of a single backend request.
///
/// Cloneable so that outcomes can live in the response cache: a failed
/// request is memoized exactly like a successful one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with status >= 400.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The backend could not be reached or returned an unusable body
    /// (timeout, connection failure, malformed JSON).
    #[error("Request failed: {message}")]
    Transport { message: String },
}

impl ApiError {
    /// Error-status response. Keeps only the first 300 characters of the
    /// body, matching what is shown inline in the UI.
    pub fn http(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            body: body.chars().take(BODY_PREVIEW_CHARS).collect(),
        }
    }

    pub fn transport(cause: impl fmt::Display) -> Self {
        Self::Transport {
            message: cause.to_string(),
        }
    }
}
