use thiserror::Error;

/// Everything that can go wrong while authorizing or listing files.
///
/// A missing or unreadable token file is deliberately absent here: the
/// credential cache treats it as a miss, not as an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("client secret document has neither an `installed` nor a `web` entry")]
    MissingClientSecret,

    #[error("no refresh token available to obtain an access token")]
    MissingRefreshToken,

    #[error("authorization was denied: {0}")]
    AuthorizationDenied(String),

    #[error("authorization timed out after {0} seconds")]
    AuthorizationTimedOut(u64),

    #[error("token endpoint rejected the request: {0}")]
    TokenRejected(String),

    #[error("Drive API responded with {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("invalid URL: {0}")]
    Url(String),
}
