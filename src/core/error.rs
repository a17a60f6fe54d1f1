use thiserror::Error;

/// Centralized error types for the application
///
/// Nothing here is ever fatal to the process: callers log and continue.
/// A failed outbound send is terminal for that event only, and the poll
/// loop retries after a fixed sleep.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP/transport errors from the Bot API client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP status code errors
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Bot API answered with ok=false
    #[error("Bot API error: {0}")]
    Api(String),

    /// Malformed inbound payload
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
