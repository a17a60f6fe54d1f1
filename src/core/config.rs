use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN environment variable
/// An empty token is not rejected at startup: every outbound call simply
/// fails at the transport layer until a real token is provided.
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| env::var("BOT_TOKEN").unwrap_or_else(|_| String::new()));

/// Base URL of the Bot API server
/// Read from TELEGRAM_API_URL environment variable
/// Defaults to the public Bot API; point it at a local Bot API server
/// (or a test double) to redirect all traffic.
pub static TELEGRAM_API_URL: Lazy<String> =
    Lazy::new(|| env::var("TELEGRAM_API_URL").unwrap_or_else(|_| "https://api.telegram.org".to_string()));

/// HTTP port for the webhook + control server
/// Read from PORT environment variable
/// Default: 5000
pub static PORT: Lazy<u16> = Lazy::new(|| {
    env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5000)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: app.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()));

/// Admin recipient configuration
pub mod admin {
    use super::*;

    /// Chat id that receives operational notifications (new users,
    /// purchase requests, inquiries). Read from ADMIN_ID; 0 means
    /// "not configured" and disables all admin notifications.
    pub static ADMIN_CHAT_ID: Lazy<i64> = Lazy::new(|| {
        env::var("ADMIN_ID")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(0)
    });
}

/// Bot API transport configuration
pub mod api {
    use super::Duration;

    /// Timeout for sendMessage calls (in seconds)
    pub const SEND_TIMEOUT_SECS: u64 = 10;

    /// Timeout for answerCallbackQuery calls (in seconds)
    pub const ACK_TIMEOUT_SECS: u64 = 5;

    /// Long-poll wait passed to getUpdates (in seconds)
    pub const POLL_TIMEOUT_SECS: u64 = 30;

    /// Client-side margin on top of the long-poll wait (in seconds);
    /// the server, not the client, must close the poll window.
    pub const POLL_HTTP_MARGIN_SECS: u64 = 5;

    /// Sleep between retries after a polling transport failure (in seconds)
    pub const POLL_RETRY_DELAY_SECS: u64 = 5;

    /// sendMessage timeout duration
    pub fn send_timeout() -> Duration {
        Duration::from_secs(SEND_TIMEOUT_SECS)
    }

    /// answerCallbackQuery timeout duration
    pub fn ack_timeout() -> Duration {
        Duration::from_secs(ACK_TIMEOUT_SECS)
    }

    /// HTTP client timeout for the getUpdates long poll
    pub fn poll_http_timeout() -> Duration {
        Duration::from_secs(POLL_TIMEOUT_SECS + POLL_HTTP_MARGIN_SECS)
    }

    /// Fixed backoff after a polling failure
    pub fn poll_retry_delay() -> Duration {
        Duration::from_secs(POLL_RETRY_DELAY_SECS)
    }
}
