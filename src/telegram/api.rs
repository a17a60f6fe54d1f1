//! Hand-rolled Telegram Bot API client.
//!
//! Only the three calls this bot needs: `sendMessage`,
//! `answerCallbackQuery` and the `getUpdates` long poll.
//! Docs: <https://core.telegram.org/bots/api>

use serde::Serialize;
use serde_json::json;

use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::telegram::types::{RawUpdate, UpdatesResponse};

/// One inline keyboard button; `callback_data` is the opaque action code
/// consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

/// Inline keyboard layout, serialized exactly as the Bot API expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard: rows }
    }
}

/// Shorthand for a callback button.
pub fn cb(text: impl Into<String>, callback_data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton {
        text: text.into(),
        callback_data: callback_data.into(),
    }
}

#[derive(Serialize)]
struct SendMessagePayload<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

/// Telegram Bot API client.
///
/// Owns the HTTP client and the token-scoped base URL; all methods are
/// plain request/response calls with fixed short timeouts and no retries.
pub struct BotApi {
    client: reqwest::Client,
    base_url: String,
}

impl BotApi {
    /// Create a client against `base` (e.g. `https://api.telegram.org`).
    pub fn new(base: &str, token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("{}/bot{}", base.trim_end_matches('/'), token),
        }
    }

    /// Client configured from TELEGRAM_API_URL + BOT_TOKEN.
    pub fn from_env() -> Self {
        Self::new(&config::TELEGRAM_API_URL, &config::BOT_TOKEN)
    }

    /// Send a Markdown message, optionally with an inline keyboard.
    ///
    /// Returns `true` iff the API answered with a success status. Any
    /// transport failure (timeout, non-200, connection error) is logged
    /// and swallowed; a failed send is terminal for the event. No retry is
    /// attempted and the caller never sees an error.
    pub async fn send_message(&self, chat_id: i64, text: &str, keyboard: Option<&InlineKeyboardMarkup>) -> bool {
        let payload = SendMessagePayload {
            chat_id,
            text,
            parse_mode: "Markdown",
            reply_markup: keyboard,
        };

        let result = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .timeout(config::api::send_timeout())
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                log::error!("sendMessage to {} failed with status {}", chat_id, response.status());
                false
            }
            Err(e) => {
                log::error!("sendMessage to {} failed: {}", chat_id, e);
                false
            }
        }
    }

    /// Best-effort callback acknowledgement (stops the client-side
    /// spinner). Failures cost nothing but the spinner: logged at debug
    /// and swallowed.
    pub async fn answer_callback_query(&self, callback_id: &str) {
        let result = self
            .client
            .post(format!("{}/answerCallbackQuery", self.base_url))
            .timeout(config::api::ack_timeout())
            .json(&json!({ "callback_query_id": callback_id }))
            .send()
            .await;

        if let Err(e) = result {
            log::debug!("answerCallbackQuery failed: {}", e);
        }
    }

    /// Long-poll for updates with id >= `offset`.
    ///
    /// The HTTP timeout sits above the long-poll wait so the server, not
    /// the client, closes the window. A non-success status or an
    /// `ok: false` envelope is a transport error for the caller to back
    /// off on.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> AppResult<Vec<RawUpdate>> {
        let response = self
            .client
            .get(format!("{}/getUpdates", self.base_url))
            .timeout(config::api::poll_http_timeout())
            .query(&[("offset", offset), ("timeout", timeout_secs as i64)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::HttpStatus(response.status()));
        }

        let envelope: UpdatesResponse = response.json().await?;
        if !envelope.ok {
            return Err(AppError::Api(
                envelope.description.unwrap_or_else(|| "ok=false".to_string()),
            ));
        }

        Ok(envelope.result)
    }
}
