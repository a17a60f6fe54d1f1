//! Wire types for inbound updates and the crate's own event model.

use serde::Deserialize;

use crate::core::error::{AppError, AppResult};

/// Fallback display name when a sender carries no first name.
const DEFAULT_USER_NAME: &str = "User";

/// Envelope returned by `getUpdates`.
#[derive(Debug, Deserialize)]
pub struct UpdatesResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Vec<RawUpdate>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One update as delivered by the Bot API (long poll or webhook).
///
/// Only the fields this bot consumes are modeled; everything else in the
/// payload is ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUpdate {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub from: Option<User>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
}

/// An inbound event after decoding: either a text message or an inline
/// button press. Constructed fresh per received payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Text {
        chat_id: i64,
        user_name: String,
        text: String,
    },
    Callback {
        chat_id: i64,
        user_name: String,
        callback_id: String,
        action: String,
    },
}

impl RawUpdate {
    /// Decode a single webhook body.
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(body).map_err(AppError::Decode)
    }

    /// Convert into the crate's event model.
    ///
    /// Updates carrying neither a usable text message nor a callback
    /// query with data (stickers, photos, edits, ...) yield `None` and
    /// are dropped by the caller.
    pub fn into_event(self) -> Option<InboundEvent> {
        if let Some(message) = self.message {
            let text = message.text?;
            let user_name = message
                .from
                .and_then(|u| u.first_name)
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
            return Some(InboundEvent::Text {
                chat_id: message.chat.id,
                user_name,
                text,
            });
        }

        if let Some(query) = self.callback_query {
            let chat_id = query.message.as_ref().map(|m| m.chat.id)?;
            let action = query.data?;
            let user_name = query
                .from
                .first_name
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
            return Some(InboundEvent::Callback {
                chat_id,
                user_name,
                callback_id: query.id,
                action,
            });
        }

        None
    }
}
