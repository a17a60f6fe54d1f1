//! Telegram integration: transport client, wire types, dispatch, menus
//! and admin notifications.

pub mod api;
pub mod catalog;
pub mod dispatcher;
pub mod menu;
pub mod notifications;
pub mod poller;
pub mod supervisor;
pub mod types;

use crate::core::config;
use crate::telegram::api::BotApi;

// Re-exports for convenience
pub use api::{cb, InlineKeyboardButton, InlineKeyboardMarkup};
pub use dispatcher::process_update;
pub use supervisor::Supervisor;

/// Context shared by every handler; constructed once at process start and
/// passed by reference; there is no ambient bot singleton.
pub struct BotContext {
    pub api: BotApi,
    /// Admin chat id; 0 = not configured, admin notifications disabled.
    pub admin_chat_id: i64,
}

impl BotContext {
    pub fn new(api: BotApi, admin_chat_id: i64) -> Self {
        Self { api, admin_chat_id }
    }

    /// Context wired from the environment (token, API base, admin id).
    pub fn from_env() -> Self {
        Self::new(BotApi::from_env(), *config::admin::ADMIN_CHAT_ID)
    }

    /// True when `chat_id` is the configured admin chat.
    pub fn is_admin_chat(&self, chat_id: i64) -> bool {
        self.admin_chat_id != 0 && chat_id == self.admin_chat_id
    }

    /// Admin chat id, if one is configured.
    pub fn admin_chat(&self) -> Option<i64> {
        (self.admin_chat_id != 0).then_some(self.admin_chat_id)
    }
}
