//! Common test utilities
//!
//! A wiremock stand-in for the Telegram Bot API plus raw-update builders.
//! Assertions inspect the recorded `sendMessage` / `answerCallbackQuery`
//! request bodies, in the order the bot issued them.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrina::telegram::api::BotApi;
use vitrina::telegram::types::RawUpdate;
use vitrina::telegram::BotContext;

pub const TEST_TOKEN: &str = "TEST_TOKEN";

/// Mocked Bot API server that answers `{ok: true}` to sends and acks and
/// records every call the bot makes.
pub struct TelegramMock {
    pub server: MockServer,
}

impl TelegramMock {
    pub async fn start() -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{}/sendMessage", TEST_TOKEN)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {"message_id": 1}})),
            )
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(format!("/bot{}/answerCallbackQuery", TEST_TOKEN)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true})))
            .mount(&server)
            .await;

        Self { server }
    }

    /// A bot context whose transport points at this mock.
    pub fn context(&self, admin_chat_id: i64) -> Arc<BotContext> {
        Arc::new(BotContext::new(BotApi::new(&self.server.uri(), TEST_TOKEN), admin_chat_id))
    }

    /// Bodies of all recorded `sendMessage` calls, in order.
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.recorded_bodies("sendMessage").await
    }

    /// Bodies of all recorded `answerCallbackQuery` calls, in order.
    pub async fn callback_acks(&self) -> Vec<Value> {
        self.recorded_bodies("answerCallbackQuery").await
    }

    /// Query strings of all recorded `getUpdates` polls, in order.
    pub async fn poll_queries(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().ends_with("/getUpdates"))
            .map(|r| r.url.query().unwrap_or("").to_string())
            .collect()
    }

    async fn recorded_bodies(&self, endpoint: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().ends_with(endpoint))
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}

/// Raw update JSON for a text message.
pub fn text_update(update_id: i64, chat_id: i64, user_name: &str, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1700000000,
            "chat": {"id": chat_id, "type": "private"},
            "from": {"id": chat_id, "is_bot": false, "first_name": user_name},
            "text": text
        }
    })
}

/// Raw update JSON for an inline-button press.
pub fn callback_update(update_id: i64, chat_id: i64, user_name: &str, action: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cbq-{}", update_id),
            "chat_instance": "test",
            "from": {"id": chat_id, "is_bot": false, "first_name": user_name},
            "data": action,
            "message": {
                "message_id": 10,
                "date": 1700000000,
                "chat": {"id": chat_id, "type": "private"}
            }
        }
    })
}

/// Deserialize an update built by the helpers above.
pub fn to_raw(value: Value) -> RawUpdate {
    serde_json::from_value(value).expect("valid update json")
}
