//! Integration tests for the webhook + control surface.
//!
//! The router is served on an ephemeral port and driven with real HTTP
//! requests; the Bot API side is the usual wiremock stand-in.
//!
//! Run with: cargo test --test web_server_test

mod common;

use std::sync::Arc;

use common::{text_update, TelegramMock, TEST_TOKEN};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use vitrina::core::web_server::app;
use vitrina::telegram::Supervisor;

/// Serve the control router against the given mock; returns its base URL
/// and the supervisor driving the poller.
async fn serve(mock: &TelegramMock, admin_chat_id: i64) -> (String, Supervisor) {
    // getUpdates: always empty, so a started poller idles harmlessly.
    Mock::given(method("GET"))
        .and(path(format!("/bot{}/getUpdates", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": []})))
        .mount(&mock.server)
        .await;

    let ctx = mock.context(admin_chat_id);
    let supervisor = Supervisor::new(Arc::clone(&ctx));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port binds");
    let addr = listener.local_addr().expect("local addr");

    let router = app(ctx, supervisor.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server runs");
    });

    (format!("http://{}", addr), supervisor)
}

#[tokio::test]
async fn health_reports_poller_state_transitions() {
    let mock = TelegramMock::start().await;
    let (base, _supervisor) = serve(&mock, 999).await;
    let client = reqwest::Client::new();

    // Inactive on boot; / and /health serve the same payload.
    for route in ["/", "/health"] {
        let health: Value = client
            .get(format!("{}{}", base, route))
            .send()
            .await
            .expect("health responds")
            .json()
            .await
            .expect("health is json");
        assert_eq!(health["status"], "online");
        assert_eq!(health["bot_active"], false);
        assert!(health["timestamp"].as_str().is_some());
    }

    // Start: status body + active flag + one admin "active" notice.
    let started: Value = client
        .post(format!("{}/start_bot", base))
        .send()
        .await
        .expect("start responds")
        .json()
        .await
        .expect("start is json");
    assert_eq!(started, json!({"status": "Bot started"}));

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("health responds")
        .json()
        .await
        .expect("health is json");
    assert_eq!(health["bot_active"], true);

    let sends = mock.sent_messages().await;
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0]["chat_id"], 999);
    assert_eq!(sends[0]["text"], "Bot deployed and active!");

    // Second start is a no-op: same body, no second notice.
    let restarted: Value = client
        .post(format!("{}/start_bot", base))
        .send()
        .await
        .expect("start responds")
        .json()
        .await
        .expect("start is json");
    assert_eq!(restarted, json!({"status": "Bot started"}));
    assert_eq!(mock.sent_messages().await.len(), 1, "no duplicate active notice");

    // Stop flips the flag back.
    let stopped: Value = client
        .post(format!("{}/stop_bot", base))
        .send()
        .await
        .expect("stop responds")
        .json()
        .await
        .expect("stop is json");
    assert_eq!(stopped, json!({"status": "Bot stopped"}));

    let health: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("health responds")
        .json()
        .await
        .expect("health is json");
    assert_eq!(health["bot_active"], false);
}

#[tokio::test]
async fn webhook_dispatches_a_pushed_update() {
    let mock = TelegramMock::start().await;
    let (base, _supervisor) = serve(&mock, 999).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/webhook", base))
        .json(&text_update(77, 123, "Alice", "/help"))
        .send()
        .await
        .expect("webhook responds");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("webhook body"), "OK");

    let sends = mock.sent_messages().await;
    assert_eq!(sends.len(), 1);
    assert!(sends[0]["text"].as_str().unwrap().contains("Bot Help"));
}

#[tokio::test]
async fn webhook_rejects_a_malformed_body() {
    let mock = TelegramMock::start().await;
    let (base, _supervisor) = serve(&mock, 999).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/webhook", base))
        .body("not json")
        .send()
        .await
        .expect("webhook responds");

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.expect("webhook body"), "Error");
    assert_eq!(mock.sent_messages().await.len(), 0, "nothing dispatched");
}
