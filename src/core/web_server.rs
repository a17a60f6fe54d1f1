//! Webhook and control surface for the bot.
//!
//! Push-mode updates arrive at /webhook and feed the same dispatcher as
//! the poller. /start_bot and /stop_bot drive the pull loop; / and
//! /health report liveness (the external monitor probes /health).

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::telegram::types::RawUpdate;
use crate::telegram::{process_update, BotContext, Supervisor};

/// Shared state for the control server.
#[derive(Clone)]
struct WebState {
    ctx: Arc<BotContext>,
    supervisor: Supervisor,
}

/// Build the router. Exposed separately from [`start_web_server`] so
/// tests can serve it on an ephemeral port.
pub fn app(ctx: Arc<BotContext>, supervisor: Supervisor) -> Router {
    let state = WebState { ctx, supervisor };

    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/webhook", post(webhook_handler))
        .route("/start_bot", post(start_bot_handler))
        .route("/stop_bot", post(stop_bot_handler))
        .with_state(state)
}

/// Start the control server and serve until the process exits.
pub async fn start_web_server(port: u16, ctx: Arc<BotContext>, supervisor: Supervisor) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    log::info!("Starting control server on http://{}", addr);
    log::info!("  /          - Health check (also /health)");
    log::info!("  /webhook   - Push-mode update delivery");
    log::info!("  /start_bot - Start the update poller");
    log::info!("  /stop_bot  - Stop the update poller");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app(ctx, supervisor)).await?;

    Ok(())
}

/// GET / and /health: running flag plus a timestamp.
async fn health_handler(State(state): State<WebState>) -> Json<serde_json::Value> {
    let health = state.supervisor.health();
    Json(json!({
        "status": "online",
        "bot_active": health.bot_active,
        "timestamp": health.timestamp.to_rfc3339(),
    }))
}

/// POST /webhook: decode one update and hand it to the dispatcher.
async fn webhook_handler(State(state): State<WebState>, body: Bytes) -> Response {
    match RawUpdate::from_slice(&body) {
        Ok(update) => {
            process_update(&state.ctx, update).await;
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            log::error!("Webhook error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error").into_response()
        }
    }
}

/// POST /start_bot: idempotent start of the update poller.
async fn start_bot_handler(State(state): State<WebState>) -> Json<serde_json::Value> {
    state.supervisor.start().await;
    Json(json!({ "status": "Bot started" }))
}

/// POST /stop_bot: cooperative stop of the update poller.
async fn stop_bot_handler(State(state): State<WebState>) -> Json<serde_json::Value> {
    state.supervisor.stop();
    Json(json!({ "status": "Bot stopped" }))
}
