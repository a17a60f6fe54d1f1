use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;

use vitrina::cli::{Cli, Commands};
use vitrina::core::web_server::start_web_server;
use vitrina::core::{config, init_logger};
use vitrina::telegram::{BotContext, Supervisor};

/// Main entry point for the storefront bot
///
/// # Errors
/// Returns an error if initialization fails (logging, port binding).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config
    // static is first read
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run { webhook }) => {
            log::info!("Running bot (webhook-only: {})", webhook);
            run_bot(webhook).await
        }
        None => {
            // No command specified - default to running the bot
            run_bot(false).await
        }
    }
}

/// Wire the context, autostart the poller (unless webhook-only) and serve
/// the control surface until ctrl-c.
async fn run_bot(webhook_only: bool) -> Result<()> {
    if config::BOT_TOKEN.is_empty() {
        // Deliberately not fatal: outbound calls fail at the transport
        // layer until a token is provided.
        log::warn!("BOT_TOKEN is not set; outbound Telegram calls will fail");
    }
    if *config::admin::ADMIN_CHAT_ID == 0 {
        log::warn!("ADMIN_ID is not set; admin notifications are disabled");
    }

    let ctx = Arc::new(BotContext::from_env());
    let supervisor = Supervisor::new(Arc::clone(&ctx));

    if webhook_only {
        log::info!("Webhook mode: poller not started (POST /start_bot to start it)");
    } else {
        supervisor.start().await;
    }

    let port = *config::PORT;
    log::info!("================================================");
    log::info!("Vitrina is up (port {})", port);
    log::info!("================================================");

    tokio::select! {
        result = start_web_server(port, Arc::clone(&ctx), supervisor.clone()) => {
            result?;
        }
        _ = signal::ctrl_c() => {
            log::info!("Shutting down gracefully...");
            supervisor.stop();
        }
    }

    Ok(())
}
