//! Pull-mode update source: a single long-poll loop owning the cursor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::config;
use crate::telegram::dispatcher;
use crate::telegram::types::RawUpdate;
use crate::telegram::BotContext;

/// Dispatch one fetched batch in arrival order.
///
/// The cursor moves to `update_id + 1` right after each event has been
/// fully handled (reply + admin notice), never before. It moves whether
/// or not the handler's sends succeeded: delivery is at-most-once,
/// best effort.
pub async fn process_batch(ctx: &BotContext, updates: Vec<RawUpdate>, cursor: &mut i64) {
    for update in updates {
        let next = update.update_id + 1;
        dispatcher::process_update(ctx, update).await;
        *cursor = next;
    }
}

/// Long-poll `getUpdates` until `running` is cleared.
///
/// A transport failure never terminates the loop: it logs, sleeps a fixed
/// interval and retries with an unchanged cursor. The flag is checked at
/// the top of each iteration only; an in-flight call completes or times
/// out on its own.
pub async fn run_polling(ctx: Arc<BotContext>, running: Arc<AtomicBool>) {
    let mut cursor: i64 = 0;
    log::info!("Update poller started");

    while running.load(Ordering::SeqCst) {
        match ctx.api.get_updates(cursor, config::api::POLL_TIMEOUT_SECS).await {
            Ok(updates) if updates.is_empty() => {}
            Ok(updates) => {
                let count = updates.len();
                process_batch(&ctx, updates, &mut cursor).await;
                log::info!("Processed {} update(s)", count);
            }
            Err(e) => {
                log::warn!("Polling error: {}", e);
                tokio::time::sleep(config::api::poll_retry_delay()).await;
            }
        }
    }

    log::info!("Update poller stopped");
}
