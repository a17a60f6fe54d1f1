//! Start/stop lifecycle for the pull loop plus a liveness snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::telegram::notifications;
use crate::telegram::poller;
use crate::telegram::BotContext;

/// Liveness snapshot returned by [`Supervisor::health`].
#[derive(Debug, Clone)]
pub struct Health {
    pub bot_active: bool,
    pub timestamp: DateTime<Utc>,
}

/// Supervises the background poller.
///
/// Stop is cooperative: the shared flag is flipped here and observed by
/// the loop between iterations. The supervisor is the flag's only writer;
/// the loop only reads it.
#[derive(Clone)]
pub struct Supervisor {
    ctx: Arc<BotContext>,
    running: Arc<AtomicBool>,
}

impl Supervisor {
    pub fn new(ctx: Arc<BotContext>) -> Self {
        Self {
            ctx,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Launch the poller unless it is already running; returns whether a
    /// new task was spawned. The admin chat gets an "active" notice once
    /// per start transition.
    pub async fn start(&self) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            log::info!("Update poller already running; start ignored");
            return false;
        }

        tokio::spawn(poller::run_polling(Arc::clone(&self.ctx), Arc::clone(&self.running)));
        notifications::notify_admin_bot_active(&self.ctx).await;

        log::info!("Bot polling started");
        true
    }

    /// Ask the poller to exit after its current iteration.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        log::info!("Bot polling stopping");
    }

    /// Current running flag plus a timestamp. Pure read.
    pub fn health(&self) -> Health {
        Health {
            bot_active: self.running.load(Ordering::SeqCst),
            timestamp: Utc::now(),
        }
    }
}
