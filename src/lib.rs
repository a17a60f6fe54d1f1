//! Vitrina: Telegram storefront bot.
//!
//! Maps incoming commands and inline-button presses to the static menu
//! screens of a small digital-products storefront. Purchase requests and
//! inquiries are forwarded to a fixed admin chat. Updates arrive either
//! through a supervised `getUpdates` long-poll loop or a webhook
//! endpoint; both feed the same dispatcher.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging and the control server
//! - `telegram`: Bot API transport, update sources, dispatch and menus

pub mod cli;
pub mod core;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use telegram::{process_update, BotContext, Supervisor};
