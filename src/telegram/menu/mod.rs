//! Menu state machine: stateless screen renderers.
//!
//! Each `show_*` / `handle_*` sends exactly one message to the requesting
//! chat (plus at most one admin notice); the `build_*` halves are pure and
//! unit-testable.

pub mod main_menu;
pub mod orders;
pub mod shop;

use crate::telegram::dispatcher::Screen;
use crate::telegram::BotContext;

pub use orders::{handle_purchase, handle_service_inquiry};

/// Render the requested screen to `chat_id`.
pub async fn show_screen(ctx: &BotContext, screen: Screen, chat_id: i64, user_name: &str) {
    match screen {
        Screen::Start => main_menu::show_start_menu(ctx, chat_id, user_name).await,
        Screen::Products => shop::show_products_menu(ctx, chat_id).await,
        Screen::Services => shop::show_services_menu(ctx, chat_id).await,
        Screen::Help => main_menu::show_help_menu(ctx, chat_id).await,
    }
}
