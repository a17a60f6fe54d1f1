//! Inbound event dispatch: classification and route execution.

use crate::telegram::menu;
use crate::telegram::types::{InboundEvent, RawUpdate};
use crate::telegram::BotContext;

const FALLBACK_TEXT: &str = "Use /start to see available options and commands.";

/// Named menu screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Products,
    Services,
    Help,
}

/// Where an inbound event is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Render a menu screen.
    Show(Screen),
    /// Purchase flow for a product key (`buy_<key>`).
    Purchase(String),
    /// Inquiry flow for a service key (`service_<key>`).
    Inquiry(String),
    /// The "Contact Admin" button: deliberate no-op.
    ContactAdmin,
    /// Unrecognized text: point the user at /start.
    Fallback,
    /// Unrecognized action code: drop silently.
    Ignore,
}

/// Classify an event into a route. Pure: the same event always yields the
/// same route.
pub fn classify(event: &InboundEvent) -> Route {
    match event {
        InboundEvent::Text { text, .. } => {
            let text = text.trim().to_lowercase();
            if text.starts_with("/start") {
                Route::Show(Screen::Start)
            } else if text.starts_with("/pay") {
                Route::Show(Screen::Products)
            } else if text.starts_with("/services") {
                Route::Show(Screen::Services)
            } else if text.starts_with("/help") {
                Route::Show(Screen::Help)
            } else {
                Route::Fallback
            }
        }
        InboundEvent::Callback { action, .. } => match action.as_str() {
            "menu" => Route::Show(Screen::Start),
            "products" => Route::Show(Screen::Products),
            "services" => Route::Show(Screen::Services),
            "help" => Route::Show(Screen::Help),
            "contact_admin" => Route::ContactAdmin,
            other => {
                if let Some(key) = other.strip_prefix("buy_") {
                    Route::Purchase(key.to_string())
                } else if let Some(key) = other.strip_prefix("service_") {
                    Route::Inquiry(key.to_string())
                } else {
                    Route::Ignore
                }
            }
        },
    }
}

/// Decode, classify and execute one update.
///
/// Callback events are acknowledged after dispatch regardless of handler
/// outcome. Handlers never fail (transport errors are swallowed inside
/// the client), so neither does this function.
pub async fn process_update(ctx: &BotContext, update: RawUpdate) {
    let update_id = update.update_id;
    let Some(event) = update.into_event() else {
        log::debug!("Dropping update {} without text or callback payload", update_id);
        return;
    };

    let (chat_id, user_name) = match &event {
        InboundEvent::Text { chat_id, user_name, text } => {
            log::info!("Message from {} ({}): {}", user_name, chat_id, text);
            (*chat_id, user_name.clone())
        }
        InboundEvent::Callback {
            chat_id,
            user_name,
            action,
            ..
        } => {
            log::info!("Callback from {} ({}): {}", user_name, chat_id, action);
            (*chat_id, user_name.clone())
        }
    };

    match classify(&event) {
        Route::Show(screen) => menu::show_screen(ctx, screen, chat_id, &user_name).await,
        Route::Purchase(key) => menu::handle_purchase(ctx, chat_id, &key, &user_name).await,
        Route::Inquiry(key) => menu::handle_service_inquiry(ctx, chat_id, &key, &user_name).await,
        Route::ContactAdmin => {}
        Route::Fallback => {
            ctx.api.send_message(chat_id, FALLBACK_TEXT, None).await;
        }
        Route::Ignore => log::debug!("Ignoring unknown action code in update {}", update_id),
    }

    if let InboundEvent::Callback { callback_id, .. } = &event {
        ctx.api.answer_callback_query(callback_id).await;
    }
}
