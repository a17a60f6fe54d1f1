//! Start (welcome) and help screens.

use indoc::{formatdoc, indoc};

use crate::telegram::api::{cb, InlineKeyboardMarkup};
use crate::telegram::notifications;
use crate::telegram::BotContext;

/// Welcome text + top-level menu.
pub fn build_start_menu(user_name: &str) -> (String, InlineKeyboardMarkup) {
    let text = formatdoc! {"
        🤖 Welcome {user_name}!

        Payment Bot is online and ready.

        Available options:
        • Digital Products: $29.99, $49.99, $99.99
        • Services: Twitter, ChatGPT, YouTube
        • Payment: Cards, Crypto, RUB

        Choose an option below:"};

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb("🛍️ Shop Products", "products")],
        vec![cb("💼 Services", "services")],
        vec![cb("❓ Help", "help")],
    ]);

    (text, keyboard)
}

pub fn build_help_menu() -> (String, InlineKeyboardMarkup) {
    let text = indoc! {"
        ❓ Bot Help:

        **Available Commands:**
        /start - Main menu and welcome
        /pay - Browse digital products
        /services - Professional services
        /help - This help message

        **Payment Methods:**
        💳 Credit/Debit Cards (Visa, MasterCard)
        ₿ Cryptocurrency (SOL, BSC, EVM, TRX)
        💰 RUB payments

        **Support:**
        Contact admin for assistance with orders or questions."}
    .to_string();

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb("🛍️ Products", "products")],
        vec![cb("💼 Services", "services")],
        vec![cb("🔙 Main Menu", "menu")],
    ]);

    (text, keyboard)
}

/// Send the start screen. Non-admin visitors are additionally announced
/// to the admin chat (a side effect, not a reply).
pub async fn show_start_menu(ctx: &BotContext, chat_id: i64, user_name: &str) {
    let (text, keyboard) = build_start_menu(user_name);
    ctx.api.send_message(chat_id, &text, Some(&keyboard)).await;

    if !ctx.is_admin_chat(chat_id) {
        notifications::notify_admin_new_user(ctx, chat_id, user_name).await;
    }
}

pub async fn show_help_menu(ctx: &BotContext, chat_id: i64) {
    let (text, keyboard) = build_help_menu();
    ctx.api.send_message(chat_id, &text, Some(&keyboard)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_menu_greets_by_name_and_offers_three_options() {
        let (text, keyboard) = build_start_menu("Alice");
        assert!(text.contains("Welcome Alice"));
        assert_eq!(keyboard.inline_keyboard.len(), 3);
        assert_eq!(keyboard.inline_keyboard[0][0].callback_data, "products");
        assert_eq!(keyboard.inline_keyboard[1][0].callback_data, "services");
        assert_eq!(keyboard.inline_keyboard[2][0].callback_data, "help");
    }

    #[test]
    fn help_menu_lists_every_command() {
        let (text, _) = build_help_menu();
        for command in ["/start", "/pay", "/services", "/help"] {
            assert!(text.contains(command), "help must mention {}", command);
        }
    }
}
