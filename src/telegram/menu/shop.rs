//! Product and service catalog screens.

use indoc::indoc;

use crate::telegram::api::{cb, InlineKeyboardMarkup};
use crate::telegram::BotContext;

pub fn build_products_menu() -> (String, InlineKeyboardMarkup) {
    let text = indoc! {"
        🛍️ Digital Products:

        1. **Premium Software License** - $29.99
           ✓ Lifetime access to all features

        2. **Digital Course Bundle** - $49.99
           ✓ 5 premium courses with certificates

        3. **VIP Membership** - $99.99
           ✓ Exclusive premium content access

        Select a product to purchase:"}
    .to_string();

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb("Software License $29.99", "buy_software")],
        vec![cb("Course Bundle $49.99", "buy_courses")],
        vec![cb("VIP Membership $99.99", "buy_vip")],
        vec![cb("🔙 Main Menu", "menu")],
    ]);

    (text, keyboard)
}

pub fn build_services_menu() -> (String, InlineKeyboardMarkup) {
    let text = indoc! {"
        💼 Professional Services:

        🐦 **Twitter Services**
        • Account management and growth
        • Content creation and strategy

        💬 **ChatGPT Services**
        • Premium access and integrations
        • Custom bot development

        📺 **YouTube Services**
        • Channel optimization
        • Analytics and growth strategy

        Contact admin for custom pricing and requirements."}
    .to_string();

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb("🐦 Twitter", "service_twitter")],
        vec![cb("💬 ChatGPT", "service_chatgpt")],
        vec![cb("📺 YouTube", "service_youtube")],
        vec![cb("🔙 Main Menu", "menu")],
    ]);

    (text, keyboard)
}

pub async fn show_products_menu(ctx: &BotContext, chat_id: i64) {
    let (text, keyboard) = build_products_menu();
    ctx.api.send_message(chat_id, &text, Some(&keyboard)).await;
}

pub async fn show_services_menu(ctx: &BotContext, chat_id: i64) {
    let (text, keyboard) = build_services_menu();
    ctx.api.send_message(chat_id, &text, Some(&keyboard)).await;
}
