//! Purchase and service-inquiry flows: a confirmation-of-interest reply
//! to the customer plus a structured notice to the admin chat. No real
//! payment processing happens here; the admin follows up by hand.

use indoc::formatdoc;

use crate::telegram::api::{cb, InlineKeyboardMarkup};
use crate::telegram::catalog::{self, Product};
use crate::telegram::notifications;
use crate::telegram::BotContext;

/// Confirmation-of-interest reply for a known product.
pub fn build_purchase_reply(product: &Product) -> (String, InlineKeyboardMarkup) {
    let text = formatdoc! {"
        💳 Purchase Request: {name}
        Price: ${price}

        Payment methods available:
        💳 Card payments (secure processing)
        ₿ Cryptocurrency (multiple coins)
        💰 RUB payments

        Admin will contact you shortly to complete the payment process.",
        name = product.name,
        price = product.price,
    };

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb("💬 Contact Admin", "contact_admin")],
        vec![cb("🔙 Back to Products", "products")],
    ]);

    (text, keyboard)
}

pub fn build_inquiry_reply(service_name: &str) -> (String, InlineKeyboardMarkup) {
    let text = formatdoc! {"
        💼 {name} Inquiry

        Thank you for your interest in our {lower}!

        Our team will contact you within 24 hours to discuss:
        • Your specific requirements
        • Custom pricing options
        • Project timeline
        • Payment methods

        Admin has been notified of your inquiry.",
        name = service_name,
        lower = service_name.to_lowercase(),
    };

    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![cb("💬 Contact Admin", "contact_admin")],
        vec![cb("🔙 Back to Services", "services")],
    ]);

    (text, keyboard)
}

/// Purchase flow. Unknown product keys are dropped without any reply;
/// the buttons users can actually reach never produce one, so this only
/// fires for stale or hand-crafted callbacks.
pub async fn handle_purchase(ctx: &BotContext, chat_id: i64, product_key: &str, user_name: &str) {
    let Some(product) = catalog::product(product_key) else {
        log::warn!("Purchase request for unknown product key: {}", product_key);
        return;
    };

    let (text, keyboard) = build_purchase_reply(product);
    ctx.api.send_message(chat_id, &text, Some(&keyboard)).await;
    notifications::notify_admin_purchase(ctx, product, chat_id, user_name).await;
}

/// Inquiry flow; unknown service keys fall back to the generic label but
/// are still forwarded.
pub async fn handle_service_inquiry(ctx: &BotContext, chat_id: i64, service_key: &str, user_name: &str) {
    let service_name = catalog::service_name(service_key);

    let (text, keyboard) = build_inquiry_reply(service_name);
    ctx.api.send_message(chat_id, &text, Some(&keyboard)).await;
    notifications::notify_admin_inquiry(ctx, service_name, chat_id, user_name).await;
}
