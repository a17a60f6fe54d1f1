//! Notices pushed to the admin chat.
//!
//! Every function is a no-op when no admin chat is configured; send
//! failures are logged inside the transport client and swallowed like any
//! other outbound call.

use indoc::formatdoc;

use crate::telegram::catalog::Product;
use crate::telegram::BotContext;

/// Timestamp format used in order/inquiry notices.
const NOTICE_TIME_FORMAT: &str = "%H:%M %d/%m/%Y";

/// Announces a new (or returning) visitor to the administrator.
pub async fn notify_admin_new_user(ctx: &BotContext, chat_id: i64, user_name: &str) {
    let Some(admin) = ctx.admin_chat() else { return };

    let text = format!("New user: {} (ID: {})", user_name, chat_id);
    ctx.api.send_message(admin, &text, None).await;
}

/// Structured purchase request notice: product, price, customer, time.
pub async fn notify_admin_purchase(ctx: &BotContext, product: &Product, chat_id: i64, user_name: &str) {
    let Some(admin) = ctx.admin_chat() else {
        log::warn!(
            "Purchase request from {} ({}) not forwarded: ADMIN_ID is not set",
            user_name,
            chat_id
        );
        return;
    };

    let text = formatdoc! {"
        🛒 Purchase Request:
        Product: {name}
        Price: ${price}
        Customer: {user_name} (ID: {chat_id})
        Time: {time}

        Contact customer to complete payment.",
        name = product.name,
        price = product.price,
        time = chrono::Local::now().format(NOTICE_TIME_FORMAT),
    };

    ctx.api.send_message(admin, &text, None).await;
}

/// Service inquiry notice; same shape as a purchase but without a price.
pub async fn notify_admin_inquiry(ctx: &BotContext, service_name: &str, chat_id: i64, user_name: &str) {
    let Some(admin) = ctx.admin_chat() else {
        log::warn!(
            "Service inquiry from {} ({}) not forwarded: ADMIN_ID is not set",
            user_name,
            chat_id
        );
        return;
    };

    let text = formatdoc! {"
        💼 Service Inquiry:
        Service: {service_name}
        Customer: {user_name} (ID: {chat_id})
        Time: {time}

        Contact customer for requirements and pricing.",
        time = chrono::Local::now().format(NOTICE_TIME_FORMAT),
    };

    ctx.api.send_message(admin, &text, None).await;
}

/// One-time notice that the pull loop went live.
pub async fn notify_admin_bot_active(ctx: &BotContext) {
    let Some(admin) = ctx.admin_chat() else { return };

    ctx.api.send_message(admin, "Bot deployed and active!", None).await;
}
