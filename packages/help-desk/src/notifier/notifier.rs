use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    database::model::DbMentor,
    telegram::client::{InlineKeyboardButton, InlineKeyboardMarkup, TelegramClient},
};

/// Best-effort, at-most-once message delivery to mentors and requesters.
/// A failed send is logged and skipped; it never fails the caller.
pub struct MentorNotifier {
    telegram: Arc<TelegramClient>,
}

impl MentorNotifier {
    pub fn new(telegram: Arc<TelegramClient>) -> Self {
        Self { telegram }
    }

    /// Fans a help request out to every mentor covering the table, each
    /// message carrying an "Accept Request" button bound to the request
    /// number. Sends are sequential, unordered among mentors.
    pub async fn notify_mentors(
        &self,
        mentors: &[DbMentor],
        request_number: i32,
        table_no: i32,
        user_name: &str,
        user_tg: &str,
    ) {
        let text = format!(
            "🚨 *Help Request*\n\n👤 User: {}\n📱 Telegram: @{}\n📍 Table: {}",
            user_name, user_tg, table_no
        );
        let keyboard = InlineKeyboardMarkup::single(InlineKeyboardButton::callback(
            "Accept Request",
            format!("accept_{}", request_number),
        ));

        for mentor in mentors {
            if mentor.telegram_id.parse::<i64>().is_err() {
                warn!(
                    "Invalid or missing telegram_id for mentor {}",
                    mentor.username
                );
                continue;
            }

            match self
                .telegram
                .send_message(&mentor.telegram_id, &text, Some("Markdown"), Some(&keyboard))
                .await
            {
                Ok(()) => info!(
                    "📨 Notified mentor {} about request {}",
                    mentor.telegram_id, request_number
                ),
                // Typically the mentor never started a conversation
                // with the bot; skip, never retry.
                Err(e) => warn!("Failed to notify mentor {}: {}", mentor.telegram_id, e),
            }
        }
    }

    /// Tells the requester their request was accepted and offers the
    /// "Rate Mentor" action.
    pub async fn notify_request_accepted(
        &self,
        user_tg: &str,
        mentor_username: &str,
        request_number: i32,
    ) {
        let text = format!(
            "✅ Your request has been accepted by Mentor {}. Please rate them after the session.",
            mentor_username
        );
        let keyboard = InlineKeyboardMarkup::single(InlineKeyboardButton::callback(
            "Rate Mentor",
            format!("rate_{}", request_number),
        ));

        if let Err(e) = self
            .telegram
            .send_message(user_tg, &text, None, Some(&keyboard))
            .await
        {
            warn!("Failed to notify requester {}: {}", user_tg, e);
        }
    }
}
