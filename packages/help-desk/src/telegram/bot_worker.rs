use std::sync::Arc;

use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

use crate::{
    lifecycle::{lifecycle::Lifecycle, model::LifecycleError},
    telegram::client::{CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, TelegramClient},
};

const POLL_TIMEOUT_SECS: u64 = 30;
const ERROR_BACKOFF_SECS: u64 = 5;

/// Inbound chat actions carried in callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Accept(i32),
    Rate(i32),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(rest) = data.strip_prefix("accept_") {
            return rest.parse().ok().map(Self::Accept);
        }
        if let Some(rest) = data.strip_prefix("rate_") {
            return rest.parse().ok().map(Self::Rate);
        }
        None
    }
}

/// Long-polling front end: translates Telegram callback queries into
/// lifecycle calls. The caller's own Telegram id is the mentor identity
/// on accept.
pub struct BotWorker {
    telegram: Arc<TelegramClient>,
    lifecycle: Arc<Lifecycle>,
    rating_page_url: String,
}

impl BotWorker {
    pub fn new(
        telegram: Arc<TelegramClient>,
        lifecycle: Arc<Lifecycle>,
        rating_page_url: String,
    ) -> Self {
        Self {
            telegram,
            lifecycle,
            rating_page_url,
        }
    }

    pub async fn run(&self) {
        info!("🤖 Telegram bot worker started");

        let mut offset = 0i64;

        loop {
            match self.telegram.get_updates(offset, POLL_TIMEOUT_SECS).await {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);

                        if let Some(callback) = update.callback_query {
                            self.handle_callback(callback).await;
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to poll Telegram updates: {}", e);
                    sleep(Duration::from_secs(ERROR_BACKOFF_SECS)).await;
                }
            }
        }
    }

    async fn handle_callback(&self, callback: CallbackQuery) {
        let Some(action) = callback.data.as_deref().and_then(CallbackAction::parse) else {
            warn!("Ignoring unrecognized callback data: {:?}", callback.data);
            return;
        };

        if let Err(e) = self
            .telegram
            .answer_callback_query(&callback.id, None, false)
            .await
        {
            warn!("Failed to acknowledge callback query: {}", e);
        }

        match action {
            CallbackAction::Accept(request_number) => {
                self.handle_accept(&callback, request_number).await;
            }
            CallbackAction::Rate(request_number) => {
                self.handle_rate(&callback, request_number).await;
            }
        }
    }

    async fn handle_accept(&self, callback: &CallbackQuery, request_number: i32) {
        let mentor_tg = callback.from.id.to_string();

        info!(
            "📥 Accept action for request {} from mentor {}",
            request_number, mentor_tg
        );

        let reply = match self
            .lifecycle
            .accept_request(request_number, &mentor_tg)
            .await
        {
            Ok(_) => "✅ You have successfully accepted the request!".to_string(),
            Err(LifecycleError::RequestNotFound(_)) => {
                "❌ This request has already been accepted.".to_string()
            }
            Err(LifecycleError::MentorNotFound(_)) => {
                "❌ Mentor not found. Please ensure your data is correct.".to_string()
            }
            Err(e) => {
                error!("Failed to accept request {}: {}", request_number, e);
                "❌ An error occurred while processing the request. Please try again.".to_string()
            }
        };

        if let Err(e) = self
            .telegram
            .send_message(&mentor_tg, &reply, None, None)
            .await
        {
            warn!("Failed to reply to mentor {}: {}", mentor_tg, e);
        }
    }

    async fn handle_rate(&self, callback: &CallbackQuery, request_number: i32) {
        let chat_id = callback
            .message
            .as_ref()
            .map(|m| m.chat.id)
            .unwrap_or(callback.from.id)
            .to_string();

        match self.lifecycle.is_rated(request_number) {
            Ok(true) => {
                if let Err(e) = self
                    .telegram
                    .answer_callback_query(
                        &callback.id,
                        Some("You have already rated this mentor."),
                        true,
                    )
                    .await
                {
                    warn!("Failed to answer callback query: {}", e);
                }
            }
            Ok(false) => {
                let rating_url =
                    format!("{}?request_number={}", self.rating_page_url, request_number);
                let keyboard = InlineKeyboardMarkup::single(InlineKeyboardButton::link(
                    "Open in Browser",
                    rating_url,
                ));

                if let Err(e) = self
                    .telegram
                    .send_message(
                        &chat_id,
                        "Please rate the mentor by clicking the link below:",
                        None,
                        Some(&keyboard),
                    )
                    .await
                {
                    warn!("Failed to send rating link to {}: {}", chat_id, e);
                }
            }
            Err(LifecycleError::RequestNotFound(_)) => {
                if let Err(e) = self
                    .telegram
                    .answer_callback_query(&callback.id, Some("Request not found."), true)
                    .await
                {
                    warn!("Failed to answer callback query: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to check rating status: {}", e);
                if let Err(e) = self
                    .telegram
                    .answer_callback_query(
                        &callback.id,
                        Some("An error occurred. Please try again."),
                        true,
                    )
                    .await
                {
                    warn!("Failed to answer callback query: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accept_action() {
        assert_eq!(
            CallbackAction::parse("accept_42"),
            Some(CallbackAction::Accept(42))
        );
    }

    #[test]
    fn parses_rate_action() {
        assert_eq!(
            CallbackAction::parse("rate_7"),
            Some(CallbackAction::Rate(7))
        );
    }

    #[test]
    fn rejects_malformed_actions() {
        assert_eq!(CallbackAction::parse("accept_"), None);
        assert_eq!(CallbackAction::parse("accept_abc"), None);
        assert_eq!(CallbackAction::parse("rate_1.5"), None);
        assert_eq!(CallbackAction::parse("decline_3"), None);
        assert_eq!(CallbackAction::parse(""), None);
    }
}
