use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Thin client over the Telegram Bot HTTP API. Only the three methods
/// the help desk needs: sendMessage, getUpdates, answerCallbackQuery.
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: TelegramUser,
    pub message: Option<Message>,
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InlineKeyboardMarkup {
    pub fn single(button: InlineKeyboardButton) -> Self {
        Self {
            inline_keyboard: vec![vec![button]],
        }
    }
}

impl InlineKeyboardButton {
    pub fn callback(text: &str, callback_data: String) -> Self {
        Self {
            text: text.to_string(),
            callback_data: Some(callback_data),
            url: None,
        }
    }

    pub fn link(text: &str, url: String) -> Self {
        Self {
            text: text.to_string(),
            callback_data: None,
            url: Some(url),
        }
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Serialize)]
struct GetUpdatesRequest {
    offset: i64,
    timeout: u64,
    allowed_updates: Vec<&'static str>,
}

#[derive(Serialize)]
struct AnswerCallbackQueryRequest<'a> {
    callback_query_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    show_alert: bool,
}

impl TelegramClient {
    pub fn new(bot_token: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}/bot{}", TELEGRAM_API_BASE, bot_token),
        }
    }

    pub async fn send_message(
        &self,
        chat_id: &str,
        text: &str,
        parse_mode: Option<&str>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<()> {
        let payload = SendMessageRequest {
            chat_id,
            text,
            parse_mode,
            reply_markup,
        };

        let response = self
            .http
            .post(format!("{}/sendMessage", self.base_url))
            .json(&payload)
            .send()
            .await
            .context("Failed to reach Telegram")?;

        let body: ApiResponse<Message> = response
            .json()
            .await
            .context("Failed to parse Telegram response")?;

        if !body.ok {
            return Err(anyhow!(
                "sendMessage rejected: {}",
                body.description.unwrap_or_else(|| "unknown error".to_string())
            ));
        }

        Ok(())
    }

    /// Long-polls for updates. `timeout_secs` is the server-side hold;
    /// the request itself gets a slightly larger client-side timeout so
    /// an idle poll cannot hang forever.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let payload = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: vec!["callback_query"],
        };

        let response = self
            .http
            .post(format!("{}/getUpdates", self.base_url))
            .timeout(Duration::from_secs(timeout_secs + 10))
            .json(&payload)
            .send()
            .await
            .context("Failed to reach Telegram")?;

        let body: ApiResponse<Vec<Update>> = response
            .json()
            .await
            .context("Failed to parse Telegram response")?;

        if !body.ok {
            return Err(anyhow!(
                "getUpdates rejected: {}",
                body.description.unwrap_or_else(|| "unknown error".to_string())
            ));
        }

        Ok(body.result.unwrap_or_default())
    }

    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<()> {
        let payload = AnswerCallbackQueryRequest {
            callback_query_id,
            text,
            show_alert,
        };

        let response = self
            .http
            .post(format!("{}/answerCallbackQuery", self.base_url))
            .json(&payload)
            .send()
            .await
            .context("Failed to reach Telegram")?;

        let body: ApiResponse<bool> = response
            .json()
            .await
            .context("Failed to parse Telegram response")?;

        if !body.ok {
            return Err(anyhow!(
                "answerCallbackQuery rejected: {}",
                body.description.unwrap_or_else(|| "unknown error".to_string())
            ));
        }

        Ok(())
    }
}
