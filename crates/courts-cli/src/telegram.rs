//! Telegram Bot API transport: delivery, command parsing and long polling.
//!
//! Two commands are understood in service mode:
//!
//! - `/start` replies with the chat id, for adding the chat to `chat_ids`
//! - `/check <club> [weekday ...]` replies with the availability report

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use courts_engine::RequestProcessor;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tokio::task::JoinSet;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Seconds Telegram holds a `getUpdates` call open waiting for new messages.
const POLL_TIMEOUT_SECS: u64 = 30;

/// Back-off after a failed poll.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// A command addressed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    /// The text following `/check`, trimmed.
    Check(String),
}

impl BotCommand {
    /// Parse a message text. `/check@SomeBot args` is accepted as `/check args`.
    /// Anything that is not a known command yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim_start();
        let (head, rest) = match text.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest),
            None => (text, ""),
        };
        let name = head.split('@').next().unwrap_or_default();
        match name {
            "/start" => Some(BotCommand::Start),
            "/check" => Some(BotCommand::Check(rest.trim().to_string())),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

pub struct TelegramBot {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

impl TelegramBot {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_base: api_base.into(),
        }
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<T> {
        let response: ApiResponse<T> = self
            .http
            .post(self.method_url(method))
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Telegram {} request failed", method))?
            .json()
            .await
            .with_context(|| format!("Failed to decode Telegram {} response", method))?;

        match (response.ok, response.result) {
            (true, Some(result)) => Ok(result),
            _ => anyhow::bail!(
                "Telegram {} rejected: {}",
                method,
                response.description.unwrap_or_else(|| "no description".to_string())
            ),
        }
    }

    /// Send one Markdown-formatted message.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        let body = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });
        let _: serde_json::Value = self
            .call("sendMessage", &body, Duration::from_secs(10))
            .await?;
        Ok(())
    }

    /// Send `text` to every chat. All chats are attempted; the call fails if
    /// any delivery failed.
    pub async fn broadcast(&self, chat_ids: &[i64], text: &str) -> Result<()> {
        let mut failed = 0usize;
        for &chat_id in chat_ids {
            match self.send_message(chat_id, text).await {
                Ok(()) => tracing::info!(chat_id, "report delivered"),
                Err(err) => {
                    failed += 1;
                    tracing::error!(chat_id, error = %err, "report delivery failed");
                }
            }
        }
        if failed > 0 {
            anyhow::bail!("Failed to deliver report to {} of {} chats", failed, chat_ids.len());
        }
        Ok(())
    }

    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let body = json!({
            "offset": offset,
            "timeout": POLL_TIMEOUT_SECS,
            "allowed_updates": ["message"],
        });
        self.call(
            "getUpdates",
            &body,
            Duration::from_secs(POLL_TIMEOUT_SECS + 10),
        )
        .await
    }

    /// Answer one update. Returns without replying to non-command messages.
    pub async fn handle(&self, update: &Update, processor: &RequestProcessor) -> Result<()> {
        let Some(message) = &update.message else {
            return Ok(());
        };
        let Some(command) = message.text.as_deref().and_then(BotCommand::parse) else {
            return Ok(());
        };

        let chat_id = message.chat.id;
        let reply = match command {
            BotCommand::Start => format!("I'm a GotCourtsCheckerBot, chat ID: {}", chat_id),
            BotCommand::Check(args) => {
                tracing::info!(chat_id, command = %args, "handling check");
                processor.process(&args).await
            }
        };
        self.send_message(chat_id, &reply).await
    }

    /// Long-poll for updates forever. Each update is answered on its own task,
    /// so a slow `/check` does not hold up other chats.
    pub async fn run(self: Arc<Self>, processor: Arc<RequestProcessor>) -> Result<()> {
        let mut offset = 0i64;
        let mut replies = JoinSet::new();
        tracing::info!("bot service started");
        loop {
            while let Some(joined) = replies.try_join_next() {
                if let Err(err) = joined {
                    tracing::error!(error = %err, "reply task panicked");
                }
            }

            let updates = match self.get_updates(offset).await {
                Ok(updates) => updates,
                Err(err) => {
                    tracing::error!(error = %err, "polling failed");
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };
            for update in updates {
                offset = offset.max(update.update_id + 1);
                let bot = Arc::clone(&self);
                let processor = Arc::clone(&processor);
                replies.spawn(async move {
                    if let Err(err) = bot.handle(&update, &processor).await {
                        tracing::error!(update_id = update.update_id, error = %err, "reply failed");
                    }
                });
            }
        }
    }
}
