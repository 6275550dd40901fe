//! Bot abstraction for the two outbound calls this bot makes.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via
//! teloxide and tests substitute a recording mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, InlineAudio};

/// Outbound side of the bot.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Answers an inline query with audio results. An empty slice is a valid "no results" answer.
    async fn answer_inline_audio(
        &self,
        inline_query_id: &str,
        results: &[InlineAudio],
        cache_time: u32,
    ) -> Result<()>;
}
