//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineQueryId, InlineQueryResult, InlineQueryResultAudio};
use tracing::warn;

use crate::core::{Bot as CoreBot, BotError, Chat, InlineAudio, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Converts results to teloxide audio results. Results whose URL does not parse are skipped.
pub fn to_telegram_results(results: &[InlineAudio]) -> Vec<InlineQueryResult> {
    results
        .iter()
        .filter_map(|r| {
            let audio_url = match reqwest::Url::parse(&r.audio_url) {
                Ok(url) => url,
                Err(e) => {
                    warn!(audio_url = %r.audio_url, error = %e, "Skipping result with invalid audio URL");
                    return None;
                }
            };
            let mut audio = InlineQueryResultAudio::new(r.id.clone(), audio_url, r.title.clone());
            audio.performer = Some(r.performer.clone());
            Some(InlineQueryResult::Audio(audio))
        })
        .collect()
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_inline_audio(
        &self,
        inline_query_id: &str,
        results: &[InlineAudio],
        cache_time: u32,
    ) -> Result<()> {
        let mut req = self
            .bot
            .answer_inline_query(InlineQueryId(inline_query_id.to_string()), to_telegram_results(results));
        req.cache_time = Some(cache_time);
        req.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
