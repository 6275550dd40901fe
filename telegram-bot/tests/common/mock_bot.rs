//! Mock implementation of [`dotalines_bot::Bot`] for integration tests.
//!
//! Records every `send_message` and `answer_inline_audio` call so tests can assert on what would
//! have been sent to Telegram.

use std::sync::Mutex;

use async_trait::async_trait;
use dotalines_bot::{Bot, BotError, Chat, InlineAudio, Result};

/// One recorded call to `answer_inline_audio`.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub inline_query_id: String,
    pub results: Vec<InlineAudio>,
    pub cache_time: u32,
}

/// One recorded call to `send_message`.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Default)]
pub struct MockBot {
    answers: Mutex<Vec<AnswerRecord>>,
    sent: Mutex<Vec<SentRecord>>,
    fail_answers: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bot whose `answer_inline_audio` always fails (e.g. network error).
    pub fn failing() -> Self {
        Self {
            fail_answers: true,
            ..Self::default()
        }
    }

    pub fn answers(&self) -> Vec<AnswerRecord> {
        self.answers.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn answer_inline_audio(
        &self,
        inline_query_id: &str,
        results: &[InlineAudio],
        cache_time: u32,
    ) -> Result<()> {
        if self.fail_answers {
            return Err(BotError::Bot("connection reset".to_string()));
        }
        self.answers.lock().unwrap().push(AnswerRecord {
            inline_query_id: inline_query_id.to_string(),
            results: results.to_vec(),
            cache_time,
        });
        Ok(())
    }
}
