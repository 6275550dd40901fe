//! Integration tests for [`dotalines_bot::CommandHandler`]: `/start` and `/help` always send the
//! same non-empty text.

mod common;

use std::sync::Arc;

use common::mock_bot::MockBot;
use dotalines_bot::{help_text, start_text, Bot, Chat, Command, CommandHandler};

fn chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "Private".to_string(),
    }
}

/// **Test: /start and /help reply to the calling chat with fixed texts, regardless of order or repetition.**
#[tokio::test]
async fn test_start_and_help_are_stable() {
    let mock = Arc::new(MockBot::new());
    let bot: Arc<dyn Bot> = mock.clone();
    let handler = CommandHandler::new(bot, "dotalinesbot");

    for command in [Command::Help, Command::Start, Command::Help, Command::Start] {
        handler.handle(&chat(42), &command).await.unwrap();
    }

    let sent = mock.sent();
    assert_eq!(sent.len(), 4);
    assert!(sent.iter().all(|s| s.chat_id == 42 && !s.text.trim().is_empty()));
    assert_eq!(sent[0].text, help_text("dotalinesbot"));
    assert_eq!(sent[1].text, start_text("dotalinesbot"));
    assert_eq!(sent[0].text, sent[2].text);
    assert_eq!(sent[1].text, sent[3].text);
    assert_ne!(sent[0].text, sent[1].text);
}
