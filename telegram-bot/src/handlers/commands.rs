//! `/start` and `/help`: fixed text replies.

use std::sync::Arc;

use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument};

use crate::core::{Bot, Chat, Result};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "introduce the bot")]
    Start,
    #[command(description = "show how to search for a voice line")]
    Help,
}

/// Greeting for `/start`.
pub fn start_text(bot_username: &str) -> String {
    format!(
        "Hi, I'm @{bot_username}. I send Dota 2 voice lines as audio messages.\n\
         Use /help to see how to search for one."
    )
}

/// Usage for `/help`: the `HERO/VOICE LINE` mini-language.
pub fn help_text(bot_username: &str) -> String {
    format!(
        "Usage:\n\
         I'm an inline bot, so there's no need to add me to a group.\n\n\
         Type '@{bot_username} HERO/VOICE LINE' in any chat and pick a result to send it.\n\
         Example: '@{bot_username} Pudge/Get Over Here'\n\n\
         The hero (or pack) part is optional and doesn't need the full name: \
         '@{bot_username} Get Over Here' searches every character.\n\
         Names with two or more words can use underscores, e.g. phantom_assassin."
    )
}

/// Replies to commands. Texts depend only on the bot username, resolved once at startup.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    bot_username: String,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: impl Into<String>) -> Self {
        Self {
            bot,
            bot_username: bot_username.into(),
        }
    }

    pub fn reply_text(&self, command: &Command) -> String {
        match command {
            Command::Start => start_text(&self.bot_username),
            Command::Help => help_text(&self.bot_username),
        }
    }

    #[instrument(skip(self, chat))]
    pub async fn handle(&self, chat: &Chat, command: &Command) -> Result<()> {
        info!(chat_id = chat.id, command = ?command, "Received command");
        self.bot
            .send_message(chat, &self.reply_text(command))
            .await
            .inspect_err(|e| error!(error = %e, chat_id = chat.id, "Failed to send command reply"))
    }
}
