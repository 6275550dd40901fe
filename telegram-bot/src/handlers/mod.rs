//! Handlers: `/start` + `/help` commands and inline voice-line queries.

mod commands;
mod inline_audio;

pub use commands::{help_text, start_text, Command, CommandHandler};
pub use inline_audio::InlineAudioHandler;

use std::sync::Arc;

/// Handlers shared by every dispatcher endpoint.
#[derive(Clone)]
pub struct BotHandlers {
    pub commands: Arc<CommandHandler>,
    pub inline: Arc<InlineAudioHandler>,
}
