//! # dotalines-bot
//!
//! Telegram inline bot: `@bot HERO/VOICE LINE` answers with matching voice-line clips.
//! Matching lives in the `voice-lines` crate; this crate owns config, logging, the Telegram
//! transport, the result formatter, the command/inline handlers and the dispatcher loop.

pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod formatter;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_console_tracing, init_tracing, Bot, BotError, Chat, InlineAudio, InlineQuery, Result,
    ToCoreChat, ToCoreInlineQuery, ToCoreUser, User,
};

pub use config::{BaseConfig, BotConfig, CorpusConfig, CorpusSource, LoadOptions};
pub use formatter::{format_result, format_results, quoted_title};
pub use handlers::{help_text, start_text, BotHandlers, Command, CommandHandler, InlineAudioHandler};
pub use runner::{run_bot, search};
pub use telegram::{run_dispatcher, TelegramBotAdapter};
