//! Error types for the bot.
//!
//! [`BotError`] is the top-level error for handlers and the transport.

use thiserror::Error;
use voice_lines::{CorpusError, LookupError};

/// Top-level error (bot transport, config, corpus, lookup, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
