//! Core types and traits: Bot transport, users/chats/inline queries, errors, logger.
//! Transport-agnostic; the teloxide side lives in [`crate::telegram`].

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::{init_console_tracing, init_tracing};
pub use types::{Chat, InlineAudio, InlineQuery, ToCoreChat, ToCoreInlineQuery, ToCoreUser, User};
