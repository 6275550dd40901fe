//! Core types: user, chat, inline query, inline audio result, and transport conversion traits.

mod chat;
mod inline_audio;
mod inline_query;
mod user;

pub use chat::{Chat, ToCoreChat};
pub use inline_audio::InlineAudio;
pub use inline_query::{InlineQuery, ToCoreInlineQuery};
pub use user::{ToCoreUser, User};
