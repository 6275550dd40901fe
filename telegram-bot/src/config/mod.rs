//! Bot configuration: BaseConfig (Telegram + log) + CorpusConfig (voice-line source and matching).
//!
//! Loaded from `.env`/environment, optionally overridden by CLI flags and a legacy JSON config file.

mod base;
mod bot_config;
mod corpus;
mod file;


pub use base::BaseConfig;
pub use bot_config::{BotConfig, LoadOptions};
pub use corpus::{CorpusConfig, CorpusSource};
pub use file::FileConfig;
