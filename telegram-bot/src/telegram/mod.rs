//! Telegram layer: teloxide type adapters, Bot implementation, dispatcher runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramChatWrapper, TelegramInlineQueryWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_telegram_results, TelegramBotAdapter};
pub use runner::run_dispatcher;
