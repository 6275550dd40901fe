//! Component factory: loads the corpus and builds the transport and handlers from config.
//! Isolates assembly logic from the runner.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};
use voice_lines::{load_json, load_sqlite, Corpus, LineMatcher, VoiceLineLookup};

use crate::config::{BotConfig, CorpusConfig, CorpusSource};
use crate::core::Bot as CoreBot;
use crate::handlers::{BotHandlers, Command, CommandHandler, InlineAudioHandler};
use crate::telegram::TelegramBotAdapter;

/// Username used in command texts when `get_me` fails.
pub const FALLBACK_BOT_USERNAME: &str = "dotalinesbot";

/// Transport dependencies for the runner; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn CoreBot>,
    pub bot_username: String,
}

/// Reads the configured corpus source once.
#[instrument(skip(config))]
pub async fn load_corpus(config: &CorpusConfig) -> crate::core::Result<Corpus> {
    let corpus = match &config.source {
        CorpusSource::Json(path) => load_json(path)?,
        CorpusSource::Sqlite(database) => load_sqlite(database).await?,
    };
    Ok(corpus)
}

/// Loads the corpus and wraps it in a [`LineMatcher`] with the configured limits.
#[instrument(skip(config))]
pub async fn build_matcher(config: &CorpusConfig) -> Result<Arc<LineMatcher>> {
    let corpus = load_corpus(config).await.map_err(|e| {
        error!(error = %e, source = ?config.source, "Failed to load voice-line corpus");
        anyhow::anyhow!("Failed to load voice-line corpus: {}", e)
    })?;
    let matcher = LineMatcher::new(Arc::new(corpus), config.matcher_config());
    info!(
        characters = matcher.corpus().character_count(),
        lines = matcher.corpus().line_count(),
        max_results = matcher.config().max_results,
        min_score = matcher.config().min_score,
        "Line matcher ready"
    );
    Ok(Arc::new(matcher))
}

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn create_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Asks the platform for the bot's username; falls back to [`FALLBACK_BOT_USERNAME`].
pub async fn resolve_bot_username(bot: &teloxide::Bot) -> String {
    match bot.get_me().await {
        Ok(me) => match me.user.username.clone() {
            Some(username) => {
                info!(username = %username, "Bot username resolved");
                username
            }
            None => FALLBACK_BOT_USERNAME.to_string(),
        },
        Err(e) => {
            warn!(error = %e, "get_me failed; using fallback bot username");
            FALLBACK_BOT_USERNAME.to_string()
        }
    }
}

/// Registers `/start` and `/help` with the platform. Failure is logged, not fatal.
pub async fn register_commands(bot: &teloxide::Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

/// Builds the transport components.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = create_teloxide_bot(config);
    let bot_username = resolve_bot_username(&teloxide_bot).await;
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    BotComponents {
        teloxide_bot,
        bot,
        bot_username,
    }
}

/// Builds the handlers from any [`CoreBot`] and [`VoiceLineLookup`] (tests pass mocks).
pub fn build_handlers(
    bot: Arc<dyn CoreBot>,
    bot_username: &str,
    lookup: Arc<dyn VoiceLineLookup>,
    cache_time: u32,
) -> BotHandlers {
    BotHandlers {
        commands: Arc::new(CommandHandler::new(bot.clone(), bot_username)),
        inline: Arc::new(InlineAudioHandler::new(lookup, bot, cache_time)),
    }
}
