use anyhow::Result;
use tracing::{info, instrument};
use voice_lines::Query;

use crate::components::{build_bot_components, build_handlers, build_matcher, register_commands};
use crate::config::{BotConfig, CorpusConfig};
use crate::core::{init_tracing, InlineAudio};
use crate::formatter::format_results;
use crate::telegram::run_dispatcher;

/// Main entry: validate config, init logging, load the corpus, build components, then poll until
/// Ctrl-C. Any failure before polling starts is returned (fatal).
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        corpus_source = ?config.corpus().source,
        "Initializing bot"
    );

    let matcher = build_matcher(config.corpus()).await?;
    let components = build_bot_components(&config).await;
    register_commands(&components.teloxide_bot).await;

    let handlers = build_handlers(
        components.bot.clone(),
        &components.bot_username,
        matcher,
        config.corpus().inline_cache_time,
    );

    info!(username = %components.bot_username, "Bot started successfully");

    run_dispatcher(components.teloxide_bot, handlers).await;

    Ok(())
}

/// Runs one query offline against the configured corpus (same parse, match and format path as
/// inline queries).
pub async fn search(config: &CorpusConfig, raw_query: &str) -> Result<Vec<InlineAudio>> {
    config.validate()?;
    let matcher = build_matcher(config).await?;
    let lines = matcher.find(&Query::parse(raw_query));
    Ok(format_results(&lines))
}
