//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{BotConfig, LoadOptions};

#[derive(Parser)]
#[command(name = "dotalinesbot")]
#[command(about = "Telegram inline bot for Dota 2 voice lines", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override).
    Run {
        /// Overrides the config file token and BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// JSON config file with `telegram_token`.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// JSON voice-line corpus; overrides VOICE_LINES_DATABASE / VOICE_LINES_PATH.
        #[arg(short, long)]
        lines: Option<PathBuf>,
    },
    /// Search the corpus offline, e.g. `search "Pudge/Get Over Here"`.
    Search {
        #[arg(short, long)]
        lines: Option<PathBuf>,
        query: String,
    },
}

/// Load BotConfig from environment plus CLI overrides.
pub fn load_config(
    token: Option<String>,
    config_file: Option<PathBuf>,
    lines: Option<PathBuf>,
) -> Result<BotConfig> {
    BotConfig::load(LoadOptions {
        token,
        config_file,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::parse_from(["dotalinesbot", "run", "--token", "t", "-c", "config.json"]);
        match cli.command {
            Commands::Run { token, config, lines } => {
                assert_eq!(token.as_deref(), Some("t"));
                assert_eq!(config, Some(PathBuf::from("config.json")));
                assert!(lines.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from(["dotalinesbot", "search", "--lines", "l.json", "Pudge/Get Over Here"]);
        match cli.command {
            Commands::Search { lines, query } => {
                assert_eq!(lines, Some(PathBuf::from("l.json")));
                assert_eq!(query, "Pudge/Get Over Here");
            }
            _ => panic!("expected search"),
        }
    }
}
