//! BotConfig: BaseConfig + CorpusConfig. Use load() for env-based loading.

use anyhow::Result;
use std::path::PathBuf;

use super::{BaseConfig, CorpusConfig, FileConfig};

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Overrides the config file token and BOT_TOKEN.
    pub token: Option<String>,
    /// JSON config file with `telegram_token`; overrides BOT_TOKEN.
    pub config_file: Option<PathBuf>,
    /// JSON corpus file; overrides VOICE_LINES_DATABASE / VOICE_LINES_PATH.
    pub lines: Option<PathBuf>,
}

/// Bot config: BaseConfig + corpus. Use BotConfig::load() for env-based loading.
pub struct BotConfig {
    pub base: BaseConfig,
    pub corpus: CorpusConfig,
}

impl BotConfig {
    /// Load full config. Token precedence: `--token`, then the config file, then BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(options: LoadOptions) -> Result<Self> {
        let file_token = match options.config_file.as_deref() {
            Some(path) => FileConfig::load(path)?.telegram_token,
            None => None,
        };
        let base = BaseConfig::load(options.token.or(file_token))?;
        let corpus = CorpusConfig::from_env(options.lines)?;
        Ok(Self { base, corpus })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.corpus.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn corpus(&self) -> &CorpusConfig {
        &self.corpus
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
