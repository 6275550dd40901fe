//! Corpus config: where the voice lines come from and how many results an answer carries.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use voice_lines::{MatcherConfig, DEFAULT_MIN_SCORE, PLATFORM_MAX_RESULTS};

/// Default JSON corpus path when neither VOICE_LINES_DATABASE nor VOICE_LINES_PATH is set.
pub const DEFAULT_VOICE_LINES_PATH: &str = "data/voice_lines.json";

/// Default inline answer cache time in seconds.
pub const DEFAULT_INLINE_CACHE_TIME: u32 = 1;

/// Static voice-line source, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// JSON array of `{Character, Text, URL}` records.
    Json(PathBuf),
    /// SQLite file path or `sqlite:` URL with a `responses` table.
    Sqlite(String),
}

#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub source: CorpusSource,
    /// MAX_INLINE_RESULTS, clamped to 1..=50.
    pub max_results: usize,
    /// MATCH_MIN_SCORE
    pub min_score: f64,
    /// INLINE_CACHE_TIME (seconds)
    pub inline_cache_time: u32,
}

impl CorpusConfig {
    /// Load from env. `lines` (CLI `--lines`) overrides both VOICE_LINES_DATABASE and VOICE_LINES_PATH.
    pub fn from_env(lines: Option<PathBuf>) -> Result<Self> {
        let source = match lines {
            Some(path) => CorpusSource::Json(path),
            None => match env::var("VOICE_LINES_DATABASE").ok().filter(|s| !s.trim().is_empty()) {
                Some(db) => CorpusSource::Sqlite(db),
                None => CorpusSource::Json(
                    env::var("VOICE_LINES_PATH")
                        .unwrap_or_else(|_| DEFAULT_VOICE_LINES_PATH.to_string())
                        .into(),
                ),
            },
        };
        let max_results = env::var("MAX_INLINE_RESULTS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(PLATFORM_MAX_RESULTS)
            .clamp(1, PLATFORM_MAX_RESULTS);
        let min_score = env::var("MATCH_MIN_SCORE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MIN_SCORE);
        let inline_cache_time = env::var("INLINE_CACHE_TIME")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_INLINE_CACHE_TIME);

        Ok(Self {
            source,
            max_results,
            min_score,
            inline_cache_time,
        })
    }

    /// Validate config: min_score must be within 0..=1.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            anyhow::bail!("MATCH_MIN_SCORE must be within 0.0..=1.0, got {}", self.min_score);
        }
        Ok(())
    }

    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig {
            max_results: self.max_results,
            min_score: self.min_score,
        }
    }
}
