//! Corpus sources: a JSON file or a SQLite `responses` table.
//!
//! Both use the voice-line database's column names (`Character`, `Text`, `URL`).

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::corpus::Corpus;
use crate::error::CorpusError;
use crate::model::VoiceLine;

/// One row of the source data.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceLineRecord {
    #[serde(rename = "Character", alias = "character")]
    pub character: String,
    #[serde(rename = "Text", alias = "text")]
    pub text: String,
    #[serde(rename = "URL", alias = "url", alias = "audio_url")]
    pub url: String,
}

impl From<VoiceLineRecord> for VoiceLine {
    fn from(r: VoiceLineRecord) -> Self {
        VoiceLine::new(r.character, r.text, r.url)
    }
}

/// Parses a JSON array of records and indexes it.
pub fn parse_json(json: &str) -> Result<Corpus, CorpusError> {
    let records: Vec<VoiceLineRecord> = serde_json::from_str(json)?;
    Ok(Corpus::from_lines(records.into_iter().map(VoiceLine::from)))
}

/// Reads and indexes a JSON corpus file.
pub fn load_json(path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading voice lines from JSON");
    let raw = std::fs::read_to_string(path)?;
    let corpus = parse_json(&raw)?;
    if corpus.is_empty() {
        warn!(path = %path.display(), "Voice-line corpus is empty; every query will return no results");
    }
    Ok(corpus)
}

/// Reads the `responses` table once and indexes it. The database is opened read-only.
///
/// `database` is either a file path or a `sqlite:` URL.
pub async fn load_sqlite(database: &str) -> Result<Corpus, CorpusError> {
    info!(database = %database, "Loading voice lines from SQLite");

    let options = if database.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(database)?
    } else {
        SqliteConnectOptions::new().filename(database)
    }
    .read_only(true);

    let pool = SqlitePool::connect_with(options).await?;
    let rows: Vec<(Option<String>, Option<String>, Option<String>)> =
        sqlx::query_as("SELECT Character, Text, URL FROM responses ORDER BY rowid")
            .fetch_all(&pool)
            .await?;
    pool.close().await;

    let lines = rows.into_iter().map(|(character, text, url)| {
        VoiceLine::new(
            character.unwrap_or_default(),
            text.unwrap_or_default(),
            url.unwrap_or_default(),
        )
    });
    let corpus = Corpus::from_lines(lines);
    if corpus.is_empty() {
        warn!(database = %database, "Voice-line corpus is empty; every query will return no results");
    }
    Ok(corpus)
}
