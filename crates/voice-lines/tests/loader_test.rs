//! Integration tests for corpus loading from a JSON file and from a SQLite `responses` table.

use std::io::Write;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tempfile::{NamedTempFile, TempDir};
use voice_lines::{load_json, load_sqlite, CorpusError};

/// **Test: JSON file with the voice-line column names loads and groups by character.**
#[test]
fn test_load_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"Character": "Lina_responses", "Text": "Hot!", "URL": "https://cdn.example/lina.mp3"}},
            {{"Character": "Lina_responses", "Text": "Burn!", "URL": "https://cdn.example/lina2.mp3"}}]"#
    )
    .unwrap();

    let corpus = load_json(file.path()).unwrap();
    assert_eq!(corpus.character_count(), 1);
    assert_eq!(corpus.line_count(), 2);
}

/// **Test: Empty JSON array is a valid (empty) corpus.**
#[test]
fn test_load_json_empty_array() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();
    assert!(load_json(file.path()).unwrap().is_empty());
}

/// **Test: Malformed JSON is a load error.**
#[test]
fn test_load_json_malformed() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[{{\"Character\": ").unwrap();
    assert!(matches!(load_json(file.path()), Err(CorpusError::Json(_))));
}

async fn seed_database(path: &std::path::Path) {
    let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();
    sqlx::query("CREATE TABLE responses (Character TEXT, Text TEXT, URL TEXT)")
        .execute(&pool)
        .await
        .unwrap();
    for (character, text, url) in [
        ("Pudge_responses", "Fresh meat!", Some("https://cdn.example/p1.mp3")),
        ("Pudge_responses", "Get over here!", Some("https://cdn.example/p2.mp3")),
        ("Axe_responses", "Axe is all you need!", Some("https://cdn.example/a1.mp3")),
        ("Axe_responses", "Missing audio", None),
    ] {
        sqlx::query("INSERT INTO responses (Character, Text, URL) VALUES (?, ?, ?)")
            .bind(character)
            .bind(text)
            .bind(url)
            .execute(&pool)
            .await
            .unwrap();
    }
    pool.close().await;
}

/// **Test: SQLite `responses` table loads in row order; rows without a URL are skipped.**
#[tokio::test]
async fn test_load_sqlite_responses_table() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("responses.db");
    seed_database(&db_path).await;

    let corpus = load_sqlite(db_path.to_str().unwrap()).await.unwrap();
    assert_eq!(corpus.character_count(), 2);
    assert_eq!(corpus.line_count(), 3);
    assert_eq!(corpus.characters()[0].lines[1].line.text, "Get over here!");

    let url = format!("sqlite://{}", db_path.display());
    assert_eq!(load_sqlite(&url).await.unwrap().line_count(), 3);
}

/// **Test: Missing database file is a load error (opened read-only, never created).**
#[tokio::test]
async fn test_load_sqlite_missing_file() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("absent.db");
    let result = load_sqlite(db_path.to_str().unwrap()).await;
    assert!(matches!(result, Err(CorpusError::Database(_))));
    assert!(!db_path.exists());
}
