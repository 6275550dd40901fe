//! Integration tests for the offline search path and corpus assembly
//! ([`dotalines_bot::search`], [`dotalines_bot::components::build_matcher`]).

use std::io::Write;
use std::path::PathBuf;

use dotalines_bot::components::build_matcher;
use dotalines_bot::{search, CorpusConfig, CorpusSource};
use tempfile::NamedTempFile;

fn corpus_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"Character": "Pudge_responses", "Text": "Get over here!", "URL": "https://cdn.example/p1.mp3"}},
            {{"Character": "Pudge_responses", "Text": "Fresh meat!", "URL": "https://cdn.example/p2.mp3"}},
            {{"Character": "Clockwerk_responses", "Text": "Get over here!", "URL": "https://cdn.example/c1.mp3"}}
        ]"#
    )
    .unwrap();
    file
}

fn json_config(path: PathBuf, max_results: usize) -> CorpusConfig {
    CorpusConfig {
        source: CorpusSource::Json(path),
        max_results,
        min_score: 0.55,
        inline_cache_time: 1,
    }
}

/// **Test: search formats scoped results exactly like inline answers.**
#[tokio::test]
async fn test_search_scoped() {
    let file = corpus_file();
    let results = search(&json_config(file.path().to_path_buf(), 50), "pudge/get over here")
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].performer, "Pudge");
    assert_eq!(results[0].title, "\"Get over here!\"");
    assert_eq!(results[0].audio_url, "https://cdn.example/p1.mp3");
}

/// **Test: max_results bounds the answer.**
#[tokio::test]
async fn test_search_respects_max_results() {
    let file = corpus_file();
    let results = search(&json_config(file.path().to_path_buf(), 1), "get over here").await.unwrap();
    assert_eq!(results.len(), 1);
}

/// **Test: Missing corpus file is a startup error.**
#[tokio::test]
async fn test_build_matcher_missing_corpus() {
    let config = json_config(PathBuf::from("/definitely/not/voice_lines.json"), 50);
    assert!(build_matcher(&config).await.is_err());
}

/// **Test: Out-of-range min score is rejected before loading.**
#[tokio::test]
async fn test_search_rejects_invalid_min_score() {
    let file = corpus_file();
    let mut config = json_config(file.path().to_path_buf(), 50);
    config.min_score = -0.1;
    assert!(search(&config, "fresh meat").await.is_err());
}
