//! Shared test helpers.
#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Arc;

use dotalines_bot::{InlineQuery, User};
use voice_lines::{Corpus, LineMatcher, MatcherConfig, VoiceLine};

pub fn make_inline_query(id: &str, query: &str) -> InlineQuery {
    InlineQuery {
        id: id.to_string(),
        from: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
        },
        query: query.to_string(),
    }
}

/// Small corpus: two Pudge hooks, a Clockwerk hook, a Phantom Assassin line.
pub fn sample_matcher() -> Arc<LineMatcher> {
    let corpus = Corpus::from_lines(vec![
        VoiceLine::new("Pudge_responses", "Get over here!", "https://cdn.example/pudge/hook_01.mp3"),
        VoiceLine::new("Pudge_responses", "Fresh meat!", "https://cdn.example/pudge/spawn_01.mp3"),
        VoiceLine::new("Pudge_responses", "Get over here, you!", "https://cdn.example/pudge/hook_02.mp3"),
        VoiceLine::new("Clockwerk_responses", "Get over here!", "https://cdn.example/rat/hook_01.mp3"),
        VoiceLine::new("Phantom_Assassin_responses", "Whoa, there.", "https://cdn.example/pa/spawn_01.mp3"),
    ]);
    Arc::new(LineMatcher::new(Arc::new(corpus), MatcherConfig::default()))
}
