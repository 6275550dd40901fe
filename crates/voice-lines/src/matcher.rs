//! Line Matcher: ranks in-scope voice lines by textual similarity to the phrase.

use std::cmp::Ordering;
use std::sync::Arc;

use strsim::{jaro_winkler, normalized_levenshtein};
use tracing::debug;

use crate::corpus::{Corpus, IndexedLine};
use crate::model::VoiceLine;
use crate::normalize::normalize_text;
use crate::query::Query;

/// Most results an inline answer may carry.
pub const PLATFORM_MAX_RESULTS: usize = 50;

/// Lines scoring below this are not returned.
pub const DEFAULT_MIN_SCORE: f64 = 0.55;

/// A phrase token counts as present when its best Jaro-Winkler similarity reaches this.
const TOKEN_MATCH_THRESHOLD: f64 = 0.85;

/// Base score of a transcript that contains the whole phrase.
const CONTAINS_BASE: f64 = 0.9;

/// Weight of token coverage against whole-string similarity.
const COVERAGE_WEIGHT: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Clamped to `1..=PLATFORM_MAX_RESULTS`.
    pub max_results: usize,
    pub min_score: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_results: PLATFORM_MAX_RESULTS,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Fuzzy matcher over a shared, read-only [`Corpus`].
#[derive(Debug, Clone)]
pub struct LineMatcher {
    corpus: Arc<Corpus>,
    config: MatcherConfig,
}

impl LineMatcher {
    pub fn new(corpus: Arc<Corpus>, config: MatcherConfig) -> Self {
        let config = MatcherConfig {
            max_results: config.max_results.clamp(1, PLATFORM_MAX_RESULTS),
            ..config
        };
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    /// Best matches for `query`, best first, at most `max_results`. Empty phrase, unknown scope
    /// or no similar transcript all give an empty list.
    pub fn find(&self, query: &Query) -> Vec<VoiceLine> {
        self.get_responses(&query.phrase, query.effective_scope())
    }

    /// Same as [`LineMatcher::find`] with the query already split.
    pub fn get_responses(&self, phrase: &str, scope: Option<&str>) -> Vec<VoiceLine> {
        let phrase = normalize_text(phrase);
        if phrase.is_empty() {
            return Vec::new();
        }
        let phrase_tokens: Vec<&str> = phrase.split(' ').collect();

        let mut scored: Vec<(f64, &IndexedLine)> = self
            .corpus
            .characters_in_scope(scope)
            .flat_map(|c| c.lines.iter())
            .map(|line| (score(&phrase, &phrase_tokens, line), line))
            .filter(|(s, _)| *s >= self.config.min_score)
            .collect();

        // Stable: equal score and length keep corpus order.
        scored.sort_by(|(sa, la), (sb, lb)| {
            sb.total_cmp(sa)
                .then_with(|| la.normalized_text.len().cmp(&lb.normalized_text.len()))
        });
        scored.truncate(self.config.max_results);

        debug!(
            phrase = %phrase,
            scope = ?scope,
            matched = scored.len(),
            top_score = scored.first().map(|(s, _)| *s),
            "Ranked voice lines"
        );

        scored.into_iter().map(|(_, l)| l.line.clone()).collect()
    }
}

/// Similarity of a normalized phrase to an indexed line, in `0.0..=1.0`.
pub(crate) fn score(phrase: &str, phrase_tokens: &[&str], line: &IndexedLine) -> f64 {
    let whole = normalized_levenshtein(phrase, &line.normalized_text);
    if contains_token_run(&line.tokens, phrase_tokens) {
        return CONTAINS_BASE + (1.0 - CONTAINS_BASE) * whole;
    }
    let coverage = token_coverage(phrase_tokens, &line.tokens);
    whole.max(COVERAGE_WEIGHT * coverage + (1.0 - COVERAGE_WEIGHT) * whole)
}

/// Whether `phrase_tokens` appear as consecutive whole tokens of the line.
fn contains_token_run(line_tokens: &[String], phrase_tokens: &[&str]) -> bool {
    !phrase_tokens.is_empty()
        && line_tokens
            .windows(phrase_tokens.len())
            .any(|w| w.iter().zip(phrase_tokens).all(|(t, p)| t == p))
}

fn token_coverage(phrase_tokens: &[&str], line_tokens: &[String]) -> f64 {
    if phrase_tokens.is_empty() || line_tokens.is_empty() {
        return 0.0;
    }
    let total: f64 = phrase_tokens
        .iter()
        .map(|p| {
            line_tokens
                .iter()
                .map(|t| jaro_winkler(p, t))
                .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
                .unwrap_or(0.0)
        })
        .filter(|best| *best >= TOKEN_MATCH_THRESHOLD)
        .sum();
    total / phrase_tokens.len() as f64
}
