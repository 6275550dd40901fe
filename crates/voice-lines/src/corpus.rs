//! Pre-indexed, read-only voice-line corpus grouped by character.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::model::VoiceLine;
use crate::normalize::{normalize_character_key, normalize_text};

/// A voice line plus its normalized transcript and tokens.
#[derive(Debug, Clone)]
pub struct IndexedLine {
    pub line: VoiceLine,
    pub normalized_text: String,
    pub tokens: Vec<String>,
}

impl IndexedLine {
    fn new(line: VoiceLine) -> Self {
        let normalized_text = normalize_text(&line.text);
        let tokens = normalized_text.split(' ').filter(|t| !t.is_empty()).map(String::from).collect();
        Self {
            line,
            normalized_text,
            tokens,
        }
    }
}

/// All lines of one character, in source order.
#[derive(Debug, Clone)]
pub struct CharacterLines {
    /// Key as stored in the source, e.g. `Pudge_responses`.
    pub key: String,
    /// Key after [`normalize_character_key`], used for scope matching.
    pub normalized_key: String,
    pub lines: Vec<IndexedLine>,
}

/// The static corpus. Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    characters: Vec<CharacterLines>,
}

impl Corpus {
    /// Builds the index from raw lines.
    ///
    /// Lines with a blank character, transcript or URL are skipped; exact duplicates are dropped.
    /// Characters keep first-seen order and lines keep source order.
    pub fn from_lines(lines: impl IntoIterator<Item = VoiceLine>) -> Self {
        let mut characters: Vec<CharacterLines> = Vec::new();
        let mut by_key: HashMap<String, usize> = HashMap::new();
        let mut seen: HashSet<VoiceLine> = HashSet::new();
        let mut skipped = 0usize;
        let mut duplicates = 0usize;

        for line in lines {
            let line = VoiceLine::new(line.character.trim(), line.text.trim(), line.audio_url.trim());
            if line.character.is_empty() || line.text.is_empty() || line.audio_url.is_empty() {
                warn!(character = %line.character, text = %line.text, "Skipping incomplete voice line");
                skipped += 1;
                continue;
            }
            if !seen.insert(line.clone()) {
                debug!(character = %line.character, text = %line.text, "Dropping duplicate voice line");
                duplicates += 1;
                continue;
            }

            let idx = *by_key.entry(line.character.clone()).or_insert_with(|| {
                characters.push(CharacterLines {
                    key: line.character.clone(),
                    normalized_key: normalize_character_key(&line.character),
                    lines: Vec::new(),
                });
                characters.len() - 1
            });
            characters[idx].lines.push(IndexedLine::new(line));
        }

        let corpus = Self { characters };
        info!(
            characters = corpus.character_count(),
            lines = corpus.line_count(),
            skipped,
            duplicates,
            "Voice-line corpus indexed"
        );
        corpus
    }

    pub fn characters(&self) -> &[CharacterLines] {
        &self.characters
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn line_count(&self) -> usize {
        self.characters.iter().map(|c| c.lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Characters selected by `scope`, compared on normalized keys.
    ///
    /// A key equal to the scope wins outright (`io` never pulls in `lion`). Otherwise every scope
    /// word must prefix a key word, in order, so `phantom` and `assassin` still resolve.
    /// `None` or a blank scope selects every character.
    pub fn characters_in_scope<'a>(
        &'a self,
        scope: Option<&str>,
    ) -> impl Iterator<Item = &'a CharacterLines> + 'a {
        let wanted = scope.map(normalize_character_key).filter(|s| !s.is_empty());
        let exact = wanted
            .as_deref()
            .is_some_and(|w| self.characters.iter().any(|c| c.normalized_key == w));
        self.characters.iter().filter(move |c| match wanted.as_deref() {
            None => true,
            Some(w) if exact => c.normalized_key == w,
            Some(w) => scope_words_prefix_key(w, &c.normalized_key),
        })
    }
}

fn scope_words_prefix_key(scope: &str, key: &str) -> bool {
    let mut key_words = key.split(' ');
    scope.split(' ').all(|word| key_words.any(|k| k.starts_with(word)))
}
