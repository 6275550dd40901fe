//! Text and character-key normalization shared by indexing, matching and formatting.

/// Suffix marker the corpus appends to every character key.
pub const RESPONSES_SUFFIX: &str = "_responses";

/// Lowercases, drops apostrophes, turns other punctuation into spaces and collapses whitespace.
///
/// `"Get Over Here!"` and `"get over   here"` both become `"get over here"`.
pub fn normalize_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else if c == '\'' || c == '’' {
            continue;
        } else {
            cleaned.push(' ');
        }
    }
    collapse_whitespace(&cleaned)
}

/// Normalizes a character key or a user-typed scope for comparison.
///
/// `"Phantom_Assassin_responses"`, `"phantom_assassin"` and `" Phantom  Assassin"` all become
/// `"phantom assassin"`.
pub fn normalize_character_key(key: &str) -> String {
    collapse_whitespace(&strip_responses_suffix(key.trim()).replace('_', " ")).to_lowercase()
}

/// Human-readable performer label for a character key: no suffix marker, no underscores.
pub fn performer_label(character: &str) -> String {
    collapse_whitespace(&strip_responses_suffix(character.trim()).replace('_', " "))
}

fn strip_responses_suffix(key: &str) -> &str {
    let split = key.len().saturating_sub(RESPONSES_SUFFIX.len());
    match (key.get(..split), key.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(RESPONSES_SUFFIX) => head,
        _ => key,
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
