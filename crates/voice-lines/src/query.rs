//! Query mini-language: `"<phrase>"` or `"<character-scope>/<phrase>"`.

/// Separates the character scope from the phrase.
pub const SCOPE_SEPARATOR: char = '/';

/// A parsed inline query. Built per request, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Character scope as typed (trimmed). May be blank, e.g. for `"/fresh meat"`.
    pub scope: Option<String>,
    pub phrase: String,
}

impl Query {
    /// Splits on the first [`SCOPE_SEPARATOR`]; both parts are trimmed. Anything after the first
    /// separator belongs to the phrase. Without a separator the whole (trimmed) text is the phrase.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(SCOPE_SEPARATOR) {
            Some((scope, phrase)) => Self {
                scope: Some(scope.trim().to_string()),
                phrase: phrase.trim().to_string(),
            },
            None => Self {
                scope: None,
                phrase: raw.trim().to_string(),
            },
        }
    }

    /// Scope to filter by, if it is non-blank.
    pub fn effective_scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|s| !s.trim().is_empty())
    }
}
