//! # voice-lines
//!
//! Response matching for the inline bot: parses a free-text query into an optional character scope
//! plus a phrase ([`Query`]), holds the pre-indexed, read-only [`Corpus`], and ranks voice lines
//! against the phrase ([`LineMatcher`]). The bot only talks to this crate through
//! [`VoiceLineLookup`].

pub mod corpus;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod query;

pub use corpus::{CharacterLines, Corpus, IndexedLine};
pub use error::{CorpusError, LookupError};
pub use loader::{load_json, load_sqlite, VoiceLineRecord};
pub use lookup::VoiceLineLookup;
pub use matcher::{LineMatcher, MatcherConfig, DEFAULT_MIN_SCORE, PLATFORM_MAX_RESULTS};
pub use model::VoiceLine;
pub use normalize::{normalize_character_key, normalize_text, performer_label, RESPONSES_SUFFIX};
pub use query::{Query, SCOPE_SEPARATOR};
