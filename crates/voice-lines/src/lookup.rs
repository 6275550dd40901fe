//! The seam between the bot and response matching.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::matcher::LineMatcher;
use crate::model::VoiceLine;
use crate::query::Query;

/// Answers a parsed query with ranked voice lines. An empty list means "no results", not failure.
#[async_trait]
pub trait VoiceLineLookup: Send + Sync {
    async fn lookup(&self, query: &Query) -> Result<Vec<VoiceLine>, LookupError>;
}

#[async_trait]
impl VoiceLineLookup for LineMatcher {
    async fn lookup(&self, query: &Query) -> Result<Vec<VoiceLine>, LookupError> {
        Ok(self.find(query))
    }
}
