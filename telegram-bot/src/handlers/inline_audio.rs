//! Inline voice-line queries: parse, look up, format, answer.

use std::sync::Arc;

use tracing::{error, info, instrument};
use voice_lines::{Query, VoiceLine, VoiceLineLookup};

use crate::core::{Bot, InlineQuery, Result};
use crate::formatter::format_results;

/// Answers one inline query per call. Holds no per-request state.
pub struct InlineAudioHandler {
    lookup: Arc<dyn VoiceLineLookup>,
    bot: Arc<dyn Bot>,
    cache_time: u32,
}

impl InlineAudioHandler {
    pub fn new(lookup: Arc<dyn VoiceLineLookup>, bot: Arc<dyn Bot>, cache_time: u32) -> Self {
        Self {
            lookup,
            bot,
            cache_time,
        }
    }

    async fn find_lines(&self, query: &Query) -> Result<Vec<VoiceLine>> {
        Ok(self.lookup.lookup(query).await?)
    }

    /// Answers `query` and returns how many results were sent.
    ///
    /// Lookup failures are logged and answered with no results. Only a failed answer call is
    /// returned as an error.
    #[instrument(skip(self, query), fields(inline_query_id = %query.id))]
    pub async fn handle(&self, query: &InlineQuery) -> Result<usize> {
        info!(
            user_id = query.from.id,
            first_name = query.from.first_name.as_deref().unwrap_or(""),
            last_name = query.from.last_name.as_deref().unwrap_or(""),
            query = %query.query,
            "New inline query"
        );

        let parsed = Query::parse(&query.query);
        let lines = match self.find_lines(&parsed).await {
            Ok(lines) => lines,
            Err(e) => {
                error!(error = %e, query = %query.query, "Voice-line lookup failed; answering with no results");
                Vec::new()
            }
        };

        let results = format_results(&lines);
        for r in &results {
            info!(performer = %r.performer, title = %r.title, "step: inline result");
        }

        self.bot
            .answer_inline_audio(&query.id, &results, self.cache_time)
            .await
            .inspect_err(|e| error!(error = %e, user_id = query.from.id, "Failed to answer inline query"))?;

        info!(user_id = query.from.id, result_count = results.len(), "Inline query answered");
        Ok(results.len())
    }
}
