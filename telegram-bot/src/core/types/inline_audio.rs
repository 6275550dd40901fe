//! Outbound inline audio result.

use serde::{Deserialize, Serialize};

/// One platform-ready audio result: `{id, audioUrl, title, performer}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineAudio {
    /// Fresh per result per request.
    pub id: String,
    pub audio_url: String,
    pub title: String,
    pub performer: String,
}
