//! Voice line data model.

use serde::{Deserialize, Serialize};

/// One playable clip: who says it, what is said, where the audio lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceLine {
    /// Corpus character key, e.g. `Phantom_Assassin_responses`.
    pub character: String,
    /// Transcript of the clip.
    pub text: String,
    pub audio_url: String,
}

impl VoiceLine {
    pub fn new(
        character: impl Into<String>,
        text: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        Self {
            character: character.into(),
            text: text.into(),
            audio_url: audio_url.into(),
        }
    }
}
