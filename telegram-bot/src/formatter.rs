//! Result Formatter: maps matched voice lines to platform-ready [`InlineAudio`] results.

use uuid::Uuid;
use voice_lines::{performer_label, VoiceLine};

use crate::core::InlineAudio;

/// Transcript wrapped in double quotes, e.g. `"Get over here!"`.
pub fn quoted_title(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Formats one line with a fresh id.
pub fn format_result(line: &VoiceLine) -> InlineAudio {
    InlineAudio {
        id: Uuid::new_v4().to_string(),
        audio_url: line.audio_url.clone(),
        title: quoted_title(&line.text),
        performer: performer_label(&line.character),
    }
}

/// Formats lines in rank order.
pub fn format_results(lines: &[VoiceLine]) -> Vec<InlineAudio> {
    lines.iter().map(format_result).collect()
}
