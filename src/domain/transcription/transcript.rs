//! Transcript value object

use std::fmt;

/// Marker whisper.cpp emits for segments without speech
const BLANK_AUDIO_MARKER: &str = "[BLANK_AUDIO]";

/// Value object representing a normalized transcription result.
///
/// Guaranteed non-empty: engine output that normalizes to an empty string
/// has no `Transcript` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript(String);

impl Transcript {
    /// Normalize raw engine output into a transcript.
    ///
    /// Strips every `[BLANK_AUDIO]` marker and leading/trailing whitespace.
    /// Returns `None` if nothing remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let stripped = raw.replace(BLANK_AUDIO_MARKER, "");
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the transcript text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the transcript text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
