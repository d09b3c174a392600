//! Transcription port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::Transcript;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error(
        "whisper.cpp binary not found. Install whisper-cpp (brew install whisper-cpp) \
         or build it with ./install.sh"
    )]
    BinaryNotFound,

    #[error(
        "Model file not found: {file}\n\
         Download from: https://huggingface.co/ggerganov/whisper.cpp/resolve/main/{file}\n\
         Save to: {}",
        .expected.display()
    )]
    ModelNotFound { file: String, expected: PathBuf },

    #[error("Audio file not found: {}", .0.display())]
    AudioFileMissing(PathBuf),

    #[error("Transcription failed: {0}")]
    InvocationFailed(String),

    #[error("Transcription timed out (>5 minutes)")]
    Timeout,

    #[error("Transcription is empty. Audio may not contain speech.")]
    NoSpeech,
}

/// Port for audio transcription.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `audio_path` to text.
    ///
    /// # Returns
    /// The normalized transcript, or an error. An output that normalizes
    /// to an empty string is `NoSpeech`, never an empty transcript.
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError>;

    /// Check that the transcription engine is present and runnable
    /// (pre-flight gate).
    async fn probe(&self) -> Result<(), TranscriptionError>;
}
