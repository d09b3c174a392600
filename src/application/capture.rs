//! Capture use case: record, transcribe, deliver

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::transcription::Transcript;

use super::ports::{
    Clipboard, ClipboardError, Recorder, RecordingError, Transcriber, TranscriptionError,
};

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error(
        "Missing dependencies: {}. Run the installation script to fix these issues.",
        .0.join(", ")
    )]
    MissingDependencies(Vec<String>),

    #[error("Audio recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    /// Clipboard delivery failed. Carries the transcript so the caller
    /// can still print it before exiting non-zero.
    #[error("Failed to copy to clipboard: {source}")]
    Clipboard {
        source: ClipboardError,
        transcript: Transcript,
    },

    #[error("Failed to save transcript: {0}")]
    SaveTranscript(String),
}

/// Where the transcript goes after transcription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Copy to the system clipboard (default mode)
    Clipboard,
    /// Write to this file (`--no-clipboard` mode)
    File(PathBuf),
}

/// Input parameters for one capture run
#[derive(Debug, Clone)]
pub struct CaptureInput {
    /// Capture sample rate in Hz
    pub sample_rate: u32,
    /// Destination for the WAV recording
    pub audio_path: PathBuf,
    /// Transcript delivery mode
    pub delivery: Delivery,
}

/// Output from a successful capture run
#[derive(Debug, Clone)]
pub struct CaptureOutput {
    /// The normalized transcript
    pub transcript: Transcript,
    /// Transcript file path, when delivery wrote one
    pub saved_to: Option<PathBuf>,
}

/// Callbacks for phase status updates
#[derive(Default)]
pub struct CaptureCallbacks {
    /// Called just before recording starts
    pub on_recording_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called just before transcription starts
    pub on_transcribing_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called once transcription finished successfully
    pub on_transcribing_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot capture pipeline: pre-flight gate, then record, transcribe,
/// and deliver. Any stage failure aborts the run; there is no retry and
/// no partial-result recovery.
pub struct CaptureUseCase<R, T, C>
where
    R: Recorder,
    T: Transcriber,
    C: Clipboard,
{
    recorder: R,
    transcriber: T,
    clipboard: C,
}

impl<R, T, C> CaptureUseCase<R, T, C>
where
    R: Recorder,
    T: Transcriber,
    C: Clipboard,
{
    /// Create a new use case instance
    pub fn new(recorder: R, transcriber: T, clipboard: C) -> Self {
        Self {
            recorder,
            transcriber,
            clipboard,
        }
    }

    /// Verify required capabilities before touching the microphone.
    /// Every missing dependency is collected so the user sees them all at once.
    async fn preflight(&self) -> Result<(), CaptureError> {
        let mut missing = Vec::new();

        if let Err(e) = self.transcriber.probe().await {
            missing.push(e.to_string());
        }

        if let Err(e) = self.recorder.probe().await {
            missing.push(e.to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CaptureError::MissingDependencies(missing))
        }
    }

    /// Execute the capture workflow
    pub async fn execute(
        &self,
        input: CaptureInput,
        callbacks: CaptureCallbacks,
    ) -> Result<CaptureOutput, CaptureError> {
        self.preflight().await?;

        if let Some(ref cb) = callbacks.on_recording_start {
            cb();
        }

        self.recorder
            .record(input.sample_rate, &input.audio_path)
            .await?;

        if let Some(ref cb) = callbacks.on_transcribing_start {
            cb();
        }

        let transcript = self.transcriber.transcribe(&input.audio_path).await?;

        if let Some(ref cb) = callbacks.on_transcribing_end {
            cb();
        }

        match input.delivery {
            Delivery::Clipboard => {
                self.clipboard
                    .copy(transcript.as_str())
                    .await
                    .map_err(|source| CaptureError::Clipboard {
                        source,
                        transcript: transcript.clone(),
                    })?;

                Ok(CaptureOutput {
                    transcript,
                    saved_to: None,
                })
            }
            Delivery::File(path) => {
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| CaptureError::SaveTranscript(e.to_string()))?;
                }

                tokio::fs::write(&path, transcript.as_str())
                    .await
                    .map_err(|e| CaptureError::SaveTranscript(e.to_string()))?;

                Ok(CaptureOutput {
                    transcript,
                    saved_to: Some(path),
                })
            }
        }
    }
}
