//! Recording port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("No audio input devices found")]
    NoAudioDevice,

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("No audio data recorded")]
    EmptyRecording,

    #[error("Failed to write recording: {0}")]
    WriteFailed(String),
}

/// Port for microphone capture.
#[async_trait]
pub trait Recorder: Send + Sync {
    /// Record from the default input device until the stop signal,
    /// then persist the capture as a WAV file at `output_path`.
    ///
    /// # Arguments
    /// * `sample_rate` - Capture sample rate in Hz
    /// * `output_path` - Destination WAV path; parent directories are created
    ///
    /// # Returns
    /// Ok(()) once the file is written, error otherwise. A capture with
    /// zero audio blocks is an error and writes nothing.
    async fn record(&self, sample_rate: u32, output_path: &Path) -> Result<(), RecordingError>;

    /// Check that an audio input device is present (pre-flight gate).
    async fn probe(&self) -> Result<(), RecordingError>;
}
