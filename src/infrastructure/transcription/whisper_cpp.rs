//! Transcription adapter invoking the whisper.cpp binary

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use super::locator;
use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::transcription::{ModelSize, Transcript};

/// Hard ceiling on one transcription run
const TRANSCRIBE_TIMEOUT: Duration = Duration::from_secs(300);

/// Ceiling on the pre-flight `--help` probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Transcriber shelling out to a whisper.cpp binary.
///
/// Binary and model are discovered through the locator tables unless
/// explicit paths were supplied.
pub struct WhisperCppTranscriber {
    model: ModelSize,
    language: String,
    binary_path: Option<PathBuf>,
    model_path: Option<PathBuf>,
}

impl WhisperCppTranscriber {
    /// Create a transcriber that discovers binary and model on disk
    pub fn new(model: ModelSize, language: impl Into<String>) -> Self {
        Self {
            model,
            language: language.into(),
            binary_path: None,
            model_path: None,
        }
    }

    /// Create a transcriber with explicit binary and model paths,
    /// bypassing filesystem discovery.
    pub fn with_paths(
        binary: impl Into<PathBuf>,
        model_file: impl Into<PathBuf>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            model: ModelSize::default(),
            language: language.into(),
            binary_path: Some(binary.into()),
            model_path: Some(model_file.into()),
        }
    }

    async fn resolve_binary(&self) -> Result<PathBuf, TranscriptionError> {
        match &self.binary_path {
            Some(path) => Ok(path.clone()),
            None => locator::locate_binary().await,
        }
    }

    fn resolve_model(&self) -> Result<PathBuf, TranscriptionError> {
        match &self.model_path {
            Some(path) => Ok(path.clone()),
            None => locator::locate_model(self.model),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperCppTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError> {
        if !audio_path.exists() {
            return Err(TranscriptionError::AudioFileMissing(
                audio_path.to_path_buf(),
            ));
        }

        let binary = self.resolve_binary().await?;
        let model = self.resolve_model()?;

        // -m model file, -f input audio, -l language,
        // -nt no timestamps, -np no progress
        let mut cmd = Command::new(&binary);
        cmd.arg("-m")
            .arg(&model)
            .arg("-f")
            .arg(audio_path)
            .arg("-l")
            .arg(&self.language)
            .arg("-nt")
            .arg("-np")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = timeout(TRANSCRIBE_TIMEOUT, cmd.output())
            .await
            .map_err(|_| TranscriptionError::Timeout)?
            .map_err(|e| TranscriptionError::InvocationFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscriptionError::InvocationFailed(format!(
                "whisper.cpp exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        // The transcript is the entirety of stdout, normalized
        let stdout = String::from_utf8_lossy(&output.stdout);
        Transcript::parse(&stdout).ok_or(TranscriptionError::NoSpeech)
    }

    async fn probe(&self) -> Result<(), TranscriptionError> {
        let binary = self.resolve_binary().await?;

        let mut cmd = Command::new(&binary);
        cmd.arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let status = timeout(PROBE_TIMEOUT, cmd.status())
            .await
            .map_err(|_| {
                TranscriptionError::InvocationFailed(
                    "whisper.cpp binary found but timed out".to_string(),
                )
            })?
            .map_err(|e| TranscriptionError::InvocationFailed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(TranscriptionError::InvocationFailed(
                "whisper.cpp binary found but failed to run".to_string(),
            ))
        }
    }
}
