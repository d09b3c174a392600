//! Cross-platform microphone capture using cpal

use std::path::Path;

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, StreamConfig};
use crossbeam_channel::unbounded;

use super::wav;
use crate::application::ports::{Recorder, RecordingError};
use crate::domain::recording::SampleBuffer;

/// Microphone recorder using cpal.
///
/// The stream is owned by a blocking task because cpal::Stream is not
/// Send. The stream callback's only job is handing each sample block to
/// a channel; the task blocks on one line of stdin as the stop signal
/// and drains the channel afterwards.
pub struct CpalRecorder;

impl CpalRecorder {
    /// Create a new cpal-based recorder
    pub fn new() -> Self {
        Self
    }

    /// Get the default input device
    fn default_device() -> Result<cpal::Device, RecordingError> {
        cpal::default_host()
            .default_input_device()
            .ok_or(RecordingError::NoAudioDevice)
    }

    /// Capture until ENTER, then persist the buffered samples as WAV.
    /// Runs on a blocking thread.
    fn capture_blocking(sample_rate: u32, output_path: &Path) -> Result<(), RecordingError> {
        let device = Self::default_device()?;

        if let Ok(name) = device.name() {
            eprintln!("Using microphone: {}", name);
        }

        let config = StreamConfig {
            channels: 1,
            sample_rate: SampleRate(sample_rate),
            buffer_size: BufferSize::Default,
        };

        let (tx, rx) = unbounded::<Vec<f32>>();

        let stream = device
            .build_input_stream(
                &config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    let _ = tx.send(data.to_vec());
                },
                |err| eprintln!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

        stream
            .play()
            .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

        eprintln!("Recording at {} Hz... press ENTER to stop.", sample_rate);
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);

        // Dropping the stream ends the callback and disconnects the sender,
        // so the drain below sees every delivered block and then stops.
        drop(stream);
        eprintln!("Recording stopped.");

        let mut buffer = SampleBuffer::new();
        while let Ok(block) = rx.try_recv() {
            buffer.push_block(block);
        }

        if buffer.is_empty() {
            return Err(RecordingError::EmptyRecording);
        }

        wav::write_pcm16(output_path, &buffer.into_pcm16(), sample_rate)?;
        eprintln!("Recording saved: {}", output_path.display());

        Ok(())
    }
}

impl Default for CpalRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Recorder for CpalRecorder {
    async fn record(&self, sample_rate: u32, output_path: &Path) -> Result<(), RecordingError> {
        let path = output_path.to_path_buf();

        tokio::task::spawn_blocking(move || Self::capture_blocking(sample_rate, &path))
            .await
            .map_err(|e| RecordingError::StartFailed(format!("Task join error: {}", e)))?
    }

    async fn probe(&self) -> Result<(), RecordingError> {
        tokio::task::spawn_blocking(|| Self::default_device().map(|_| ()))
            .await
            .map_err(|e| RecordingError::StartFailed(format!("Task join error: {}", e)))?
    }
}
