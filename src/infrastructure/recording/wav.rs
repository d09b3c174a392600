//! WAV persistence for captured audio

use std::fs;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::RecordingError;

/// Write 16-bit mono PCM samples as an uncompressed WAV file,
/// creating parent directories as needed.
pub fn write_pcm16(path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), RecordingError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RecordingError::WriteFailed(e.to_string()))?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| RecordingError::WriteFailed(e.to_string()))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| RecordingError::WriteFailed(e.to_string()))?;
    }

    writer
        .finalize()
        .map_err(|e| RecordingError::WriteFailed(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_wav_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recordings").join("recording_test.wav");

        write_pcm16(&path, &[0, 100, -100, i16::MAX], 16_000).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 16_000);
        assert_eq!(spec.bits_per_sample, 16);

        let samples: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0, 100, -100, i16::MAX]);
    }

    #[test]
    #[cfg(unix)]
    fn reports_unwritable_path() {
        let err = write_pcm16(Path::new("/dev/null/recording.wav"), &[0], 16_000).unwrap_err();
        assert!(matches!(err, RecordingError::WriteFailed(_)));
    }
}
