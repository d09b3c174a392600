//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::transcription::ModelSize;

/// Default language code for transcription
pub const DEFAULT_LANG: &str = "en";

/// Default transcript output directory
pub const DEFAULT_OUTPUT_DIR: &str = "./transcripts";

/// Default capture sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub lang: Option<String>,
    pub model: Option<String>,
    pub output_dir: Option<String>,
    pub sample_rate: Option<u32>,
    pub clipboard: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            lang: Some(DEFAULT_LANG.to_string()),
            model: Some(ModelSize::default().to_string()),
            output_dir: Some(DEFAULT_OUTPUT_DIR.to_string()),
            sample_rate: Some(DEFAULT_SAMPLE_RATE),
            clipboard: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            lang: other.lang.or(self.lang),
            model: other.model.or(self.model),
            output_dir: other.output_dir.or(self.output_dir),
            sample_rate: other.sample_rate.or(self.sample_rate),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Get the language code, or "en" if not set
    pub fn lang_or_default(&self) -> String {
        self.lang
            .clone()
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    /// Get the model as parsed ModelSize, or the default if not set/invalid
    pub fn model_or_default(&self) -> ModelSize {
        self.model
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the transcript output directory, or "./transcripts" if not set
    pub fn output_dir_or_default(&self) -> PathBuf {
        PathBuf::from(
            self.output_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
        )
    }

    /// Get the sample rate in Hz, or 16000 if not set
    pub fn sample_rate_or_default(&self) -> u32 {
        self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE)
    }

    /// Get the clipboard setting, or true if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(true)
    }
}
