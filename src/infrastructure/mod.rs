//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems: the audio backend, the
//! whisper.cpp binary, clipboard tools, and the config file.

pub mod clipboard;
pub mod config;
pub mod recording;
pub mod transcription;

// Re-export adapters
pub use clipboard::{create_clipboard, FallbackClipboard};
pub use config::XdgConfigStore;
pub use recording::CpalRecorder;
pub use transcription::WhisperCppTranscriber;
