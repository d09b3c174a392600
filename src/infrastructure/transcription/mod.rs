//! Transcription infrastructure module
//!
//! Locates the whisper.cpp binary and model weights on disk and
//! invokes the binary as a subprocess.

pub mod locator;
mod whisper_cpp;

pub use whisper_cpp::WhisperCppTranscriber;
