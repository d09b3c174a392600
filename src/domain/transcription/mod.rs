//! Transcription domain module

mod model_size;
mod transcript;

pub use model_size::ModelSize;
pub use transcript::Transcript;
