//! Recording infrastructure module
//!
//! Provides cross-platform microphone capture using cpal, persisted
//! as 16-bit mono WAV via hound.

mod cpal_recorder;
mod wav;

pub use cpal_recorder::CpalRecorder;
pub use wav::write_pcm16;
