//! Capture sample buffer

/// Ordered buffer of mono float sample blocks as delivered by the
/// input stream callback.
///
/// Blocks are kept in arrival order and only concatenated when the
/// buffer is converted for persistence.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    blocks: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one block of samples in arrival order
    pub fn push_block(&mut self, block: Vec<f32>) {
        self.blocks.push(block);
    }

    /// True if no blocks were captured
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total number of samples across all blocks
    pub fn len(&self) -> usize {
        self.blocks.iter().map(Vec::len).sum()
    }

    /// Convert the buffered float samples to 16-bit PCM.
    ///
    /// Each sample is scaled by 32767 and truncated toward zero; values
    /// outside [-1.0, 1.0] saturate at the i16 bounds.
    pub fn into_pcm16(self) -> Vec<i16> {
        self.blocks
            .into_iter()
            .flatten()
            .map(|s| (s * 32767.0) as i16)
            .collect()
    }
}
