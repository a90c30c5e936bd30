//! Engine configuration.

use crate::gain::INITIAL_GAIN;
use crate::render::{ClipPolicy, Normalization};
use crate::tuning::G2_FREQUENCY;

/// Reference output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Reference frames per audio callback.
pub const BLOCK_SIZE: u32 = 64;

/// Output channels; every channel receives the same sample.
pub const CHANNELS: u16 = 2;

/// Everything the engine needs to know before the stream opens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthConfig {
    pub sample_rate: u32,
    pub block_size: u32,
    pub channels: u16,
    /// Frequency of the lowest note in Hz.
    pub root_frequency: f64,
    pub initial_gain: f32,
    pub normalization: Normalization,
    pub clip: ClipPolicy,
}

impl SynthConfig {
    /// Time cursor increment per frame.
    pub fn frame_period(&self) -> f64 {
        1.0 / self.sample_rate as f64
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            block_size: BLOCK_SIZE,
            channels: CHANNELS,
            root_frequency: G2_FREQUENCY,
            initial_gain: INITIAL_GAIN,
            normalization: Normalization::default(),
            clip: ClipPolicy::default(),
        }
    }
}
