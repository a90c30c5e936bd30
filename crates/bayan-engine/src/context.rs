//! The process-wide synthesis state.

use crate::config::SynthConfig;
use crate::gain::GainControl;
use crate::keys::KeyState;
use crate::tuning::TuningTable;

/// State shared between the input side and the audio callback.
///
/// The input side writes keys, gain and mute; the callback only reads them.
/// Every field is lock-free, so share it behind an `Arc` and hand one clone
/// to each side.
#[derive(Debug)]
pub struct SynthContext {
    pub keys: KeyState,
    pub gain: GainControl,
    tuning: TuningTable,
}

impl SynthContext {
    pub fn new(config: &SynthConfig) -> Self {
        Self::with_tuning(TuningTable::new(config.root_frequency), config.initial_gain)
    }

    pub fn with_tuning(tuning: TuningTable, initial_gain: f32) -> Self {
        Self {
            keys: KeyState::new(),
            gain: GainControl::new(initial_gain),
            tuning,
        }
    }

    pub fn tuning(&self) -> &TuningTable {
        &self.tuning
    }
}

impl Default for SynthContext {
    fn default() -> Self {
        Self::new(&SynthConfig::default())
    }
}
