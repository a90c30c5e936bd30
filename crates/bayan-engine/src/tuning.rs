//! Equal-tempered note-to-frequency table.
//!
//! Built once before the audio stream opens so the render path never calls
//! `pow`. Each entry is the previous one times the twelfth root of two.

use crate::note::{Note, NOTE_COUNT};

/// Frequency of G2 in Hz, the lowest playable note.
pub const G2_FREQUENCY: f64 = 97.999;

/// 2^(1/12), one equal-tempered semitone.
pub const SEMITONE_RATIO: f64 = 1.059_463_094_359_295_3;

/// Frequencies in Hz, indexed by [`Note::index`].
#[derive(Clone, Debug, PartialEq)]
pub struct TuningTable {
    frequencies: [f64; NOTE_COUNT],
}

impl TuningTable {
    /// Build the table with `root_frequency` as the lowest note.
    pub fn new(root_frequency: f64) -> Self {
        let mut frequencies = [0.0; NOTE_COUNT];
        let mut mult = 1.0;
        for freq in frequencies.iter_mut() {
            *freq = root_frequency * mult;
            mult *= SEMITONE_RATIO;
        }
        Self { frequencies }
    }

    /// Frequency of the note `index` semitones above the root.
    ///
    /// Panics if `index >= NOTE_COUNT`; validate indices at the boundary.
    pub fn compute_frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    pub fn frequency(&self, note: Note) -> f64 {
        self.frequencies[note.index()]
    }

    pub fn root(&self) -> f64 {
        self.frequencies[0]
    }

    pub fn frequencies(&self) -> &[f64; NOTE_COUNT] {
        &self.frequencies
    }
}

impl Default for TuningTable {
    fn default() -> Self {
        Self::new(G2_FREQUENCY)
    }
}
