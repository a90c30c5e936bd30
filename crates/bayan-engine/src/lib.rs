//! Real-time additive synthesis engine for bayan.
//!
//! Holds the note set, the equal-tempered tuning table, the shared key and
//! gain state, and the per-sample renderer the audio callback drives.
//!
//! Designed to be `no_std` compatible. Nothing in here allocates after
//! construction.

#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod context;
mod driver;
mod frame;
mod gain;
mod keys;
mod note;
mod render;
mod tuning;

pub use config::{SynthConfig, BLOCK_SIZE, CHANNELS, SAMPLE_RATE};
pub use context::SynthContext;
pub use driver::{Driver, StreamStatus};
pub use frame::Frame;
pub use gain::{GainChange, GainControl, FINE_GAIN_STEP, GAIN_FLOOR, GAIN_STEP, INITIAL_GAIN};
pub use keys::KeyState;
pub use note::{Note, NOTE_COUNT};
pub use render::{additive_sample, ClipPolicy, Normalization, Renderer, WRAP_THRESHOLD_SECS};
pub use tuning::{TuningTable, G2_FREQUENCY, SEMITONE_RATIO};
