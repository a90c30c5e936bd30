//! Headless controller for bayan.
//!
//! Owns the shared synth context, turns key events into state changes,
//! drives the audio backend, and renders offline for export and tests.

mod controller;
mod input;
mod wav;

pub use controller::Controller;
pub use input::{key_to_note, map_key, KeyInput, KeyMods, SynthAction};
pub use wav::{frames_to_wav, write_wav};

// Re-export common types so callers don't need bayan-engine directly.
pub use bayan_audio::AudioError;
pub use bayan_engine::{Frame, GainChange, Note, SynthConfig, SynthContext};
