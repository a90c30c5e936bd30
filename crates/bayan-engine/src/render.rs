//! Per-sample additive synthesis.
//!
//! Every held note contributes `sin(2π·f·t) / f`. Dividing by the note's own
//! frequency keeps higher notes from dominating the mix; the sum is then
//! scaled by a [`Normalization`] policy, multiplied by the gain, and clipped.
//! All notes share one time cursor.

use core::f64::consts::TAU;

use crate::config::SynthConfig;
use crate::context::SynthContext;
use crate::frame::Frame;
use crate::keys::KeyState;
use crate::note::Note;
use crate::tuning::TuningTable;

/// Once the cursor passes this many seconds it resets on the next silent frame.
///
/// The cursor never wraps while a note sounds. An `f64` cursor still steps
/// within 1e-5 of `1 / sample_rate` after a week of continuous playing.
pub const WRAP_THRESHOLD_SECS: f64 = 600.0;

/// How the raw additive sum is scaled before gain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Normalization {
    /// Multiply by `mean_frequency / N`, i.e. `sum(f) / N²`.
    /// A single note peaks at exactly 1.0.
    #[default]
    MeanFrequencyPerVoice,
    /// Multiply by a constant regardless of how many notes are held.
    Fixed(f64),
}

impl Normalization {
    fn scale(self, frequency_sum: f64, voices: usize) -> f64 {
        match self {
            Normalization::MeanFrequencyPerVoice => {
                let n = voices as f64;
                frequency_sum / (n * n)
            }
            Normalization::Fixed(factor) => factor,
        }
    }
}

/// What happens to samples outside `[-1.0, 1.0]` after gain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipPolicy {
    /// Clamp to `[-1.0, 1.0]`.
    #[default]
    Hard,
    /// Leave it to the device.
    Passthrough,
}

impl ClipPolicy {
    fn apply(self, value: f64) -> f64 {
        match self {
            ClipPolicy::Hard => value.clamp(-1.0, 1.0),
            ClipPolicy::Passthrough => value,
        }
    }
}

/// Normalized sum at time `t`, or `None` when no note is held.
fn mix(
    keys: &KeyState,
    tuning: &TuningTable,
    t: f64,
    normalization: Normalization,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut frequency_sum = 0.0;
    let mut voices = 0;

    for note in Note::ALL {
        if !keys.is_note_active(note) {
            continue;
        }
        let frequency = tuning.frequency(note);
        sum += libm::sin(TAU * frequency * t) / frequency;
        frequency_sum += frequency;
        voices += 1;
    }

    if voices == 0 {
        return None;
    }
    Some(sum * normalization.scale(frequency_sum, voices))
}

/// The normalized additive signal at time `t`, before gain.
///
/// Exactly `0.0` when no note is held.
pub fn additive_sample(
    keys: &KeyState,
    tuning: &TuningTable,
    t: f64,
    normalization: Normalization,
) -> f64 {
    mix(keys, tuning, t, normalization).unwrap_or(0.0)
}

/// Owns the time cursor and turns the shared state into samples.
#[derive(Clone, Debug)]
pub struct Renderer {
    /// Seconds since the last wrap
    time: f64,
    /// 1 / sample_rate
    frame_period: f64,
    normalization: Normalization,
    clip: ClipPolicy,
}

impl Renderer {
    pub fn new(config: &SynthConfig) -> Self {
        Self {
            time: 0.0,
            frame_period: config.frame_period(),
            normalization: config.normalization,
            clip: config.clip,
        }
    }

    /// Compute one sample and advance the cursor by one frame.
    pub fn render_sample(&mut self, ctx: &SynthContext) -> f32 {
        let muted = ctx.gain.is_muted();
        let mixed = if muted {
            None
        } else {
            mix(&ctx.keys, ctx.tuning(), self.time, self.normalization)
        };

        let value = match mixed {
            Some(v) => self.clip.apply(v * ctx.gain.gain() as f64) as f32,
            None => 0.0,
        };

        self.advance(mixed.is_none());
        value
    }

    pub fn render_frame(&mut self, ctx: &SynthContext) -> Frame {
        Frame::mono(self.render_sample(ctx))
    }

    fn advance(&mut self, silent: bool) {
        self.time += self.frame_period;
        if silent && self.time >= WRAP_THRESHOLD_SECS {
            self.time = 0.0;
        }
    }

    /// Current cursor position in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    pub fn frame_period(&self) -> f64 {
        self.frame_period
    }

}
