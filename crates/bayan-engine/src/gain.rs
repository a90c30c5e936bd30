//! Output gain and mute gate.
//!
//! Gain is stored as `f32` bits in an `AtomicU32` so the audio callback can
//! read it without ever waiting on the input thread.

use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Coarse gain step (arrow keys).
pub const GAIN_STEP: f32 = 0.1;

/// Fine gain step (Ctrl + arrow keys).
pub const FINE_GAIN_STEP: f32 = 0.01;

/// Results below this snap to silence.
pub const GAIN_FLOOR: f32 = 0.01;

/// Gain at startup.
pub const INITIAL_GAIN: f32 = 0.95;

/// Notification emitted by every gain adjustment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GainChange {
    /// Landed on (or was clamped to) 100%.
    Ceiling,
    /// Fell under [`GAIN_FLOOR`] and snapped to zero.
    Silenced,
    /// Any level in between, as a truncated percentage.
    Level(u8),
}

impl GainChange {
    fn for_gain(gain: f32) -> Self {
        if gain >= 1.0 {
            GainChange::Ceiling
        } else if gain <= 0.0 {
            GainChange::Silenced
        } else {
            GainChange::Level((gain * 100.0) as u8)
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            GainChange::Ceiling => 100,
            GainChange::Silenced => 0,
            GainChange::Level(p) => *p,
        }
    }
}

impl fmt::Display for GainChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GainChange::Ceiling => write!(f, "Changed volume to 100% (maximum)"),
            GainChange::Silenced => write!(f, "Volume silenced (0%)"),
            GainChange::Level(p) => write!(f, "Changed volume to {}%", p),
        }
    }
}

/// Clamp to `[0, 1]`, snapping anything under the floor to exactly zero.
fn clamp_gain(gain: f32) -> f32 {
    if gain < GAIN_FLOOR {
        0.0
    } else {
        gain.min(1.0)
    }
}

/// Linear output gain plus the mute flag.
#[derive(Debug)]
pub struct GainControl {
    gain_bits: AtomicU32,
    muted: AtomicBool,
}

impl GainControl {
    pub fn new(initial: f32) -> Self {
        Self {
            gain_bits: AtomicU32::new(clamp_gain(initial).to_bits()),
            muted: AtomicBool::new(false),
        }
    }

    pub fn gain(&self) -> f32 {
        f32::from_bits(self.gain_bits.load(Ordering::Relaxed))
    }

    /// Set the gain outright, with the same clamping as [`Self::adjust_gain`].
    pub fn set_gain(&self, gain: f32) -> GainChange {
        let gain = clamp_gain(gain);
        self.gain_bits.store(gain.to_bits(), Ordering::Relaxed);
        GainChange::for_gain(gain)
    }

    /// Add `delta` to the gain and report where it landed.
    pub fn adjust_gain(&self, delta: f32) -> GainChange {
        let mut gain = 0.0;
        // The closure always returns Some, so this never fails.
        let _ = self
            .gain_bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                gain = clamp_gain(f32::from_bits(bits) + delta);
                Some(gain.to_bits())
            });
        GainChange::for_gain(gain)
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    pub fn set_mute(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    /// Flip the mute flag, returning the new state.
    pub fn toggle_mute(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for GainControl {
    fn default() -> Self {
        Self::new(INITIAL_GAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial_gain_unmuted() {
        let gain = GainControl::default();
        assert_eq!(gain.gain(), INITIAL_GAIN);
        assert!(!gain.is_muted());
    }

    #[test]
    fn saturates_at_ceiling() {
        let gain = GainControl::new(0.95);
        assert_eq!(gain.adjust_gain(GAIN_STEP), GainChange::Ceiling);
        assert_eq!(gain.gain(), 1.0);
        for _ in 0..5 {
            assert_eq!(gain.adjust_gain(GAIN_STEP), GainChange::Ceiling);
            assert_eq!(gain.gain(), 1.0);
        }
    }

    #[test]
    fn snaps_to_zero_below_floor() {
        let gain = GainControl::new(0.05);
        let mut reached_zero = false;
        for _ in 0..10 {
            let change = gain.adjust_gain(-FINE_GAIN_STEP);
            let level = gain.gain();
            assert!(level == 0.0 || level >= GAIN_FLOOR, "stuck at {}", level);
            if level == 0.0 {
                assert_eq!(change, GainChange::Silenced);
                reached_zero = true;
            }
        }
        assert!(reached_zero);
        assert_eq!(gain.gain(), 0.0);
    }

    #[test]
    fn coarse_step_down_from_low_gain_silences() {
        let gain = GainControl::new(0.05);
        assert_eq!(gain.adjust_gain(-GAIN_STEP), GainChange::Silenced);
        assert_eq!(gain.gain(), 0.0);
        assert_eq!(gain.adjust_gain(-GAIN_STEP), GainChange::Silenced);
        assert_eq!(gain.gain(), 0.0);
    }

    #[test]
    fn intermediate_change_reports_percentage() {
        let gain = GainControl::new(0.5);
        assert_eq!(gain.adjust_gain(GAIN_STEP), GainChange::Level(60));
        assert_eq!(gain.adjust_gain(-GAIN_STEP * 2.0), GainChange::Level(40));
    }

    #[test]
    fn climbing_from_silence_works() {
        let gain = GainControl::new(0.0);
        assert_eq!(gain.adjust_gain(GAIN_STEP), GainChange::Level(10));
    }

    #[test]
    fn notifications_have_distinct_text() {
        assert_eq!(GainChange::Level(42).to_string(), "Changed volume to 42%");
        assert_ne!(
            GainChange::Ceiling.to_string(),
            GainChange::Level(100).to_string()
        );
        assert_eq!(GainChange::Silenced.percent(), 0);
    }

    #[test]
    fn set_gain_clamps() {
        let gain = GainControl::default();
        assert_eq!(gain.set_gain(3.0), GainChange::Ceiling);
        assert_eq!(gain.gain(), 1.0);
        assert_eq!(gain.set_gain(0.005), GainChange::Silenced);
        assert_eq!(gain.gain(), 0.0);
        assert_eq!(gain.set_gain(-1.0), GainChange::Silenced);
    }

    #[test]
    fn mute_is_independent_of_gain() {
        let gain = GainControl::new(0.7);
        assert!(gain.toggle_mute());
        assert!(gain.is_muted());
        assert_eq!(gain.gain(), 0.7);
        assert!(!gain.toggle_mute());
        assert!(!gain.is_muted());
        gain.set_mute(true);
        gain.set_mute(true);
        assert!(gain.is_muted());
    }
}
