//! Audio frame type.

/// A stereo audio frame (32-bit float, nominally `[-1.0, 1.0]`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub left: f32,
    pub right: f32,
}

impl Frame {
    /// Create a silent frame.
    pub const fn silence() -> Self {
        Self {
            left: 0.0,
            right: 0.0,
        }
    }

    /// Create a mono frame (same value for both channels).
    pub const fn mono(value: f32) -> Self {
        Self {
            left: value,
            right: value,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.left == 0.0 && self.right == 0.0
    }

    /// Convert to signed 16-bit PCM, saturating out-of-range values.
    pub fn to_i16(self) -> (i16, i16) {
        fn convert(v: f32) -> i16 {
            (v.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
        }
        (convert(self.left), convert(self.right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_duplicates_value() {
        let frame = Frame::mono(0.25);
        assert_eq!(frame.left, 0.25);
        assert_eq!(frame.right, 0.25);
        assert!(!frame.is_silent());
        assert!(Frame::silence().is_silent());
    }

    #[test]
    fn to_i16_saturates() {
        assert_eq!(Frame::mono(1.0).to_i16(), (i16::MAX, i16::MAX));
        assert_eq!(Frame::mono(-4.0).to_i16(), (-i16::MAX, -i16::MAX));
        assert_eq!(Frame::silence().to_i16(), (0, 0));
    }
}
