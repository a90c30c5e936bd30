//! Audio output trait and error types.

/// Error type for audio operations.
#[derive(Debug)]
pub enum AudioError {
    /// Failed to query or initialize the audio device
    DeviceInit(String),
    /// Device cannot do stereo f32 at the requested rate
    UnsupportedConfig { sample_rate: u32, channels: u16 },
    /// Failed to create audio stream
    StreamCreate(String),
    /// Playback error
    Playback(String),
    /// No audio device available
    NoDevice,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::DeviceInit(msg) => write!(f, "Device init error: {}", msg),
            AudioError::UnsupportedConfig {
                sample_rate,
                channels,
            } => write!(
                f,
                "Output device does not support {} channel f32 output at {} Hz",
                channels, sample_rate
            ),
            AudioError::StreamCreate(msg) => write!(f, "Stream create error: {}", msg),
            AudioError::Playback(msg) => write!(f, "Playback error: {}", msg),
            AudioError::NoDevice => write!(f, "No default output device"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Trait for pull-based audio output backends.
///
/// The backend owns the render callback; callers only start and stop it.
pub trait AudioOutput {
    /// Get the sample rate.
    fn sample_rate(&self) -> u32;

    /// Start (or resume) playback.
    fn start(&mut self) -> Result<(), AudioError>;

    /// Stop playback. The callback is never interrupted mid-block.
    fn stop(&mut self) -> Result<(), AudioError>;

    fn is_running(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_config_names_the_format() {
        let err = AudioError::UnsupportedConfig {
            sample_rate: 44100,
            channels: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("44100"));
        assert!(msg.contains("2 channel"));
    }

    #[test]
    fn no_device_message() {
        assert_eq!(AudioError::NoDevice.to_string(), "No default output device");
    }
}
