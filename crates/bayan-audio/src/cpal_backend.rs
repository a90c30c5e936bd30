//! CPAL-based audio output backend.
//!
//! The synth is rendered directly inside the cpal data callback; there is no
//! intermediate ring buffer.

use bayan_engine::{Driver, SynthConfig, SynthContext};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{
    BufferSize, Device, PauseStreamError, SampleFormat, SampleRate, Stream, StreamConfig,
    SupportedBufferSize,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::traits::{AudioError, AudioOutput};

/// CPAL-based audio output.
pub struct CpalOutput {
    config: StreamConfig,
    stream: Stream,
    running: Arc<AtomicBool>,
}

impl CpalOutput {
    /// Open the default output device and build a paused stream that renders
    /// `context` on every callback.
    pub fn new(context: Arc<SynthContext>, synth: &SynthConfig) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoDevice)?;

        if let Ok(name) = device.name() {
            log::info!("Using output device {}", name);
        }

        let config = negotiate_config(&device, synth)?;
        let running = Arc::new(AtomicBool::new(false));
        let stream = build_stream(&device, &config, Driver::new(context, synth), running.clone())?;

        Ok(Self {
            config,
            stream,
            running,
        })
    }

    pub fn channels(&self) -> u16 {
        self.config.channels
    }

    /// Frames per callback, if the device honoured a fixed size.
    pub fn block_size(&self) -> Option<u32> {
        match self.config.buffer_size {
            BufferSize::Fixed(frames) => Some(frames),
            BufferSize::Default => None,
        }
    }
}

/// Pick a stream config: stereo f32 at the requested rate, with the
/// requested block size when the device allows it.
fn negotiate_config(device: &Device, synth: &SynthConfig) -> Result<StreamConfig, AudioError> {
    let rate = SampleRate(synth.sample_rate);
    let supported = device
        .supported_output_configs()
        .map_err(|e| AudioError::DeviceInit(e.to_string()))?
        .find(|range| {
            range.channels() == synth.channels
                && range.sample_format() == SampleFormat::F32
                && range.min_sample_rate() <= rate
                && rate <= range.max_sample_rate()
        })
        .ok_or(AudioError::UnsupportedConfig {
            sample_rate: synth.sample_rate,
            channels: synth.channels,
        })?;

    let buffer_size = match supported.buffer_size() {
        SupportedBufferSize::Range { min, max }
            if (*min..=*max).contains(&synth.block_size) =>
        {
            BufferSize::Fixed(synth.block_size)
        }
        _ => {
            log::warn!(
                "Device cannot use {}-frame blocks, using its default",
                synth.block_size
            );
            BufferSize::Default
        }
    };

    Ok(StreamConfig {
        channels: synth.channels,
        sample_rate: rate,
        buffer_size,
    })
}

fn build_stream(
    device: &Device,
    config: &StreamConfig,
    mut driver: Driver<Arc<SynthContext>>,
    running: Arc<AtomicBool>,
) -> Result<Stream, AudioError> {
    let stream = device
        .build_output_stream(
            config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                if !running.load(Ordering::Relaxed) {
                    data.fill(0.0);
                    return;
                }
                driver.render_interleaved(data);
            },
            |err| log::error!("Audio stream error: {}", err),
            None,
        )
        .map_err(|e| AudioError::StreamCreate(e.to_string()))?;

    // Some hosts start streams eagerly; keep it paused until start().
    report_initial_pause(stream.pause());
    Ok(stream)
}

/// Returns whether the new stream is paused. A playing stream still outputs
/// silence until `start()` raises the running flag.
fn report_initial_pause(result: Result<(), PauseStreamError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to pause new audio stream, muting it until started: {}", e);
            false
        }
    }
}

impl AudioOutput for CpalOutput {
    fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    fn start(&mut self) -> Result<(), AudioError> {
        self.running.store(true, Ordering::Relaxed);
        self.stream
            .play()
            .map_err(|e| AudioError::Playback(e.to_string()))
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        self.running.store(false, Ordering::Relaxed);
        self.stream
            .pause()
            .map_err(|e| AudioError::Playback(e.to_string()))
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}
