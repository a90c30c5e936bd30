//! The synth controller shared by the windowed app and the CLI.

use bayan_audio::{AudioError, AudioOutput, CpalOutput};
use bayan_engine::{Driver, Frame, GainChange, Note, SynthConfig, SynthContext};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::input::{map_key, KeyInput, SynthAction};
use crate::wav;

/// Owns the shared synth state and the audio stream that reads it.
pub struct Controller {
    config: SynthConfig,
    context: Arc<SynthContext>,
    output: Option<CpalOutput>,
    should_close: Arc<AtomicBool>,
}

impl Controller {
    pub fn new(config: SynthConfig) -> Self {
        Self {
            context: Arc::new(SynthContext::new(&config)),
            config,
            output: None,
            should_close: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn context(&self) -> &Arc<SynthContext> {
        &self.context
    }

    // --- Input ---

    /// Map a key event and apply the resulting action, if any.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<SynthAction> {
        let action = map_key(input)?;
        self.apply(action);
        Some(action)
    }

    /// Apply one action to the shared state.
    ///
    /// Gain adjustments return the notification they produced; it has
    /// already been logged.
    pub fn apply(&mut self, action: SynthAction) -> Option<GainChange> {
        match action {
            SynthAction::NoteOn(note) => {
                log::debug!("Note on {}", note);
                self.context.keys.set_note_active(note, true);
            }
            SynthAction::NoteOff(note) => {
                log::debug!("Note off {}", note);
                self.context.keys.set_note_active(note, false);
            }
            SynthAction::ToggleMute => {
                if self.context.gain.toggle_mute() {
                    log::info!("Muted");
                } else {
                    log::info!("Unmuted");
                }
            }
            SynthAction::AdjustGain(delta) => {
                let change = self.context.gain.adjust_gain(delta);
                log::info!("{}", change);
                return Some(change);
            }
            SynthAction::Quit => self.request_close(),
        }
        None
    }

    /// Hold or release a set of notes directly.
    pub fn set_notes(&self, notes: &[Note], active: bool) {
        for note in notes {
            self.context.keys.set_note_active(*note, active);
        }
    }

    pub fn release_all(&self) {
        self.context.keys.release_all();
    }

    // --- Shutdown ---

    pub fn request_close(&self) {
        self.should_close.store(true, Ordering::Relaxed);
    }

    pub fn should_close(&self) -> bool {
        self.should_close.load(Ordering::Relaxed)
    }

    /// A handle other threads can use to ask the event loop to exit.
    pub fn close_signal(&self) -> Arc<AtomicBool> {
        self.should_close.clone()
    }

    // --- Real-time playback ---

    /// Open the default device and start rendering into it.
    pub fn start_audio(&mut self) -> Result<(), AudioError> {
        if self.output.is_none() {
            let output = CpalOutput::new(self.context.clone(), &self.config)?;
            match output.block_size() {
                Some(frames) => log::info!(
                    "Opened {} Hz stream, {} channels, {} frames per block",
                    output.sample_rate(),
                    output.channels(),
                    frames
                ),
                None => log::info!(
                    "Opened {} Hz stream, {} channels, device block size",
                    output.sample_rate(),
                    output.channels()
                ),
            }
            self.output = Some(output);
        }
        match self.output.as_mut() {
            Some(output) => output.start(),
            None => Ok(()),
        }
    }

    /// Stop and close the stream. Safe to call when nothing is playing.
    pub fn stop_audio(&mut self) {
        if let Some(mut output) = self.output.take() {
            if let Err(e) = output.stop() {
                log::warn!("Failed to stop audio stream: {}", e);
            }
        }
    }

    pub fn is_audio_running(&self) -> bool {
        self.output.as_ref().is_some_and(|o| o.is_running())
    }

    // --- Offline rendering ---

    /// Render `frame_count` frames from the current key state, starting
    /// from a fresh time cursor.
    pub fn render_frames(&self, frame_count: usize) -> Vec<Frame> {
        let mut driver = Driver::new(&*self.context, &self.config);
        let mut frames = vec![Frame::silence(); frame_count];
        driver.render_frames(&mut frames);
        frames
    }

    pub fn render_to_wav(&self, seconds: f32) -> Vec<u8> {
        let frame_count = (self.config.sample_rate as f32 * seconds.max(0.0)) as usize;
        let frames = self.render_frames(frame_count);
        wav::frames_to_wav(&frames, self.config.sample_rate)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(SynthConfig::default())
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop_audio();
    }
}
