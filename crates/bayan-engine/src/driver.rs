//! Render loop driver: the entry point the audio callback calls.

use core::ops::Deref;

use crate::config::SynthConfig;
use crate::context::SynthContext;
use crate::frame::Frame;
use crate::render::Renderer;

/// Tells the audio transport whether to keep the stream running.
///
/// The synth has no end of its own; the stream stops only when the
/// transport is told to between callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    Continue,
}

/// Fills interleaved output buffers from the shared [`SynthContext`].
///
/// `C` is whatever handle the caller shares the context through: an `Arc`
/// on the desktop, a plain reference in tests.
pub struct Driver<C>
where
    C: Deref<Target = SynthContext>,
{
    context: C,
    renderer: Renderer,
    channels: usize,
}

impl<C> Driver<C>
where
    C: Deref<Target = SynthContext>,
{
    pub fn new(context: C, config: &SynthConfig) -> Self {
        Self {
            context,
            renderer: Renderer::new(config),
            channels: (config.channels as usize).max(1),
        }
    }

    /// Write `frame_count` interleaved frames into `out`.
    ///
    /// Every channel of a frame gets the same sample. Never blocks or
    /// allocates, and always asks the transport to continue.
    ///
    /// If `out` holds fewer than `frame_count` whole frames, only the frames
    /// that fit are rendered and the cursor advances by that many; a trailing
    /// partial frame is left untouched.
    pub fn render(&mut self, out: &mut [f32], frame_count: usize) -> StreamStatus {
        let frame_count = frame_count.min(out.len() / self.channels);
        let len = frame_count * self.channels;

        #[cfg(feature = "alloc_check")]
        assert_no_alloc::assert_no_alloc(|| self.fill(&mut out[..len]));
        #[cfg(not(feature = "alloc_check"))]
        self.fill(&mut out[..len]);

        StreamStatus::Continue
    }

    /// Fill all of `out`, deriving the frame count from its length.
    pub fn render_interleaved(&mut self, out: &mut [f32]) -> StreamStatus {
        let frame_count = out.len() / self.channels;
        self.render(out, frame_count)
    }

    /// Render one stereo [`Frame`] per slot.
    pub fn render_frames(&mut self, frames: &mut [Frame]) {
        for frame in frames.iter_mut() {
            *frame = self.renderer.render_frame(&self.context);
        }
    }

    fn fill(&mut self, out: &mut [f32]) {
        for chunk in out.chunks_exact_mut(self.channels) {
            let sample = self.renderer.render_sample(&self.context);
            chunk.fill(sample);
        }
    }

    pub fn context(&self) -> &SynthContext {
        &self.context
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}
