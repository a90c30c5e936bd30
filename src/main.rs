//! bayan - a keyboard-driven additive synthesizer.
//! Opens a winit window for keyboard focus and plays held keys through cpal.
//!
//! Keys: A Z W S X E D C ... play G2 upwards, `\` toggles mute,
//! Up/Down change volume (Ctrl for fine steps), Ctrl+Q quits.

use anyhow::Context;
use bayan_master::{Controller, KeyInput, SynthConfig};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowAttributes, WindowId};

#[cfg(feature = "alloc_check")]
#[global_allocator]
static A: assert_no_alloc::AllocDisabler = assert_no_alloc::AllocDisabler;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SynthConfig::default();
    let mut controller = Controller::new(config);
    controller
        .start_audio()
        .context("Failed to start audio output")?;
    log::info!(
        "Starting bayan with initial volume {}%",
        (config.initial_gain * 100.0) as u32
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut state = AppState {
        window: None,
        modifiers: ModifiersState::empty(),
        controller,
        error: None,
    };
    event_loop.run_app(&mut state)?;

    match state.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct AppState {
    window: Option<Window>,
    modifiers: ModifiersState,
    controller: Controller,
    /// Fatal error raised inside the event loop
    error: Option<anyhow::Error>,
}

impl AppState {
    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        self.controller.release_all();
        self.controller.stop_audio();
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_inner_size(LogicalSize::new(800.0_f32, 600.0))
            .with_title("bayan");

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                self.error = Some(anyhow::Error::new(e).context("Failed to create a window"));
                self.shut_down(event_loop);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.controller.request_close(),
            WindowEvent::ModifiersChanged(mods) => self.modifiers = mods.state(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(input) = KeyInput::from_winit(&event, self.modifiers) {
                    self.controller.handle_key(&input);
                }
            }
            // Key-up events go elsewhere once focus is lost.
            WindowEvent::Focused(false) => self.controller.release_all(),
            _ => {}
        }

        if self.controller.should_close() {
            self.shut_down(event_loop);
        }
    }
}
