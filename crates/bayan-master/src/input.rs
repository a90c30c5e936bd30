//! Keyboard input mapping.
//!
//! Pure functions that convert raw key events into synth actions.

use bayan_engine::{Note, FINE_GAIN_STEP, GAIN_STEP};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Modifier keys held during a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyMods {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl KeyMods {
    pub const NONE: KeyMods = KeyMods {
        shift: false,
        ctrl: false,
        alt: false,
        super_key: false,
    };

    pub const CTRL: KeyMods = KeyMods {
        ctrl: true,
        ..KeyMods::NONE
    };

    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.super_key)
    }
}

impl From<ModifiersState> for KeyMods {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            super_key: state.super_key(),
        }
    }
}

/// A physical key press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    pub pressed: bool,
    /// The platform re-fired a key that is already down.
    pub repeat: bool,
    pub mods: KeyMods,
}

impl KeyInput {
    pub fn press(code: KeyCode, mods: KeyMods) -> Self {
        Self {
            code,
            pressed: true,
            repeat: false,
            mods,
        }
    }

    pub fn release(code: KeyCode, mods: KeyMods) -> Self {
        Self {
            code,
            pressed: false,
            repeat: false,
            mods,
        }
    }

    /// Convert a winit key event. Keys without a physical code are dropped.
    pub fn from_winit(event: &KeyEvent, mods: ModifiersState) -> Option<Self> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        Some(Self {
            code,
            pressed: event.state == ElementState::Pressed,
            repeat: event.repeat,
            mods: mods.into(),
        })
    }
}

/// What a key event asks the synth to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SynthAction {
    NoteOn(Note),
    NoteOff(Note),
    ToggleMute,
    AdjustGain(f32),
    Quit,
}

/// Map a physical key to its note. Unmapped keys are `None`.
///
/// Three rows of a QWERTY layout, played column by column from the left:
/// `A Z | W S X | E D C | R F V | ...` climbs one semitone per key.
pub fn key_to_note(code: KeyCode) -> Option<Note> {
    let note = match code {
        // second octave
        KeyCode::KeyA => Note::G2,
        KeyCode::KeyZ => Note::Gs2,
        KeyCode::KeyW => Note::A2,
        KeyCode::KeyS => Note::As2,
        KeyCode::KeyX => Note::B2,
        // third octave
        KeyCode::KeyE => Note::C3,
        KeyCode::KeyD => Note::Cs3,
        KeyCode::KeyC => Note::D3,
        KeyCode::KeyR => Note::Ds3,
        KeyCode::KeyF => Note::E3,
        KeyCode::KeyV => Note::F3,
        KeyCode::KeyT => Note::Fs3,
        KeyCode::KeyG => Note::G3,
        KeyCode::KeyB => Note::Gs3,
        KeyCode::KeyY => Note::A3,
        KeyCode::KeyH => Note::As3,
        KeyCode::KeyN => Note::B3,
        // fourth octave
        KeyCode::KeyU => Note::C4,
        KeyCode::KeyJ => Note::Cs4,
        KeyCode::KeyM => Note::D4,
        KeyCode::KeyI => Note::Ds4,
        KeyCode::KeyK => Note::E4,
        KeyCode::Comma => Note::F4,
        KeyCode::KeyO => Note::Fs4,
        KeyCode::KeyL => Note::G4,
        KeyCode::Period => Note::Gs4,
        _ => return None,
    };
    Some(note)
}

/// Translate one key event into at most one action.
///
/// Repeats never produce actions. Notes start only on an unmodified press
/// but always stop on release, so a note can't stick when a modifier goes
/// down mid-hold. Gain changes fire on release of the arrow key.
pub fn map_key(input: &KeyInput) -> Option<SynthAction> {
    if input.repeat {
        return None;
    }

    match (input.code, input.pressed) {
        (KeyCode::KeyQ, true) if input.mods.ctrl => Some(SynthAction::Quit),
        (KeyCode::Backslash, true) => Some(SynthAction::ToggleMute),
        (KeyCode::ArrowUp | KeyCode::ArrowDown, false) => {
            let step = if input.mods.ctrl {
                FINE_GAIN_STEP
            } else {
                GAIN_STEP
            };
            let delta = if input.code == KeyCode::ArrowDown {
                -step
            } else {
                step
            };
            Some(SynthAction::AdjustGain(delta))
        }
        (code, true) if input.mods.is_empty() => key_to_note(code).map(SynthAction::NoteOn),
        (code, false) => key_to_note(code).map(SynthAction::NoteOff),
        _ => None,
    }
}
