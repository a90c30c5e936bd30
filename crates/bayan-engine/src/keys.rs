//! Held-key state shared between the input thread and the audio callback.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::note::{Note, NOTE_COUNT};

/// One lock-free "held" flag per note.
///
/// Written only by the input side, read only by the renderer.
#[derive(Debug)]
pub struct KeyState {
    held: [AtomicBool; NOTE_COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self {
            held: core::array::from_fn(|_| AtomicBool::new(false)),
        }
    }

    pub fn set_note_active(&self, note: Note, active: bool) {
        self.held[note.index()].store(active, Ordering::Relaxed);
    }

    pub fn is_note_active(&self, note: Note) -> bool {
        self.held[note.index()].load(Ordering::Relaxed)
    }

    /// Number of notes currently held.
    pub fn active_count(&self) -> usize {
        self.held
            .iter()
            .filter(|flag| flag.load(Ordering::Relaxed))
            .count()
    }

    pub fn any_active(&self) -> bool {
        self.held.iter().any(|flag| flag.load(Ordering::Relaxed))
    }

    /// Release every note (window lost focus, shutdown).
    pub fn release_all(&self) {
        for flag in &self.held {
            flag.store(false, Ordering::Relaxed);
        }
    }

    /// Iterate the currently held notes, lowest first.
    pub fn active_notes(&self) -> impl Iterator<Item = Note> + '_ {
        Note::ALL
            .iter()
            .copied()
            .filter(move |note| self.is_note_active(*note))
    }
}

impl Default for KeyState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_held() {
        let keys = KeyState::new();
        assert_eq!(keys.active_count(), 0);
        assert!(!keys.any_active());
    }

    #[test]
    fn setting_twice_is_idempotent() {
        let keys = KeyState::new();
        keys.set_note_active(Note::C3, true);
        keys.set_note_active(Note::C3, true);
        assert!(keys.is_note_active(Note::C3));
        assert_eq!(keys.active_count(), 1);
    }

    #[test]
    fn release_clears_note() {
        let keys = KeyState::new();
        keys.set_note_active(Note::C3, true);
        keys.set_note_active(Note::C3, false);
        assert!(!keys.is_note_active(Note::C3));
        keys.set_note_active(Note::C3, false);
        assert!(!keys.is_note_active(Note::C3));
    }

    #[test]
    fn notes_are_independent() {
        let keys = KeyState::new();
        keys.set_note_active(Note::G2, true);
        keys.set_note_active(Note::Gs4, true);
        assert!(keys.is_note_active(Note::G2));
        assert!(!keys.is_note_active(Note::Gs2));
        assert!(keys.is_note_active(Note::Gs4));
        assert_eq!(keys.active_count(), 2);
    }

    #[test]
    fn active_notes_lists_held_in_order() {
        let keys = KeyState::new();
        keys.set_note_active(Note::E4, true);
        keys.set_note_active(Note::A2, true);
        let mut held = keys.active_notes();
        assert_eq!(held.next(), Some(Note::A2));
        assert_eq!(held.next(), Some(Note::E4));
        assert_eq!(held.next(), None);
    }

    #[test]
    fn release_all_clears_everything() {
        let keys = KeyState::new();
        for note in Note::ALL {
            keys.set_note_active(note, true);
        }
        assert_eq!(keys.active_count(), NOTE_COUNT);
        keys.release_all();
        assert!(!keys.any_active());
    }
}
