//! The fixed set of playable notes.

use core::fmt;

/// Number of playable notes, G2 through G#4 inclusive.
pub const NOTE_COUNT: usize = 26;

/// One semitone in the playable range, in ascending pitch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Note {
    // second octave
    G2,
    Gs2,
    A2,
    As2,
    B2,
    // third octave
    C3,
    Cs3,
    D3,
    Ds3,
    E3,
    F3,
    Fs3,
    G3,
    Gs3,
    A3,
    As3,
    B3,
    // fourth octave
    C4,
    Cs4,
    D4,
    Ds4,
    E4,
    F4,
    Fs4,
    G4,
    Gs4,
}

impl Note {
    /// Every note, lowest first. `Note::ALL[n.index()] == n`.
    pub const ALL: [Note; NOTE_COUNT] = [
        Note::G2,
        Note::Gs2,
        Note::A2,
        Note::As2,
        Note::B2,
        Note::C3,
        Note::Cs3,
        Note::D3,
        Note::Ds3,
        Note::E3,
        Note::F3,
        Note::Fs3,
        Note::G3,
        Note::Gs3,
        Note::A3,
        Note::As3,
        Note::B3,
        Note::C4,
        Note::Cs4,
        Note::D4,
        Note::Ds4,
        Note::E4,
        Note::F4,
        Note::Fs4,
        Note::G4,
        Note::Gs4,
    ];

    /// Semitones above G2.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Note> {
        Self::ALL.get(index).copied()
    }

    /// Scientific pitch name, e.g. `"G#2"`.
    pub const fn name(self) -> &'static str {
        match self {
            Note::G2 => "G2",
            Note::Gs2 => "G#2",
            Note::A2 => "A2",
            Note::As2 => "A#2",
            Note::B2 => "B2",
            Note::C3 => "C3",
            Note::Cs3 => "C#3",
            Note::D3 => "D3",
            Note::Ds3 => "D#3",
            Note::E3 => "E3",
            Note::F3 => "F3",
            Note::Fs3 => "F#3",
            Note::G3 => "G3",
            Note::Gs3 => "G#3",
            Note::A3 => "A3",
            Note::As3 => "A#3",
            Note::B3 => "B3",
            Note::C4 => "C4",
            Note::Cs4 => "C#4",
            Note::D4 => "D4",
            Note::Ds4 => "D#4",
            Note::E4 => "E4",
            Note::F4 => "F4",
            Note::Fs4 => "F#4",
            Note::G4 => "G4",
            Note::Gs4 => "G#4",
        }
    }

    /// Parse a pitch name. Accepts `#` or `s` for sharps, any letter case.
    pub fn from_name(name: &str) -> Option<Note> {
        Self::ALL.iter().copied().find(|note| {
            let canonical = note.name();
            canonical.eq_ignore_ascii_case(name)
                || (canonical.len() == 3
                    && name.len() == 3
                    && name.is_ascii()
                    && canonical[..1].eq_ignore_ascii_case(&name[..1])
                    && name[1..2].eq_ignore_ascii_case("s")
                    && canonical[2..] == name[2..])
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, note) in Note::ALL.iter().enumerate() {
            assert_eq!(note.index(), i);
            assert_eq!(Note::from_index(i), Some(*note));
        }
    }

    #[test]
    fn range_is_g2_to_gs4() {
        assert_eq!(Note::ALL[0], Note::G2);
        assert_eq!(Note::ALL[NOTE_COUNT - 1], Note::Gs4);
        assert_eq!(Note::from_index(NOTE_COUNT), None);
    }

    #[test]
    fn octave_apart_is_twelve_indices() {
        assert_eq!(Note::G3.index() - Note::G2.index(), 12);
        assert_eq!(Note::G4.index() - Note::G3.index(), 12);
    }

    #[test]
    fn names_parse_back() {
        for note in Note::ALL {
            assert_eq!(Note::from_name(note.name()), Some(note));
        }
    }

    #[test]
    fn sharp_names_accept_s_suffix() {
        assert_eq!(Note::from_name("gs2"), Some(Note::Gs2));
        assert_eq!(Note::from_name("As3"), Some(Note::As3));
        assert_eq!(Note::from_name("c4"), Some(Note::C4));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Note::from_name("H2"), None);
        assert_eq!(Note::from_name("C5"), None);
        assert_eq!(Note::from_name(""), None);
        assert_eq!(Note::from_name("é2"), None);
    }
}
