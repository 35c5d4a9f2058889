// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named notes and pitches.
//!
//! Provides note names with accidentals, spelling of pitch classes as
//! notes, and parsing of note and pitch literals such as `"Bb"` or `"F#3"`.

use std::fmt;
use std::str::FromStr;

use super::pitch::{Octave, OctavePitch, Pitch};
use crate::error::{MusicError, MusicResult};

/// Western note names, valued by half-steps above C
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteName {
    C = 0,
    D = 2,
    E = 4,
    F = 5,
    G = 7,
    A = 9,
    B = 11,
}

impl NoteName {
    /// All note names from C upwards
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Half-steps above C
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Note name for a pitch class, if one is unaltered
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|name| name.value() == value)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for NoteName {
    type Err = MusicError;

    fn from_str(s: &str) -> MusicResult<Self> {
        match s {
            "C" => Ok(NoteName::C),
            "D" => Ok(NoteName::D),
            "E" => Ok(NoteName::E),
            "F" => Ok(NoteName::F),
            "G" => Ok(NoteName::G),
            "A" => Ok(NoteName::A),
            "B" => Ok(NoteName::B),
            _ => Err(MusicError::InvalidNote(s.to_string())),
        }
    }
}

/// Accidentals, valued by their half-step offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Accidental {
    DoubleFlat = -2,
    Flat = -1,
    #[default]
    Natural = 0,
    Sharp = 1,
    DoubleSharp = 2,
}

impl Accidental {
    /// Half-step offset
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Accidental for an offset between -2 and 2
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        if value > 0 {
            write!(f, "{}", "#".repeat(value as usize))
        } else {
            write!(f, "{}", "b".repeat(value.unsigned_abs() as usize))
        }
    }
}

impl FromStr for Accidental {
    type Err = MusicError;

    /// Parse up to two `b`/`#` characters; the empty string is natural
    fn from_str(s: &str) -> MusicResult<Self> {
        if s.chars().count() > 2 {
            return Err(MusicError::InvalidNote(s.to_string()));
        }

        let mut value = 0;
        for c in s.chars() {
            match c {
                'b' => value -= 1,
                '#' => value += 1,
                _ => return Err(MusicError::InvalidNote(s.to_string())),
            }
        }

        Accidental::from_value(value).ok_or_else(|| MusicError::InvalidNote(s.to_string()))
    }
}

/// A named pitch class: a note regardless of its octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Note {
    /// Create a note
    pub fn new(name: NoteName, accidental: Accidental) -> Self {
        Self { name, accidental }
    }

    /// Create an unaltered note
    pub fn natural(name: NoteName) -> Self {
        Self::new(name, Accidental::Natural)
    }

    /// Pitch class of this note
    pub fn to_octave_pitch(self) -> OctavePitch {
        OctavePitch::new(self.name.value() + self.accidental.value())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.accidental)
    }
}

impl FromStr for Note {
    type Err = MusicError;

    fn from_str(s: &str) -> MusicResult<Self> {
        let mut chars = s.chars();
        let name = chars
            .next()
            .ok_or_else(|| MusicError::InvalidNote(s.to_string()))?;
        let name: NoteName = name
            .to_string()
            .parse()
            .map_err(|_| MusicError::InvalidNote(s.to_string()))?;
        let accidental: Accidental = chars
            .as_str()
            .parse()
            .map_err(|_| MusicError::InvalidNote(s.to_string()))?;
        Ok(Note::new(name, accidental))
    }
}

/// Spelling of a pitch class as a note
pub type PitchToNote = fn(OctavePitch) -> Note;

/// Spell a pitch class with a natural or a sharp
pub fn closest_sharp(pitch: OctavePitch) -> Note {
    let value = i32::from(pitch.half_steps());
    match NoteName::from_value(value) {
        Some(name) => Note::natural(name),
        None => spell_altered(value - 1, Accidental::Sharp),
    }
}

/// Spell a pitch class with a natural or a flat
pub fn closest_flat(pitch: OctavePitch) -> Note {
    let value = i32::from(pitch.half_steps());
    match NoteName::from_value(value) {
        Some(name) => Note::natural(name),
        None => spell_altered(value + 1, Accidental::Flat),
    }
}

// Every pitch class missing from the natural names sits between two of them
fn spell_altered(neighbour: i32, accidental: Accidental) -> Note {
    Note::new(NoteName::from_value(neighbour).unwrap_or(NoteName::C), accidental)
}

/// All twelve pitch classes spelled with sharps
pub fn sharp_notes() -> [Note; 12] {
    std::array::from_fn(|i| closest_sharp(OctavePitch::new(i as i32)))
}

/// All twelve pitch classes spelled with flats
pub fn flat_notes() -> [Note; 12] {
    std::array::from_fn(|i| closest_flat(OctavePitch::new(i as i32)))
}

/// A note in a specific octave, e.g. B flat 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MusicalPitch {
    pub note: Note,
    pub octave: Octave,
}

impl MusicalPitch {
    /// Create a musical pitch
    pub fn new(note: Note, octave: Octave) -> Self {
        Self { note, octave }
    }

    /// Absolute pitch, in half-steps above C0
    pub fn to_pitch(self) -> Pitch {
        Pitch(self.note.name.value() + self.note.accidental.value() + self.octave * 12)
    }

    /// Spell an absolute pitch
    pub fn from_pitch(pitch: Pitch, spelling: PitchToNote) -> Self {
        let (octave, octave_pitch) = pitch.to_octave();
        Self::new(spelling(octave_pitch), octave)
    }
}

impl fmt::Display for MusicalPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

impl FromStr for MusicalPitch {
    type Err = MusicError;

    fn from_str(s: &str) -> MusicResult<Self> {
        let split = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| MusicError::InvalidPitch(s.to_string()))?;
        let (note, octave) = s.split_at(split);

        if !octave.chars().all(|c| c.is_ascii_digit()) {
            return Err(MusicError::InvalidPitch(s.to_string()));
        }

        let note: Note = note
            .parse()
            .map_err(|_| MusicError::InvalidPitch(s.to_string()))?;
        let octave: Octave = octave
            .parse()
            .map_err(|_| MusicError::InvalidPitch(s.to_string()))?;
        Ok(MusicalPitch::new(note, octave))
    }
}

/// Parse space-separated pitches, e.g. a tuning like `"E4 A4 D5"`
pub fn parse_pitches(text: &str) -> MusicResult<Vec<MusicalPitch>> {
    text.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_name_parser() {
        assert_eq!("A".parse::<NoteName>(), Ok(NoteName::A));
        assert_eq!("B".parse::<NoteName>(), Ok(NoteName::B));
        assert_eq!("C".parse::<NoteName>(), Ok(NoteName::C));
        assert_eq!("G".parse::<NoteName>(), Ok(NoteName::G));
        assert!("X".parse::<NoteName>().is_err());
    }

    #[test]
    fn test_accidental_parser() {
        assert_eq!("bb".parse::<Accidental>(), Ok(Accidental::DoubleFlat));
        assert_eq!("b".parse::<Accidental>(), Ok(Accidental::Flat));
        assert_eq!("".parse::<Accidental>(), Ok(Accidental::Natural));
        assert_eq!("#".parse::<Accidental>(), Ok(Accidental::Sharp));
        assert_eq!("##".parse::<Accidental>(), Ok(Accidental::DoubleSharp));

        assert!("bbb".parse::<Accidental>().is_err());
        assert!("###".parse::<Accidental>().is_err());
        assert!("#b#".parse::<Accidental>().is_err());
    }

    #[test]
    fn test_note_parser() {
        assert_eq!("A#".parse::<Note>(), Ok(Note::new(NoteName::A, Accidental::Sharp)));
        assert_eq!("C".parse::<Note>(), Ok(Note::natural(NoteName::C)));
        assert!("".parse::<Note>().is_err());
        assert!("H".parse::<Note>().is_err());
    }

    #[test]
    fn test_musical_pitch_parser() {
        assert_eq!(
            "Bb4".parse::<MusicalPitch>(),
            Ok(MusicalPitch::new(Note::new(NoteName::B, Accidental::Flat), 4))
        );
        assert!("Bb".parse::<MusicalPitch>().is_err());
        assert!("B4x".parse::<MusicalPitch>().is_err());
    }

    #[test]
    fn test_note_display() {
        assert_eq!(Note::new(NoteName::C, Accidental::Sharp).to_string(), "C#");
        assert_eq!(Note::new(NoteName::B, Accidental::DoubleFlat).to_string(), "Bbb");
        assert_eq!("Bb4".parse::<MusicalPitch>().unwrap().to_string(), "Bb4");
    }

    #[test]
    fn test_spelling() {
        let sharps: Vec<String> = sharp_notes().iter().map(Note::to_string).collect();
        assert_eq!(
            sharps,
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );

        let flats: Vec<String> = flat_notes().iter().map(Note::to_string).collect();
        assert_eq!(
            flats,
            ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"]
        );
    }

    #[test]
    fn test_pitch_round_trip() {
        let pitch: MusicalPitch = "C3".parse().unwrap();
        assert_eq!(pitch.to_pitch(), Pitch(36));
        assert_eq!(MusicalPitch::from_pitch(Pitch(37), closest_sharp).to_string(), "C#3");
        assert_eq!(MusicalPitch::from_pitch(Pitch(37), closest_flat).to_string(), "Db3");
        // Cb4 sounds as B3
        let c_flat: MusicalPitch = "Cb4".parse().unwrap();
        assert_eq!(c_flat.to_pitch(), Pitch(47));
    }

    #[test]
    fn test_parse_pitches() {
        let tuning = parse_pitches("E4 A4 D5").unwrap();
        assert_eq!(tuning.len(), 3);
        assert_eq!(tuning[2].to_string(), "D5");
        assert!(parse_pitches("E4 X4").is_err());
    }
}
