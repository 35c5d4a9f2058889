// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Guitar fretboard model.
//!
//! Strings are stored thinnest first, matching the way tablature and
//! fretboard diagrams are read. Tunings are written lowest string first.

pub mod ascii;

pub use ascii::{no_annotation, render_fretboard_ascii, scale_annotation};

use crate::error::MusicResult;
use crate::music::note::{parse_pitches, MusicalPitch, Note, NoteName};
use crate::music::pitch::{Interval, Octave, Pitch, FOURTH};

/// Frets typically marked with inlays
pub const MARKED_FRETS: [usize; 11] = [1, 3, 5, 7, 9, 12, 15, 17, 19, 21, 24];

/// A single string, identified by its open pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuitarString {
    open_pitch: Pitch,
}

impl GuitarString {
    /// Create a string tuned to `open_pitch`
    pub fn new(open_pitch: Pitch) -> Self {
        Self { open_pitch }
    }

    /// Pitch of the open string
    pub fn open_pitch(&self) -> Pitch {
        self.open_pitch
    }

    /// Pitch at a fret; fret 0 is the open string
    pub fn fret(&self, index: usize) -> Pitch {
        self.open_pitch + Interval(index as i32)
    }
}

/// One position on the fretboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretboardLocation {
    /// 1-based, 1 is the thinnest string
    pub string: usize,
    /// 0 is the open string
    pub fret: usize,
    pub pitch: Pitch,
}

/// A set of strings, thinnest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    strings: Vec<GuitarString>,
}

impl Fretboard {
    /// Build a fretboard from open pitches given lowest string first
    pub fn from_pitches<I: IntoIterator<Item = Pitch>>(pitches: I) -> Self {
        let mut strings: Vec<GuitarString> = pitches.into_iter().map(GuitarString::new).collect();
        strings.reverse();
        Self { strings }
    }

    /// Build a fretboard from a tuning such as `"E4 A4 D5 G5 B5 E6"`, lowest string first
    pub fn from_tuning(tuning: &str) -> MusicResult<Self> {
        let pitches = parse_pitches(tuning)?;
        Ok(Self::from_pitches(pitches.into_iter().map(MusicalPitch::to_pitch)))
    }

    /// Standard EADGBE tuning
    pub fn standard() -> Self {
        Self::from_pitches([
            natural(NoteName::E, 4),
            natural(NoteName::A, 4),
            natural(NoteName::D, 5),
            natural(NoteName::G, 5),
            natural(NoteName::B, 5),
            natural(NoteName::E, 6),
        ])
    }

    /// Seven strings with a low A
    pub fn drop_a() -> Self {
        Self::from_pitches([
            natural(NoteName::A, 3),
            natural(NoteName::E, 4),
            natural(NoteName::A, 4),
            natural(NoteName::D, 5),
            natural(NoteName::G, 5),
            natural(NoteName::B, 5),
            natural(NoteName::E, 6),
        ])
    }

    /// Twelve strings tuned in fourths from B2, covering every pitch class
    pub fn fourths() -> Self {
        let lowest = natural(NoteName::B, 2);
        Self::from_pitches((0..12).map(|i| lowest + FOURTH * i))
    }

    /// Strings, thinnest first
    pub fn strings(&self) -> &[GuitarString] {
        &self.strings
    }

    /// Every location up to and including `frets`, string by string
    pub fn locations(&self, frets: usize) -> impl Iterator<Item = FretboardLocation> + '_ {
        self.strings.iter().enumerate().flat_map(move |(index, string)| {
            (0..=frets).map(move |fret| FretboardLocation {
                string: index + 1,
                fret,
                pitch: string.fret(fret),
            })
        })
    }
}

fn natural(name: NoteName, octave: Octave) -> Pitch {
    MusicalPitch::new(Note::natural(name), octave).to_pitch()
}
