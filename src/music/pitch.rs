// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Intervals, pitch classes and absolute pitches.
//!
//! All arithmetic is in half-steps. `Interval` is unbounded, `OctavePitch`
//! always stays inside one octave, and `Pitch` counts up from C0.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Half-steps in one octave
pub const OCTAVE_HALF_STEPS: i32 = 12;

/// Which octave a pitch sits in
pub type Octave = i32;

/// A musical interval between two pitches, in half-steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(pub i32);

impl Interval {
    /// Create an interval of `half_steps`
    pub const fn new(half_steps: i32) -> Self {
        Self(half_steps)
    }

    /// Size in half-steps
    pub const fn half_steps(self) -> i32 {
        self.0
    }

    /// The same interval folded into a single octave
    pub fn inside_octave(self) -> Self {
        Self(self.0.rem_euclid(OCTAVE_HALF_STEPS))
    }

    /// Signed distance from the natural interval at a scale degree (0-based)
    ///
    /// Measured within the octave, so `9` and `2` are both natural seconds.
    pub fn natural_distance(self, degree: usize) -> i32 {
        let natural = NATURAL_INTERVALS[degree % NATURAL_INTERVALS.len()];
        (self.0 - natural.0 + 6).rem_euclid(OCTAVE_HALF_STEPS) - 6
    }

    /// Render as a scale degree (0-based), e.g. `♭3` or `♯4`
    pub fn scale_degree_repr(self, degree: usize) -> String {
        format!("{}{}", accidentals(self.natural_distance(degree), false), degree + 1)
    }
}

/// Accidental symbols for a signed distance from natural
///
/// A zero distance renders as `♮` when `mark_natural` is set, and as
/// nothing otherwise.
pub fn accidentals(distance: i32, mark_natural: bool) -> String {
    match distance {
        0 if mark_natural => "♮".to_string(),
        d if d > 0 => "♯".repeat(d as usize),
        d => "♭".repeat(d.unsigned_abs() as usize),
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval(self.0 + rhs.0)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval(self.0 - rhs.0)
    }
}

impl Mul<i32> for Interval {
    type Output = Interval;

    fn mul(self, rhs: i32) -> Interval {
        Interval(self.0 * rhs)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const UNISON: Interval = Interval(0);
pub const HALF_STEP: Interval = Interval(1);
pub const SEMITONE: Interval = HALF_STEP;
pub const MINOR_SECOND: Interval = HALF_STEP;
pub const WHOLE_STEP: Interval = Interval(2);
pub const MAJOR_SECOND: Interval = WHOLE_STEP;
pub const MINOR_THIRD: Interval = Interval(3);
pub const MAJOR_THIRD: Interval = Interval(4);
pub const FOURTH: Interval = Interval(5);
pub const AUGMENTED_FOURTH: Interval = Interval(6);
pub const DIMINISHED_FIFTH: Interval = AUGMENTED_FOURTH;
pub const FIFTH: Interval = Interval(7);
pub const MINOR_SIXTH: Interval = Interval(8);
pub const MAJOR_SIXTH: Interval = Interval(9);
pub const DIMINISHED_SEVENTH: Interval = MAJOR_SIXTH;
pub const MINOR_SEVENTH: Interval = Interval(10);
pub const MAJOR_SEVENTH: Interval = Interval(11);
pub const OCTAVE: Interval = Interval(OCTAVE_HALF_STEPS);

/// Unaltered interval at each degree of a seven-note scale
pub const NATURAL_INTERVALS: [Interval; 7] = [
    UNISON,
    MAJOR_SECOND,
    MAJOR_THIRD,
    FOURTH,
    FIFTH,
    MAJOR_SIXTH,
    MAJOR_SEVENTH,
];

/// Degree index (0-based) an interval most likely plays in a scale
pub fn estimate_scale_degree(interval: Interval) -> usize {
    const DEGREES: [usize; 12] = [0, 1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 6];
    DEGREES[interval.inside_octave().0 as usize]
}

/// Number of half-steps above C within one octave (a pitch class)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OctavePitch(u8);

impl OctavePitch {
    /// Create a pitch class, wrapping into `0..12`
    pub fn new(half_steps: i32) -> Self {
        Self(half_steps.rem_euclid(OCTAVE_HALF_STEPS) as u8)
    }

    /// Half-steps above C
    pub fn half_steps(self) -> u8 {
        self.0
    }
}

impl Add<Interval> for OctavePitch {
    type Output = OctavePitch;

    fn add(self, rhs: Interval) -> OctavePitch {
        OctavePitch::new(i32::from(self.0) + rhs.0)
    }
}

impl Sub<Interval> for OctavePitch {
    type Output = OctavePitch;

    fn sub(self, rhs: Interval) -> OctavePitch {
        OctavePitch::new(i32::from(self.0) - rhs.0)
    }
}

/// An absolute pitch, in half-steps above C0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch(pub i32);

impl Pitch {
    /// Build a pitch from an octave and a pitch class
    pub fn from_octave(octave: Octave, pitch: OctavePitch) -> Self {
        Self(octave * OCTAVE_HALF_STEPS + i32::from(pitch.half_steps()))
    }

    /// Split into octave and pitch class
    pub fn to_octave(self) -> (Octave, OctavePitch) {
        (self.0.div_euclid(OCTAVE_HALF_STEPS), OctavePitch::new(self.0))
    }

    /// Half-steps above C0
    pub fn half_steps(self) -> i32 {
        self.0
    }
}

impl Add<Interval> for Pitch {
    type Output = Pitch;

    fn add(self, rhs: Interval) -> Pitch {
        Pitch(self.0 + rhs.0)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Pitch;

    fn sub(self, rhs: Interval) -> Pitch {
        Pitch(self.0 - rhs.0)
    }
}
