// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions as intervals from a root.
//!
//! A scale is stored as the cumulative distance of each degree from the
//! root, always starting at the unison and staying inside one octave. The
//! same scale can be written as the gaps between successive degrees; the
//! two forms convert losslessly.

use std::collections::BTreeSet;
use std::fmt;

use super::note::{closest_sharp, Note};
use super::pitch::{estimate_scale_degree, Interval, OctavePitch, OCTAVE, OCTAVE_HALF_STEPS, UNISON};
use crate::error::{MusicError, MusicResult};

/// The gaps between successive notes of a scale
pub type IntervalSequence = Vec<Interval>;

/// Build an interval sequence from raw half-step counts
pub fn interval_sequence(raw: &[i32]) -> IntervalSequence {
    raw.iter().copied().map(Interval).collect()
}

/// A scale as intervals from its root
///
/// Equality and hashing use the full interval list, so scales can be used
/// as map keys and set members.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scale {
    intervals: Vec<Interval>,
}

impl Scale {
    /// Create a scale from cumulative degrees
    ///
    /// The degrees must start at the unison, be strictly increasing and stay
    /// below the octave.
    pub fn from_degrees(degrees: &[Interval]) -> MusicResult<Self> {
        match degrees.first() {
            Some(&UNISON) => {}
            Some(first) => {
                return Err(MusicError::InvalidDegrees(format!(
                    "first degree is {} half-steps from the root",
                    first
                )))
            }
            None => return Err(MusicError::InvalidDegrees("no degrees".to_string())),
        }

        if degrees.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(MusicError::InvalidDegrees(
                "degrees are not strictly increasing".to_string(),
            ));
        }

        if degrees.iter().any(|&degree| degree >= OCTAVE) {
            return Err(MusicError::InvalidDegrees(
                "degrees leave the octave".to_string(),
            ));
        }

        Ok(Self::from_validated(degrees.to_vec()))
    }

    /// Create a scale from steps that close the octave exactly
    ///
    /// The steps must total a positive whole number of octaves; the final
    /// step back to the root is implied by the octave and not stored.
    pub fn from_closed_steps(steps: &[Interval]) -> MusicResult<Self> {
        let total = steps
            .iter()
            .enumerate()
            .try_fold(0i32, |total, (position, step)| {
                total
                    .checked_add(step.half_steps())
                    .ok_or(MusicError::StepOverflow { position })
            })?;
        if total <= 0 || total % OCTAVE_HALF_STEPS != 0 {
            return Err(MusicError::OctaveSpan(total));
        }
        scale_from_intervals(steps)
    }

    pub(crate) fn from_validated(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Intervals of every degree from the root
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of degrees in this scale
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check if this scale is empty (never true, the root is always present)
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Interval of a degree (0-based) from the root
    pub fn degree(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    /// Check if an interval, folded into the octave, is a degree of this scale
    pub fn contains(&self, interval: Interval) -> bool {
        self.intervals.contains(&interval.inside_octave())
    }

    /// Steps between successive degrees, including the step back to the octave
    pub fn steps(&self) -> IntervalSequence {
        let mut steps = intervals_from_scale(self);
        let last = self.intervals.last().copied().unwrap_or(UNISON);
        steps.push(OCTAVE - last);
        steps
    }

    /// Scale-degree labels such as `♭3`
    ///
    /// Seven-note scales are labelled by position. Other sizes estimate each
    /// degree from its interval, so a whole-tone scale reads `♭5 ♭6 ♭7`.
    pub fn degree_labels(&self) -> Vec<String> {
        let by_position = self.intervals.len() == 7;
        self.intervals
            .iter()
            .enumerate()
            .map(|(index, &interval)| {
                let degree = if by_position {
                    index
                } else {
                    estimate_scale_degree(interval)
                };
                interval.scale_degree_repr(degree)
            })
            .collect()
    }

    /// Instantiate this scale at a root note
    pub fn with_root(&self, root: Note) -> ConcreteScale {
        scale_with_root(root, self)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.degree_labels().join(" "))
    }
}

/// Build a scale from the steps between its degrees
///
/// Positions are folded into one octave, so oversized steps such as `14`
/// behave like `2`, and repeated positions collapse into one degree. When
/// the steps do not total a whole octave the closing step is implied.
pub fn scale_from_intervals(steps: &[Interval]) -> MusicResult<Scale> {
    if let Some((position, step)) = steps.iter().enumerate().find(|(_, step)| step.half_steps() < 0) {
        return Err(MusicError::NegativeStep {
            position,
            step: step.half_steps(),
        });
    }

    // Steps are non-negative, so the span is empty only if every step is zero
    if steps.iter().all(|step| step.half_steps() == 0) {
        return Err(MusicError::EmptySpan);
    }

    let mut degrees = BTreeSet::from([UNISON]);
    let mut position = UNISON;
    for &step in steps {
        position = (position + step.inside_octave()).inside_octave();
        degrees.insert(position);
    }

    Ok(Scale::from_validated(degrees.into_iter().collect()))
}

/// Steps between successive degrees, without the step back to the octave
pub fn intervals_from_scale(scale: &Scale) -> IntervalSequence {
    scale
        .intervals()
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect()
}

/// A scale instantiated at a specific root note
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConcreteScale(Vec<Note>);

impl ConcreteScale {
    /// Notes of the scale, starting at the root
    pub fn notes(&self) -> &[Note] {
        &self.0
    }

    /// Pitch classes of the scale, starting at the root
    pub fn pitch_classes(&self) -> Vec<OctavePitch> {
        self.0.iter().map(|note| note.to_octave_pitch()).collect()
    }
}

impl fmt::Display for ConcreteScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.0.iter().map(Note::to_string).collect();
        write!(f, "{}", notes.join(" "))
    }
}

/// Instantiate `scale` at `root`, spelling altered notes with sharps
pub fn scale_with_root(root: Note, scale: &Scale) -> ConcreteScale {
    let start = root.to_octave_pitch();
    ConcreteScale(
        scale
            .intervals()
            .iter()
            .map(|&interval| closest_sharp(start + interval))
            .collect(),
    )
}
