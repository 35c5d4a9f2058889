// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Modes of a scale.
//!
//! A mode starts the same step pattern on a different degree. Rotating
//! through the degrees eventually returns to the starting scale; the number
//! of distinct rotations before that happens reflects the scale's symmetry.

use std::collections::HashSet;

use tracing::trace;

use super::pitch::{Interval, OCTAVE};
use super::scale::Scale;

/// Names of the modes of the major scale, in rotation order
pub const MAJOR_MODE_NAMES: [&str; 7] = [
    "Ionian",
    "Dorian",
    "Phrygian",
    "Lydian",
    "Mixolydian",
    "Aeolian",
    "Locrian",
];

/// Rotate a scale so that it starts from its second degree
pub fn next_mode(scale: &Scale) -> Scale {
    let mut rotated: Vec<Interval> = scale.intervals().iter().skip(1).copied().collect();
    rotated.push(OCTAVE);
    let new_root = rotated[0];
    Scale::from_validated(rotated.into_iter().map(|interval| interval - new_root).collect())
}

/// Lazy enumeration of the distinct modes of a scale
///
/// Starts with the scale itself and stops as soon as a rotation repeats.
#[derive(Debug, Clone)]
pub struct ScaleModes {
    current: Option<Scale>,
    seen: HashSet<Scale>,
}

impl Iterator for ScaleModes {
    type Item = Scale;

    fn next(&mut self) -> Option<Scale> {
        let scale = self.current.take()?;
        if !self.seen.insert(scale.clone()) {
            trace!(modes = self.seen.len(), "mode rotation repeated");
            return None;
        }
        self.current = Some(next_mode(&scale));
        Some(scale)
    }
}

/// Enumerate every distinct mode of `scale`, starting with the scale itself
pub fn scale_modes(scale: &Scale) -> ScaleModes {
    ScaleModes {
        current: Some(scale.clone()),
        seen: HashSet::new(),
    }
}

/// Modes of the major scale paired with their names
pub fn major_scale_modes_by_name(major: &Scale) -> Vec<(&'static str, Scale)> {
    MAJOR_MODE_NAMES.iter().copied().zip(scale_modes(major)).collect()
}

/// Degree-by-degree differences between two scales
///
/// Yields `(degree, a_interval, b_interval)` for every degree present in
/// both scales where the intervals differ.
pub fn scale_interval_diff(a: &Scale, b: &Scale) -> Vec<(usize, Interval, Interval)> {
    a.intervals()
        .iter()
        .zip(b.intervals())
        .enumerate()
        .filter(|(_, (a_interval, b_interval))| a_interval != b_interval)
        .map(|(degree, (&a_interval, &b_interval))| (degree, a_interval, b_interval))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::note::Note;
    use crate::music::pitch::{MAJOR_SEVENTH, MAJOR_SIXTH, MAJOR_THIRD, MINOR_SEVENTH, MINOR_SIXTH, MINOR_THIRD};
    use crate::music::scale::{interval_sequence, scale_with_root};

    fn closed(raw: &[i32]) -> Scale {
        Scale::from_closed_steps(&interval_sequence(raw)).unwrap()
    }

    fn major() -> Scale {
        closed(&[2, 2, 1, 2, 2, 2, 1])
    }

    #[test]
    fn test_next_mode() {
        assert_eq!(next_mode(&major()), closed(&[2, 1, 2, 2, 2, 1, 2]));
    }

    #[test]
    fn test_next_mode_single_degree() {
        let root_only = Scale::from_degrees(&[Interval(0)]).unwrap();
        assert_eq!(next_mode(&root_only), root_only);
    }

    #[test]
    fn test_diminished_modes() {
        let dim = closed(&[2, 1, 2, 1, 2, 1, 2, 1]);
        let modes: Vec<Scale> = scale_modes(&dim).collect();
        assert_eq!(modes, vec![dim, closed(&[1, 2, 1, 2, 1, 2, 1, 2])]);
    }

    #[test]
    fn test_whole_tone_modes() {
        let whole = closed(&[2, 2, 2, 2, 2, 2]);
        let modes: Vec<Scale> = scale_modes(&whole).collect();
        assert_eq!(modes, vec![whole]);
    }

    #[test]
    fn test_augmented_modes() {
        assert_eq!(scale_modes(&closed(&[3, 1, 3, 1, 3, 1])).count(), 2);
    }

    #[test]
    fn test_major_modes() {
        let modes: Vec<Scale> = scale_modes(&major()).collect();
        assert_eq!(modes.len(), 7);
        assert_eq!(modes.iter().collect::<HashSet<_>>().len(), 7);
    }

    #[test]
    fn test_major_modes_share_pitch_classes() {
        let roots: Vec<Note> = ["C", "D", "E", "F", "G", "A", "B"]
            .iter()
            .map(|name| name.parse().unwrap())
            .collect();

        let sorted_modes: Vec<Vec<u8>> = roots
            .into_iter()
            .zip(major_scale_modes_by_name(&major()))
            .map(|(root, (_, mode))| {
                let mut pitches: Vec<u8> = scale_with_root(root, &mode)
                    .pitch_classes()
                    .iter()
                    .map(|p| p.half_steps())
                    .collect();
                pitches.sort();
                pitches
            })
            .collect();

        assert_eq!(sorted_modes.len(), 7);
        assert!(sorted_modes.iter().all(|mode| mode == &sorted_modes[0]));
        assert_eq!(sorted_modes[0], vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_major_modes_repr() {
        let reprs: Vec<String> = major_scale_modes_by_name(&major())
            .iter()
            .map(|(_, mode)| mode.to_string())
            .collect();
        assert_eq!(
            reprs,
            [
                "(1 2 3 4 5 6 7)",
                "(1 2 ♭3 4 5 6 ♭7)",
                "(1 ♭2 ♭3 4 5 ♭6 ♭7)",
                "(1 2 3 ♯4 5 6 7)",
                "(1 2 3 4 5 6 ♭7)",
                "(1 2 ♭3 4 5 ♭6 ♭7)",
                "(1 ♭2 ♭3 4 ♭5 ♭6 ♭7)",
            ]
        );
    }

    #[test]
    fn test_scale_interval_diff() {
        let minor = closed(&[2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(
            scale_interval_diff(&major(), &minor),
            vec![
                (2, MAJOR_THIRD, MINOR_THIRD),
                (5, MAJOR_SIXTH, MINOR_SIXTH),
                (6, MAJOR_SEVENTH, MINOR_SEVENTH),
            ]
        );
    }
}
