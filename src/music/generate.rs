// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enumeration of conventional scales.
//!
//! A conventional scale divides the octave into half, whole and augmented
//! steps (1, 2 and 3 half-steps) such that any two adjacent steps add up
//! to a minor or major third. Fragments are grown one step at a time,
//! breadth first, until they close the octave.

use std::collections::VecDeque;
use std::mem;

use tracing::trace;

use super::pitch::{Interval, OCTAVE_HALF_STEPS, UNISON};
use super::scale::Scale;

/// Step sizes a conventional scale is built from
pub const STEP_ALPHABET: [i32; 3] = [1, 2, 3];

/// Steps allowed after `last`, or any step when nothing precedes
pub fn allowed_next_steps(last: Option<i32>) -> &'static [i32] {
    match last {
        None => &STEP_ALPHABET,
        Some(1) => &[2, 3],
        Some(2) => &[1, 2],
        Some(3) => &[1],
        Some(_) => &[],
    }
}

/// Check if a fragment starting with `first` may close with `last`
pub fn closes_compatibly(first: i32, last: i32) -> bool {
    !((first == 1 && last != 2) || (first == 3 && last != 1))
}

/// A partial step sequence with its running total
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScaleFragment {
    steps: Vec<i32>,
    sum: i32,
}

impl ScaleFragment {
    fn is_complete(&self) -> bool {
        self.sum == OCTAVE_HALF_STEPS
    }

    /// Extensions by one step that stay within the octave
    fn extensions(&self) -> impl Iterator<Item = ScaleFragment> + '_ {
        allowed_next_steps(self.steps.last().copied())
            .iter()
            .filter_map(move |&step| {
                let sum = self.sum + step;
                let first = self.steps.first().copied().unwrap_or(step);
                let keep = sum < OCTAVE_HALF_STEPS
                    || (sum == OCTAVE_HALF_STEPS && closes_compatibly(first, step));
                keep.then(|| {
                    let mut steps = self.steps.clone();
                    steps.push(step);
                    ScaleFragment { steps, sum }
                })
            })
    }

    /// Degrees of the finished scale; the closing step is implied by the octave
    fn to_scale(&self) -> Scale {
        let mut degrees = Vec::with_capacity(self.steps.len());
        let mut position = UNISON;
        degrees.push(position);
        for &step in &self.steps[..self.steps.len().saturating_sub(1)] {
            position = position + Interval(step);
            degrees.push(position);
        }
        Scale::from_validated(degrees)
    }
}

/// Lazy enumeration of every conventional scale
#[derive(Debug, Clone)]
pub struct ConventionalScales {
    frontier: Vec<ScaleFragment>,
    ready: VecDeque<Scale>,
    round: usize,
}

impl Iterator for ConventionalScales {
    type Item = Scale;

    fn next(&mut self) -> Option<Scale> {
        loop {
            if let Some(scale) = self.ready.pop_front() {
                return Some(scale);
            }
            if self.frontier.is_empty() {
                return None;
            }

            let frontier = mem::take(&mut self.frontier);
            self.ready.extend(
                frontier
                    .iter()
                    .filter(|fragment| fragment.is_complete())
                    .map(ScaleFragment::to_scale),
            );
            self.frontier = frontier
                .iter()
                .flat_map(|fragment| fragment.extensions())
                .collect();

            self.round += 1;
            trace!(
                round = self.round,
                completed = self.ready.len(),
                open = self.frontier.len(),
                "expanded scale fragments"
            );
        }
    }
}

/// Generate every conventional scale
///
/// Every rotation of a valid step pattern is its own scale, so modes of
/// the same parent all appear.
pub fn gen_conventional_scales() -> ConventionalScales {
    ConventionalScales {
        frontier: vec![ScaleFragment {
            steps: Vec::new(),
            sum: 0,
        }],
        ready: VecDeque::new(),
        round: 0,
    }
}
