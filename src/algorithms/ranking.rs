// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ranking candidate sequences by closeness to a needle.
//!
//! Both rankings are stable: candidates with equal cost keep their input
//! order.

use super::levenshtein::{EditOp, Edits, LevenshteinEditMatrix};

/// A candidate paired with its best edit script from the needle
pub type RankedSequence<T> = (Vec<T>, Edits<T>);

/// Rank candidates by the cost of their best edit script from `needle`
pub fn rank_sequences_by_closeness<T, I, F>(
    needle: &[T],
    candidates: I,
    cost_fn: F,
) -> Vec<RankedSequence<T>>
where
    T: Clone,
    I: IntoIterator<Item = Vec<T>>,
    F: Fn(&EditOp<T>) -> f64,
{
    let mut ranked: Vec<RankedSequence<T>> = candidates
        .into_iter()
        .map(|candidate| {
            let edits = LevenshteinEditMatrix::new(needle, &candidate, &cost_fn)
                .best_edits()
                .clone();
            (candidate, edits)
        })
        .collect();

    ranked.sort_by(|a, b| a.1.cost().total_cmp(&b.1.cost()));
    ranked
}

/// Drop the edit scripts from a ranking
pub fn without_edits<T>(ranked: Vec<RankedSequence<T>>) -> Vec<Vec<T>> {
    ranked.into_iter().map(|(candidate, _)| candidate).collect()
}

/// Rank candidates by summed element-wise deviation from `needle`
///
/// Elements are compared position by position; extra elements on either
/// side are ignored.
pub fn rank_by_deviation<T, I, F>(needle: &[T], candidates: I, deviation: F) -> Vec<Vec<T>>
where
    T: Copy,
    I: IntoIterator<Item = Vec<T>>,
    F: Fn(T, T) -> f64,
{
    let mut scored: Vec<(f64, Vec<T>)> = candidates
        .into_iter()
        .map(|candidate| {
            let total: f64 = needle
                .iter()
                .zip(candidate.iter())
                .map(|(&a, &b)| deviation(a, b))
                .sum();
            (total, candidate)
        })
        .collect();

    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Squared difference, so one large deviation outweighs several small ones
pub fn squared_deviation(a: i32, b: i32) -> f64 {
    let diff = f64::from(a - b);
    diff * diff
}
