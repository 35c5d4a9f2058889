// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sequence comparison algorithms.
//!
//! This module provides circular subsequence search, Levenshtein alignment
//! with caller-supplied costs, and rankings built on top of them.

pub mod levenshtein;
pub mod ranking;
pub mod subsequence;

pub use levenshtein::{EditKind, EditOp, Edits, LevenshteinEditMatrix};
pub use ranking::{
    rank_by_deviation, rank_sequences_by_closeness, squared_deviation, without_edits,
    RankedSequence,
};
pub use subsequence::{SeqItem, SubsequenceIndices, SubsequenceSearcher};
