// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for scale construction, searching and parsing.

use thiserror::Error;

/// Errors raised by the music primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MusicError {
    #[error("scale steps must span at least one half-step")]
    EmptySpan,
    #[error("scale step {step} at position {position} is descending")]
    NegativeStep { position: usize, step: i32 },
    #[error("scale steps must sum to a whole number of octaves, got {0} half-steps")]
    OctaveSpan(i32),
    #[error("scale steps overflow at position {position}")]
    StepOverflow { position: usize },
    #[error("invalid scale degrees: {0}")]
    InvalidDegrees(String),
    #[error("jump table row {row} is not strictly increasing")]
    UnorderedJumps { row: usize },
    #[error("invalid note: {0:?}")]
    InvalidNote(String),
    #[error("invalid pitch: {0:?}")]
    InvalidPitch(String),
}

/// Result type for music operations
pub type MusicResult<T> = Result<T, MusicError>;
