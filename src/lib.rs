// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale analysis: generation, modes, naming and fretboard diagrams.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod guitar;
pub mod music;

pub use error::{MusicError, MusicResult};
