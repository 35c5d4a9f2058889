// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory for modal.
//!
//! This module provides intervals and notes, scales as interval lists,
//! enumeration of conventional scales and their modes, and naming of
//! scales against a registry of reference scales.

pub mod generate;
pub mod mode;
pub mod naming;
pub mod note;
pub mod pitch;
pub mod registry;
pub mod scale;

pub use generate::{gen_conventional_scales, ConventionalScales};
pub use mode::{major_scale_modes_by_name, next_mode, scale_interval_diff, scale_modes, ScaleModes};
pub use naming::{edits_repr, generate_scale_names, interval_cost, scale_label, NAMING_COST_THRESHOLD};
pub use note::{Accidental, MusicalPitch, Note, NoteName};
pub use pitch::{Interval, OctavePitch, Pitch};
pub use registry::{NamedScale, ScaleFamily, ScaleRegistry};
pub use scale::{
    intervals_from_scale, scale_from_intervals, scale_with_root, ConcreteScale, IntervalSequence,
    Scale,
};
