// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Naming scales relative to known reference scales.
//!
//! A scale that is not registered itself can still be described as a small
//! alteration of one that is, e.g. the harmonic minor scale is `Minor ♮7`.

use tracing::trace;

use super::pitch::{accidentals, Interval};
use super::registry::ScaleRegistry;
use super::scale::Scale;
use crate::algorithms::{EditKind, EditOp, Edits, LevenshteinEditMatrix};

/// Highest edit cost at which a reference scale still names a target
pub const NAMING_COST_THRESHOLD: f64 = 1.0;

/// Edit cost between interval lists
///
/// Replacing costs the distance moved in half-steps; inserting or deleting
/// a degree costs one.
pub fn interval_cost(op: &EditOp<Interval>) -> f64 {
    match (op.left_value, op.right_value) {
        (Some(left), Some(right)) => f64::from((left.half_steps() - right.half_steps()).abs()),
        _ => 1.0,
    }
}

/// Render an edit script as altered scale degrees, e.g. `♭3 ♭6 ♭7`
///
/// Inserted degrees are prefixed with `+` and deleted ones with `-`.
/// Degrees count positions in the reference scale.
pub fn edits_repr(edits: &Edits<Interval>) -> String {
    edits
        .edits()
        .iter()
        .filter_map(|op| {
            let interval = op.right_value.or(op.left_value)?;
            let prefix = match op.kind() {
                EditKind::Insert => "+",
                EditKind::Delete => "-",
                EditKind::Replace => "",
            };
            Some(format!(
                "{}{}{}",
                prefix,
                accidentals(interval.natural_distance(op.left_position), true),
                op.left_position + 1
            ))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lazily produce names for `scale`, in registry order
///
/// An exact match yields the bare name; a close match yields the reference
/// name followed by the altered degrees.
pub fn generate_scale_names<'a>(
    scale: &'a Scale,
    registry: &'a ScaleRegistry,
) -> impl Iterator<Item = String> + 'a {
    registry.iter().filter_map(move |named| {
        if named.scale == *scale {
            return Some(named.name.clone());
        }

        let matrix =
            LevenshteinEditMatrix::new(named.scale.intervals(), scale.intervals(), interval_cost);
        let edits = matrix.best_edits();
        trace!(reference = %named.name, cost = edits.cost(), "compared scale");

        (edits.cost() <= NAMING_COST_THRESHOLD && !edits.is_empty())
            .then(|| format!("{} {}", named.name, edits_repr(edits)))
    })
}

/// Best available label for a scale
///
/// Prefers the registered name, then the first close name, then the
/// degree rendering.
pub fn scale_label(scale: &Scale, registry: &ScaleRegistry) -> String {
    if let Some(name) = registry.name_of(scale) {
        return name.to_string();
    }
    generate_scale_names(scale, registry)
        .next()
        .unwrap_or_else(|| scale.to_string())
}
