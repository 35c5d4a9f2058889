// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for modal
//!
//! These tests verify that multiple components work together correctly.

use std::collections::HashSet;
use std::fs;

use modal::algorithms::{
    rank_by_deviation, rank_sequences_by_closeness, squared_deviation, EditOp,
    LevenshteinEditMatrix, SubsequenceSearcher,
};
use modal::config::RegistryFile;
use modal::guitar::{render_fretboard_ascii, scale_annotation, Fretboard};
use modal::music::pitch::{
    MAJOR_SEVENTH, MAJOR_SIXTH, MAJOR_THIRD, MINOR_SEVENTH, MINOR_SIXTH, MINOR_THIRD,
};
use modal::music::scale::interval_sequence;
use modal::music::{
    edits_repr, gen_conventional_scales, generate_scale_names, interval_cost,
    intervals_from_scale, scale_from_intervals, scale_label, scale_modes, scale_with_root, Note,
    Scale, ScaleRegistry,
};
use modal::MusicError;

fn closed(raw: &[i32]) -> Scale {
    Scale::from_closed_steps(&interval_sequence(raw)).unwrap()
}

/// Open step lists round-trip and oversized steps fold into the octave
#[test]
fn test_step_round_trip_and_octave_invariance() {
    let steps = interval_sequence(&[2, 2, 1, 2, 2, 2]);
    let scale = scale_from_intervals(&steps).unwrap();
    assert_eq!(intervals_from_scale(&scale), steps);

    let oversized = scale_from_intervals(&interval_sequence(&[2, 14, 1, 14, 2, 14])).unwrap();
    assert_eq!(oversized, scale);
    assert_eq!(scale, closed(&[2, 2, 1, 2, 2, 2, 1]));
}

#[test]
fn test_closed_steps_must_span_octaves() {
    let err = Scale::from_closed_steps(&interval_sequence(&[2, 2, 1, 2, 2, 2])).unwrap_err();
    assert_eq!(err, MusicError::OctaveSpan(11));
}

#[test]
fn test_builtin_scales_are_conventional() {
    let scales: HashSet<Scale> = gen_conventional_scales().collect();
    assert_eq!(scales.len(), 33);

    let registry = ScaleRegistry::with_builtins();
    for family in registry.families() {
        assert!(scales.contains(family.parent()), "{} is not generated", family.name());
    }
}

#[test]
fn test_mode_cycle_lengths() {
    let registry = ScaleRegistry::with_builtins();
    for (name, expected) in [
        ("Whole-Tone", 1),
        ("Whole-Half Diminished", 2),
        ("Augmented", 2),
        ("Major", 7),
        ("Harmonic Minor", 7),
    ] {
        let scale = registry.get(name).unwrap();
        assert_eq!(scale_modes(scale).count(), expected, "{}", name);
    }
}

#[test]
fn test_major_modes_at_successive_roots() {
    let major = closed(&[2, 2, 1, 2, 2, 2, 1]);
    let roots = ["C", "D", "E", "F", "G", "A", "B"];

    let sets: Vec<Vec<u8>> = scale_modes(&major)
        .zip(roots)
        .map(|(mode, root)| {
            let root: Note = root.parse().unwrap();
            let mut classes: Vec<u8> = scale_with_root(root, &mode)
                .pitch_classes()
                .iter()
                .map(|p| p.half_steps())
                .collect();
            classes.sort();
            classes
        })
        .collect();

    assert_eq!(sets.len(), 7);
    assert!(sets.iter().all(|set| set == &[0, 2, 4, 5, 7, 9, 11]));
}

/// The minor pentatonic pattern occurs on the 2nd, 3rd and 6th degrees of the major scale
#[test]
fn test_pentatonic_in_major() {
    let searcher = SubsequenceSearcher::new([2, 2, 1, 2, 2, 2, 1]).unwrap();
    let found: Vec<usize> = searcher.find_subsequence_indices(&[3, 2, 2, 3, 2]).collect();
    assert_eq!(found, vec![1, 2, 5]);

    let major = closed(&[2, 2, 1, 2, 2, 2, 1]);
    let registry = ScaleRegistry::with_builtins();
    let labels: Vec<String> = scale_modes(&major)
        .enumerate()
        .filter(|(index, _)| found.contains(index))
        .map(|(_, mode)| scale_label(&mode, &registry))
        .collect();
    assert_eq!(labels, ["Dorian", "Phrygian", "Minor"]);
}

#[test]
fn test_major_to_minor_script() {
    let major = closed(&[2, 2, 1, 2, 2, 2, 1]);
    let minor = closed(&[2, 1, 2, 2, 1, 2, 2]);
    let matrix = LevenshteinEditMatrix::new(major.intervals(), minor.intervals(), interval_cost);
    let edits = matrix.best_edits();

    assert_eq!(edits.cost(), 3.0);
    assert_eq!(
        edits.edits(),
        &[
            EditOp::replace(MAJOR_THIRD, MINOR_THIRD, 2),
            EditOp::replace(MAJOR_SIXTH, MINOR_SIXTH, 5),
            EditOp::replace(MAJOR_SEVENTH, MINOR_SEVENTH, 6),
        ]
    );
    assert_eq!(edits_repr(edits), "♭3 ♭6 ♭7");
}

#[test]
fn test_ranking_scales_by_closeness() {
    let unit = |op: &EditOp<i32>| if op.left_value == op.right_value { 0.0 } else { 1.0 };
    let major = vec![2, 2, 1, 2, 2, 2, 1];
    let candidates = vec![
        vec![2, 1, 2, 2, 1, 2, 2],
        vec![2, 2, 1, 2, 2, 1, 2],
        vec![2, 2, 1, 2, 2, 2, 1],
    ];

    let ranked = rank_sequences_by_closeness(&major, candidates, unit);
    assert_eq!(ranked[0].0, major);
    assert_eq!(ranked[0].1.cost(), 0.0);
    // Equal costs keep their input order
    assert_eq!(ranked[1].0, vec![2, 1, 2, 2, 1, 2, 2]);
    assert_eq!(ranked[2].0, vec![2, 2, 1, 2, 2, 1, 2]);
}

#[test]
fn test_one_large_deviation_ranks_worse() {
    let needle = vec![2, 2, 1, 2, 2, 2, 1];
    let several_small = vec![3, 3, 2, 2, 2, 2, 1];
    let one_large = vec![2, 2, 1, 2, 2, 2, 4];

    let candidates = vec![one_large.clone(), several_small.clone()];
    let ranked = rank_by_deviation(&needle, candidates, squared_deviation);
    assert_eq!(ranked, vec![several_small, one_large]);
}

#[test]
fn test_naming_every_conventional_scale() {
    let registry = ScaleRegistry::with_builtins();
    let labelled: Vec<(Scale, String)> = gen_conventional_scales()
        .map(|scale| {
            let label = scale_label(&scale, &registry);
            (scale, label)
        })
        .collect();

    let lydian = closed(&[2, 2, 2, 1, 2, 2, 1]);
    assert!(labelled.contains(&(lydian, "Lydian".to_string())));

    let unnamed = labelled
        .iter()
        .filter(|(scale, label)| *label == scale.to_string())
        .count();
    assert!(unnamed < labelled.len());
}

#[test]
fn test_registry_file_feeds_naming() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scales.yaml");
    fs::write(
        &path,
        r#"
include_builtins: false
scales:
  - name: "Minor"
    steps: [2, 1, 2, 2, 1, 2, 2]
"#,
    )
    .unwrap();

    let registry = RegistryFile::load(&path).unwrap().build_registry().unwrap();
    let harmonic_minor = closed(&[2, 1, 2, 2, 1, 3, 1]);
    let names: Vec<String> = generate_scale_names(&harmonic_minor, &registry).collect();
    assert_eq!(names, ["Minor ♮7"]);
}

#[test]
fn test_fretboard_with_registry_scale() {
    let registry = ScaleRegistry::with_builtins();
    let root: Note = "A".parse().unwrap();
    let minor = registry.get("Minor").unwrap();

    let diagram = render_fretboard_ascii(&Fretboard::standard(), 5, scale_annotation(root, minor));
    let lines: Vec<&str> = diagram.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[4], "A  1 |---|-2-|-3-|---|-4-|");
    assert_eq!(lines[6], "       1       3       5 ");
}
