// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text fretboard diagrams.

use super::{Fretboard, FretboardLocation, MARKED_FRETS};
use crate::music::note::{closest_sharp, Note};
use crate::music::pitch::OCTAVE_HALF_STEPS;
use crate::music::scale::Scale;

/// Annotation that marks nothing
pub fn no_annotation(_: &FretboardLocation) -> Option<String> {
    None
}

/// Mark every fret belonging to `scale` rooted at `root` with its degree number
pub fn scale_annotation(root: Note, scale: &Scale) -> impl Fn(&FretboardLocation) -> Option<String> + '_ {
    let root = i32::from(root.to_octave_pitch().half_steps());
    move |location: &FretboardLocation| {
        let pitch_class = i32::from(location.pitch.to_octave().1.half_steps());
        let interval = (pitch_class - root).rem_euclid(OCTAVE_HALF_STEPS);
        scale
            .intervals()
            .iter()
            .position(|degree| degree.half_steps() == interval)
            .map(|index| (index + 1).to_string())
    }
}

fn fret_footer(frets: usize) -> String {
    let markers: Vec<String> = (1..=frets)
        .map(|fret| {
            if MARKED_FRETS.contains(&fret) {
                format!("{:<2}", fret)
            } else {
                "  ".to_string()
            }
        })
        .collect();
    format!("       {}", markers.join("  "))
}

/// Render `fretboard` up to `frets`, one line per string plus a footer of marked frets
pub fn render_fretboard_ascii<F>(fretboard: &Fretboard, frets: usize, annotation: F) -> String
where
    F: Fn(&FretboardLocation) -> Option<String>,
{
    let mut lines: Vec<String> = fretboard
        .strings()
        .iter()
        .enumerate()
        .map(|(index, string)| {
            (0..=frets)
                .map(|fret| {
                    let location = FretboardLocation {
                        string: index + 1,
                        fret,
                        pitch: string.fret(fret),
                    };
                    let mark = annotation(&location);
                    if fret == 0 {
                        let name = closest_sharp(location.pitch.to_octave().1).to_string();
                        format!("{:<2} {} |", name, mark.as_deref().unwrap_or(" "))
                    } else {
                        format!("-{}-|", mark.as_deref().unwrap_or("-"))
                    }
                })
                .collect::<String>()
        })
        .collect();

    lines.push(fret_footer(frets));
    lines.join("\n")
}
