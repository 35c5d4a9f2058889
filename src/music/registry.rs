// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Registry of named reference scales.
//!
//! The registry is built once, usually from the built-in table plus an
//! optional registry file, and then passed by reference to the naming
//! functions. It also groups scales into families: a parent scale together
//! with all of its modes.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::mode::{scale_modes, MAJOR_MODE_NAMES};
use super::scale::{interval_sequence, Scale};

/// Built-in reference scales as closed step lists
pub const BUILTIN_SCALES: [(&str, &[i32]); 8] = [
    ("Major", &[2, 2, 1, 2, 2, 2, 1]),
    ("Minor", &[2, 1, 2, 2, 1, 2, 2]),
    ("Harmonic Minor", &[2, 1, 2, 2, 1, 3, 1]),
    ("Melodic Minor", &[2, 1, 2, 2, 2, 2, 1]),
    ("Harmonic Major", &[2, 2, 1, 2, 1, 3, 1]),
    ("Whole-Tone", &[2, 2, 2, 2, 2, 2]),
    ("Whole-Half Diminished", &[2, 1, 2, 1, 2, 1, 2, 1]),
    ("Augmented", &[3, 1, 3, 1, 3, 1]),
];

/// A scale with its registered name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedScale {
    pub name: String,
    pub scale: Scale,
}

/// A parent scale and its distinct modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleFamily {
    name: String,
    modes: Vec<Scale>,
}

impl ScaleFamily {
    /// Create a family from its parent scale
    pub fn new(name: &str, parent: &Scale) -> Self {
        Self {
            name: name.to_string(),
            modes: scale_modes(parent).collect(),
        }
    }

    /// Name of the family
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent scale (first mode)
    pub fn parent(&self) -> &Scale {
        &self.modes[0]
    }

    /// Every distinct mode, starting with the parent
    pub fn modes(&self) -> &[Scale] {
        &self.modes
    }

    /// Index of `scale` among the modes (0 is the parent)
    pub fn mode_index(&self, scale: &Scale) -> Option<usize> {
        self.modes.iter().position(|mode| mode == scale)
    }
}

/// Registry of reference scales, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    entries: Vec<NamedScale>,
    by_name: HashMap<String, usize>,
    by_scale: HashMap<Scale, usize>,
    families: Vec<ScaleFamily>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in scales and the major modes
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        let parents: Vec<(&str, Scale)> = BUILTIN_SCALES
            .iter()
            .filter_map(|&(name, steps)| {
                match Scale::from_closed_steps(&interval_sequence(steps)) {
                    Ok(scale) => Some((name, scale)),
                    Err(err) => {
                        warn!(name, %err, "skipping built-in scale");
                        None
                    }
                }
            })
            .collect();

        // Parents first, so that e.g. Aeolian resolves to Minor
        for (name, scale) in &parents {
            registry.register(name, scale.clone());
        }
        for (name, scale) in &parents {
            let mode_names: &[&str] = if *name == "Major" {
                &MAJOR_MODE_NAMES
            } else {
                &[]
            };
            registry.add_family(name, scale, mode_names);
        }

        registry
    }

    /// Register a scale under a name
    ///
    /// Returns `false` when the name is taken or the scale is already
    /// registered under another name; the first registration wins.
    pub fn register(&mut self, name: &str, scale: Scale) -> bool {
        if let Some(&index) = self.by_name.get(name) {
            if self.entries[index].scale != scale {
                debug!(name, "scale name already registered");
            }
            return false;
        }
        if let Some(&index) = self.by_scale.get(&scale) {
            debug!(name, existing = %self.entries[index].name, "scale already registered");
            return false;
        }

        let index = self.entries.len();
        self.by_name.insert(name.to_string(), index);
        self.by_scale.insert(scale.clone(), index);
        self.entries.push(NamedScale {
            name: name.to_string(),
            scale,
        });
        true
    }

    /// Register a scale family: the parent under `name`, and its modes
    /// under `mode_names` in rotation order
    ///
    /// The first mode name refers to the parent itself. Names beyond the
    /// number of distinct modes are ignored.
    pub fn register_family<S: AsRef<str>>(&mut self, name: &str, parent: &Scale, mode_names: &[S]) {
        self.register(name, parent.clone());
        self.add_family(name, parent, mode_names);
    }

    fn add_family<S: AsRef<str>>(&mut self, name: &str, parent: &Scale, mode_names: &[S]) {
        let family = ScaleFamily::new(name, parent);
        for (mode_name, mode) in mode_names.iter().zip(family.modes()) {
            self.register(mode_name.as_ref(), mode.clone());
        }
        self.families.push(family);
    }

    /// Get a scale by name
    pub fn get(&self, name: &str) -> Option<&Scale> {
        self.by_name.get(name).map(|&index| &self.entries[index].scale)
    }

    /// Get the registered name of a scale
    pub fn name_of(&self, scale: &Scale) -> Option<&str> {
        self.by_scale
            .get(scale)
            .map(|&index| self.entries[index].name.as_str())
    }

    /// Iterate over the registered scales in registration order
    pub fn iter(&self) -> impl Iterator<Item = &NamedScale> {
        self.entries.iter()
    }

    /// Number of registered scales
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered families in registration order
    pub fn families(&self) -> &[ScaleFamily] {
        &self.families
    }

    /// Find the first family containing `scale` as a mode
    pub fn family_of(&self, scale: &Scale) -> Option<(&ScaleFamily, usize)> {
        self.families
            .iter()
            .find_map(|family| family.mode_index(scale).map(|index| (family, index)))
    }

    /// List all registered scale names, sorted
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|entry| entry.name.clone()).collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::generate::gen_conventional_scales;

    fn closed(raw: &[i32]) -> Scale {
        Scale::from_closed_steps(&interval_sequence(raw)).unwrap()
    }

    #[test]
    fn test_builtins() {
        let registry = ScaleRegistry::with_builtins();
        assert_eq!(registry.families().len(), 8);
        assert_eq!(registry.get("Major"), Some(&closed(&[2, 2, 1, 2, 2, 2, 1])));
        assert_eq!(registry.get("Dorian"), Some(&closed(&[2, 1, 2, 2, 2, 1, 2])));
        assert_eq!(registry.get("Locrian"), Some(&closed(&[1, 2, 2, 1, 2, 2, 2])));
        // Ionian and Aeolian duplicate Major and Minor
        assert_eq!(registry.get("Ionian"), None);
        assert_eq!(registry.get("Aeolian"), None);
        assert_eq!(registry.len(), 13);
    }

    #[test]
    fn test_name_of() {
        let registry = ScaleRegistry::with_builtins();
        assert_eq!(registry.name_of(&closed(&[2, 1, 2, 2, 1, 2, 2])), Some("Minor"));
        assert_eq!(registry.name_of(&closed(&[2, 2, 2, 1, 2, 2, 1])), Some("Lydian"));
        assert_eq!(registry.name_of(&closed(&[1, 3, 1, 2, 1, 2, 2])), None);
    }

    #[test]
    fn test_registration_order() {
        let registry = ScaleRegistry::with_builtins();
        let names: Vec<&str> = registry.iter().map(|entry| entry.name.as_str()).take(9).collect();
        assert_eq!(
            names,
            [
                "Major",
                "Minor",
                "Harmonic Minor",
                "Melodic Minor",
                "Harmonic Major",
                "Whole-Tone",
                "Whole-Half Diminished",
                "Augmented",
                "Dorian",
            ]
        );
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut registry = ScaleRegistry::new();
        assert!(registry.register("Major", closed(&[2, 2, 1, 2, 2, 2, 1])));
        assert!(!registry.register("Ionian", closed(&[2, 2, 1, 2, 2, 2, 1])));
        assert!(!registry.register("Major", closed(&[2, 1, 2, 2, 1, 2, 2])));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_family_with_mode_names() {
        let mut registry = ScaleRegistry::new();
        let hungarian = closed(&[2, 1, 3, 1, 1, 3, 1]);
        registry.register_family("Hungarian Minor", &hungarian, &["Hungarian Minor", "Oriental"]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.families()[0].modes().len(), 7);
        assert_eq!(registry.get("Oriental"), Some(&registry.families()[0].modes()[1]));
    }

    #[test]
    fn test_family_of() {
        let registry = ScaleRegistry::with_builtins();

        let (family, index) = registry.family_of(&closed(&[2, 2, 2, 1, 2, 2, 1])).unwrap();
        assert_eq!(family.name(), "Major");
        assert_eq!(index, 3);

        // Major is registered first, so the minor scale resolves to its sixth mode
        let (family, index) = registry.family_of(&closed(&[2, 1, 2, 2, 1, 2, 2])).unwrap();
        assert_eq!(family.name(), "Major");
        assert_eq!(index, 5);

        let (family, index) = registry.family_of(&closed(&[1, 2, 1, 2, 1, 2, 1, 2])).unwrap();
        assert_eq!(family.name(), "Whole-Half Diminished");
        assert_eq!(index, 1);
    }

    #[test]
    fn test_conventional_scales_outside_builtin_families() {
        let registry = ScaleRegistry::with_builtins();
        let unclassified: Vec<Scale> = gen_conventional_scales()
            .filter(|scale| registry.family_of(scale).is_none())
            .collect();
        assert_eq!(
            unclassified,
            vec![
                closed(&[2, 2, 1, 3, 1, 3]),
                closed(&[2, 2, 2, 2, 1, 3]),
                closed(&[2, 1, 2, 1, 2, 1, 3]),
            ]
        );
    }

    #[test]
    fn test_available_scales_sorted() {
        let registry = ScaleRegistry::with_builtins();
        let names = registry.available_scales();
        assert_eq!(names.len(), registry.len());
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
