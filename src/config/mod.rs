// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Registry files.
//!
//! A registry file adds reference scales, and optionally their mode names,
//! on top of the built-in table. YAML and TOML are both accepted; the
//! format is picked by file extension.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::music::pitch::Interval;
use crate::music::registry::ScaleRegistry;
use crate::music::scale::Scale;

/// Root of a registry file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryFile {
    /// Start from the built-in scales
    #[serde(default = "default_include_builtins")]
    pub include_builtins: bool,
    /// Additional scale definitions, in registration order
    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,
}

fn default_include_builtins() -> bool {
    true
}

impl Default for RegistryFile {
    fn default() -> Self {
        Self {
            include_builtins: default_include_builtins(),
            scales: Vec::new(),
        }
    }
}

/// A named scale given by its closed step list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleDefinition {
    pub name: String,
    /// Steps in half-steps, including the one closing the octave
    pub steps: Vec<Interval>,
    /// Names for the modes in rotation order, the first being the scale itself
    #[serde(default)]
    pub modes: Vec<String>,
}

impl ScaleDefinition {
    /// Validate the steps and build the scale
    pub fn to_scale(&self) -> Result<Scale> {
        Scale::from_closed_steps(&self.steps)
            .with_context(|| format!("Invalid steps for scale {:?}", self.name))
    }
}

impl RegistryFile {
    /// Load a registry file, YAML or TOML depending on the extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry file: {:?}", path))?;

        let file = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
            Some("toml") => Self::from_toml(&contents)?,
            _ => bail!("Unsupported registry file extension: {:?}", path),
        };
        debug!(path = ?path, scales = file.scales.len(), "loaded registry file");
        Ok(file)
    }

    /// Parse a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML registry")
    }

    /// Parse a registry from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML registry")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize registry to YAML")
    }

    /// Save as a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write registry file: {:?}", path.as_ref()))
    }

    /// Build the registry this file describes
    ///
    /// Fails on the first definition whose steps do not close an octave.
    pub fn build_registry(&self) -> Result<ScaleRegistry> {
        let mut registry = if self.include_builtins {
            ScaleRegistry::with_builtins()
        } else {
            ScaleRegistry::new()
        };

        for definition in &self.scales {
            let scale = definition.to_scale()?;
            registry.register_family(&definition.name, &scale, &definition.modes);
        }
        Ok(registry)
    }
}
