// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord preset files.
//!
//! Presets are stored as YAML (or TOML, chosen by file extension) and hold a
//! scale plus a list of named chord descriptors with their root degrees.

pub mod watcher;

pub use watcher::{validate_presets, PresetEvent, PresetWatcher};

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chords::{resolve, Chord, ChordOutput, Voices};
use crate::music::{Note, Scale, ScaleType};

/// Serialization format of a preset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFormat {
    Yaml,
    Toml,
}

impl PresetFormat {
    /// Pick a format from the file extension (YAML unless it ends in `.toml`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => PresetFormat::Toml,
            _ => PresetFormat::Yaml,
        }
    }
}

/// Root of a preset file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetFile {
    /// Scale the presets are resolved against
    #[serde(default)]
    pub scale: ScaleConfig,
    /// Chord presets
    #[serde(default = "default_presets")]
    pub chords: Vec<ChordPreset>,
}

impl Default for PresetFile {
    fn default() -> Self {
        Self {
            scale: ScaleConfig::default(),
            chords: default_presets(),
        }
    }
}

fn default_presets() -> Vec<ChordPreset> {
    vec![ChordPreset {
        name: Some("default".to_string()),
        root: 0,
        chord: Chord::new(0, 0, 0).with_parallel_scale(ScaleType::Chromatic),
    }]
}

impl PresetFile {
    /// Load presets from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset file: {:?}", path))?;
        let presets = match PresetFormat::from_path(path) {
            PresetFormat::Yaml => Self::from_yaml(&contents)?,
            PresetFormat::Toml => Self::from_toml(&contents)?,
        };
        debug!(path = ?path, count = presets.chords.len(), "presets loaded");
        Ok(presets)
    }

    /// Parse presets from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse preset YAML")
    }

    /// Parse presets from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse preset TOML")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize presets to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize presets to TOML")
    }

    /// Save presets, choosing the format from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = match PresetFormat::from_path(path) {
            PresetFormat::Yaml => self.to_yaml()?,
            PresetFormat::Toml => self.to_toml()?,
        };
        fs::write(path, text).with_context(|| format!("Failed to write preset file: {:?}", path))
    }

    /// Find a preset by name
    pub fn get(&self, name: &str) -> Option<&ChordPreset> {
        self.chords.iter().find(|p| p.name.as_deref() == Some(name))
    }

    /// Resolve every preset against the file's scale
    pub fn resolve_all(&self) -> Result<Vec<(&ChordPreset, Voices)>> {
        let scale = self.scale.to_scale()?;
        self.chords
            .iter()
            .enumerate()
            .map(|(i, preset)| {
                let voices = preset
                    .resolve(&scale)
                    .with_context(|| format!("Preset {} is invalid", preset.display_name(i)))?;
                Ok((preset, voices))
            })
            .collect()
    }

    /// Check that the scale parses and every preset resolves
    pub fn validate(&self) -> Result<()> {
        self.resolve_all().map(|_| ())
    }

    /// Feed the first preset into `output`.
    ///
    /// Returns `Ok(None)` when the file has no presets. On error the output
    /// keeps whatever it was sounding.
    pub fn sound_first(&self, output: &mut ChordOutput) -> Result<Option<Voices>> {
        let Some(first) = self.chords.first() else {
            return Ok(None);
        };
        let scale = self.scale.to_scale()?;
        let voices = output
            .update(first.root, &first.chord, &scale)
            .with_context(|| format!("Preset {} is invalid", first.display_name(0)))?;
        Ok(Some(voices))
    }
}

/// Scale section of a preset file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaleConfig {
    /// Root note (e.g., "C", "D", "F#")
    #[serde(default = "default_key")]
    pub key: String,
    /// Scale type (e.g., "major", "minor", "dorian")
    #[serde(default = "default_scale")]
    pub scale: String,
    /// Custom intervals in semitones; overrides `scale` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intervals: Option<Vec<u8>>,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_scale() -> String {
    "major".to_string()
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            scale: default_scale(),
            intervals: None,
        }
    }
}

impl ScaleConfig {
    /// Build the scale this section describes
    pub fn to_scale(&self) -> Result<Scale> {
        if let Some(intervals) = &self.intervals {
            let root = Note::from_str(&self.key)
                .ok_or_else(|| anyhow!("Unknown key: {}", self.key))?;
            return Ok(Scale::custom(root, intervals.clone()));
        }
        Scale::parse(&self.key, &self.scale)
            .ok_or_else(|| anyhow!("Unknown scale: {} {}", self.key, self.scale))
    }
}

/// A named chord with its root degree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChordPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Root scale degree (0 = scale root)
    #[serde(default)]
    pub root: i32,
    #[serde(flatten)]
    pub chord: Chord,
}

impl ChordPreset {
    pub fn resolve(&self, scale: &Scale) -> crate::error::Result<Voices> {
        resolve(self.root, &self.chord, scale)
    }

    fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) => format!("'{}'", name),
            None => format!("#{}", index),
        }
    }
}
