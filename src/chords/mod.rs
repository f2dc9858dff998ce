// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord construction in scale degrees.
//!
//! A [`Chord`] is a small descriptor (quality, inversion, voicing and an
//! optional parallel scale) that the resolver turns into the scale degrees
//! of up to four voices.

pub mod names;
pub mod output;
pub mod resolver;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::music::ScaleType;

pub use names::{quality_index, quality_name, quality_short_name, voicing_index, voicing_name};
pub use output::ChordOutput;
pub use resolver::{apply_voicing, expand, invert, resolve, Voices};
pub use tables::{quality, voicing, Quality, Voicing, MAX_VOICES, QUALITY_COUNT, VOICING_COUNT};

/// Chord descriptor as stored in presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Chord {
    quality: u8,
    inversion: i8,
    voicing: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    parallel_scale: Option<ScaleType>,
}

impl Chord {
    /// Create a chord that borrows its octave from the active scale
    pub fn new(quality: u8, inversion: i8, voicing: u8) -> Self {
        Self {
            quality,
            inversion,
            voicing,
            parallel_scale: None,
        }
    }

    /// Borrow the octave (degree count) from another scale
    pub fn with_parallel_scale(mut self, scale_type: ScaleType) -> Self {
        self.parallel_scale = Some(scale_type);
        self
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn inversion(&self) -> i8 {
        self.inversion
    }

    pub fn voicing(&self) -> u8 {
        self.voicing
    }

    pub fn parallel_scale(&self) -> Option<ScaleType> {
        self.parallel_scale
    }

    /// Short label for display, e.g. "triad/1 drop 2"
    pub fn label(&self) -> String {
        let quality = quality_short_name(self.quality as usize).unwrap_or("?");
        let voicing = voicing_name(self.voicing as usize).unwrap_or("?");
        format!("{}/{} {}", quality, self.inversion, voicing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chord() {
        let chord = Chord::default();
        assert_eq!(chord.quality(), 0);
        assert_eq!(chord.inversion(), 0);
        assert_eq!(chord.voicing(), 0);
        assert_eq!(chord.parallel_scale(), None);
    }

    #[test]
    fn test_with_parallel_scale() {
        let chord = Chord::new(2, -1, 3).with_parallel_scale(ScaleType::Chromatic);
        assert_eq!(chord.inversion(), -1);
        assert_eq!(chord.parallel_scale(), Some(ScaleType::Chromatic));
    }

    #[test]
    fn test_label() {
        assert_eq!(Chord::new(1, 1, 2).label(), "triad/1 drop 2");
        assert_eq!(Chord::new(42, 0, 0).label(), "?/0 close");
    }

    #[test]
    fn test_serde_partial_descriptor() {
        let chord: Chord = serde_yaml::from_str("quality: 2\nparallel_scale: chromatic\n").unwrap();
        assert_eq!(chord, Chord::new(2, 0, 0).with_parallel_scale(ScaleType::Chromatic));
    }
}
