// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord quality and voicing tables.
//!
//! Qualities are expressed in scale-degree steps rather than semitones, so the
//! same "triad" gives a major, minor or diminished chord depending on where it
//! sits in the scale. Both tables are only reachable through the bounds-checked
//! [`quality`] and [`voicing`] lookups.

use crate::error::{ChordError, Result};

/// Maximum number of voices a chord can have
pub const MAX_VOICES: usize = 4;

/// Number of entries in the quality table
pub const QUALITY_COUNT: usize = 9;

/// Number of entries in the voicing table
pub const VOICING_COUNT: usize = 8;

/// Intervallic shape of a chord in scale-degree steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality {
    steps: &'static [u8],
    voices: u8,
}

impl Quality {
    /// Create a quality from cumulative steps and a voice count.
    ///
    /// Panics (at compile time when used in a const table) unless
    /// `1 <= voices <= min(steps.len(), MAX_VOICES)`.
    pub const fn new(steps: &'static [u8], voices: u8) -> Self {
        assert!(voices >= 1, "a quality needs at least one voice");
        assert!(voices as usize <= MAX_VOICES, "too many voices");
        assert!(voices as usize <= steps.len(), "voice count exceeds step count");
        Self { steps, voices }
    }

    /// Step values for the sounding voices; the first step is the root (0)
    pub fn steps(&self) -> &'static [u8] {
        let steps: &'static [u8] = self.steps;
        &steps[..self.voices as usize]
    }

    /// Number of voices (1 = monad, 2 = dyad, 3 = triad, 4 = tetrad)
    pub fn voice_count(&self) -> usize {
        self.voices as usize
    }
}

/// Per-voice octave displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voicing {
    octaves: [i8; MAX_VOICES],
}

impl Voicing {
    pub const fn new(octaves: [i8; MAX_VOICES]) -> Self {
        Self { octaves }
    }

    /// Octave displacement for every voice slot
    pub fn octaves(&self) -> &[i8; MAX_VOICES] {
        &self.octaves
    }

    /// True if no voice is displaced
    pub fn is_close(&self) -> bool {
        self.octaves.iter().all(|&o| o == 0)
    }
}

static QUALITIES: [Quality; QUALITY_COUNT] = [
    Quality::new(&[0, 4], 2),       // fifth
    Quality::new(&[0, 2, 2], 3),    // triad
    Quality::new(&[0, 2, 2, 2], 4), // seventh
    Quality::new(&[0, 3, 1], 3),    // suspended
    Quality::new(&[0, 3, 1, 2], 4), // susp. seventh
    Quality::new(&[0, 2, 2, 1], 4), // sixth
    Quality::new(&[0, 2, 2, 4], 4), // added ninth
    Quality::new(&[0, 2, 2, 6], 4), // added eleventh
    Quality::new(&[0], 1),          // unisono
];

static VOICINGS: [Voicing; VOICING_COUNT] = [
    Voicing::new([0, 0, 0, 0]),   // close
    Voicing::new([0, 0, 0, -1]),  // drop 1
    Voicing::new([0, 0, -1, 0]),  // drop 2
    Voicing::new([0, -1, 0, 0]),  // drop 3
    Voicing::new([0, 0, 0, 1]),   // antidrop 1
    Voicing::new([0, 0, 1, 0]),   // antidrop 2
    Voicing::new([0, 1, 0, 0]),   // antidrop 3
    Voicing::new([-1, 1, 1, 1]),  // spread
];

/// Look up a quality by index
pub fn quality(index: usize) -> Result<&'static Quality> {
    QUALITIES.get(index).ok_or(ChordError::InvalidQuality {
        index,
        len: QUALITY_COUNT,
    })
}

/// Look up a voicing by index
pub fn voicing(index: usize) -> Result<&'static Voicing> {
    VOICINGS.get(index).ok_or(ChordError::InvalidVoicing {
        index,
        len: VOICING_COUNT,
    })
}

/// All qualities in index order
pub fn qualities() -> &'static [Quality] {
    &QUALITIES
}

/// All voicings in index order
pub fn voicings() -> &'static [Voicing] {
    &VOICINGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_counts_in_range() {
        for q in qualities() {
            assert!((1..=MAX_VOICES).contains(&q.voice_count()));
            assert_eq!(q.steps().len(), q.voice_count());
            assert_eq!(q.steps()[0], 0, "first step is always the root");
        }
    }

    #[test]
    fn test_quality_lookup() {
        let triad = quality(1).unwrap();
        assert_eq!(triad.steps(), &[0, 2, 2]);
        assert_eq!(triad.voice_count(), 3);

        assert_eq!(quality(8).unwrap().voice_count(), 1);
    }

    #[test]
    fn test_quality_out_of_range() {
        assert_eq!(
            quality(99),
            Err(ChordError::InvalidQuality { index: 99, len: 9 })
        );
        assert!(quality(QUALITY_COUNT).is_err());
    }

    #[test]
    fn test_voicing_lookup() {
        assert!(voicing(0).unwrap().is_close());
        assert_eq!(voicing(2).unwrap().octaves(), &[0, 0, -1, 0]);
        assert_eq!(voicing(7).unwrap().octaves(), &[-1, 1, 1, 1]);
        assert_eq!(
            voicing(8),
            Err(ChordError::InvalidVoicing { index: 8, len: 8 })
        );
    }

    #[test]
    fn test_only_close_is_close() {
        let close: Vec<usize> = voicings()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_close())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(close, vec![0]);
    }
}
