// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord resolution pipeline.
//!
//! A chord is resolved in four steps, each working in scale degrees:
//!
//! 1. expand the quality's steps into offsets from the root
//! 2. invert (rotate voices, wrapping by one octave of the scale)
//! 3. apply the voicing's per-voice octave displacement
//! 4. transpose everything by the root degree
//!
//! Nothing here allocates; a chord never has more than [`MAX_VOICES`] voices.

use std::ops::Deref;

use super::tables::{self, MAX_VOICES, QUALITY_COUNT};
use super::Chord;
use crate::error::{ChordError, Result};
use crate::music::DegreeScale;

/// Resolved chord voices as absolute scale degrees (1 to 4 of them)
#[derive(Debug, Clone, Copy)]
pub struct Voices {
    degrees: [i32; MAX_VOICES],
    len: u8,
}

impl Voices {
    /// Build voices from a slice of 1 to [`MAX_VOICES`] degrees
    pub fn from_degrees(degrees: &[i32]) -> Option<Self> {
        if degrees.is_empty() || degrees.len() > MAX_VOICES {
            return None;
        }
        let mut voices = Self {
            degrees: [0; MAX_VOICES],
            len: degrees.len() as u8,
        };
        voices.degrees[..degrees.len()].copy_from_slice(degrees);
        Some(voices)
    }

    /// Degrees of the sounding voices
    pub fn as_slice(&self) -> &[i32] {
        &self.degrees[..self.len as usize]
    }

    /// Map every voice through the scale's degree-to-pitch conversion
    pub fn pitches<'a, S: DegreeScale + ?Sized>(
        &'a self,
        scale: &'a S,
    ) -> impl Iterator<Item = f64> + 'a {
        self.as_slice().iter().map(move |&d| scale.degree_to_pitch(d))
    }

    /// Shift every voice by the same number of degrees
    pub fn transpose(mut self, degrees: i32) -> Result<Self> {
        let len = self.len as usize;
        for d in &mut self.degrees[..len] {
            *d = d.checked_add(degrees).ok_or(ChordError::DegreeOverflow)?;
        }
        Ok(self)
    }
}

impl Deref for Voices {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl PartialEq for Voices {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Voices {}

/// Degrees per octave as a signed span, rejecting empty scales
fn octave_span(degree_count: usize) -> Result<i32> {
    match i32::try_from(degree_count) {
        Ok(span) if span >= 1 => Ok(span),
        _ => Err(ChordError::InvalidScale { degree_count }),
    }
}

/// Expand a quality into degree offsets relative to the chord root.
///
/// Voice `i` sits at the sum of steps `0..=i`.
pub fn expand(quality_index: usize, degree_count: usize) -> Result<Voices> {
    let quality = tables::quality(quality_index)?;
    octave_span(degree_count)?;

    let mut degrees = [0i32; MAX_VOICES];
    let mut position = 0i32;
    for (slot, &step) in degrees.iter_mut().zip(quality.steps()) {
        position += step as i32;
        *slot = position;
    }

    Voices::from_degrees(&degrees[..quality.voice_count()]).ok_or(ChordError::InvalidQuality {
        index: quality_index,
        len: QUALITY_COUNT,
    })
}

/// Invert a chord by `inversion` steps.
///
/// Each positive step moves the lowest voice up by `octave` degrees, each
/// negative step moves the highest voice down. Voices are rotated rather
/// than re-sorted, so `invert(invert(v, k), -k) == v` for every `k` and an
/// inversion by the voice count lifts every voice by exactly one octave.
///
/// Slot `j` of an `n`-voice chord takes voice `(j + k) mod n`, lifted by
/// `floor((j + k) / n)` octaves. For a chord wider than an octave the lifted
/// voice can end up below its neighbour.
pub fn invert(voices: &Voices, inversion: i32, octave: i32) -> Result<Voices> {
    let count = voices.len() as i32;
    let cycles = inversion.div_euclid(count);
    let rotation = inversion.rem_euclid(count);

    let mut inverted = *voices;
    for slot in 0..count {
        let shifted = slot + rotation;
        let source = voices[(shifted % count) as usize];
        inverted.degrees[slot as usize] = cycles
            .checked_add(shifted / count)
            .and_then(|octaves| octaves.checked_mul(octave))
            .and_then(|lift| source.checked_add(lift))
            .ok_or(ChordError::DegreeOverflow)?;
    }
    Ok(inverted)
}

/// Displace each voice by its voicing slot, in octaves of `octave` degrees.
///
/// Voicing slots past the chord's voice count are ignored and the result
/// is left unsorted.
pub fn apply_voicing(voices: &Voices, voicing: &tables::Voicing, octave: i32) -> Result<Voices> {
    let mut voiced = *voices;
    let len = voices.len();
    for (degree, &shift) in voiced.degrees[..len].iter_mut().zip(voicing.octaves()) {
        *degree = (shift as i32)
            .checked_mul(octave)
            .and_then(|lift| degree.checked_add(lift))
            .ok_or(ChordError::DegreeOverflow)?;
    }
    Ok(voiced)
}

/// Resolve a chord descriptor on `root_degree` of `scale`.
///
/// When the chord names a parallel scale, that scale's degree count sets the
/// octave span while the quality's own steps are kept. Degrees are never
/// clamped: a chord that would leave the `i32` range fails with
/// [`ChordError::DegreeOverflow`].
pub fn resolve<S: DegreeScale + ?Sized>(root_degree: i32, chord: &Chord, scale: &S) -> Result<Voices> {
    let degree_count = match chord.parallel_scale() {
        Some(parallel) => parallel.degree_count(),
        None => scale.degree_count(),
    };

    let voices = expand(chord.quality() as usize, degree_count)?;
    let voicing = tables::voicing(chord.voicing() as usize)?;
    let octave = octave_span(degree_count)?;

    let voices = invert(&voices, chord.inversion() as i32, octave)?;
    let voices = apply_voicing(&voices, voicing, octave)?;
    voices.transpose(root_degree)
}
