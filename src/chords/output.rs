// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Last-good chord output.
//!
//! The output stage must never emit a half-built chord. [`ChordOutput`] only
//! replaces its voices when a resolve succeeds, so a bad preset or index
//! leaves the previous chord sounding.

use tracing::{debug, warn};

use super::resolver::{resolve, Voices};
use super::Chord;
use crate::error::Result;
use crate::music::{DegreeScale, MidiNote, Scale};

/// Holds the most recently resolved chord
#[derive(Debug, Clone, Default)]
pub struct ChordOutput {
    current: Option<Voices>,
    /// Previous chord for voice leading
    previous: Option<Voices>,
}

impl ChordOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `chord` on `root_degree` and make it the current output.
    ///
    /// On error the current voices are left untouched and the error is
    /// returned to the caller.
    pub fn update<S: DegreeScale + ?Sized>(
        &mut self,
        root_degree: i32,
        chord: &Chord,
        scale: &S,
    ) -> Result<Voices> {
        match resolve(root_degree, chord, scale) {
            Ok(voices) => {
                debug!(root = root_degree, degrees = ?voices.as_slice(), "chord resolved");
                self.previous = self.current.replace(voices);
                Ok(voices)
            }
            Err(e) => {
                warn!(root = root_degree, error = %e, "chord rejected, keeping previous output");
                Err(e)
            }
        }
    }

    /// Voices currently sounding
    pub fn current(&self) -> Option<&Voices> {
        self.current.as_ref()
    }

    /// Voices that were sounding before the last successful update
    pub fn previous(&self) -> Option<&Voices> {
        self.previous.as_ref()
    }

    /// Current voices converted through the scale's degree-to-pitch mapping
    pub fn pitches<'a, S: DegreeScale + ?Sized>(
        &'a self,
        scale: &'a S,
    ) -> impl Iterator<Item = f64> + 'a {
        self.current.iter().flat_map(move |v| v.pitches(scale))
    }

    /// Current voices as MIDI notes; voices outside the MIDI range are dropped
    pub fn midi_notes<'a>(
        &'a self,
        scale: &'a Scale,
        base_octave: i8,
    ) -> impl Iterator<Item = MidiNote> + 'a {
        self.current
            .iter()
            .flat_map(|v| v.iter())
            .filter_map(move |&d| scale.midi_note(d, base_octave))
    }

    /// Total voice movement in degrees from the previous chord
    pub fn movement(&self) -> Option<u64> {
        let (current, previous) = (self.current.as_ref()?, self.previous.as_ref()?);
        Some(
            current
                .iter()
                .zip(previous.iter())
                .map(|(a, b)| u64::from(a.abs_diff(*b)))
                .sum(),
        )
    }

    /// Silence the output
    pub fn clear(&mut self) {
        self.current = None;
        self.previous = None;
    }
}
