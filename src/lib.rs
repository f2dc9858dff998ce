// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale-degree chord construction for sequencer voltage outputs.
//!
//! Chords are described by a small [`Chord`] descriptor and resolved against
//! any [`DegreeScale`] into at most four voices of absolute scale degrees.
//! Resolution is pure and allocation-free so it can run on every clock or
//! trigger event.

pub mod chords;
pub mod config;
pub mod error;
pub mod music;

pub use chords::{resolve, Chord, ChordOutput, Voices};
pub use error::{ChordError, Result};
pub use music::{DegreeScale, EqualDivision, Note, Scale, ScaleType};
