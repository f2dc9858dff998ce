// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities.
//!
//! This module provides the scales chords are built against and the
//! conversion from scale degrees to playable pitches.

pub mod scale;

pub use scale::{DegreeScale, EqualDivision, MidiNote, Note, Scale, ScaleType};
