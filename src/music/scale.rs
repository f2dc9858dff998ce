// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions and degree-to-pitch conversion.
//!
//! The chord resolver only needs to know how many degrees make up an
//! octave of the active scale. Everything pitch-related lives here behind
//! the [`DegreeScale`] trait so that any tuning (12-tone or not) can drive
//! the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// A scale the chord resolver can work against.
///
/// Degrees are zero-based and unbounded: degree `degree_count()` is the
/// root one octave up, negative degrees fall below the root.
pub trait DegreeScale {
    /// Number of degrees per octave
    fn degree_count(&self) -> usize;

    /// Pitch of a degree in semitones (fractional for non-12-tone scales)
    fn degree_to_pitch(&self, degree: i32) -> f64;
}

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Parse note from string (e.g., "C", "C#", "Db", "F#")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" | "B#" | "BS" => Some(Note::C),
            "C#" | "CS" | "DB" => Some(Note::Cs),
            "D" => Some(Note::D),
            "D#" | "DS" | "EB" => Some(Note::Ds),
            "E" | "FB" => Some(Note::E),
            "F" | "E#" | "ES" => Some(Note::F),
            "F#" | "FS" | "GB" => Some(Note::Fs),
            "G" => Some(Note::G),
            "G#" | "GS" | "AB" => Some(Note::Gs),
            "A" => Some(Note::A),
            "A#" | "AS" | "BB" => Some(Note::As),
            "B" | "CB" => Some(Note::B),
            _ => None,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        };
        write!(f, "{}", name)
    }
}

/// Built-in scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,        // Ionian
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
    NaturalMinor, // Aeolian
    Locrian,      // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    // Blues
    Blues,
    MajorBlues,

    // Symmetric scales
    WholeTone,
    Diminished,   // Half-whole
    DiminishedWH, // Whole-half
    Chromatic,

    // Custom scale from intervals
    Custom,
}

impl ScaleType {
    /// Get the intervals (semitones from root) for this scale type
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],

            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],

            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],

            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
            ScaleType::MajorBlues => &[0, 2, 3, 4, 7, 9],

            ScaleType::WholeTone => &[0, 2, 4, 6, 8, 10],
            ScaleType::Diminished => &[0, 1, 3, 4, 6, 7, 9, 10],
            ScaleType::DiminishedWH => &[0, 2, 3, 5, 6, 8, 9, 11],
            ScaleType::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],

            ScaleType::Custom => &[], // Custom scales define their own
        }
    }

    /// Number of degrees per octave (0 for `Custom`)
    pub fn degree_count(self) -> usize {
        self.intervals().len()
    }

    /// Parse scale type from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(ScaleType::Major),
            "dorian" => Some(ScaleType::Dorian),
            "phrygian" => Some(ScaleType::Phrygian),
            "lydian" => Some(ScaleType::Lydian),
            "mixolydian" => Some(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::NaturalMinor),
            "locrian" => Some(ScaleType::Locrian),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(ScaleType::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => Some(ScaleType::MinorPentatonic),
            "blues" | "minorblues" => Some(ScaleType::Blues),
            "majorblues" => Some(ScaleType::MajorBlues),
            "wholetone" => Some(ScaleType::WholeTone),
            "diminished" | "octatonic" | "halfwhole" => Some(ScaleType::Diminished),
            "diminishedwh" | "wholehalf" => Some(ScaleType::DiminishedWH),
            "chromatic" | "semi" | "semitones" => Some(ScaleType::Chromatic),
            _ => None,
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::MajorBlues => "Major Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Diminished => "Diminished",
            ScaleType::DiminishedWH => "Diminished (W-H)",
            ScaleType::Chromatic => "Chromatic",
            ScaleType::Custom => "Custom",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Semitones above C for an octave-wrapped degree of an interval table.
///
/// Computed in `i64` so every `i32` degree maps without overflow.
fn wrapped_semitones(root: Note, intervals: &[u8], degree: i32) -> Option<i64> {
    if intervals.is_empty() {
        return None;
    }
    let len = intervals.len() as i64;
    let degree = degree as i64;
    let step = intervals[degree.rem_euclid(len) as usize] as i64;
    let octave = degree.div_euclid(len);
    Some(root.pitch_class() as i64 + step + octave * 12)
}

/// A complete scale with root and type
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: Note,
    scale_type: ScaleType,
    intervals: Vec<u8>,
}

impl Scale {
    /// Create a new scale from root and type
    pub fn new(root: Note, scale_type: ScaleType) -> Self {
        Self {
            root,
            scale_type,
            intervals: scale_type.intervals().to_vec(),
        }
    }

    /// Create a custom scale from root and intervals
    pub fn custom(root: Note, intervals: Vec<u8>) -> Self {
        Self {
            root,
            scale_type: ScaleType::Custom,
            intervals,
        }
    }

    /// Parse a scale from strings (e.g., "C", "major")
    pub fn parse(root_str: &str, scale_str: &str) -> Option<Self> {
        let root = Note::from_str(root_str)?;
        let scale_type = ScaleType::from_str(scale_str)?;
        Some(Scale::new(root, scale_type))
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the intervals (semitones from root)
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    /// Get the number of notes in this scale
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check if this scale is empty (only possible for custom scales)
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Note name of a (zero-based, octave-wrapping) degree
    pub fn note_at(&self, degree: i32) -> Option<Note> {
        let semitones = wrapped_semitones(self.root, &self.intervals, degree)?;
        Some(Note::from_pitch_class(semitones.rem_euclid(12) as u8))
    }

    /// MIDI note for a degree, with degree 0 sitting on the root in `base_octave`.
    ///
    /// Octave uses MIDI convention (middle C = C4 = 60). Returns `None` when the
    /// result falls outside 0..=127.
    pub fn midi_note(&self, degree: i32, base_octave: i8) -> Option<MidiNote> {
        let semitones = wrapped_semitones(self.root, &self.intervals, degree)?;
        let midi = (base_octave as i64 + 1) * 12 + semitones;
        if !(0..=127).contains(&midi) {
            return None;
        }
        Some(midi as MidiNote)
    }
}

impl DegreeScale for Scale {
    fn degree_count(&self) -> usize {
        self.len()
    }

    fn degree_to_pitch(&self, degree: i32) -> f64 {
        wrapped_semitones(self.root, &self.intervals, degree).unwrap_or(0) as f64
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}

/// Equal division of the octave (n-EDO), e.g. 19 or 31 tones per octave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualDivision {
    divisions: u16,
}

impl EqualDivision {
    pub fn new(divisions: u16) -> Self {
        Self { divisions }
    }
}

impl DegreeScale for EqualDivision {
    fn degree_count(&self) -> usize {
        self.divisions as usize
    }

    fn degree_to_pitch(&self, degree: i32) -> f64 {
        if self.divisions == 0 {
            return 0.0;
        }
        degree as f64 * 12.0 / self.divisions as f64
    }
}
