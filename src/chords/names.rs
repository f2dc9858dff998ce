// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Display names for qualities and voicings.
//!
//! Array lengths are tied to the table sizes, so a name table can never drift
//! out of step with the table it labels.

use super::tables::{QUALITY_COUNT, VOICING_COUNT};

static QUALITY_NAMES: [&str; QUALITY_COUNT] = [
    "fifth",
    "triad",
    "seventh",
    "suspended",
    "susp 7th",
    "sixth",
    "added 9th",
    "added 11th",
    "unisono",
];

static QUALITY_SHORT_NAMES: [&str; QUALITY_COUNT] = [
    "5th", "triad", "7th", "susp", "sus7", "6th", "+9th", "+11th", "uni",
];

static VOICING_NAMES: [&str; VOICING_COUNT] = [
    "close",
    "drop 1",
    "drop 2",
    "drop 3",
    "antidrop 1",
    "antidrop 2",
    "antidrop 3",
    "spread",
];

/// Long name of a quality
pub fn quality_name(index: usize) -> Option<&'static str> {
    QUALITY_NAMES.get(index).copied()
}

/// Short name of a quality
pub fn quality_short_name(index: usize) -> Option<&'static str> {
    QUALITY_SHORT_NAMES.get(index).copied()
}

/// Name of a voicing
pub fn voicing_name(index: usize) -> Option<&'static str> {
    VOICING_NAMES.get(index).copied()
}

/// Find a quality index by long or short name (case-insensitive)
pub fn quality_index(name: &str) -> Option<usize> {
    let name = name.trim();
    QUALITY_NAMES
        .iter()
        .zip(QUALITY_SHORT_NAMES.iter())
        .position(|(long, short)| long.eq_ignore_ascii_case(name) || short.eq_ignore_ascii_case(name))
}

/// Find a voicing index by name (case-insensitive)
pub fn voicing_index(name: &str) -> Option<usize> {
    let name = name.trim();
    VOICING_NAMES
        .iter()
        .position(|v| v.eq_ignore_ascii_case(name))
}
