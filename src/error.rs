// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for chord resolution.
//!
//! Errors carry only integers so they can be created and returned from a
//! timing-critical loop without allocating.

use thiserror::Error;

/// Errors that can occur while resolving a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChordError {
    /// Quality index outside the quality table, or an entry with no voices
    #[error("invalid quality {index} (table has {len} entries)")]
    InvalidQuality { index: usize, len: usize },
    /// Voicing index outside the voicing table
    #[error("invalid voicing {index} (table has {len} entries)")]
    InvalidVoicing { index: usize, len: usize },
    /// Scale reports no degrees (or more than can be addressed)
    #[error("invalid scale with {degree_count} degrees")]
    InvalidScale { degree_count: usize },
    /// A resolved degree falls outside the `i32` range
    #[error("chord degrees overflow the addressable range")]
    DegreeOverflow,
}

/// Result alias for chord operations
pub type Result<T> = std::result::Result<T, ChordError>;
