// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for seq-chords
//!
//! These tests exercise the public API end to end: tables, the resolver
//! pipeline, the output holder and preset files.

use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::tempdir;

use seq_chords::chords::{
    self, apply_voicing, expand, invert, tables, Voices, MAX_VOICES, QUALITY_COUNT,
    VOICING_COUNT,
};
use seq_chords::config::{validate_presets, PresetFile};
use seq_chords::{
    resolve, Chord, ChordError, ChordOutput, DegreeScale, EqualDivision, Note, Scale, ScaleType,
};

fn c_major() -> Scale {
    Scale::new(Note::C, ScaleType::Major)
}

/// Random chord descriptor with valid indices
fn random_chord(rng: &mut StdRng) -> Chord {
    Chord::new(
        rng.gen_range(0..QUALITY_COUNT) as u8,
        rng.gen_range(-8..=8),
        rng.gen_range(0..VOICING_COUNT) as u8,
    )
}

/// Every quality expands to exactly its voice count
#[test]
fn test_expand_matches_voice_count() {
    for degree_count in [5, 7, 8, 12, 19] {
        for (index, quality) in tables::qualities().iter().enumerate() {
            let voices = expand(index, degree_count).unwrap();
            assert_eq!(voices.len(), quality.voice_count());
            assert!((1..=MAX_VOICES).contains(&voices.len()));
        }
    }
}

/// Inverting by k and then by -k restores the chord
#[test]
fn test_inversion_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let len = rng.gen_range(1..=MAX_VOICES);
        let degrees: Vec<i32> = (0..len).map(|_| rng.gen_range(-30..30)).collect();
        let voices = Voices::from_degrees(&degrees).unwrap();
        let k = rng.gen_range(-40..40);
        let octave = rng.gen_range(1..32);

        let inverted = invert(&voices, k, octave).unwrap();
        assert_eq!(inverted.len(), voices.len());
        assert_eq!(invert(&inverted, -k, octave).unwrap(), voices, "k = {}, octave = {}", k, octave);
    }
}

/// Close voicing leaves every chord unchanged
#[test]
fn test_close_voicing_is_identity() {
    let close = chords::voicing(0).unwrap();
    for index in 0..QUALITY_COUNT {
        let voices = expand(index, 7).unwrap();
        assert_eq!(apply_voicing(&voices, close, 7).unwrap(), voices);
    }
}

/// An inversion equal to the voice count lifts every voice one octave
#[test]
fn test_full_inversion_is_one_octave() {
    let scales: [Box<dyn DegreeScale>; 3] = [
        Box::new(c_major()),
        Box::new(Scale::new(Note::E, ScaleType::MinorPentatonic)),
        Box::new(EqualDivision::new(19)),
    ];

    for scale in &scales {
        let n = scale.degree_count() as i32;
        for quality in 0..QUALITY_COUNT as u8 {
            for voicing in 0..VOICING_COUNT as u8 {
                let voices = tables::quality(quality as usize).unwrap().voice_count() as i8;
                let base = resolve(3, &Chord::new(quality, 0, voicing), scale.as_ref()).unwrap();
                let lifted =
                    resolve(3, &Chord::new(quality, voices, voicing), scale.as_ref()).unwrap();
                for (b, l) in base.iter().zip(lifted.iter()) {
                    assert_eq!(l - b, n);
                }
            }
        }
    }
}

/// Moving the root by one degree moves every voice by one degree
#[test]
fn test_root_transposition() {
    let mut rng = StdRng::seed_from_u64(7);
    let scale = c_major();

    for _ in 0..300 {
        let chord = random_chord(&mut rng);
        let root = rng.gen_range(-20..20);
        let low = resolve(root, &chord, &scale).unwrap();
        let high = resolve(root + 1, &chord, &scale).unwrap();
        for (a, b) in low.iter().zip(high.iter()) {
            assert_eq!(*b, a + 1);
        }
    }
}

/// Triad in a seven-degree scale, close and drop 2
#[test]
fn test_triad_examples() {
    let scale = c_major();
    let close = resolve(0, &Chord::new(1, 0, 0), &scale).unwrap();
    assert_eq!(close.as_slice(), &[0, 2, 4]);

    let drop2 = resolve(0, &Chord::new(1, 0, 2), &scale).unwrap();
    assert_eq!(drop2.as_slice(), &[0, 2, -3]);
}

/// Unisono always yields a single voice
#[test]
fn test_unisono_single_voice() {
    let scale = c_major();
    for inversion in -6..=6 {
        for voicing in 0..VOICING_COUNT as u8 {
            let voices = resolve(0, &Chord::new(8, inversion, voicing), &scale).unwrap();
            assert_eq!(voices.len(), 1);
        }
    }
}

/// Out-of-range indices fail and produce nothing
#[test]
fn test_invalid_indices() {
    let scale = c_major();
    assert_eq!(
        resolve(0, &Chord::new(99, 0, 0), &scale),
        Err(ChordError::InvalidQuality { index: 99, len: 9 })
    );
    assert!(matches!(
        resolve(0, &Chord::new(0, 0, 200), &scale),
        Err(ChordError::InvalidVoicing { index: 200, .. })
    ));
    assert!(matches!(
        resolve(0, &Chord::new(0, 0, 0), &Scale::custom(Note::C, Vec::new())),
        Err(ChordError::InvalidScale { degree_count: 0 })
    ));
}

/// Roots at the edge of the degree range map to pitches or fail cleanly
#[test]
fn test_extreme_roots() {
    let scale = c_major();
    let mut output = ChordOutput::new();
    let voices = output.update(i32::MAX - 4, &Chord::new(1, 0, 0), &scale).unwrap();

    let pitches: Vec<f64> = voices.pitches(&scale).collect();
    assert_eq!(pitches.len(), 3);
    assert!(pitches.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(output.midi_notes(&scale, 4).count(), 0);

    assert_eq!(
        output.update(i32::MAX, &Chord::new(1, 0, 0), &scale),
        Err(ChordError::DegreeOverflow)
    );
    assert_eq!(output.current(), Some(&voices));
}

/// A rejected chord leaves the previous output in place
#[test]
fn test_output_survives_errors() {
    let scale = c_major();
    let mut output = ChordOutput::new();
    output.update(4, &Chord::new(2, 0, 0), &scale).unwrap();
    let before = *output.current().unwrap();

    assert!(output.update(0, &Chord::new(1, 0, 99), &scale).is_err());
    assert_eq!(output.current(), Some(&before));

    let notes: Vec<u8> = output.midi_notes(&scale, 3).collect();
    // G3 B3 D4 F4
    assert_eq!(notes, vec![55, 59, 62, 65]);
}

/// Presets saved to disk load back and resolve the same
#[test]
fn test_preset_file_pipeline() {
    let dir = tempdir().unwrap();
    let yaml_path = dir.path().join("song.yaml");
    let toml_path = dir.path().join("song.toml");

    fs::write(
        &yaml_path,
        r#"
scale:
  key: "A"
  scale: "harmonic_minor"
chords:
  - name: "i"
    quality: triad
"#,
    )
    .unwrap();
    // quality must be an index
    assert!(PresetFile::load(&yaml_path).is_err());

    fs::write(
        &yaml_path,
        r#"
scale:
  key: "A"
  scale: "harmonic_minor"
chords:
  - name: "i"
    quality: 1
  - name: "V7"
    root: 4
    quality: 2
    inversion: -1
    voicing: 2
"#,
    )
    .unwrap();

    let presets = validate_presets(&yaml_path).unwrap();
    presets.save(&toml_path).unwrap();
    let reloaded = validate_presets(&toml_path).unwrap();
    assert_eq!(presets, reloaded);

    let resolved = reloaded.resolve_all().unwrap();
    assert_eq!(resolved[0].1.as_slice(), &[0, 2, 4]);
    // V7 = [4, 6, 8, 10], top voice down -> [3, 4, 6, 8], drop 2 on slot 2
    assert_eq!(resolved[1].1.as_slice(), &[3, 4, -1, 8]);
}
