// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn, Level};

use seq_chords::chords::{self, tables};
use seq_chords::config::{PresetEvent, PresetFile, PresetWatcher};
use seq_chords::{Chord, ChordOutput, Scale, Voices};

/// Octave the chord root is placed in when printing MIDI notes
const BASE_OCTAVE: i8 = 4;

fn print_usage() {
    println!("SEQ-CHORDS - Scale-degree chord resolver");
    println!();
    println!("Usage: seq-chords [--verbose] <OPTION>");
    println!();
    println!("Options:");
    println!("  --list-qualities        List chord qualities");
    println!("  --list-voicings         List voicings");
    println!("  --resolve <ROOT> <QUALITY> <INVERSION> <VOICING> [KEY] [SCALE]");
    println!("                          Resolve one chord (default scale: C major)");
    println!("  --presets <FILE>        Resolve every chord in a YAML/TOML preset file");
    println!("  --watch <FILE>          Re-resolve a preset file whenever it changes");
    println!("  --verbose               Enable debug logging");
    println!("  --help                  Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn list_qualities() {
    for (i, quality) in tables::qualities().iter().enumerate() {
        println!(
            "{:>2}  {:<12} {:<6} steps {:?}",
            i,
            chords::quality_name(i).unwrap_or("?"),
            chords::quality_short_name(i).unwrap_or("?"),
            quality.steps()
        );
    }
}

fn list_voicings() {
    for (i, voicing) in tables::voicings().iter().enumerate() {
        println!(
            "{:>2}  {:<12} octaves {:?}",
            i,
            chords::voicing_name(i).unwrap_or("?"),
            voicing.octaves()
        );
    }
}

/// Parse a table index given either as a number or by name
fn parse_index(arg: &str, by_name: fn(&str) -> Option<usize>, what: &str) -> Result<u8> {
    if let Ok(index) = arg.parse::<u8>() {
        return Ok(index);
    }
    by_name(arg)
        .map(|i| i as u8)
        .ok_or_else(|| anyhow!("Unknown {}: {}", what, arg))
}

fn print_chord(label: &str, root: i32, voices: &Voices, scale: &Scale) {
    let notes: Vec<String> = voices
        .iter()
        .map(|&d| {
            scale
                .note_at(d)
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string())
        })
        .collect();
    let midi: Vec<String> = voices
        .iter()
        .map(|&d| match scale.midi_note(d, BASE_OCTAVE) {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        })
        .collect();
    println!(
        "{:<20} root {:>3}  degrees {:?}  notes [{}]  midi [{}]",
        label,
        root,
        voices.as_slice(),
        notes.join(" "),
        midi.join(" ")
    );
}

fn resolve_one(args: &[String]) -> Result<()> {
    if args.len() < 4 {
        return Err(anyhow!(
            "--resolve requires <ROOT> <QUALITY> <INVERSION> <VOICING>"
        ));
    }
    let root: i32 = args[0]
        .parse()
        .map_err(|_| anyhow!("Invalid root degree: {}", args[0]))?;
    let quality = parse_index(&args[1], chords::quality_index, "quality")?;
    let inversion: i8 = args[2]
        .parse()
        .map_err(|_| anyhow!("Invalid inversion: {}", args[2]))?;
    let voicing = parse_index(&args[3], chords::voicing_index, "voicing")?;

    let key = args.get(4).map(String::as_str).unwrap_or("C");
    let scale_name = args.get(5).map(String::as_str).unwrap_or("major");
    let scale = Scale::parse(key, scale_name)
        .ok_or_else(|| anyhow!("Unknown scale: {} {}", key, scale_name))?;

    let chord = Chord::new(quality, inversion, voicing);
    let voices = seq_chords::resolve(root, &chord, &scale)?;
    println!("Scale: {}", scale);
    print_chord(&chord.label(), root, &voices, &scale);
    Ok(())
}

fn print_presets(presets: &PresetFile) -> Result<()> {
    let scale = presets.scale.to_scale()?;
    println!("Scale: {}", scale);
    for (preset, voices) in presets.resolve_all()? {
        let label = preset
            .name
            .clone()
            .unwrap_or_else(|| preset.chord.label());
        print_chord(&label, preset.root, &voices, &scale);
    }
    Ok(())
}

fn show_presets(path: &Path) -> Result<()> {
    let presets = PresetFile::load(path)?;
    print_presets(&presets)
}

fn watch_presets(path: &Path) -> Result<()> {
    let mut presets = PresetFile::load(path)?;
    print_presets(&presets)?;

    // Keep sounding the first preset across reloads
    let mut output = ChordOutput::new();
    presets.sound_first(&mut output)?;

    let watcher = PresetWatcher::new(path, None)?;
    info!(path = ?watcher.watched_path(), "watching presets (press Ctrl+C to stop)");

    while let Some(event) = watcher.recv() {
        match event {
            PresetEvent::Reloaded(new_presets) => {
                presets = *new_presets;
                match presets.sound_first(&mut output) {
                    Ok(Some(_)) => {
                        if let Some(moved) = output.movement() {
                            info!(moved, "first preset changed");
                        }
                    }
                    Ok(None) => {}
                    Err(e) => warn!("{:#}", e),
                }
                println!();
                print_presets(&presets)?;
            }
            PresetEvent::Error(message) => warn!("{}", message),
            PresetEvent::FileCreated(p) => info!(path = ?p, "file created"),
            PresetEvent::FileDeleted(p) => info!(path = ?p, "file deleted"),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    init_logging(verbose);

    if args.is_empty() {
        println!("SEQ-CHORDS - Scale-degree chord resolver");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[0].as_str() {
        "--list-qualities" => list_qualities(),
        "--list-voicings" => list_voicings(),
        "--resolve" => resolve_one(&args[1..])?,
        "--presets" | "--watch" => {
            let path = args
                .get(1)
                .with_context(|| format!("{} requires a preset file", args[0]))?;
            if args[0] == "--watch" {
                watch_presets(Path::new(path))?;
            } else {
                show_presets(Path::new(path))?;
            }
        }
        "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown option: {}", args[0]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
