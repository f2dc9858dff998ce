// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for hot-reloading chord presets.
//!
//! Edits to a preset file are debounced, re-parsed and validated before they
//! are handed to the caller, so a half-saved or broken file never replaces
//! the presets currently in use.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::PresetFile;

/// Events emitted by the preset watcher
#[derive(Debug, Clone)]
pub enum PresetEvent {
    /// Preset file was modified and successfully reloaded
    Reloaded(Box<PresetFile>),
    /// Preset file was modified but failed to parse or validate
    Error(String),
    /// A new file was created in the watch directory
    FileCreated(PathBuf),
    /// A file was deleted from the watch directory
    FileDeleted(PathBuf),
}

/// Preset file watcher with debouncing and validation
pub struct PresetWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<PresetEvent>,
    watched_path: PathBuf,
}

fn is_preset_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml") | Some("toml")
    )
}

fn reload(path: &Path) -> PresetEvent {
    match validate_presets(path) {
        Ok(presets) => {
            debug!(path = ?path, "presets reloaded");
            PresetEvent::Reloaded(Box::new(presets))
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "preset reload failed");
            PresetEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
        }
    }
}

impl PresetWatcher {
    /// Create a new watcher for a preset file or directory
    ///
    /// # Arguments
    /// * `path` - Path to watch (file or directory)
    /// * `debounce_ms` - Debounce duration in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<PresetEvent>, Receiver<PresetEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;

        let debounced_path = watched_path.clone();
        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let mut pending_paths: Vec<PathBuf> = Vec::new();

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => match event.kind {
                        EventKind::Create(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(PresetEvent::FileCreated(path));
                            }
                        }
                        EventKind::Remove(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(PresetEvent::FileDeleted(path));
                            }
                        }
                        EventKind::Modify(_) => {
                            for path in event.paths {
                                if !pending_paths.contains(&path) {
                                    pending_paths.push(path);
                                }
                            }
                            last_event_time = Some(Instant::now());
                        }
                        _ => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let settled = last_event_time
                            .map(|t| t.elapsed() >= debounce_duration)
                            .unwrap_or(false);
                        if settled {
                            for path in pending_paths.drain(..) {
                                if is_preset_file(&path) || path == debounced_path {
                                    let _ = event_tx.send(reload(&path));
                                }
                            }
                            last_event_time = None;
                        }
                    }
                    // Watcher was dropped
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next preset event (non-blocking)
    pub fn try_recv(&self) -> Option<PresetEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending preset events
    pub fn recv_all(&self) -> Vec<PresetEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next preset event is received
    pub fn recv(&self) -> Option<PresetEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

/// Load a preset file and check that every chord in it resolves
pub fn validate_presets<P: AsRef<Path>>(path: P) -> Result<PresetFile> {
    let presets = PresetFile::load(path)?;
    presets.validate()?;
    Ok(presets)
}
