//! Settings hot reload
//!
//! Watches the settings file's directory and pushes every successful reload
//! onto the controller's event queue.

use anyhow::{Context, Result};
use confetti_core::Settings;
use confetti_runtime::{EventSender, OverlayEvent};
use notify::RecommendedWatcher;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

/// Keep the returned debouncer alive for as long as reloads should happen
pub fn watch_settings(path: &Path, sender: EventSender) -> Result<Debouncer<RecommendedWatcher>> {
    let (tx, rx) = mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    // Editors often replace the file, so watch the directory instead
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    debouncer
        .watcher()
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    let settings_path = path.to_path_buf();
    std::thread::spawn(move || {
        for result in rx {
            match result {
                Ok(events) => {
                    if touches(&events, &settings_path) && !reload(&settings_path, &sender) {
                        // Controller is gone
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Watch error: {:?}", e);
                }
            }
        }
    });

    tracing::info!(path = %path.display(), "watching settings for changes");
    Ok(debouncer)
}

fn touches(events: &[DebouncedEvent], settings_path: &Path) -> bool {
    let target = file_name(settings_path);
    events.iter().any(|event| file_name(&event.path) == target)
}

fn file_name(path: &Path) -> Option<PathBuf> {
    path.file_name().map(PathBuf::from)
}

/// Load the settings file and queue it for the next tick. A file that fails
/// to parse is logged and skipped. Returns false once the receiver is gone.
pub fn reload(path: &Path, sender: &EventSender) -> bool {
    match Settings::load(path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "settings reloaded");
            sender.send(OverlayEvent::SettingsChanged(settings))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring settings change: {}", e);
            true
        }
    }
}
