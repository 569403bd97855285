//! File system watcher for the template and data files.
//!
//! Unlike a project-wide watcher this subscribes to exactly two files at
//! most, non-recursively. Change notifications cross from notify's callback
//! thread into the async world over a bounded channel; every notification on
//! a watched path becomes a reload trigger. Event kinds are deliberately not
//! discriminated (a rename or delete reloads just like a modify), and there
//! is no debouncing: duplicate notifications for one logical edit produce
//! redundant reload frames, which clients handle by reloading once.

use crate::error::Result;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use tokio::sync::mpsc;

/// A change notification on one of the watched files.
#[derive(Debug, Clone)]
pub struct WatchEvent {
    /// Which file changed
    pub path: PathBuf,
}

/// Watcher over the template file and (if present) the data file.
///
/// Files that do not exist at setup time get no subscription; there is no
/// retro-active watching of files created later.
pub struct FileWatcher {
    /// Underlying notify watcher, kept alive for the process lifetime
    _watcher: RecommendedWatcher,
    /// Paths that actually got a subscription
    watched: Vec<PathBuf>,
}

impl FileWatcher {
    /// Create a watcher over the given target files.
    ///
    /// # Returns
    ///
    /// Tuple of (FileWatcher, receiver for change events)
    ///
    /// # Errors
    ///
    /// Returns error if the platform watcher cannot be created or a
    /// subscription on an existing file fails
    pub fn new(targets: &[PathBuf]) -> Result<(Self, mpsc::Receiver<WatchEvent>)> {
        let (tx, rx) = mpsc::channel(16);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                for path in &event.paths {
                    // Dropped receiver means the server is shutting down.
                    let _ = tx.blocking_send(WatchEvent { path: path.clone() });
                }
            }
        })?;

        let mut watched = Vec::new();
        for target in targets {
            if target.is_file() {
                watcher.watch(target, RecursiveMode::NonRecursive)?;
                watched.push(target.clone());
            }
        }

        Ok((
            Self {
                _watcher: watcher,
                watched,
            },
            rx,
        ))
    }

    /// Paths that got a subscription at setup time.
    pub fn watched(&self) -> &[PathBuf] {
        &self.watched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribes_to_existing_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("page.html");
        let data = dir.path().join("data.json");
        std::fs::write(&template, "<h1>hi</h1>").unwrap();

        let (watcher, _rx) = FileWatcher::new(&[template.clone(), data]).unwrap();
        assert_eq!(watcher.watched().len(), 1);
        assert_eq!(watcher.watched()[0], template);
    }

    #[test]
    fn test_no_targets_exist_yields_empty_watch_set() {
        let dir = tempfile::tempdir().unwrap();
        let (watcher, _rx) =
            FileWatcher::new(&[dir.path().join("missing.html"), dir.path().join("missing.json")])
                .unwrap();
        assert!(watcher.watched().is_empty());
    }

    #[test]
    fn test_directories_are_not_subscribed() {
        let dir = tempfile::tempdir().unwrap();
        let (watcher, _rx) = FileWatcher::new(&[dir.path().to_path_buf()]).unwrap();
        assert!(watcher.watched().is_empty());
    }
}
