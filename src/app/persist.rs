//! Persistence layer for the history list and theme preference.
//!
//! Both stores hold a single scalar/list value read once at startup and
//! written synchronously after each mutating intent; there is no schema
//! versioning. Missing or corrupt files fall back to defaults.

use std::fs;
use std::path::Path;

use crate::state::AppState;

/// What: Persist the history list to disk if marked dirty.
///
/// Inputs:
/// - `app`: Application state containing `history` and `history_path`
///
/// Output:
/// - Writes the history as a JSON array (most-recent-first) to
///   `history_path` and clears the dirty flag.
pub fn maybe_flush_history(app: &mut AppState) {
    if !app.history_dirty {
        return;
    }
    let values = app.history_values();
    if let Ok(s) = serde_json::to_string(&values) {
        match fs::write(&app.history_path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %app.history_path.display(),
                    entries = values.len(),
                    "[Persist] Search history persisted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %app.history_path.display(),
                    error = %e,
                    "[Persist] Failed to write search history"
                );
            }
        }
        app.history_dirty = false;
    }
}

/// What: Load persisted history into the LRU cache.
///
/// Inputs:
/// - `app`: Mutable application state whose `history_path` is read
///
/// Output:
/// - Fills `history` so the most recent persisted entry ends up at the
///   front. Missing or corrupt files leave the list empty.
pub fn load_history(app: &mut AppState) {
    let Ok(data) = fs::read_to_string(&app.history_path) else {
        return;
    };
    let Ok(values) = serde_json::from_str::<Vec<String>>(&data) else {
        tracing::warn!(
            path = %app.history_path.display(),
            "[Persist] Ignoring corrupt history file"
        );
        return;
    };
    // The file is most-recent-first; insert oldest first so LRU order matches.
    for value in values.iter().rev() {
        let term = value.trim();
        if term.is_empty() {
            continue;
        }
        app.history.put(term.to_lowercase(), term.to_string());
    }
}

/// What: Persist the theme flag immediately.
///
/// Inputs:
/// - `app`: Application state providing `dark` and `theme_path`
///
/// Output:
/// - Writes the boolean as JSON. Written on every toggle, not debounced,
///   so the preference survives even an unclean exit.
pub fn save_theme(app: &AppState) {
    match serde_json::to_string(&app.dark) {
        Ok(s) => match fs::write(&app.theme_path, &s) {
            Ok(()) => {
                tracing::debug!(
                    path = %app.theme_path.display(),
                    dark = app.dark,
                    "[Persist] Theme preference persisted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    path = %app.theme_path.display(),
                    error = %e,
                    "[Persist] Failed to write theme preference"
                );
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "[Persist] Failed to encode theme preference");
        }
    }
}

/// What: Load the stored theme flag.
///
/// Inputs:
/// - `path`: Location of the persisted flag
///
/// Output:
/// - `Some(bool)` when a readable JSON boolean exists; `None` otherwise so
///   the caller can fall back to the ambient preference.
#[must_use]
pub fn load_theme(path: &Path) -> Option<bool> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str::<bool>(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::history::record_history;

    fn app_in(dir: &Path) -> AppState {
        AppState {
            history_path: dir.join("search_history.json"),
            theme_path: dir.join("theme.json"),
            ..Default::default()
        }
    }

    #[test]
    /// What: History survives a flush/load round-trip with order preserved
    ///
    /// - Input: Three recorded terms flushed to a temp dir, then loaded into
    ///   a fresh state
    /// - Output: Same values, most-recent-first
    fn history_round_trip_preserves_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app_in(dir.path());
        for term in ["Rick", "Morty", "Summer"] {
            record_history(&mut app, term);
        }
        maybe_flush_history(&mut app);
        assert!(!app.history_dirty);

        let mut fresh = app_in(dir.path());
        load_history(&mut fresh);
        assert_eq!(fresh.history_values(), vec!["Summer", "Morty", "Rick"]);
    }

    #[test]
    /// What: Corrupt history files are ignored instead of failing startup
    ///
    /// - Input: A file containing invalid JSON
    /// - Output: Empty history
    fn corrupt_history_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app_in(dir.path());
        std::fs::write(&app.history_path, "not json").expect("write");
        load_history(&mut app);
        assert!(app.history.is_empty());
    }

    #[test]
    /// What: The theme flag round-trips and is absent when never written
    ///
    /// - Input: Saved `dark = false`, then a fresh path
    /// - Output: `Some(false)` after saving; `None` for the missing file
    fn theme_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = app_in(dir.path());
        app.dark = false;
        save_theme(&app);
        assert_eq!(load_theme(&app.theme_path), Some(false));
        assert_eq!(load_theme(&dir.path().join("absent.json")), None);
    }
}
