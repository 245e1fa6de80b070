//! History list maintenance for submitted search terms.

use crate::state::AppState;
use crate::state::app_state::history_capacity;

/// What: Record a submitted term into the history list.
///
/// Inputs:
/// - `app`: Mutable application state providing the history cache
/// - `term`: The term as submitted (whitespace already trimmed by callers;
///   trimmed again here for safety)
///
/// Output:
/// - Updates `history` (deduped case-insensitively, clamped to the three
///   most recent) and marks it dirty for persistence.
///
/// Details:
/// - Keys are lowercased so an existing term in different casing moves to
///   the front instead of duplicating; the stored value keeps the casing of
///   the latest submission.
pub fn record_history(app: &mut AppState, term: &str) {
    let value = term.trim().to_string();
    if value.is_empty() {
        return;
    }
    let key = value.to_lowercase();
    app.history.resize(history_capacity());
    app.history.put(key, value);
    app.history_dirty = true;
}

/// What: Drop all stored history entries.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Empties the history cache, clears the pane selection, and marks the
///   list dirty so the empty state is persisted.
pub fn clear_history(app: &mut AppState) {
    app.history.clear();
    app.history_state.select(None);
    app.history_dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_state::HISTORY_CAPACITY;

    #[test]
    /// What: Recording a term in a different casing moves it to the front
    /// without duplicating
    ///
    /// - Input: History containing `"RickGrep"`-style cased entry, then the
    ///   same term lowercased
    /// - Output: One entry, the latest casing, at the front
    fn record_dedup_is_case_insensitive() {
        let mut app = AppState::default();
        app.history.put("rick".into(), "Rick".into());
        record_history(&mut app, "RICK");
        let values = app.history_values();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "RICK");
        assert!(app.history_dirty);
    }

    #[test]
    /// What: The list never exceeds three entries and evicts the oldest
    ///
    /// - Input: Five distinct terms recorded in order
    /// - Output: The three most recent, newest first
    fn record_clamps_to_capacity() {
        let mut app = AppState::default();
        for term in ["Rick", "Morty", "Summer", "Beth", "Jerry"] {
            record_history(&mut app, term);
        }
        let values = app.history_values();
        assert_eq!(values.len(), HISTORY_CAPACITY);
        assert_eq!(values, vec!["Jerry", "Beth", "Summer"]);
    }

    #[test]
    /// What: Whitespace-only terms are never recorded
    ///
    /// - Input: Blank and whitespace-only strings
    /// - Output: History stays empty and clean
    fn record_ignores_blank_terms() {
        let mut app = AppState::default();
        record_history(&mut app, "   ");
        record_history(&mut app, "");
        assert!(app.history.is_empty());
        assert!(!app.history_dirty);
    }

    #[test]
    /// What: Clearing empties the list and marks it for persistence
    ///
    /// - Input: History with two entries and an active pane selection
    /// - Output: Empty list, no selection, dirty flag set
    fn clear_empties_and_marks_dirty() {
        let mut app = AppState::default();
        record_history(&mut app, "Rick");
        record_history(&mut app, "Morty");
        app.history_dirty = false;
        app.history_state.select(Some(0));
        clear_history(&mut app);
        assert!(app.history.is_empty());
        assert_eq!(app.history_state.selected(), None);
        assert!(app.history_dirty);
    }
}
