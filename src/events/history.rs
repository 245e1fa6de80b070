//! Key handling while the history pane has focus.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::app::history::clear_history;
use crate::logic;
use crate::state::{AppState, Focus, QueryInput};

/// Handle key events while the History pane is focused.
///
/// Enter re-runs the highlighted term; `x` clears the list. Returns `true`
/// to exit the app, `false` to continue.
pub fn handle_history_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Enter => {
            let values = app.history_values();
            if let Some(term) = app
                .history_state
                .selected()
                .and_then(|i| values.get(i))
                .cloned()
            {
                logic::select_from_history(app, &term, query_tx);
                app.focus = Focus::Search;
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            clear_history(app);
        }
        _ => {}
    }
    false
}

/// Move the highlighted history row by `delta`, clamped to the list.
fn move_selection(app: &mut AppState, delta: isize) {
    let len = app.history.len();
    if len == 0 {
        app.history_state.select(None);
        return;
    }
    let cur = app.history_state.selected().unwrap_or(0);
    let cur = isize::try_from(cur).unwrap_or(0);
    let max = isize::try_from(len).unwrap_or(isize::MAX) - 1;
    let next = usize::try_from((cur + delta).clamp(0, max)).unwrap_or(0);
    app.history_state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::history::record_history;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use tokio::sync::mpsc::unbounded_channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    /// What: Picking a history entry re-runs it without re-appending
    ///
    /// - Input: Two recorded terms; select the most recent and press Enter
    /// - Output: A fetch for that term, history unchanged, focus on Search
    fn enter_reruns_selected_term_without_duplicating() {
        let mut app = AppState::default();
        record_history(&mut app, "Rick");
        record_history(&mut app, "Morty");
        app.focus = Focus::History;
        app.history_state.select(Some(0));
        let (tx, mut rx) = unbounded_channel();

        handle_history_key(key(KeyCode::Enter), &mut app, &tx);

        let sent = rx.try_recv().expect("fetch issued");
        assert_eq!(sent.query.name, "Morty");
        assert_eq!(sent.query.page, 1);
        assert_eq!(app.history_values(), vec!["Morty", "Rick"]);
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    /// What: `x` clears the list and selection
    ///
    /// - Input: One recorded term, then `x`
    /// - Output: Empty history with no selection
    fn x_clears_history() {
        let mut app = AppState::default();
        record_history(&mut app, "Rick");
        app.history_state.select(Some(0));
        let (tx, _rx) = unbounded_channel();
        handle_history_key(key(KeyCode::Char('x')), &mut app, &tx);
        assert!(app.history.is_empty());
        assert_eq!(app.history_state.selected(), None);
    }
}
