//! Key handling while the search input has focus.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic;
use crate::state::{AppState, Focus, QueryInput};

/// Handle key events while the Search pane is focused.
///
/// Editing appends at the end of the buffer; Enter submits. Returns `true`
/// to exit the app, `false` to continue.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Enter => {
            logic::submit_search(app, query_tx);
        }
        KeyCode::Backspace => {
            let mut text = app.input.clone();
            text.pop();
            logic::set_free_text(app, text);
        }
        KeyCode::Char(ch) => {
            let mut text = app.input.clone();
            text.push(ch);
            logic::set_free_text(app, text);
        }
        KeyCode::Down => {
            app.focus = Focus::Results;
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
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
    /// What: Typing edits the buffer without issuing a fetch
    ///
    /// - Input: Two characters then a backspace
    /// - Output: Buffer reflects the edits; the query channel stays empty
    fn typing_edits_buffer_without_fetching() {
        let mut app = AppState::default();
        let (tx, mut rx) = unbounded_channel();
        handle_search_key(key(KeyCode::Char('r')), &mut app, &tx);
        handle_search_key(key(KeyCode::Char('i')), &mut app, &tx);
        handle_search_key(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(app.input, "r");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Enter submits the buffer and resets the page
    ///
    /// - Input: Buffer "rick" on page 4, then Enter
    /// - Output: One fetch for "rick" page 1; term recorded in history
    fn enter_submits_and_resets_page() {
        let mut app = AppState::default();
        app.input = "rick".into();
        app.query.page = 4;
        let (tx, mut rx) = unbounded_channel();
        handle_search_key(key(KeyCode::Enter), &mut app, &tx);
        let sent = rx.try_recv().expect("fetch issued");
        assert_eq!(sent.query.name, "rick");
        assert_eq!(sent.query.page, 1);
        assert_eq!(app.history_values(), vec!["rick"]);
    }
}
