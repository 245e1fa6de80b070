//! Key handling while the result list has focus.

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic;
use crate::state::{AppState, Focus, Modal, QueryInput, ViewState};

/// Handle key events while the Results pane is focused.
///
/// Up/Down move the selection, Left/Right page, Enter opens the details
/// modal. Returns `true` to exit the app, `false` to continue.
pub fn handle_results_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, 1),
        KeyCode::Home => move_selection(app, isize::MIN),
        KeyCode::End => move_selection(app, isize::MAX),
        KeyCode::Left | KeyCode::Char('h') => {
            let prev = app.query.page.saturating_sub(1);
            logic::go_to_page(app, prev, query_tx);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let next = app.query.page.saturating_add(1);
            logic::go_to_page(app, next, query_tx);
        }
        KeyCode::Enter => {
            if let ViewState::Populated(page) = &app.view
                && let Some(character) = page.items.get(app.selected)
            {
                app.modal = Modal::Details(character.clone());
            }
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
        }
        _ => {}
    }
    false
}

/// Move the highlighted row by `delta`, clamped to the populated page.
///
/// Saturating extremes (`isize::MIN`/`MAX`) jump to the first or last row.
fn move_selection(app: &mut AppState, delta: isize) {
    let ViewState::Populated(page) = &app.view else {
        return;
    };
    let len = page.items.len();
    if len == 0 {
        return;
    }
    let next = match delta {
        isize::MIN => 0,
        isize::MAX => len - 1,
        d => {
            let cur = isize::try_from(app.selected).unwrap_or(0);
            usize::try_from((cur + d).clamp(0, isize::try_from(len).unwrap_or(isize::MAX) - 1))
                .unwrap_or(0)
        }
    };
    app.selected = next;
    app.list_state.select(Some(next));
}
