//! Event handling layer for Rickdex's TUI.
//!
//! Dispatch order: an open modal consumes everything, then global chords,
//! then the handler for the focused pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{self, FilterChange};
use crate::state::{AppState, Focus, Modal, QueryInput};

mod history;
mod results;
mod search;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the input thread
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal handling
    match &app.modal {
        Modal::Details(_) | Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
            ) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::None => {}
    }

    // Global chords regardless of focus
    match (ke.code, ke.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return true,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            app.dark = !app.dark;
            crate::app::persist::save_theme(app);
            return false;
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            let next = app.query.status.next();
            logic::set_filter(app, FilterChange::Status(next), query_tx);
            return false;
        }
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => {
            let next = app.query.species.next();
            logic::set_filter(app, FilterChange::Species(next), query_tx);
            return false;
        }
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => {
            let next = app.query.gender.next();
            logic::set_filter(app, FilterChange::Gender(next), query_tx);
            return false;
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            logic::reset_filters(app, query_tx);
            return false;
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            logic::clear_search(app, query_tx);
            return false;
        }
        (KeyCode::F(1), _) => {
            app.modal = Modal::Help;
            return false;
        }
        (KeyCode::Tab, _) => {
            app.focus = match app.focus {
                Focus::Search => Focus::Results,
                Focus::Results => Focus::History,
                Focus::History => Focus::Search,
            };
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => search::handle_search_key(ke, app, query_tx),
        Focus::Results => results::handle_results_key(ke, app, query_tx),
        Focus::History => history::handle_history_key(ke, app, query_tx),
    }
}
