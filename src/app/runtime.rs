//! Runtime wiring: state initialization, channels, the event loop, and
//! cleanup.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;
use tokio::sync::mpsc;

use crate::args::{Cli, ThemeArg};
use crate::logic;
use crate::state::AppState;
use crate::ui::ui;

use super::persist::{load_history, load_theme, maybe_flush_history};
use super::terminal::{restore_terminal, setup_terminal};
use super::worker::spawn_search_worker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the Rickdex TUI application end-to-end: initialize the terminal
/// and state, spawn the fetch worker and the input thread, drive the event
/// loop, persist the history, and restore the terminal on exit.
///
/// Inputs:
/// - `cli`: Parsed command-line arguments (base URL and theme overrides).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or
///   runtime errors.
///
/// Details:
/// - State: reads the persisted history and theme flag; a `--theme` flag
///   overrides the stored/ambient preference for the session.
/// - Workers: one fetch worker resolving queries against the directory and
///   one std thread polling crossterm input with a cancellation flag.
/// - Event loop: renders a frame, then waits for either an input event or a
///   fetch outcome; outcomes older than the latest issued fetch are
///   discarded inside the controller.
/// - Startup issues an unfiltered page-1 fetch so the list populates
///   without a first submit.
pub async fn run(cli: Cli) -> Result<()> {
    let headless = std::env::var("RICKDEX_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    initialize_app_state(&mut app, &cli);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (query_tx, query_rx) = mpsc::unbounded_channel();
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let event_thread_cancelled = Arc::new(AtomicBool::new(false));

    spawn_search_worker(app.base_url.clone(), query_rx, outcome_tx);
    spawn_event_thread(headless, event_tx, event_thread_cancelled.clone());

    // Populate the list right away with an unfiltered first page.
    logic::issue_fetch(&mut app, &query_tx);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &query_tx) {
                    break;
                }
                // History writes stay synchronous relative to the intent
                // that changed the list.
                maybe_flush_history(&mut app);
            }
            Some(outcome) = outcome_rx.recv() => {
                logic::apply_fetch_outcome(&mut app, outcome);
            }
            else => break,
        }
    }

    event_thread_cancelled.store(true, std::sync::atomic::Ordering::Relaxed);
    maybe_flush_history(&mut app);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}

/// What: Load persisted state and apply CLI overrides before the loop starts.
///
/// Inputs:
/// - `app`: Fresh application state
/// - `cli`: Parsed command-line arguments
///
/// Output:
/// - `app` carries the resolved base URL, loaded history, and the theme
///   flag from flag > stored value > ambient preference.
fn initialize_app_state(app: &mut AppState, cli: &Cli) {
    app.base_url = cli.resolve_base_url();
    load_history(app);
    app.dark = match cli.theme {
        Some(ThemeArg::Dark) => true,
        Some(ThemeArg::Light) => false,
        None => load_theme(&app.theme_path).unwrap_or_else(crate::theme::ambient_prefers_dark),
    };
    tracing::info!(
        dark = app.dark,
        history = app.history.len(),
        base_url = %app.base_url,
        "state initialized"
    );
}

/// What: Spawn the input thread forwarding crossterm events to the loop.
///
/// Inputs:
/// - `headless`: Skip spawning entirely in headless/test mode
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls so exit is prompt
///
/// Details:
/// - Polls with a short timeout instead of blocking on `read` so the
///   cancellation flag is honored even when no input arrives.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<crossterm::event::Event>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}
