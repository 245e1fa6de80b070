//! Central `AppState` container shared by the event, networking, and UI layers.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use lru::LruCache;
use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{Focus, PageTotals, Query, ViewState};

/// Maximum number of history entries to retain (most-recent-first).
pub const HISTORY_CAPACITY: usize = 3;

/// What: Provide the non-zero capacity used by the history LRU cache.
///
/// Inputs: None.
///
/// Output:
/// - Non-zero capacity for the history LRU cache.
///
/// Details:
/// - Uses a const unchecked constructor because the capacity constant is
///   guaranteed to be greater than zero.
#[must_use]
pub const fn history_capacity() -> NonZeroUsize {
    // SAFETY: `HISTORY_CAPACITY` is a non-zero constant.
    unsafe { NonZeroUsize::new_unchecked(HISTORY_CAPACITY) }
}

/// Global application state shared by the event, networking, and UI layers.
///
/// This structure is mutated in response to input and fetch outcomes. The
/// history list and theme flag are persisted to disk to preserve user
/// context across runs.
#[derive(Debug)]
pub struct AppState {
    /// Current search input text (not yet submitted).
    pub input: String,
    /// Canonical query: last submitted text, filters, and page.
    pub query: Query,
    /// Outcome of the most recently issued fetch.
    pub view: ViewState,
    /// Totals from the most recent successful fetch, used to validate page
    /// navigation while a newer fetch is still outstanding.
    pub totals: Option<PageTotals>,
    /// Inline validation notice (e.g. empty submit); cleared on the next
    /// edit or fetch.
    pub notice: Option<String>,
    /// Index into the populated page that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,
    /// Which pane is currently focused.
    pub focus: Focus,
    /// Active modal dialog, if any.
    pub modal: Modal,

    // Search coordination
    /// Identifier of the latest issued fetch; older outcomes are discarded.
    pub latest_query_id: u64,
    /// Next fetch identifier to allocate.
    pub next_query_id: u64,

    // Search history
    /// Recent submitted terms as an LRU cache (keyed case-insensitively).
    pub history: LruCache<String, String>,
    /// List selection state for the History pane.
    pub history_state: ListState,
    /// Path where the history list is persisted as JSON.
    pub history_path: PathBuf,
    /// Dirty flag indicating `history` needs to be saved.
    pub history_dirty: bool,

    // Theme
    /// Whether the dark palette is active.
    pub dark: bool,
    /// Path where the theme flag is persisted as JSON.
    pub theme_path: PathBuf,

    /// Base URL of the character API.
    pub base_url: String,
}

impl Default for AppState {
    /// Construct a default, empty [`AppState`], initializing paths, selection
    /// states, and counters with sensible defaults.
    fn default() -> Self {
        Self {
            input: String::new(),
            query: Query::default(),
            view: ViewState::Idle,
            totals: None,
            notice: None,
            selected: 0,
            list_state: ListState::default(),
            focus: Focus::Search,
            modal: Modal::None,

            latest_query_id: 0,
            next_query_id: 1,

            history: LruCache::new(history_capacity()),
            history_state: ListState::default(),
            history_path: crate::theme::lists_dir().join("search_history.json"),
            history_dirty: false,

            dark: true,
            theme_path: crate::theme::config_dir().join("theme.json"),

            base_url: crate::args::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppState {
    /// History values most-recent-first.
    #[must_use]
    pub fn history_values(&self) -> Vec<String> {
        self.history.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Total pages known from the most recent successful fetch, if any.
    #[must_use]
    pub fn current_total_pages(&self) -> Option<u32> {
        self.totals.map(|t| t.pages)
    }
}
