//! Intent handlers for the query-state controller.
//!
//! These functions are the only mutation paths for the canonical [`Query`]
//! and the [`ViewState`]. Every state-changing intent ends in
//! [`issue_fetch`](super::query::issue_fetch), which snapshots the query
//! after the intent's own update so the outbound request always carries the
//! value the user just chose, never a prior one.

use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::app::history::record_history;
use crate::state::{
    AppState, FetchOutcome, GenderFilter, PageTotals, QueryInput, SpeciesFilter, StatusFilter,
    ViewState,
};

use super::query::issue_fetch;

/// Message shown when an empty search is submitted.
pub const EMPTY_SEARCH_NOTICE: &str = "Enter a name to search.";

/// A single-axis filter update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterChange {
    /// Replace the life-status axis.
    Status(StatusFilter),
    /// Replace the species axis.
    Species(SpeciesFilter),
    /// Replace the gender axis.
    Gender(GenderFilter),
}

/// What: Replace the in-progress text buffer.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `text`: New buffer content; any string is accepted.
///
/// Output:
/// - Updates the buffer and clears a pending validation notice. Does not
///   itself trigger a fetch.
pub fn set_free_text(app: &mut AppState, text: String) {
    app.input = text;
    app.notice = None;
}

/// What: Submit the current text buffer as a search.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - On a whitespace-only buffer, sets a validation notice and performs no
///   fetch. Otherwise records the trimmed term into history, resets the
///   page to 1 and issues a fetch for the trimmed term with the current
///   filters.
pub fn submit_search(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let term = app.input.trim().to_string();
    if term.is_empty() {
        app.notice = Some(EMPTY_SEARCH_NOTICE.to_string());
        return;
    }
    record_history(app, &term);
    app.query.name = term;
    app.query.page = 1;
    issue_fetch(app, query_tx);
}

/// What: Update exactly one filter axis and refetch.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `change`: The axis and its new value.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - The changed axis, page 1, and a fetch derived from the post-update
///   query snapshot.
///
/// Details:
/// - The axis is written into the canonical query before derivation, so the
///   outbound request carries the newly set value merged with the other
///   current axes; there is no second, stale read of the changed axis.
pub fn set_filter(
    app: &mut AppState,
    change: FilterChange,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    match change {
        FilterChange::Status(v) => app.query.status = v,
        FilterChange::Species(v) => app.query.species = v,
        FilterChange::Gender(v) => app.query.gender = v,
    }
    app.query.page = 1;
    issue_fetch(app, query_tx);
}

/// What: Restore every filter axis to its sentinel and refetch.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - All three axes at `All`, page 1, free text preserved, fetch issued.
pub fn reset_filters(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.query.status = StatusFilter::All;
    app.query.species = SpeciesFilter::All;
    app.query.gender = GenderFilter::All;
    app.query.page = 1;
    issue_fetch(app, query_tx);
}

/// What: Clear the free-text term and refetch.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - Empty buffer and submitted name, filters preserved, page 1, fetch
///   issued.
pub fn clear_search(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.input.clear();
    app.query.name.clear();
    app.query.page = 1;
    issue_fetch(app, query_tx);
}

/// What: Navigate to page `page` of the current result set.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `page`: Requested 1-based page number.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - A fetch with only the page changed, and the list selection reset to
///   the top. Out-of-range requests are a no-op on `Query.page`.
///
/// Details:
/// - Bounds come from the most recent successful fetch's totals, so paging
///   keeps working while a newer fetch is still outstanding.
pub fn go_to_page(app: &mut AppState, page: u32, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let Some(total) = app.current_total_pages() else {
        return;
    };
    if page == 0 || page > total {
        return;
    }
    app.query.page = page;
    issue_fetch(app, query_tx);
    // Pagination jumps land the reader back at the top of the new page.
    app.selected = 0;
    app.list_state = ListState::default();
}

/// What: Re-run a search picked from the history list.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `term`: History entry text.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - Buffer and submitted name set to `term`, page 1, fetch issued.
///
/// Details:
/// - Equivalent to a submit except the term is not re-appended to history;
///   it is already present as the most recent use of that entry.
pub fn select_from_history(
    app: &mut AppState,
    term: &str,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    app.input = term.to_string();
    app.query.name = term.trim().to_string();
    app.query.page = 1;
    issue_fetch(app, query_tx);
}

/// What: Fold a fetch outcome into the view state.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `outcome`: The resolved fetch and its originating id.
///
/// Output:
/// - `Empty` for a successful page with zero items, `Populated` otherwise,
///   `Error` with the generic user-facing message on failure. Outcomes
///   whose id is not the latest issued are discarded.
///
/// Details:
/// - Successful outcomes record the page totals for later page-bound
///   validation; failures drop them along with the previous page.
pub fn apply_fetch_outcome(app: &mut AppState, outcome: FetchOutcome) {
    if outcome.id != app.latest_query_id {
        tracing::debug!(
            id = outcome.id,
            latest = app.latest_query_id,
            "discarding stale fetch outcome"
        );
        return;
    }
    match outcome.result {
        Ok(page) => {
            app.totals = Some(PageTotals {
                count: page.total_count,
                pages: page.total_pages,
            });
            if page.items.is_empty() {
                app.view = ViewState::Empty;
            } else {
                app.selected = 0;
                app.list_state = ListState::default();
                app.list_state.select(Some(0));
                app.view = ViewState::Populated(page);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "fetch failed");
            app.totals = None;
            app.view = ViewState::Error(err.user_message().to_string());
        }
    }
}
