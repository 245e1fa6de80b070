//! Controller logic: intent handlers, outbound derivation, and pagination
//! helpers.

pub mod controller;
pub mod pages;
pub mod query;

pub use controller::{
    EMPTY_SEARCH_NOTICE, FilterChange, apply_fetch_outcome, clear_search, go_to_page,
    reset_filters, select_from_history, set_filter, set_free_text, submit_search,
};
pub use pages::{PageEntry, page_strip};
pub use query::{issue_fetch, outbound_params, search_url};
