//! Application state: value types, the central `AppState`, and modal state.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    Character, CharacterPage, CharactersResponse, FetchOutcome, Focus, GenderFilter, LocationRef,
    PageInfo, PageTotals, Query, QueryInput, SpeciesFilter, StatusFilter, ViewState,
};
