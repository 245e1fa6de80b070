//! Core value types used by Rickdex state.

use crate::api::ApiError;

/// Named reference to a location as reported by the directory.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct LocationRef {
    /// Display name of the location.
    pub name: String,
    /// Resource URL of the location (may be empty).
    #[serde(default)]
    pub url: String,
}

/// A single character record, sourced verbatim from the remote directory.
///
/// Read-only for the whole application; the controller never interprets
/// these fields beyond rendering them.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Character {
    /// Directory-assigned identifier.
    pub id: u64,
    /// Character name.
    pub name: String,
    /// Life status as reported ("Alive", "Dead" or "unknown").
    pub status: String,
    /// Species label.
    pub species: String,
    /// Sub-type or variant label (often empty).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Gender label.
    pub gender: String,
    /// Origin location.
    #[serde(default)]
    pub origin: LocationRef,
    /// Last known location.
    #[serde(default)]
    pub location: LocationRef,
    /// Portrait image URL.
    #[serde(default)]
    pub image: String,
    /// Episode resource URLs the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
    /// Resource URL of this record.
    #[serde(default)]
    pub url: String,
    /// Creation timestamp of this record.
    #[serde(default)]
    pub created: String,
}

/// Paging metadata returned alongside results.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct PageInfo {
    /// Total number of matching characters.
    pub count: u32,
    /// Total number of pages for the current query.
    pub pages: u32,
    /// URL of the next page, when one exists.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, when one exists.
    #[serde(default)]
    pub prev: Option<String>,
}

/// Wire shape of the paged character listing.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CharactersResponse {
    /// Paging metadata.
    pub info: PageInfo,
    /// Matching characters in API order.
    pub results: Vec<Character>,
}

/// One page of results as held by the controller.
///
/// Replaced wholesale on every successful fetch; never partially merged.
#[derive(Clone, Debug, Default)]
pub struct CharacterPage {
    /// Characters on this page, in API order.
    pub items: Vec<Character>,
    /// Total number of matches across all pages.
    pub total_count: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

impl CharacterPage {
    /// An empty page with zero matches (the normalized form of a 404).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }

    /// Fold the wire response into the controller's page shape.
    #[must_use]
    pub fn from_response(resp: CharactersResponse) -> Self {
        Self {
            items: resp.results,
            total_count: resp.info.count,
            total_pages: resp.info.pages,
        }
    }
}

/// Totals from the most recent successful fetch, kept so page navigation
/// can validate bounds while a newer fetch is still outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageTotals {
    /// Total matching characters.
    pub count: u32,
    /// Total pages.
    pub pages: u32,
}

/// Life-status filter axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No constraint (omitted from the outbound request).
    #[default]
    All,
    /// Only living characters.
    Alive,
    /// Only dead characters.
    Dead,
    /// Only characters with unknown status.
    Unknown,
}

impl StatusFilter {
    /// Query-parameter value, or `None` for the `All` sentinel.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Alive => Some("alive"),
            Self::Dead => Some("dead"),
            Self::Unknown => Some("unknown"),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }

    /// Next value in cycling order, wrapping back to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Alive,
            Self::Alive => Self::Dead,
            Self::Dead => Self::Unknown,
            Self::Unknown => Self::All,
        }
    }
}

/// Species filter axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeciesFilter {
    /// No constraint (omitted from the outbound request).
    #[default]
    All,
    /// Humans.
    Human,
    /// Aliens.
    Alien,
    /// Humanoids.
    Humanoid,
    /// Robots.
    Robot,
    /// Cronenbergs.
    Cronenberg,
    /// Animals.
    Animal,
}

impl SpeciesFilter {
    /// Query-parameter value, or `None` for the `All` sentinel.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Human => Some("human"),
            Self::Alien => Some("alien"),
            Self::Humanoid => Some("humanoid"),
            Self::Robot => Some("robot"),
            Self::Cronenberg => Some("cronenberg"),
            Self::Animal => Some("animal"),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Human => "Human",
            Self::Alien => "Alien",
            Self::Humanoid => "Humanoid",
            Self::Robot => "Robot",
            Self::Cronenberg => "Cronenberg",
            Self::Animal => "Animal",
        }
    }

    /// Next value in cycling order, wrapping back to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Human,
            Self::Human => Self::Alien,
            Self::Alien => Self::Humanoid,
            Self::Humanoid => Self::Robot,
            Self::Robot => Self::Cronenberg,
            Self::Cronenberg => Self::Animal,
            Self::Animal => Self::All,
        }
    }
}

/// Gender filter axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenderFilter {
    /// No constraint (omitted from the outbound request).
    #[default]
    All,
    /// Male characters.
    Male,
    /// Female characters.
    Female,
    /// Genderless characters.
    Genderless,
    /// Characters with unknown gender.
    Unknown,
}

impl GenderFilter {
    /// Query-parameter value, or `None` for the `All` sentinel.
    #[must_use]
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Male => Some("male"),
            Self::Female => Some("female"),
            Self::Genderless => Some("genderless"),
            Self::Unknown => Some("unknown"),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Genderless => "Genderless",
            Self::Unknown => "Unknown",
        }
    }

    /// Next value in cycling order, wrapping back to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Male,
            Self::Male => Self::Female,
            Self::Female => Self::Genderless,
            Self::Genderless => Self::Unknown,
            Self::Unknown => Self::All,
        }
    }
}

/// The canonical representation of the user's current search intent.
///
/// Owned exclusively by the controller and mutated only through its intent
/// handlers; the presentation layer reads it but never writes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Submitted free-text name term (may be empty).
    pub name: String,
    /// Life-status axis.
    pub status: StatusFilter,
    /// Species axis.
    pub species: SpeciesFilter,
    /// Gender axis.
    pub gender: GenderFilter,
    /// Requested page, always at least 1.
    pub page: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: StatusFilter::All,
            species: SpeciesFilter::All,
            gender: GenderFilter::All,
            page: 1,
        }
    }
}

/// The single rendered mode of the application at any instant.
///
/// Exactly one variant is active; transitions are driven solely by the
/// outcome of the most recently issued fetch.
#[derive(Clone, Debug, Default)]
pub enum ViewState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The last fetch failed; the message is user-facing.
    Error(String),
    /// The last fetch succeeded with zero matches.
    Empty,
    /// The last fetch succeeded with at least one match.
    Populated(CharacterPage),
}

/// Search query sent to the background fetch worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate outcomes.
    pub id: u64,
    /// Snapshot of the canonical query at issue time.
    pub query: Query,
}

/// Outcome corresponding to a prior [`QueryInput`].
#[derive(Debug)]
pub struct FetchOutcome {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Page of results, or the failure that ended the attempt.
    pub result: Result<CharacterPage, ApiError>,
}

/// Which UI pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Top pane: search input.
    #[default]
    Search,
    /// Center pane: result list.
    Results,
    /// Left pane: recent searches.
    History,
}

#[cfg(test)]
mod tests {
    use super::{GenderFilter, SpeciesFilter, StatusFilter};

    #[test]
    /// What: Filter axes expose the sentinel as `None` and cycle through every
    /// variant before wrapping
    ///
    /// - Input: Each axis starting from its `All` sentinel
    /// - Output: `as_param` is `None` only for `All`; `next` returns to `All`
    fn filter_axes_cycle_and_param_mapping() {
        assert_eq!(StatusFilter::All.as_param(), None);
        assert_eq!(StatusFilter::Dead.as_param(), Some("dead"));
        let mut s = StatusFilter::All;
        for _ in 0..4 {
            s = s.next();
        }
        assert_eq!(s, StatusFilter::All);

        assert_eq!(SpeciesFilter::All.as_param(), None);
        assert_eq!(SpeciesFilter::Cronenberg.as_param(), Some("cronenberg"));
        let mut p = SpeciesFilter::All;
        for _ in 0..7 {
            p = p.next();
        }
        assert_eq!(p, SpeciesFilter::All);

        assert_eq!(GenderFilter::All.as_param(), None);
        assert_eq!(GenderFilter::Genderless.as_param(), Some("genderless"));
        let mut g = GenderFilter::All;
        for _ in 0..5 {
            g = g.next();
        }
        assert_eq!(g, GenderFilter::All);
    }

    #[test]
    /// What: Default query targets page 1 with every axis at the sentinel
    ///
    /// - Input: `Query::default()`
    /// - Output: Empty name, `All` on each axis, page 1
    fn default_query_is_unfiltered_page_one() {
        let q = super::Query::default();
        assert!(q.name.is_empty());
        assert_eq!(q.status, StatusFilter::All);
        assert_eq!(q.species, SpeciesFilter::All);
        assert_eq!(q.gender, GenderFilter::All);
        assert_eq!(q.page, 1);
    }
}
