//! Outbound query derivation and fetch issuing.

use tokio::sync::mpsc;

use crate::state::{AppState, Query, QueryInput, ViewState};
use crate::util::percent_encode;

/// What: Derive the outbound parameter list for `query`.
///
/// Inputs:
/// - `query`: Canonical query snapshot.
///
/// Output:
/// - Ordered `(key, value)` pairs to send to the directory.
///
/// Details:
/// - Pure: the same `Query` always yields the same parameter set.
/// - Fields holding the `all`/empty sentinel are omitted; `page` is always
///   present.
#[must_use]
pub fn outbound_params(query: &Query) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    let name = query.name.trim();
    if !name.is_empty() {
        params.push(("name", name.to_string()));
    }
    if let Some(v) = query.status.as_param() {
        params.push(("status", v.to_string()));
    }
    if let Some(v) = query.species.as_param() {
        params.push(("species", v.to_string()));
    }
    if let Some(v) = query.gender.as_param() {
        params.push(("gender", v.to_string()));
    }
    params.push(("page", query.page.to_string()));
    params
}

/// What: Build the full character-search URL for `query` against `base_url`.
///
/// Inputs:
/// - `base_url`: API base; a trailing slash is tolerated.
/// - `query`: Canonical query snapshot.
///
/// Output:
/// - Complete URL with percent-encoded parameter values.
#[must_use]
pub fn search_url(base_url: &str, query: &Query) -> String {
    let mut url = format!("{}/character", base_url.trim_end_matches('/'));
    for (i, (key, value)) in outbound_params(query).iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&percent_encode(value));
    }
    url
}

/// What: Issue a fetch for the current canonical query with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_query_id` and
///   `latest_query_id`.
/// - `query_tx`: Channel to the fetch worker.
///
/// Output:
/// - Sends a `QueryInput` carrying the incremented id and a snapshot of the
///   canonical query; transitions the view to `Loading`.
///
/// Details:
/// - The id lets the runtime discard outcomes that resolve after a newer
///   fetch was issued (last-issued-wins).
pub fn issue_fetch(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.notice = None;
    app.view = ViewState::Loading;
    let _ = query_tx.send(QueryInput {
        id,
        query: app.query.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GenderFilter, SpeciesFilter, StatusFilter};

    #[test]
    /// What: Sentinel fields are omitted and `page` is always present
    ///
    /// - Input: Default query, then one with every field set
    /// - Output: Only `page` for the default; all five keys otherwise
    fn outbound_params_omit_sentinels() {
        let q = Query::default();
        assert_eq!(outbound_params(&q), vec![("page", "1".to_string())]);

        let q = Query {
            name: "  rick  ".into(),
            status: StatusFilter::Alive,
            species: SpeciesFilter::Human,
            gender: GenderFilter::Male,
            page: 3,
        };
        assert_eq!(
            outbound_params(&q),
            vec![
                ("name", "rick".to_string()),
                ("status", "alive".to_string()),
                ("species", "human".to_string()),
                ("gender", "male".to_string()),
                ("page", "3".to_string()),
            ]
        );
    }

    #[test]
    /// What: Derivation is idempotent for the same query value
    ///
    /// - Input: One query derived twice
    /// - Output: Identical parameter sets
    fn outbound_params_idempotent() {
        let q = Query {
            name: "birdperson".into(),
            status: StatusFilter::Dead,
            species: SpeciesFilter::All,
            gender: GenderFilter::All,
            page: 2,
        };
        assert_eq!(outbound_params(&q), outbound_params(&q));
    }

    #[test]
    /// What: URL building percent-encodes values and tolerates trailing slashes
    ///
    /// - Input: Base URL with a trailing slash and a name containing a space
    /// - Output: Single `/character` path and `%20` in the name parameter
    fn search_url_encodes_and_normalizes() {
        let q = Query {
            name: "rick sanchez".into(),
            ..Query::default()
        };
        let url = search_url("https://example.test/api/", &q);
        assert_eq!(
            url,
            "https://example.test/api/character?name=rick%20sanchez&page=1"
        );
    }

    #[tokio::test]
    /// What: Issuing a fetch advances identifiers and snapshots the query
    ///
    /// - Input: `AppState` with a submitted name
    /// - Output: `latest_query_id` becomes 1 and the channel carries the
    ///   matching snapshot; the view transitions to `Loading`
    async fn issue_fetch_increments_and_sends() {
        let mut app = AppState {
            query: Query {
                name: "hello".into(),
                ..Query::default()
            },
            ..Default::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        issue_fetch(&mut app, &tx);
        assert_eq!(app.latest_query_id, 1);
        assert!(matches!(app.view, ViewState::Loading));
        let q = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("query sent");
        assert_eq!(q.id, app.latest_query_id);
        assert_eq!(q.query.name, "hello");
    }
}
