//! Remote directory client for the character search endpoint.
//!
//! One paged, filtered GET per call; no retries, no timeouts beyond the
//! client defaults. A 404 is normalized to an empty page because the
//! directory answers 404 for "no matches", which is a valid result and not
//! a failure.

use crate::logic::query::search_url;
use crate::state::{CharacterPage, CharactersResponse, Query};

/// Failure modes for a single fetch against the character directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The directory answered with a non-404 error status.
    Rejected {
        /// HTTP status code of the response.
        status: u16,
    },
    /// The request never produced a usable response (DNS failure, refused
    /// connection, or an undecodable body).
    Unreachable,
}

impl ApiError {
    /// One generic message shown for any failed fetch.
    ///
    /// Both variants render identically to the user; the distinction only
    /// matters for logging.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        "Couldn't reach the character directory. Try again."
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { status } => {
                write!(f, "directory rejected the request (status {status})")
            }
            Self::Unreachable => f.write_str("directory unreachable"),
        }
    }
}

impl std::error::Error for ApiError {}

/// What: Fetch one page of characters matching `query`.
///
/// Inputs:
/// - `base_url`: API base, without a trailing slash.
/// - `query`: Canonical query snapshot; only non-sentinel fields are sent.
///
/// Output:
/// - `Ok(CharacterPage)` on success, including the empty page a 404 stands
///   for; `Err(ApiError)` when the request was rejected or never completed.
///
/// Details:
/// - Transport errors and bodies that fail to decode both map to
///   [`ApiError::Unreachable`]; every other non-2xx status maps to
///   [`ApiError::Rejected`].
pub async fn search_characters(base_url: &str, query: &Query) -> Result<CharacterPage, ApiError> {
    let url = search_url(base_url, query);
    tracing::debug!(url = %url, "fetching character page");

    let resp = match reqwest::get(&url).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "character fetch failed before a response arrived");
            return Err(ApiError::Unreachable);
        }
    };

    let status = resp.status();
    if status.as_u16() == 404 {
        tracing::debug!("directory returned 404; treating as an empty page");
        return Ok(CharacterPage::empty());
    }
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "character fetch rejected");
        return Err(ApiError::Rejected {
            status: status.as_u16(),
        });
    }

    match resp.json::<CharactersResponse>().await {
        Ok(body) => {
            tracing::debug!(
                count = body.info.count,
                pages = body.info.pages,
                results = body.results.len(),
                "character page received"
            );
            Ok(CharacterPage::from_response(body))
        }
        Err(e) => {
            tracing::warn!(error = %e, "character payload failed to decode");
            Err(ApiError::Unreachable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use crate::state::{CharacterPage, CharactersResponse};

    #[test]
    /// What: Error variants log distinctly but surface one generic message
    ///
    /// - Input: `Rejected` and `Unreachable` values
    /// - Output: Distinct `Display` strings, identical `user_message`
    fn api_error_display_and_user_message() {
        let rejected = ApiError::Rejected { status: 500 };
        assert_eq!(
            rejected.to_string(),
            "directory rejected the request (status 500)"
        );
        assert_eq!(ApiError::Unreachable.to_string(), "directory unreachable");
        assert_eq!(rejected.user_message(), ApiError::Unreachable.user_message());
    }

    #[test]
    /// What: A wire response folds into the controller's page shape
    ///
    /// - Input: JSON body in the directory's `info`/`results` envelope
    /// - Output: Items in order plus the envelope's count and pages
    fn response_body_folds_into_page() {
        let body = r#"{
            "info": { "count": 2, "pages": 1, "next": null, "prev": null },
            "results": [
                {
                    "id": 1,
                    "name": "Rick Sanchez",
                    "status": "Alive",
                    "species": "Human",
                    "type": "",
                    "gender": "Male",
                    "origin": { "name": "Earth (C-137)", "url": "" },
                    "location": { "name": "Citadel of Ricks", "url": "" },
                    "image": "https://example.test/1.jpeg",
                    "episode": ["https://example.test/episode/1"],
                    "url": "https://example.test/character/1",
                    "created": "2017-11-04T18:48:46.250Z"
                },
                {
                    "id": 2,
                    "name": "Morty Smith",
                    "status": "Alive",
                    "species": "Human",
                    "type": "",
                    "gender": "Male",
                    "origin": { "name": "unknown", "url": "" },
                    "location": { "name": "Citadel of Ricks", "url": "" },
                    "image": "https://example.test/2.jpeg",
                    "episode": [],
                    "url": "https://example.test/character/2",
                    "created": "2017-11-04T18:50:21.651Z"
                }
            ]
        }"#;
        let resp: CharactersResponse =
            serde_json::from_str(body).expect("sample body decodes");
        let page = CharacterPage::from_response(resp);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Rick Sanchez");
        assert_eq!(page.items[1].episode.len(), 0);
    }

    #[test]
    /// What: The empty page carries zero counts and no items
    ///
    /// - Input: `CharacterPage::empty()`
    /// - Output: Zero items, count 0, pages 0
    fn empty_page_is_zeroed() {
        let page = CharacterPage::empty();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }
}
