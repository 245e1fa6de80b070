//! Background fetch worker translating queries into fetch outcomes.

use tokio::sync::mpsc;

use crate::api;
use crate::state::{FetchOutcome, QueryInput};

/// What: Spawn the background worker serving search queries.
///
/// Inputs:
/// - `base_url`: API base URL shared by every request
/// - `query_rx`: Channel receiver for issued queries
/// - `outcome_tx`: Channel sender for resolved outcomes
///
/// Details:
/// - Each received query runs in its own task so a slow response can never
///   delay a newer one; the runtime keeps only the outcome whose id matches
///   the latest issued fetch and discards the rest.
pub fn spawn_search_worker(
    base_url: String,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        while let Some(input) = query_rx.recv().await {
            let tx = outcome_tx.clone();
            let base = base_url.clone();
            tokio::spawn(async move {
                let result = api::search_characters(&base, &input.query).await;
                let _ = tx.send(FetchOutcome {
                    id: input.id,
                    result,
                });
            });
        }
    });
}
