use gloo_net::http::Request;
use shared::constants::STATISTICS_ENDPOINT;
use shared::statistics::{statistics_fields, StatisticsSummary, TimeScale};
use shared::{PuzzleError, SessionHistory};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::config::api_url;
use crate::dom;

/// Posts the play history and decodes the server's aggregates.
pub async fn report(history: &SessionHistory) -> Result<StatisticsSummary, PuzzleError> {
    let url = api_url(STATISTICS_ENDPOINT);
    log::debug!("posting {} play records to {}", history.len(), url);

    let response = Request::post(&url)
        .json(history)
        .map_err(|e| PuzzleError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| PuzzleError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(PuzzleError::Network {
            status: response.status(),
        });
    }

    response
        .json::<StatisticsSummary>()
        .await
        .map_err(|e| PuzzleError::Request(e.to_string()))
}

pub fn render_statistics(document: &Document, summary: &StatisticsSummary, scale: TimeScale) {
    for (id, text) in statistics_fields(summary, scale) {
        dom::set_text_by_id(document, id, &text);
    }
}

/// Fire-and-forget: failures are logged and the page keeps its placeholders.
pub fn report_in_background(history: SessionHistory, scale: TimeScale) {
    spawn_local(async move {
        match report(&history).await {
            Ok(summary) => {
                if let Some(document) = dom::document() {
                    render_statistics(&document, &summary, scale);
                }
            }
            Err(e) => log::error!("statistics unavailable: {}", e),
        }
    });
}
