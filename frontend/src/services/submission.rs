use gloo_net::http::Request;
use shared::calendar::today_label;
use shared::config::PageConfig;
use shared::submission::{resolve_guess, GuessResponse, SubmissionOutcome};
use shared::PuzzleError;
use web_sys::{FormData, HtmlFormElement};

use crate::dom::js_error_message;
use crate::storage;

/// Posts the guess form to its own action and applies the verdict to the
/// stored session. A solved puzzle is recorded under today's label.
pub async fn submit(form: &HtmlFormElement, config: &PageConfig) -> Result<SubmissionOutcome, PuzzleError> {
    let form_data = FormData::new_with_form(form).map_err(|e| PuzzleError::Request(js_error_message(&e)))?;
    let action = form.action();

    let response = Request::post(&action)
        .body(form_data)
        .map_err(|e| PuzzleError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| PuzzleError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(PuzzleError::Network {
            status: response.status(),
        });
    }

    let verdict = response
        .json::<GuessResponse>()
        .await
        .map_err(|e| PuzzleError::Request(e.to_string()))?;

    resolve_guess(
        &storage::session(),
        &verdict,
        &today_label(),
        js_sys::Date::now(),
        config.redirect_delay_ms,
    )
}
