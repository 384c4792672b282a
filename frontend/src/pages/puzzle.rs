use gloo_events::EventListener;
use shared::config::PageConfig;
use shared::letters::{check_letter_input, display_letters, LetterInput};
use shared::submission::SubmissionOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Document, Event, HtmlFormElement, HtmlInputElement};
use yew::virtual_dom::AttrValue;

use crate::components::{show_results, SubmissionResultsProps};
use crate::dom::{
    self, TextSink, ALLOWED_ATTR, AVAILABLE_LETTERS_CLASS, CUE_CLASS, RESULTS_ID, SOLUTION_CLASS,
};
use crate::services::submission::submit;
use crate::storage;

pub fn is_present(document: &Document) -> bool {
    guess_form(document).is_some()
        && !(dom::elements_by_class(document, CUE_CLASS).is_empty()
            && dom::elements_by_class(document, SOLUTION_CLASS).is_empty())
}

pub fn mount(document: &Document, config: &PageConfig) {
    if let Err(e) = storage::session().record_session_start(js_sys::Date::now()) {
        log::warn!("session start not recorded: {}", e);
    }

    bind_letter_inputs(document);
    refresh_available_letters(document);

    if let Some(form) = guess_form(document) {
        let config = config.clone();
        let target = form.clone();
        EventListener::new(&form, "submit", move |event: &Event| {
            on_submit(event, &target, &config);
        })
        .forget();
    }
}

fn guess_form(document: &Document) -> Option<HtmlFormElement> {
    document
        .query_selector("form")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
}

fn bind_letter_inputs(document: &Document) {
    for class in [CUE_CLASS, SOLUTION_CLASS] {
        for input in dom::inputs_by_class(document, class) {
            let allowed = input.get_attribute(ALLOWED_ATTR);
            let target = input.clone();
            EventListener::new(&input, "input", move |_| {
                let Some(document) = dom::document() else {
                    return;
                };
                handle_input(&document, &target, allowed.as_deref());
                refresh_available_letters(&document);
            })
            .forget();
        }
    }
}

/// Uppercases the box in place, rejects letters outside `allowed` with a
/// blocking alert, and hops to the next box on a valid letter.
pub fn handle_input(document: &Document, input: &HtmlInputElement, allowed: Option<&str>) {
    match check_letter_input(&input.value(), allowed) {
        LetterInput::Accepted(value) => {
            input.set_value(&value);
            dom::focus_next_input(document, input);
        }
        LetterInput::Empty => {}
        LetterInput::Rejected(err) => {
            if let Some(window) = window() {
                if let Err(e) = window.alert_with_message(&err.to_string()) {
                    log::warn!("alert failed: {}", dom::js_error_message(&e));
                }
            }
            input.set_value("");
        }
    }
}

pub fn refresh_available_letters(document: &Document) {
    let cue = dom::joined_values(document, CUE_CLASS);
    let used = dom::joined_values(document, SOLUTION_CLASS);
    let letters = display_letters(&cue, &used);

    for target in dom::elements_by_class(document, AVAILABLE_LETTERS_CLASS) {
        target.render_text(&letters);
    }
}

fn on_submit(event: &Event, form: &HtmlFormElement, config: &PageConfig) {
    event.prevent_default();

    let form = form.clone();
    let config = config.clone();
    spawn_local(async move {
        match submit(&form, &config).await {
            Ok(outcome) => present_outcome(outcome, &config),
            Err(e) => log::error!("guess submission failed: {}", e),
        }
    });
}

fn present_outcome(outcome: SubmissionOutcome, config: &PageConfig) {
    if let SubmissionOutcome::Solved { redirect_after_ms, .. } = &outcome {
        schedule_redirect(*redirect_after_ms, config.home_path.clone());
    }

    match dom::document().and_then(|d| dom::by_id(&d, RESULTS_ID)) {
        Some(root) => show_results(
            root,
            SubmissionResultsProps {
                outcome,
                success_animation: config.success_animation.clone().map(AttrValue::from),
            },
        ),
        None => log::warn!("page has no #{} to show the verdict in", RESULTS_ID),
    }
}

fn schedule_redirect(delay_ms: u32, home_path: String) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        if let Some(window) = window() {
            if let Err(e) = window.location().set_href(&home_path) {
                log::error!("redirect to {} failed: {}", home_path, dom::js_error_message(&e));
            }
        }
    })
    .forget();
}
