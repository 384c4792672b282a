use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement};

// Element ids and classes the host page provides.
pub const COUNTDOWN_ID: &str = "countdown";
pub const BUTTON_PLAY_ID: &str = "button-play";
pub const TIMER_DIV_ID: &str = "timer-div";
pub const RESULTS_ID: &str = "results";
pub const CUE_CLASS: &str = "input-letter-cue";
pub const SOLUTION_CLASS: &str = "input-letter-solution";
pub const AVAILABLE_LETTERS_CLASS: &str = "available-letters";
pub const ALLOWED_ATTR: &str = "data-allowed";

/// Anything a line of text can be written into.
pub trait TextSink {
    fn render_text(&self, text: &str);
}

impl TextSink for Element {
    fn render_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Writes `text` into the element with `id`; returns whether it existed.
pub fn set_text_by_id(document: &Document, id: &str, text: &str) -> bool {
    match by_id(document, id) {
        Some(element) => {
            element.render_text(text);
            true
        }
        None => {
            log::debug!("no #{} on this page", id);
            false
        }
    }
}

pub fn set_visible(element: &Element, visible: bool) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let display = if visible { "" } else { "none" };
        if let Err(e) = element.style().set_property("display", display) {
            log::warn!("failed to set display on #{}: {}", element.id(), js_error_message(&e));
        }
    }
}

pub fn elements_by_class(document: &Document, class: &str) -> Vec<Element> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

pub fn inputs_by_class(document: &Document, class: &str) -> Vec<HtmlInputElement> {
    elements_by_class(document, class)
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlInputElement>().ok())
        .collect()
}

/// Concatenated values of every input carrying `class`, in document order.
pub fn joined_values(document: &Document, class: &str) -> String {
    inputs_by_class(document, class)
        .iter()
        .map(|input| input.value())
        .collect()
}

/// Moves focus to the `<input>` after `current` in document order, if any.
pub fn focus_next_input(document: &Document, current: &HtmlInputElement) {
    let inputs = document.get_elements_by_tag_name("input");
    let current: &Element = current.as_ref();
    let position = (0..inputs.length()).find(|&i| inputs.item(i).as_ref() == Some(current));

    if let Some(next) = position.and_then(|i| inputs.item(i + 1)) {
        if let Some(next) = next.dyn_ref::<HtmlElement>() {
            let _ = next.focus();
        }
    }
}

pub fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
