use shared::calendar::has_played_today;
use shared::config::PageConfig;
use web_sys::Document;

use crate::components::mount_countdown;
use crate::dom::{self, BUTTON_PLAY_ID, COUNTDOWN_ID, TIMER_DIV_ID};
use crate::services::statistics::report_in_background;
use crate::storage;

const STATISTICS_MARKER_ID: &str = "played";

pub fn is_present(document: &Document) -> bool {
    [COUNTDOWN_ID, BUTTON_PLAY_ID, STATISTICS_MARKER_ID]
        .iter()
        .any(|id| dom::by_id(document, id).is_some())
}

/// Already played today: hide the play button and count down to the next
/// puzzle. Otherwise offer the button. Statistics load independently.
pub fn mount(document: &Document, config: &PageConfig) {
    let history = storage::session().load();
    let played = has_played_today(&history);

    if let Some(button) = dom::by_id(document, BUTTON_PLAY_ID) {
        dom::set_visible(&button, !played);
    }
    if let Some(timer) = dom::by_id(document, TIMER_DIV_ID) {
        dom::set_visible(&timer, played);
    }

    if played {
        match dom::by_id(document, COUNTDOWN_ID) {
            Some(root) => mount_countdown(root, config),
            None => log::warn!("played today but page has no #{}", COUNTDOWN_ID),
        }
    }

    if config.statistics_enabled && dom::by_id(document, STATISTICS_MARKER_ID).is_some() {
        report_in_background(history, config.time_scale);
    }
}
