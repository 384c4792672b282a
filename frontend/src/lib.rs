pub mod components;
pub mod config;
pub mod dom;
pub mod pages;
pub mod services;
pub mod storage;

use crate::pages::{home, puzzle};

/// Attaches to whichever parts of the host page are present. The home view
/// and the puzzle view can share a page.
pub fn start() {
    let Some(document) = dom::document() else {
        log::error!("no document to attach to");
        return;
    };
    let config = config::page_config(&document);
    log::debug!("page config: {:?}", config);

    if home::is_present(&document) {
        home::mount(&document, &config);
    }
    if puzzle::is_present(&document) {
        puzzle::mount(&document, &config);
    }
}
