use shared::config::PageConfig;
use shared::constants::DEFAULT_API_BASE_URL;
use web_sys::{window, Document};

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        let location = window.location();
        if let Ok(host) = location.host() {
            if !host.is_empty() {
                // Same origin as the page that loaded us, port included
                let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
                return format!("{}//{}", protocol, host);
            }
        }
    }

    DEFAULT_API_BASE_URL.to_string()
}

pub fn api_url(path: &str) -> String {
    join_url(&get_api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Reads `data-*` switches from `<body>`; a page without a body gets defaults.
pub fn page_config(document: &Document) -> PageConfig {
    match document.body() {
        Some(body) => PageConfig::from_lookup(|name| body.get_attribute(&format!("data-{}", name))),
        None => PageConfig::default(),
    }
}
