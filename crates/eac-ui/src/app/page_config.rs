//! Reads the optional inline configuration document from the host page.

use crate::config::PageConfig;
use gloo::console;

/// Element whose text content holds a JSON [`PageConfig`] document.
pub(crate) const CONFIG_ELEMENT_ID: &str = "eac-page-config";

pub(crate) fn load_page_config() -> PageConfig {
    let Some(element) = gloo::utils::document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return PageConfig::default();
    }
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("page configuration rejected", err.to_string());
            PageConfig::default()
        }
    }
}
