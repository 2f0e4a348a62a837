//! Page Configuration
//!
//! Reads the optional JSON block embedded in `index.html`.

use checklist_core::ChecklistConfig;

const CONFIG_ELEMENT_ID: &str = "checklist-config";

/// Config from the page, falling back to defaults when absent or invalid
pub fn load_config() -> ChecklistConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match ChecklistConfig::from_json(&raw) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded page config");
                config
            }
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                ChecklistConfig::default()
            }
        },
        _ => ChecklistConfig::default(),
    }
}
