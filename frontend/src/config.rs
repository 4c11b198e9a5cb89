use gloo_utils::window;
use js_sys::Reflect;
use shared::constants::CATALOG_GLOBAL;
use shared::prize_catalog::PrizeCatalog;
use wasm_bindgen::JsValue;

/// Uses `window.PRIZE_WHEEL_CATALOG` (a JSON string) when the host page sets it,
/// otherwise the built-in catalog.
pub fn load_catalog() -> PrizeCatalog {
    let raw = Reflect::get(&window(), &JsValue::from_str(CATALOG_GLOBAL))
        .ok()
        .and_then(|value| value.as_string());

    let Some(json) = raw else {
        return PrizeCatalog::default();
    };

    match PrizeCatalog::from_json(&json) {
        Ok(catalog) => {
            log::info!("Using page-provided prize catalog ({} prizes)", catalog.len());
            catalog
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", CATALOG_GLOBAL, e);
            PrizeCatalog::default()
        }
    }
}

pub fn log_level() -> log::Level {
    let host = window().location().host().unwrap_or_default();
    if host.contains("localhost") || host.contains("127.0.0.1") {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
