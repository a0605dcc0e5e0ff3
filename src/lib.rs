/// FMHY SafeGuard - Browser extension that rates sites against FMHY lists
/// Built with Rust + WASM + Yew

mod background;
mod classifier;
mod config;
mod error;
mod fetch;
mod messages;
mod normalize;
mod parsers;
mod site_lists;
pub mod ui;

use config::ListSources;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export normalization for JavaScript access
#[wasm_bindgen]
pub fn normalize_url(url: &str) -> String {
    normalize::normalize_url(url)
}

/// Load the site lists, then register the tab and message listeners.
///
/// `config` may be `undefined`/`null` for the published FMHY sources, or an
/// object overriding any of `unsafeList`, `potentiallyUnsafeList`,
/// `safeList`, `starredList`.
#[wasm_bindgen]
pub async fn start_background(config: JsValue) -> Result<(), JsValue> {
    let sources: ListSources = if config.is_null() || config.is_undefined() {
        ListSources::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {:?}", e)))?
    };

    background::initialize(sources).await;
    Ok(())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
