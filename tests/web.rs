//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn normalize_url_is_exported() {
    assert_eq!(fmhy_safeguard::normalize_url("https://www.example.com/"), "https://example.com");
    assert_eq!(fmhy_safeguard::normalize_url("http://www.example.com//"), "http://example.com");
}

#[wasm_bindgen_test]
async fn start_background_rejects_bad_config() {
    let result = fmhy_safeguard::start_background(JsValue::from_f64(5.0)).await;
    assert!(result.is_err());
}
