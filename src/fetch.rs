/// Plain GET of a text document through the host's `fetch`

use crate::error::{FetchError, describe_js};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window, WorkerGlobalScope};

/// Fetch `url` and return its body as text
///
/// Only a 2xx response counts as success. There is no timeout and no
/// retry: a hung request simply never resolves.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| FetchError::InvalidRequest {
        url: url.to_string(),
        reason: describe_js(&e),
    })?;

    let response_js = JsFuture::from(start_fetch(&request)?)
        .await
        .map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: describe_js(&e),
        })?;

    let response: Response = response_js.dyn_into().map_err(|_| FetchError::Network {
        url: url.to_string(),
        reason: "fetch did not resolve to a Response".to_string(),
    })?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body_error = |reason: String| FetchError::Body {
        url: url.to_string(),
        reason,
    };

    let text_promise = response.text().map_err(|e| body_error(describe_js(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| body_error(describe_js(&e)))?;

    text.as_string()
        .ok_or_else(|| body_error("body is not a string".to_string()))
}

// Background pages have a window, MV3 service workers only a worker scope.
fn start_fetch(request: &Request) -> Result<js_sys::Promise, FetchError> {
    let global = js_sys::global();

    if let Some(window) = global.dyn_ref::<Window>() {
        return Ok(window.fetch_with_request(request));
    }

    if let Some(worker) = global.dyn_ref::<WorkerGlobalScope>() {
        return Ok(worker.fetch_with_request(request));
    }

    Err(FetchError::NoGlobalScope)
}
