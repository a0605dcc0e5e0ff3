/// Popup UI: shows the active tab's FMHY status

use crate::classifier::SiteStatus;
use crate::messages::{Request, StatusResponse};
use crate::ui::components::StatusCard;
use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendMessage(message: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    NoUrl,
    Ready(StatusResponse),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);

    // Ask the background about the active tab on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match query_active_tab().await {
                    Ok(Some(response)) => state.set(PopupState::Ready(response)),
                    Ok(None) => state.set(PopupState::NoUrl),
                    Err(e) => state.set(PopupState::Error(e)),
                }
            });
            || ()
        });
    }

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"FMHY SafeGuard"}</h1>

            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Checking site..."}</p>
                    </div>
                },
                PopupState::NoUrl => html! {
                    <StatusCard status={SiteStatus::NoData} />
                },
                PopupState::Ready(response) => html! {
                    <StatusCard status={response.status} url={Some(response.url.clone())} />
                },
                PopupState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
            }}

            <p class="footer-popup">
                {"FMHY SafeGuard v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

async fn query_active_tab() -> Result<Option<StatusResponse>, String> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| format!("Failed to get active tab: {:?}", e))?;

    let url = match url_js.as_string().filter(|url| !url.is_empty()) {
        Some(url) => url,
        None => return Ok(None),
    };

    let request_js = serde_wasm_bindgen::to_value(&Request::CheckSiteStatus { url })
        .map_err(|e| format!("Failed to serialize: {:?}", e))?;

    let reply = sendMessage(request_js)
        .await
        .map_err(|e| format!("Failed to reach background: {:?}", e))?;

    // No listener yet: the background is still fetching its lists
    if reply.is_undefined() || reply.is_null() {
        return Err("Site lists are still loading, try again shortly".to_string());
    }

    let response: StatusResponse = serde_wasm_bindgen::from_value(reply)
        .map_err(|e| format!("Failed to parse status: {:?}", e))?;

    Ok(Some(response))
}
