/// Background page: owns the site lists, keeps toolbar icons in sync
/// and answers popup queries.

use crate::classifier::{Icon, classify};
use crate::config::ListSources;
use crate::error::{FetchError, MessageError, describe_js};
use crate::fetch::fetch_text;
use crate::messages::{ActiveInfo, Request, StatusResponse, TabChangeInfo, TabInfo};
use crate::parsers::{extract_bookmark_urls, extract_markdown_urls, parse_line_list};
use crate::site_lists::SiteLists;
use futures::future::join;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Action name of the popup's status query
pub const CHECK_SITE_STATUS: &str = "checkSiteStatus";

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    fn setTabIcon(path: &str, tab_id: i32);

    #[wasm_bindgen(catch)]
    async fn getTab(tab_id: i32) -> Result<JsValue, JsValue>;

    fn registerListeners(
        on_updated: &js_sys::Function,
        on_activated: &js_sys::Function,
        on_message: &js_sys::Function,
    );
}

thread_local! {
    // Written only by `refresh_lists`, which finishes before any listener exists.
    static SITE_LISTS: RefCell<SiteLists> = RefCell::new(SiteLists::new());
}

/// Which list a fetched document feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unsafe,
    PotentiallyUnsafe,
    Safe,
    Starred,
}

impl ListKind {
    fn label(&self) -> &'static str {
        match self {
            ListKind::Unsafe => "unsafe",
            ListKind::PotentiallyUnsafe => "potentially unsafe",
            ListKind::Safe => "safe",
            ListKind::Starred => "starred",
        }
    }
}

/// Fold one fetch outcome into the lists
///
/// On success the document is parsed with the extractor for its kind; on
/// failure the error is logged and the list keeps its previous contents.
pub fn apply_fetch_result(lists: &mut SiteLists, kind: ListKind, result: Result<String, FetchError>) {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            error!("Error fetching {} sites: {}", kind.label(), e);
            return;
        }
    };

    let entries = match kind {
        ListKind::Unsafe => {
            lists.replace_unsafe(parse_line_list(&text));
            &lists.unsafe_sites
        }
        ListKind::PotentiallyUnsafe => {
            lists.replace_potentially_unsafe(parse_line_list(&text));
            &lists.potentially_unsafe_sites
        }
        ListKind::Safe => {
            let added = lists.merge_safe(&extract_markdown_urls(&text));
            debug!("Added {} new safe sites", added);
            &lists.safe_sites
        }
        ListKind::Starred => {
            lists.replace_starred(&extract_bookmark_urls(&text));
            &lists.starred_sites
        }
    };

    info!("Parsed {} {} sites", entries.len(), kind.label());
    debug!("{} sites: {:?}", kind.label(), entries);
}

/// Fetch all four documents in the fixed startup order: the two filter
/// lists together, then the safe list, then the starred list.
pub async fn refresh_lists(sources: &ListSources) {
    info!("Fetching filter lists...");
    let (unsafe_result, potentially_unsafe_result) = join(
        fetch_text(&sources.unsafe_list),
        fetch_text(&sources.potentially_unsafe_list),
    )
    .await;
    update_lists(ListKind::Unsafe, unsafe_result);
    update_lists(ListKind::PotentiallyUnsafe, potentially_unsafe_result);

    info!("Fetching safe sites...");
    let safe_result = fetch_text(&sources.safe_list).await;
    update_lists(ListKind::Safe, safe_result);

    info!("Fetching starred sites...");
    let starred_result = fetch_text(&sources.starred_list).await;
    update_lists(ListKind::Starred, starred_result);
}

fn update_lists(kind: ListKind, result: Result<String, FetchError>) {
    SITE_LISTS.with(|lists| apply_fetch_result(&mut lists.borrow_mut(), kind, result));
}

/// Load the lists, then start listening. Events that fire before this
/// completes are never seen.
pub async fn initialize(sources: ListSources) {
    refresh_lists(&sources).await;
    register_listeners();
    info!("Extension initialized successfully.");
}

fn register_listeners() {
    let on_updated = Closure::wrap(Box::new(|tab_id: i32, change_info: JsValue, tab: JsValue| {
        on_tab_updated(tab_id, change_info, tab);
    }) as Box<dyn Fn(i32, JsValue, JsValue)>);

    let on_activated = Closure::wrap(Box::new(|active_info: JsValue| {
        on_tab_activated(active_info);
    }) as Box<dyn Fn(JsValue)>);

    let on_message = Closure::wrap(Box::new(|message: JsValue| -> JsValue {
        match on_runtime_message(message) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Ignoring message: {}", e);
                JsValue::UNDEFINED
            }
        }
    }) as Box<dyn Fn(JsValue) -> JsValue>);

    registerListeners(
        on_updated.as_ref().unchecked_ref(),
        on_activated.as_ref().unchecked_ref(),
        on_message.as_ref().unchecked_ref(),
    );

    // Listeners live as long as the background page.
    on_updated.forget();
    on_activated.forget();
    on_message.forget();
}

/// Classify `url` and set the toolbar icon for `tab_id`
pub fn check_site_and_update_icon(tab_id: i32, url: &str) {
    let response = SITE_LISTS.with(|lists| classify(&lists.borrow(), url));
    debug!(
        "Tab {}: {} is {}",
        tab_id,
        response.url,
        response.status.as_str()
    );

    setTabIcon(Icon::for_status(response.status).path(), tab_id);
}

fn on_tab_updated(tab_id: i32, change_info: JsValue, tab: JsValue) {
    let change_info: TabChangeInfo = serde_wasm_bindgen::from_value(change_info).unwrap_or_default();
    let tab: TabInfo = serde_wasm_bindgen::from_value(tab).unwrap_or_default();

    if !change_info.is_complete() {
        return;
    }

    if let Some(url) = tab.url() {
        check_site_and_update_icon(tab_id, url);
    }
}

fn on_tab_activated(active_info: JsValue) {
    let active_info: ActiveInfo = match serde_wasm_bindgen::from_value(active_info) {
        Ok(info) => info,
        Err(e) => {
            warn!("Unexpected activeInfo: {:?}", e);
            return;
        }
    };

    spawn_local(async move {
        match get_tab(active_info.tab_id).await {
            Ok(tab) => {
                if let Some(url) = tab.url() {
                    check_site_and_update_icon(tab.id.unwrap_or(active_info.tab_id), url);
                }
            }
            Err(e) => warn!("Failed to look up tab {}: {}", active_info.tab_id, e),
        }
    });
}

async fn get_tab(tab_id: i32) -> Result<TabInfo, String> {
    let tab_js = getTab(tab_id)
        .await
        .map_err(|e| format!("Failed to get tab: {}", describe_js(&e)))?;

    serde_wasm_bindgen::from_value(tab_js).map_err(|e| format!("Failed to parse tab: {:?}", e))
}

fn on_runtime_message(message: JsValue) -> Result<JsValue, MessageError> {
    let message: Value =
        serde_wasm_bindgen::from_value(message).map_err(|e| MessageError::Malformed(e.to_string()))?;

    let response = SITE_LISTS.with(|lists| handle_message(&lists.borrow(), message))?;

    match response {
        Some(response) => {
            serde_wasm_bindgen::to_value(&response).map_err(|e| MessageError::Encode(e.to_string()))
        }
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Answer a runtime message
///
/// Returns `Ok(None)` for actions this background does not handle, so
/// other listeners can reply instead.
pub fn handle_message(lists: &SiteLists, message: Value) -> Result<Option<StatusResponse>, MessageError> {
    if message.get("action").and_then(Value::as_str) != Some(CHECK_SITE_STATUS) {
        return Ok(None);
    }

    let request: Request = serde_json::from_value(message).map_err(|e| MessageError::Malformed(e.to_string()))?;

    match request {
        Request::CheckSiteStatus { url } => {
            debug!("Received status query for site: {}", url);
            Ok(Some(classify(lists, &url)))
        }
    }
}
