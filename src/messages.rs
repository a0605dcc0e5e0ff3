/// Payloads exchanged with the browser: popup queries and tab events
use crate::classifier::SiteStatus;
use serde::{Deserialize, Serialize};

/// A message sent from the popup to the background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    CheckSiteStatus { url: String },
}

/// Reply to `checkSiteStatus`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: SiteStatus,
    pub url: String,
}

/// The part of `tabs.onUpdated`'s changeInfo we care about
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabChangeInfo {
    #[serde(default)]
    pub status: Option<String>,
}

impl TabChangeInfo {
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some("complete")
    }
}

/// A browser tab, as far as classification is concerned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TabInfo {
    /// The tab's URL, if it has a non-empty one
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Payload of `tabs.onActivated`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveInfo {
    pub tab_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_deserialization() {
        let request: Request =
            serde_json::from_value(json!({"action": "checkSiteStatus", "url": "https://good.com/"})).unwrap();

        assert_eq!(
            request,
            Request::CheckSiteStatus {
                url: "https://good.com/".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result = serde_json::from_value::<Request>(json!({"action": "refresh", "url": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_url_rejected() {
        let result = serde_json::from_value::<Request>(json!({"action": "checkSiteStatus"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_response_wire_format() {
        let response = StatusResponse {
            status: SiteStatus::PotentiallyUnsafe,
            url: "https://maybe.com".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "potentially_unsafe", "url": "https://maybe.com"}));
    }

    #[test]
    fn test_tab_change_info() {
        let complete: TabChangeInfo = serde_json::from_value(json!({"status": "complete"})).unwrap();
        let loading: TabChangeInfo = serde_json::from_value(json!({"status": "loading"})).unwrap();
        let title_only: TabChangeInfo = serde_json::from_value(json!({"title": "New"})).unwrap();

        assert!(complete.is_complete());
        assert!(!loading.is_complete());
        assert!(!title_only.is_complete());
    }

    #[test]
    fn test_tab_info_url() {
        let tab: TabInfo =
            serde_json::from_value(json!({"id": 7, "url": "https://a.com", "title": "A", "pinned": false})).unwrap();
        let blank: TabInfo = serde_json::from_value(json!({"id": 8, "url": ""})).unwrap();
        let missing: TabInfo = serde_json::from_value(json!({"id": 9})).unwrap();

        assert_eq!(tab.id, Some(7));
        assert_eq!(tab.url(), Some("https://a.com"));
        assert_eq!(blank.url(), None);
        assert_eq!(missing.url(), None);
    }

    #[test]
    fn test_active_info() {
        let info: ActiveInfo = serde_json::from_value(json!({"tabId": 3, "windowId": 1})).unwrap();
        assert_eq!(info.tab_id, 3);
    }
}
