/// Site classification against the reputation lists

use crate::messages::StatusResponse;
use crate::normalize::normalize_url;
use crate::site_lists::SiteLists;
use serde::{Deserialize, Serialize};

/// Reputation of a site, in lookup precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    Starred,
    Safe,
    Unsafe,
    PotentiallyUnsafe,
    NoData,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Starred => "starred",
            SiteStatus::Safe => "safe",
            SiteStatus::Unsafe => "unsafe",
            SiteStatus::PotentiallyUnsafe => "potentially_unsafe",
            SiteStatus::NoData => "no_data",
        }
    }
}

/// Toolbar icon shown for a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Starred,
    Safe,
    Unsafe,
    PotentiallyUnsafe,
    Default,
}

impl Icon {
    pub fn for_status(status: SiteStatus) -> Icon {
        match status {
            SiteStatus::Starred => Icon::Starred,
            SiteStatus::Safe => Icon::Safe,
            SiteStatus::Unsafe => Icon::Unsafe,
            SiteStatus::PotentiallyUnsafe => Icon::PotentiallyUnsafe,
            SiteStatus::NoData => Icon::Default,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Icon::Starred => "res/icons/starred.png",
            Icon::Safe => "res/icons/safe.png",
            Icon::Unsafe => "res/icons/unsafe.png",
            Icon::PotentiallyUnsafe => "res/icons/potentially_unsafe.png",
            Icon::Default => "res/ext_icon_144.png",
        }
    }
}

/// Classify a URL
///
/// The candidate is trimmed and normalized, then checked top to bottom,
/// first hit wins:
/// 1. starred: equals a normalized starred entry
/// 2. safe: equals a normalized safe entry
/// 3. unsafe: contains a normalized unsafe entry as a substring
/// 4. potentially_unsafe: same substring rule
/// 5. no_data
///
/// Both the toolbar icon and the popup go through here, so they can never
/// disagree.
pub fn classify(lists: &SiteLists, url: &str) -> StatusResponse {
    let current = normalize_url(url.trim());

    let status = if matches_exact(&lists.starred_sites, &current) {
        SiteStatus::Starred
    } else if matches_exact(&lists.safe_sites, &current) {
        SiteStatus::Safe
    } else if matches_substring(&lists.unsafe_sites, &current) {
        SiteStatus::Unsafe
    } else if matches_substring(&lists.potentially_unsafe_sites, &current) {
        SiteStatus::PotentiallyUnsafe
    } else {
        SiteStatus::NoData
    };

    StatusResponse { status, url: current }
}

fn matches_exact(sites: &[String], current: &str) -> bool {
    sites.iter().any(|site| normalize_url(site) == current)
}

// An entry that normalizes to "" would match every URL, so it never matches.
fn matches_substring(sites: &[String], current: &str) -> bool {
    sites.iter().any(|site| {
        let needle = normalize_url(site);
        !needle.is_empty() && current.contains(needle.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn lists(starred: &[&str], safe: &[&str], unsafe_: &[&str], potentially: &[&str]) -> SiteLists {
        SiteLists {
            starred_sites: owned(starred),
            safe_sites: owned(safe),
            unsafe_sites: owned(unsafe_),
            potentially_unsafe_sites: owned(potentially),
        }
    }

    #[test]
    fn test_safe_lookup() {
        let lists = lists(&[], &["https://good.com"], &["bad.com"], &[]);
        let response = classify(&lists, "https://good.com/");

        assert_eq!(response.status, SiteStatus::Safe);
        assert_eq!(response.url, "https://good.com");
    }

    #[test]
    fn test_no_data() {
        let lists = lists(&["https://star.com"], &["https://good.com"], &["bad.com"], &["meh.com"]);
        let response = classify(&lists, "https://www.unknown.org/");

        assert_eq!(response.status, SiteStatus::NoData);
        assert_eq!(response.url, "https://unknown.org");
    }

    #[test]
    fn test_unsafe_substring_match() {
        let lists = lists(&[], &[], &["badsite.com"], &[]);
        let response = classify(&lists, "https://badsite.com/page?x=1");

        assert_eq!(response.status, SiteStatus::Unsafe);
    }

    #[test]
    fn test_unsafe_matches_anywhere_in_url() {
        let lists = lists(&[], &[], &["ads"], &[]);
        assert_eq!(classify(&lists, "https://example.com/downloads").status, SiteStatus::Unsafe);
    }

    #[test]
    fn test_potentially_unsafe_substring_match() {
        let lists = lists(&[], &[], &[], &["sketchy.net"]);
        assert_eq!(
            classify(&lists, "https://mirror.sketchy.net/file").status,
            SiteStatus::PotentiallyUnsafe
        );
    }

    #[test]
    fn test_safe_requires_exact_match() {
        let lists = lists(&[], &["https://good.com"], &[], &[]);
        assert_eq!(classify(&lists, "https://good.com/page").status, SiteStatus::NoData);
        assert_eq!(classify(&lists, "https://www.good.com").status, SiteStatus::Safe);
    }

    #[test]
    fn test_precedence_chain() {
        let url = "https://dup.com";

        let all = lists(&[url], &[url], &["dup.com"], &["dup.com"]);
        assert_eq!(classify(&all, url).status, SiteStatus::Starred);

        let no_star = lists(&[], &[url], &["dup.com"], &["dup.com"]);
        assert_eq!(classify(&no_star, url).status, SiteStatus::Safe);

        let unsafe_only = lists(&[], &[], &["dup.com"], &["dup.com"]);
        assert_eq!(classify(&unsafe_only, url).status, SiteStatus::Unsafe);

        let potentially_only = lists(&[], &[], &[], &["dup.com"]);
        assert_eq!(classify(&potentially_only, url).status, SiteStatus::PotentiallyUnsafe);
    }

    #[test]
    fn test_list_entries_are_normalized_on_lookup() {
        let lists = lists(&["https://www.star.com/"], &[], &["https://www.bad.com/"], &[]);
        assert_eq!(classify(&lists, "https://star.com").status, SiteStatus::Starred);
        assert_eq!(classify(&lists, "https://bad.com/x").status, SiteStatus::Unsafe);
    }

    #[test]
    fn test_untrimmed_entries_do_not_match() {
        let lists = lists(&[], &[], &["bad.com\r", " worse.com"], &[]);
        assert_eq!(classify(&lists, "https://bad.com").status, SiteStatus::NoData);
        assert_eq!(classify(&lists, "https://worse.com").status, SiteStatus::NoData);
    }

    #[test]
    fn test_empty_entry_never_matches() {
        let lists = lists(&[], &[], &["/"], &["//"]);
        assert_eq!(classify(&lists, "https://anything.com").status, SiteStatus::NoData);
    }

    #[test]
    fn test_query_is_trimmed() {
        let lists = lists(&[], &["https://good.com"], &[], &[]);
        let response = classify(&lists, "  https://good.com/ \n");

        assert_eq!(response.status, SiteStatus::Safe);
        assert_eq!(response.url, "https://good.com");
    }

    #[test]
    fn test_icon_for_status() {
        assert_eq!(Icon::for_status(SiteStatus::Starred).path(), "res/icons/starred.png");
        assert_eq!(Icon::for_status(SiteStatus::Safe).path(), "res/icons/safe.png");
        assert_eq!(Icon::for_status(SiteStatus::Unsafe).path(), "res/icons/unsafe.png");
        assert_eq!(
            Icon::for_status(SiteStatus::PotentiallyUnsafe).path(),
            "res/icons/potentially_unsafe.png"
        );
        assert_eq!(Icon::for_status(SiteStatus::NoData), Icon::Default);
        assert_eq!(Icon::Default.path(), "res/ext_icon_144.png");
    }

    #[test]
    fn test_status_names_match_wire_format() {
        for status in [
            SiteStatus::Starred,
            SiteStatus::Safe,
            SiteStatus::Unsafe,
            SiteStatus::PotentiallyUnsafe,
            SiteStatus::NoData,
        ] {
            let value = serde_json::to_value(status).unwrap();
            assert_eq!(value, serde_json::Value::String(status.as_str().to_string()));
        }
    }
}
