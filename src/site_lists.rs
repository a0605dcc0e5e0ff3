/// In-memory reputation lists and the rules for refreshing them

use crate::normalize::normalize_url;
use std::collections::HashSet;

/// Site that stays starred whatever the bookmarks export contains
pub const PINNED_STARRED_SITE: &str = "https://fmhy.net";

/// The four lists a URL is checked against
#[derive(Debug, Clone, PartialEq)]
pub struct SiteLists {
    pub unsafe_sites: Vec<String>,
    pub potentially_unsafe_sites: Vec<String>,
    pub safe_sites: Vec<String>,
    pub starred_sites: Vec<String>,
}

impl SiteLists {
    pub fn new() -> Self {
        SiteLists {
            unsafe_sites: Vec::new(),
            potentially_unsafe_sites: Vec::new(),
            safe_sites: Vec::new(),
            starred_sites: vec![PINNED_STARRED_SITE.to_string()],
        }
    }

    pub fn replace_unsafe(&mut self, entries: Vec<String>) {
        self.unsafe_sites = entries;
    }

    pub fn replace_potentially_unsafe(&mut self, entries: Vec<String>) {
        self.potentially_unsafe_sites = entries;
    }

    /// Append normalized URLs to the safe list, skipping ones already present.
    /// Returns how many were added.
    pub fn merge_safe(&mut self, urls: &[String]) -> usize {
        let original_len = self.safe_sites.len();

        for url in urls {
            let normalized = normalize_url(url.trim());
            if !self.safe_sites.contains(&normalized) {
                self.safe_sites.push(normalized);
            }
        }

        self.safe_sites.len() - original_len
    }

    /// Replace the starred list with the normalized, de-duplicated URLs
    /// (first occurrence wins), then re-pin the FMHY home page.
    pub fn replace_starred(&mut self, urls: &[String]) {
        let mut seen = HashSet::new();
        let mut starred: Vec<String> = urls
            .iter()
            .map(|url| normalize_url(url))
            .filter(|url| seen.insert(url.clone()))
            .collect();

        if !starred.iter().any(|site| site == PINNED_STARRED_SITE) {
            starred.push(PINNED_STARRED_SITE.to_string());
        }

        self.starred_sites = starred;
    }
}

impl Default for SiteLists {
    fn default() -> Self {
        Self::new()
    }
}
