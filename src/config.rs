/// Where the reputation lists come from
use serde::{Deserialize, Serialize};

pub const UNSAFE_LIST_URL: &str =
    "https://raw.githubusercontent.com/fmhy/FMHYFilterlist/refs/heads/main/sitelist.txt";
pub const POTENTIALLY_UNSAFE_LIST_URL: &str =
    "https://raw.githubusercontent.com/fmhy/FMHYFilterlist/refs/heads/main/sitelist-plus.txt";
pub const SAFE_LIST_URL: &str = "https://api.fmhy.net/single-page";
pub const STARRED_LIST_URL: &str =
    "https://raw.githubusercontent.com/fmhy/bookmarks/refs/heads/main/fmhy_in_bookmarks_starred_only.html";

/// Remote documents fetched at startup
///
/// Any field missing from a host-supplied override falls back to the
/// published FMHY location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListSources {
    /// Plaintext filter list of unsafe sites
    pub unsafe_list: String,
    /// Plaintext filter list of potentially unsafe sites
    pub potentially_unsafe_list: String,
    /// Markdown wiki page whose links are the safe sites
    pub safe_list: String,
    /// Bookmarks HTML export of starred sites
    pub starred_list: String,
}

impl Default for ListSources {
    fn default() -> Self {
        ListSources {
            unsafe_list: UNSAFE_LIST_URL.to_string(),
            potentially_unsafe_list: POTENTIALLY_UNSAFE_LIST_URL.to_string(),
            safe_list: SAFE_LIST_URL.to_string(),
            starred_list: STARRED_LIST_URL.to_string(),
        }
    }
}
