/// URL normalization shared by list ingestion and lookups

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Normalize a URL for list comparison
///
/// Rules:
/// 1. Strip every trailing "/"
/// 2. Drop a "www." directly after an http(s) scheme, keeping the scheme
/// 3. Repeat until nothing changes
///
/// Nothing else is touched: case, ports, paths and query strings survive
/// as-is, and surrounding whitespace is the caller's business.
///
/// Examples:
/// - https://www.example.com/ → https://example.com
/// - http://www.example.com/path// → http://example.com/path
/// - example.com/ → example.com
pub fn normalize_url(url: &str) -> String {
    let mut current = normalize_once(url);

    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');

    for scheme in SCHEMES {
        if let Some(host) = trimmed
            .strip_prefix(scheme)
            .and_then(|rest| rest.strip_prefix("www."))
        {
            return format!("{}{}", scheme, host);
        }
    }

    trimmed.to_string()
}
