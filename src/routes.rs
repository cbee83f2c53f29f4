use crate::filters::FilterState;

pub const BROWSE_PATH: &str = "/";
pub const SEARCH_PATH: &str = "/search";

pub fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    result
}

/// Browse URL reflecting the active filters. `type` and `genre` appear
/// only when set; the year facet never enters the URL.
pub fn browse_url(filters: &FilterState) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(slug) = filters.kind.slug() {
        params.push(format!("type={}", slug));
    }
    if let Some(genre) = &filters.genre {
        params.push(format!("genre={}", url_encode(genre)));
    }

    if params.is_empty() {
        BROWSE_PATH.to_string()
    } else {
        format!("{}?{}", BROWSE_PATH, params.join("&"))
    }
}

/// Trimmed search query, or `None` when the input is all whitespace and
/// the submission should be suppressed.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub fn search_url(raw: &str) -> Option<String> {
    normalize_query(raw).map(|query| format!("{}?q={}", SEARCH_PATH, url_encode(query)))
}
