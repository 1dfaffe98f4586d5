//! Helpers for joining and displaying endpoint URLs.

/// Strip trailing slashes so a route can be appended without doubling them.
///
/// ```
/// use solace::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://demo.hf.space/"), "https://demo.hf.space");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a base URL and a route with exactly one slash between them.
///
/// ```
/// use solace::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://demo.hf.space/", "/chat"),
///     "https://demo.hf.space/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}

/// Host (and port) portion of a URL, for compact status displays.
///
/// Falls back to the input when it does not look like `scheme://host/...`.
pub fn display_host(url: &str) -> &str {
    let trimmed = url.trim();
    let Some((_, rest)) = trimmed.split_once("://") else {
        return trimmed;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    // Drop any userinfo so credentials never reach the screen.
    host.rsplit_once('@').map(|(_, h)| h).unwrap_or(host)
}
