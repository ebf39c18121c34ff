use crate::error::{BrowserError, Result};
use url::Url;

/// Parse a site origin, guessing the scheme when it is missing
///
/// Only `http`/`https` URLs with a host are accepted.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else if trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1") {
        // Local development servers are plain http
        format!("http://{}", trimmed)
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| BrowserError::InvalidUrl(format!("base URL '{}': {}", base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(BrowserError::InvalidUrl(format!(
            "base URL '{}' must use http or https",
            base_url
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(BrowserError::InvalidUrl(format!("base URL '{}' has no host", base_url)));
    }

    Ok(url)
}

/// Normalize a site origin into its canonical serialized form
pub fn normalize_base_url(base_url: &str) -> Result<String> {
    parse_base_url(base_url).map(String::from)
}

/// Resolve a location against a base URL the way a browser assigns `location.href`
///
/// Root-relative paths replace the base's path and query; absolute URLs pass through.
pub fn resolve_url(base_url: &str, location: &str) -> Result<String> {
    let base = parse_base_url(base_url)?;
    let resolved = base
        .join(location)
        .map_err(|e| BrowserError::InvalidUrl(format!("cannot resolve '{}' against '{}': {}", location, base, e)))?;

    Ok(resolved.into())
}
