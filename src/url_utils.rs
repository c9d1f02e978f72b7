//! URL Utility Functions
//!
//! Link normalization for extracted records. Hrefs are resolved against the
//! URL of the listing page with simple, predictable rules:
//!
//! - absolute (`http://`, `https://`, `mailto:` …) pass through unchanged;
//! - protocol-relative (`//host/path`) take the base scheme;
//! - root-relative (`/path`) take the base scheme and host;
//! - anything else is appended to the base path's directory.
//!
//! Dot segments are kept as written.

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Schemes that are already complete and must not be rebased.
const OPAQUE_SCHEMES: &[&str] = &["data:", "javascript:", "mailto:", "tel:"];

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

fn has_absolute_form(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || OPAQUE_SCHEMES.iter().any(|s| lower.starts_with(s))
}

/// Host with a non-default port, like `example.com:8080`.
fn authority(base: &Url) -> Option<String> {
    let host = base.host_str()?;
    Some(match base.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Resolve `href` against `base_url`, failing if the base is unusable.
///
/// An empty `href` resolves to an empty string.
///
/// # Example
///
/// ```rust
/// use news_extractor::url_utils::resolve_url;
///
/// assert_eq!(resolve_url("/a/b", "https://x.com/p/q")?, "https://x.com/a/b");
/// assert_eq!(resolve_url("c.html", "https://x.com/a/b/")?, "https://x.com/a/b/c.html");
/// assert!(resolve_url("c.html", "not a url").is_err());
/// # Ok::<(), news_extractor::Error>(())
/// ```
pub fn resolve_url(href: &str, base_url: &str) -> Result<String> {
    let href = href.trim();

    if href.is_empty() {
        return Ok(String::new());
    }

    if has_absolute_form(href) {
        return Ok(href.to_string());
    }

    let base = Url::parse(base_url.trim())
        .map_err(|e| Error::InvalidUrl(format!("base `{base_url}`: {e}")))?;
    let authority = authority(&base)
        .ok_or_else(|| Error::InvalidUrl(format!("base `{base_url}` has no host")))?;
    let scheme = base.scheme();

    if href.starts_with("//") {
        return Ok(format!("{scheme}:{href}"));
    }

    if href.starts_with('/') {
        return Ok(format!("{scheme}://{authority}{href}"));
    }

    let path = base.path();
    let directory = match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "/",
    };

    Ok(format!("{scheme}://{authority}{directory}{href}"))
}

/// Lenient form of [`resolve_url`]: on failure the href is returned trimmed
/// but otherwise unchanged.
#[must_use]
pub fn normalize_url(href: &str, base_url: &str) -> String {
    match resolve_url(href, base_url) {
        Ok(resolved) => resolved,
        Err(err) => {
            debug!(href, base_url, error = %err, "keeping href unresolved");
            href.trim().to_string()
        }
    }
}

/// Extract the hostname from an absolute URL.
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let (_, parsed) = is_absolute_url(url_str);
    parsed.and_then(|url| url.host_str().map(str::to_string))
}
