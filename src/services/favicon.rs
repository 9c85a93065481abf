//! Favicon lookup for bookmark cards.
//!
//! Cards show a small icon fetched from a third-party favicon service keyed
//! by the bookmark's domain. This module only builds the request URL; a
//! failed fetch is left to the presentation layer.

use url::{form_urlencoded, Url};

/// Base URL of the favicon service.
pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";

/// Icon edge length requested from the service, in pixels.
pub const FAVICON_SIZE: u32 = 128;

/// Extracts the host of `bookmark_url`, or `None` if it does not parse or has no host.
pub fn domain_of(bookmark_url: &str) -> Option<String> {
    Url::parse(bookmark_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}

/// Builds the favicon request URL for a bookmark.
///
/// Unparseable urls are passed to the service as-is.
pub fn favicon_url(bookmark_url: &str) -> String {
    let domain = domain_of(bookmark_url).unwrap_or_else(|| bookmark_url.to_string());
    let encoded: String = form_urlencoded::byte_serialize(domain.as_bytes()).collect();
    format!("{}?domain={}&sz={}", FAVICON_SERVICE, encoded, FAVICON_SIZE)
}
