//! Lexical extraction of Drive file identifiers and confirmation-page links.
//!
//! Both extractions are deliberately shallow: a share link is scanned for the
//! `/d/<id>/` path segment, and a confirmation page is scanned for the first
//! form `action="..."` attribute. Absence is signaled by `None` internally
//! and converted to an empty string at the public boundary.

use std::sync::LazyLock;

use regex::Regex;

/// Compiles a regex at static init; panics on invalid pattern.
fn compile_static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid static regex '{pattern}': {e}"))
}

/// Shortest non-empty run of characters between the `/d/` segment marker and
/// the next `/`.
static FILE_ID_RE: LazyLock<Regex> = LazyLock::new(|| compile_static_regex(r"/d/(.+?)/"));

/// First form `action` attribute on the "scan failed, download anyway"
/// confirmation page. Its value is the percent-encoded real download link.
static FORM_ACTION_RE: LazyLock<Regex> = LazyLock::new(|| compile_static_regex(r#"action="(.+?)""#));

/// Returns the file identifier embedded in `share_link`, if any.
pub(crate) fn file_id(share_link: &str) -> Option<&str> {
    FILE_ID_RE
        .captures(share_link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts the file identifier from a share link.
///
/// Returns the substring between the `/d/` path marker and the next `/`,
/// or the empty string when the link does not contain that pattern.
/// Malformed input is never an error, only an empty result.
#[must_use]
pub fn extract_file_id(share_link: &str) -> String {
    file_id(share_link).map(str::to_string).unwrap_or_default()
}

/// Returns the percent-decoded form-action link from a confirmation page.
///
/// Falls back to the raw captured value when decoding fails (non-UTF-8
/// percent escapes) so the link is still surfaced rather than silently
/// dropped.
pub(crate) fn confirm_download_link(html: &str) -> Option<String> {
    let raw = FORM_ACTION_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())?;

    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw.to_string()),
    }
}
