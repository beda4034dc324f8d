//! Resolution of Drive file identifiers into direct download URLs.
//!
//! The flow is a single GET against the `uc` export endpoint with redirect
//! following disabled, then a three-way branch on the response status:
//!
//! - `200` - Drive returned a "scan failed, download anyway" confirmation
//!   page; the real link is the percent-encoded form `action` in the body.
//! - `303` - the file is directly servable; the link is the `Location`
//!   header, returned verbatim.
//! - anything else - the file is not public, not found, or Drive errored; a
//!   diagnostic is logged and the result is empty.
//!
//! Every resolution failure surfaces as an empty string. Only transport
//! failures (the request never produced a classifiable status, or the
//! confirmation body could not be read) return [`ResolveError`].

mod error;
mod http_client;

pub use error::ResolveError;

use reqwest::Client;
use reqwest::header::LOCATION;
use tracing::{debug, warn};

use crate::extract;

/// Drive returned a confirmation page instead of the file (large file or no
/// virus-scan verdict).
const STATUS_CONFIRMATION_NEEDED: u16 = 200;
/// Drive redirects straight to the file contents.
const STATUS_PROCEED_TO_DOWNLOAD: u16 = 303;

const DEFAULT_BASE_URL: &str = "https://drive.google.com";

/// Resolver for public Google Drive share links.
///
/// Holds a shared HTTP client configured to stop on redirects. The resolver
/// is `Send + Sync`; concurrent resolutions through one instance are
/// independent of each other.
pub struct GDriveResolver {
    client: Client,
    base_url: String,
}

impl GDriveResolver {
    /// Creates a resolver against the production Drive endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when HTTP client construction fails.
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a resolver with a custom endpoint (used by integration tests).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when HTTP client construction fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ResolveError> {
        Ok(Self {
            client: http_client::build_resolver_http_client()?,
            base_url: base_url.into(),
        })
    }

    /// Builds the `uc` export endpoint URL for a file identifier.
    ///
    /// Uses the bare `/uc` path instead of the `/u/0/uc` form Drive links to
    /// in its UI; that saves one redirect hop per resolution.
    fn export_endpoint(&self, file_id: &str) -> String {
        format!(
            "{}/uc?id={}&export=download",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(file_id)
        )
    }

    /// Resolves a bare file identifier into a direct download URL.
    ///
    /// Returns the empty string when the identifier is empty (no request is
    /// made), when Drive answers with an unexpected status, or when an
    /// expected datum (`Location` header, form action) is missing from an
    /// otherwise recognized response.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Transport`] when the request fails before a
    /// status could be classified or the confirmation body cannot be read.
    #[tracing::instrument(skip(self), fields(resolver = "gdrive"))]
    pub async fn resolve_file_id(&self, file_id: &str) -> Result<String, ResolveError> {
        if file_id.is_empty() {
            return Ok(String::new());
        }

        let endpoint = self.export_endpoint(file_id);
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|error| ResolveError::transport(file_id, &error.to_string()))?;

        match response.status().as_u16() {
            STATUS_CONFIRMATION_NEEDED => {
                debug!(file_id = %file_id, "confirmation page returned; extracting form action");
                let body = response
                    .text()
                    .await
                    .map_err(|error| ResolveError::transport(file_id, &error.to_string()))?;
                Ok(extract::confirm_download_link(&body).unwrap_or_default())
            }
            STATUS_PROCEED_TO_DOWNLOAD => Ok(response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
                .unwrap_or_default()),
            status => {
                warn!(
                    file_id = %file_id,
                    status,
                    "getting a download link failed; make sure the file is public"
                );
                Ok(String::new())
            }
        }
    }

    /// Resolves a share link into a direct download URL.
    ///
    /// Composes identifier extraction with [`Self::resolve_file_id`]; a link
    /// without a recognizable `/d/<id>/` segment resolves to the empty
    /// string without any network call.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Transport`] under the same conditions as
    /// [`Self::resolve_file_id`].
    pub async fn resolve_share_link(&self, share_link: &str) -> Result<String, ResolveError> {
        self.resolve_file_id(&extract::extract_file_id(share_link))
            .await
    }
}

impl std::fmt::Debug for GDriveResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GDriveResolver")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_export_endpoint_embeds_id_and_export_param() {
        let resolver = GDriveResolver::new().unwrap();
        assert_eq!(
            resolver.export_endpoint("ABC123"),
            "https://drive.google.com/uc?id=ABC123&export=download"
        );
    }

    #[test]
    fn test_export_endpoint_trims_trailing_slash() {
        let resolver = GDriveResolver::with_base_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            resolver.export_endpoint("ABC123"),
            "http://127.0.0.1:8080/uc?id=ABC123&export=download"
        );
    }

    #[test]
    fn test_export_endpoint_percent_encodes_id() {
        let resolver = GDriveResolver::new().unwrap();
        assert_eq!(
            resolver.export_endpoint("a b&c"),
            "https://drive.google.com/uc?id=a%20b%26c&export=download"
        );
    }

    #[test]
    fn test_debug_shows_base_url_only() {
        let resolver = GDriveResolver::new().unwrap();
        let rendered = format!("{resolver:?}");
        assert!(rendered.contains("https://drive.google.com"));
        assert!(rendered.contains(".."), "Debug must be non-exhaustive");
    }
}
