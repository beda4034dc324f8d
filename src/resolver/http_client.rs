//! Shared HTTP client construction policy for the resolver.
//!
//! Centralizes timeout, user-agent, compression, and redirect policy so the
//! resolution flow stays consistent. Redirect following is disabled: the
//! redirect target IS the datum being extracted, so the client must stop on
//! the raw 3xx response instead of transparently fetching the file.

use std::time::Duration;

use reqwest::Client;
use reqwest::redirect::Policy;

use super::ResolveError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent for resolver requests (identifies the tool).
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("gdrive-resolver/{version} (public-link-resolver)")
}

/// Builds the resolver HTTP client using shared project policy.
///
/// # Errors
///
/// Returns [`ResolveError::ClientBuild`] when client construction fails.
pub(crate) fn build_resolver_http_client() -> Result<Client, ResolveError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .redirect(Policy::none())
        .user_agent(default_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| {
            ResolveError::client_build(&format!("HTTP client construction failed: {error}"))
        })
}
