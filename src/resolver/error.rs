//! Error types for download-link resolution.
//!
//! Only transport-level failures surface as errors; everything the provider
//! itself can get wrong (unshared file, unexpected status, missing header)
//! is absorbed into the empty-string result instead. Messages follow the
//! What/Why/Fix pattern used across the project.

use thiserror::Error;

/// Errors that can occur while resolving a download link.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// The shared HTTP client could not be constructed
    #[error("failed to construct the resolver HTTP client: {reason}\n  Suggestion: {suggestion}")]
    ClientBuild {
        /// Why client construction failed
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// The network transport failed before a response status was classified
    #[error("transport failure while resolving file id '{file_id}': {reason}\n  Suggestion: Check network connectivity and retry")]
    Transport {
        /// The file identifier being resolved
        file_id: String,
        /// Why the request or body read failed
        reason: String,
    },
}

impl ResolveError {
    /// Creates a `ClientBuild` error.
    #[must_use]
    pub fn client_build(reason: &str) -> Self {
        Self::ClientBuild {
            reason: reason.to_string(),
            suggestion: "Check TLS/proxy settings of the host environment".to_string(),
        }
    }

    /// Creates a `Transport` error.
    #[must_use]
    pub fn transport(file_id: &str, reason: &str) -> Self {
        Self::Transport {
            file_id: file_id.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_client_build_message() {
        let err = ResolveError::client_build("builder exploded");
        let msg = err.to_string();
        assert!(msg.contains("builder exploded"), "should contain reason");
        assert!(msg.contains("Suggestion"), "should have suggestion");
    }

    #[test]
    fn test_resolve_error_transport_message() {
        let err = ResolveError::transport("ABC123", "connection reset by peer");
        let msg = err.to_string();
        assert!(msg.contains("ABC123"), "should contain file id");
        assert!(
            msg.contains("connection reset by peer"),
            "should contain reason"
        );
        assert!(
            msg.contains("connectivity"),
            "suggestion should mention connectivity"
        );
    }

    #[test]
    fn test_resolve_error_clone() {
        let err = ResolveError::transport("ABC123", "timed out");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
