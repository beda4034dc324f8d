//! Google Drive public-link resolver.
//!
//! This library turns a public Google Drive share link (or a bare file
//! identifier) into a direct, time-limited download URL by driving Drive's
//! redirect/confirmation flow: one non-redirect-following GET against the
//! `uc` export endpoint, a status-code branch, and lexical extraction of the
//! final link from either the `Location` header or the confirmation page's
//! form `action` attribute. The file bytes themselves are never fetched.
//!
//! # Architecture
//!
//! - [`extract`] - Lexical extraction of file identifiers and confirmation-page links
//! - [`resolver`] - The `uc` export endpoint resolution flow
//!
//! # Failure contract
//!
//! Provider-level failures (unshared file, unexpected status, missing
//! `Location` header, missing form action) are reported as an empty-string
//! result, never as an error. Transport-level failures (connection refused,
//! body read interrupted) propagate as [`ResolveError`].
//!
//! # Example
//!
//! ```no_run
//! use gdrive_resolver::GDriveResolver;
//!
//! # async fn example() -> Result<(), gdrive_resolver::ResolveError> {
//! let resolver = GDriveResolver::new()?;
//! let url = resolver
//!     .resolve_share_link("https://drive.google.com/file/d/ABC123/view")
//!     .await?;
//! if url.is_empty() {
//!     eprintln!("file is not public or the link is malformed");
//! }
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod extract;
pub mod resolver;

// Re-export commonly used types
pub use extract::extract_file_id;
pub use resolver::{GDriveResolver, ResolveError};
