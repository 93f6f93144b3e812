//! # postcode-nl
//!
//! Client for the Dutch postcode API: address lookups, postcode lookups
//! and area summaries over authenticated HTTP GET calls.
//!
//! Paginated endpoints answer one page at a time; when asked to, the
//! client walks every `_links.next.href` hop and assembles a single
//! merged response, keeping the first page's identity metadata and the
//! final request's rate-limit quota.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use postcode_nl::{AddressFilter, CallOptions, PostcodeClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PostcodeClient::new("abcdefghijklmnopQRSTUVWXYZ123");
//!
//!     let filter = AddressFilter::new().postcode("1234AB").number(10);
//!     let options = CallOptions::new().follow_next(true).return_quota(true);
//!
//!     let lookup = client.get_addresses(&filter, &options).await?;
//!     if let Some(addresses) = lookup.result {
//!         println!("{addresses}");
//!     }
//!     if let Some(quota) = lookup.quota {
//!         println!("{} of {} calls remaining", quota.remaining, quota.limit);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Callers without an async runtime can use [`blocking::PostcodeClient`]
//! instead.
//!
//! Nothing in this crate retries or caches: a 404 resolves successfully
//! with an empty result, every other failure aborts the call outright,
//! and retry policy is left to the caller.

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Postcode format validators
pub mod format;

/// HTTP requester
pub mod http;

/// Pagination following and result merging
pub mod pagination;

/// Query functions and client configuration
pub mod client;

/// Blocking adapter over the async client
pub mod blocking;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{
    AddressFilter, CallOptions, ClientConfig, PostcodeClient, PostcodeFilter, DEFAULT_BASE_URL,
};
pub use error::{Error, Result};
pub use format::{is_valid_p4, is_valid_p6};
pub use http::{FetchOutcome, HttpClient, HttpClientConfig, RequestDescriptor};
pub use pagination::{follow_next, merge_results};
pub use types::{JsonObject, JsonValue, Lookup, Quota};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
