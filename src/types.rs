//! Common types used throughout the postcode API client
//!
//! Shared type aliases and the small value types that cross module
//! boundaries: the quota metadata read from rate-limit headers and the
//! completion value every query resolves with.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Quota
// ============================================================================

/// Rate-limit usage metadata reported by the remote service.
///
/// Derived from the `x-ratelimit-limit` and `x-ratelimit-remaining`
/// response headers of one specific HTTP exchange. Quotas are never merged
/// or summed across pages: a paginated walk reports the observation from
/// its final request only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    /// Total number of API calls allowed in the current window
    pub limit: u64,
    /// Number of API calls still available
    pub remaining: u64,
}

impl Quota {
    /// Read quota metadata from response headers.
    ///
    /// Returns `None` when either header is absent or not an integer.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_u64(headers, "x-ratelimit-limit")?;
        let remaining = header_u64(headers, "x-ratelimit-remaining")?;
        Some(Self { limit, remaining })
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}

// ============================================================================
// Lookup
// ============================================================================

/// The single completion value of a query.
///
/// `result` holds the API response exactly as the service returned it
/// (merged across pages when pagination was followed), or `None` when the
/// service answered 404. `quota` is populated only when the caller opted
/// into quota reporting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lookup {
    /// The response document, `None` for not-found
    pub result: Option<JsonValue>,
    /// Quota observation from the relevant exchange, if requested
    pub quota: Option<Quota>,
}
