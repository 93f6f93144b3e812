//! HTTP requester module
//!
//! Performs one authenticated GET per call and classifies the outcome:
//! 200 becomes a parsed body, 404 becomes an empty success, anything else
//! becomes an API error. Nothing here retries; retry policy is the
//! caller's responsibility.

mod client;

pub use client::{FetchOutcome, HttpClient, HttpClientConfig, RequestDescriptor};
