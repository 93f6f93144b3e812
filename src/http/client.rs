//! One-shot HTTP requester
//!
//! Thin wrapper around `reqwest` that executes a single GET described by a
//! [`RequestDescriptor`] and maps the response onto the client's error
//! taxonomy. Transport concerns (TLS, pooling) stay inside `reqwest`.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Quota};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP requester
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers sent with every request
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("postcode-nl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for the HTTP requester config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Description of one API request.
///
/// Owned transiently per call and never persisted. The headers must
/// include the API-key header; query values may be scalars or one-level
/// nested objects, which serialize bracket-style
/// (`coords[latitude]=52.1`).
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    /// Absolute URL to request
    pub url: String,
    /// Headers to send, including the API-key header
    pub headers: HashMap<String, String>,
    /// Query parameters, scalar or one-level nested
    pub query: JsonObject,
    /// Follow `_links.next.href` chains until exhaustion
    pub follow_next: bool,
    /// Read quota metadata from the response headers
    pub return_quota: bool,
}

impl RequestDescriptor {
    /// Create a descriptor for a URL with no headers or parameters
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.query.insert(key.into(), value);
        self
    }

    /// Opt into pagination following
    #[must_use]
    pub fn follow_next(mut self, follow: bool) -> Self {
        self.follow_next = follow;
        self
    }

    /// Opt into quota reporting
    #[must_use]
    pub fn return_quota(mut self, report: bool) -> Self {
        self.return_quota = report;
        self
    }
}

/// Outcome of one successful HTTP exchange.
///
/// `body` is `None` when the service answered 404; `quota` is populated
/// only when the descriptor asked for it and the headers were present.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Parsed response body, `None` for not-found
    pub body: Option<JsonValue>,
    /// Quota observation from this exchange, if requested
    pub quota: Option<Quota>,
}

/// HTTP requester performing single authenticated GET calls
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a requester with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a requester with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Execute one GET request and classify the response.
    ///
    /// 200 yields a parsed body, 404 yields an empty success with no
    /// quota, any other status yields [`Error::Api`] with the message
    /// taken from the body's `error` field when present. Transport
    /// failures surface as [`Error::Http`]. Never retries.
    pub async fn get(&self, request: &RequestDescriptor) -> Result<FetchOutcome> {
        let mut builder = self
            .client
            .get(&request.url)
            .header(ACCEPT, "application/json");

        for (key, value) in &self.config.default_headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&flatten_query(&request.query));
        }

        debug!(url = %request.url, "issuing API request");
        let response = builder.send().await?;
        let status = response.status();

        let quota = if request.return_quota {
            Quota::from_headers(response.headers())
        } else {
            None
        };

        match status {
            StatusCode::OK => {
                let text = response.text().await?;
                let body: JsonValue = serde_json::from_str(&text)?;
                debug!(url = %request.url, "request succeeded");
                Ok(FetchOutcome {
                    body: Some(body),
                    quota,
                })
            }
            StatusCode::NOT_FOUND => {
                debug!(url = %request.url, "resource not found");
                Ok(FetchOutcome {
                    body: None,
                    quota: None,
                })
            }
            _ => {
                let body: Option<JsonValue> = response.json().await.ok();
                let message = body
                    .as_ref()
                    .and_then(|value| value.get("error"))
                    .and_then(JsonValue::as_str)
                    .map_or_else(
                        || {
                            format!(
                                "An unknown error has occurred while calling the external API. \
                                 HTTP status code: {}",
                                status.as_u16()
                            )
                        },
                        str::to_owned,
                    );
                warn!(url = %request.url, status = status.as_u16(), "API request failed");
                Err(Error::api(status.as_u16(), message))
            }
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Flatten a query object into key/value pairs.
///
/// One-level nested objects become bracket-style keys, matching the wire
/// format the API expects for the coordinate pair.
fn flatten_query(query: &JsonObject) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        match value {
            JsonValue::Object(nested) => {
                for (sub_key, sub_value) in nested {
                    pairs.push((format!("{key}[{sub_key}]"), scalar_to_string(sub_value)));
                }
            }
            scalar => pairs.push((key.clone(), scalar_to_string(scalar))),
        }
    }
    pairs
}

fn scalar_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        other => other.to_string(),
    }
}
