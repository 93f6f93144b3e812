//! Query functions over the postcode API
//!
//! [`PostcodeClient`] shapes validated filters into request descriptors
//! and delegates to either a single requester call or the pagination
//! walker. All validation happens synchronously, before any network
//! traffic: a validation failure never issues a request.

mod filters;

pub use filters::{AddressFilter, CallOptions, PostcodeFilter};

use crate::error::{Error, Result};
use crate::format::{is_valid_p4, is_valid_p6};
use crate::http::{HttpClient, HttpClientConfig, RequestDescriptor};
use crate::pagination::follow_next;
use crate::types::{JsonObject, Lookup};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

/// Default base path of the remote service
pub const DEFAULT_BASE_URL: &str = "https://postcode-api.apiwise.nl/v2";

const API_KEY_HEADER: &str = "X-Api-Key";
const SORT_DISTANCE: &str = "distance";

/// Configuration for [`PostcodeClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API token sent in the `X-Api-Key` header
    pub api_key: String,
    /// Base URL of the service
    pub base_url: String,
    /// Requester configuration
    pub http: HttpClientConfig,
}

impl ClientConfig {
    /// Create a config with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: HttpClientConfig::default(),
        }
    }

    /// Create a config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }
}

/// Builder for [`ClientConfig`]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Override the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.http.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Client for the postcode API
#[derive(Debug)]
pub struct PostcodeClient {
    http: HttpClient,
    config: ClientConfig,
}

impl PostcodeClient {
    /// Create a client with default configuration and the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = HttpClient::with_config(config.http.clone());
        Self { http, config }
    }

    /// List addresses, optionally filtered. Instance of `GET /addresses`.
    ///
    /// The postcode filter, when present, must be P6-formatted; the number
    /// filter is only honored alongside a postcode. Distance sorting
    /// requires latitude, longitude and `sort = "distance"` together.
    pub async fn get_addresses(
        &self,
        filter: &AddressFilter,
        options: &CallOptions,
    ) -> Result<Lookup> {
        let mut query = JsonObject::new();

        if let Some(postcode) = &filter.postcode {
            if !is_valid_p6(postcode) {
                return Err(Error::validation(
                    "the postcode filter must be in P6 format for this API call",
                ));
            }
            query.insert("postcode".to_string(), json!(postcode));
            // The number filter is ignored when no postcode is given
            if let Some(number) = filter.number {
                query.insert("number".to_string(), json!(number));
            }
        }

        apply_geo_sort(
            filter.latitude,
            filter.longitude,
            filter.sort.as_deref(),
            &mut query,
        )?;

        self.execute(self.descriptor(self.endpoint("addresses"), query, options))
            .await
    }

    /// List addresses for one postcode and street number, both required.
    /// Instance of `GET /addresses`.
    pub async fn get_addresses_by_postcode_and_number(
        &self,
        postcode: &str,
        number: u32,
        options: &CallOptions,
    ) -> Result<Lookup> {
        if !is_valid_p6(postcode) {
            return Err(Error::validation(
                "the postcode must be in P6 format for this API call",
            ));
        }

        let mut query = JsonObject::new();
        query.insert("postcode".to_string(), json!(postcode));
        query.insert("number".to_string(), json!(number));

        self.execute(self.descriptor(self.endpoint("addresses"), query, options))
            .await
    }

    /// Look up one address by its identifier. Instance of
    /// `GET /addresses/{id}`.
    pub async fn get_address_by_id(&self, id: &str, options: &CallOptions) -> Result<Lookup> {
        if id.is_empty() {
            return Err(Error::validation(
                "the identifier is required and must be a non-empty string",
            ));
        }

        let mut request =
            self.descriptor(self.endpoint(&format!("addresses/{id}")), JsonObject::new(), options);
        // Single-resource endpoint, never paginated
        request.follow_next = false;
        self.execute(request).await
    }

    /// List postcodes, optionally filtered on postcode area. Instance of
    /// `GET /postcodes`.
    pub async fn get_postcodes(
        &self,
        filter: &PostcodeFilter,
        options: &CallOptions,
    ) -> Result<Lookup> {
        let mut query = JsonObject::new();

        if let Some(area) = &filter.postcode_area {
            if !is_valid_p4(area) {
                return Err(Error::validation(
                    "the postcode area filter must be in P4 format for this API call",
                ));
            }
            query.insert("postcodeArea".to_string(), json!(area));
        }

        apply_geo_sort(
            filter.latitude,
            filter.longitude,
            filter.sort.as_deref(),
            &mut query,
        )?;

        self.execute(self.descriptor(self.endpoint("postcodes"), query, options))
            .await
    }

    /// Summarized information for a whole postcode area, the area filter
    /// being required. Instance of `GET /postcodes`.
    pub async fn get_postcode_area(
        &self,
        postcode_area: &str,
        options: &CallOptions,
    ) -> Result<Lookup> {
        if !is_valid_p4(postcode_area) {
            return Err(Error::validation(
                "a P4 formatted postcode area is required for this API call",
            ));
        }

        let mut query = JsonObject::new();
        query.insert("postcodeArea".to_string(), json!(postcode_area));

        self.execute(self.descriptor(self.endpoint("postcodes"), query, options))
            .await
    }

    /// Details of one P6 postcode. Instance of `GET /postcodes/{postcode}`.
    pub async fn get_single_postcode(
        &self,
        postcode: &str,
        options: &CallOptions,
    ) -> Result<Lookup> {
        if !is_valid_p6(postcode) {
            return Err(Error::validation(
                "the postcode is required and must be in P6 format for this API call",
            ));
        }

        let mut request = self.descriptor(
            self.endpoint(&format!("postcodes/{postcode}")),
            JsonObject::new(),
            options,
        );
        // Single-resource endpoint, never paginated
        request.follow_next = false;
        self.execute(request).await
    }

    fn descriptor(
        &self,
        url: String,
        query: JsonObject,
        options: &CallOptions,
    ) -> RequestDescriptor {
        RequestDescriptor {
            url,
            headers: HashMap::from([(API_KEY_HEADER.to_string(), self.config.api_key.clone())]),
            query,
            follow_next: options.follow_next,
            return_quota: options.return_quota,
        }
    }

    async fn execute(&self, request: RequestDescriptor) -> Result<Lookup> {
        if request.follow_next {
            follow_next(&self.http, request).await
        } else {
            let outcome = self.http.get(&request).await?;
            Ok(Lookup {
                result: outcome.body,
                quota: outcome.quota,
            })
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }
}

/// Validate the geographic sort fields and fill the query accordingly.
///
/// All three fields must be given together; `sort` only supports
/// `"distance"`. Any partial combination is a validation error.
fn apply_geo_sort(
    latitude: Option<f64>,
    longitude: Option<f64>,
    sort: Option<&str>,
    query: &mut JsonObject,
) -> Result<()> {
    match (latitude, longitude, sort) {
        (Some(latitude), Some(longitude), Some(SORT_DISTANCE)) => {
            query.insert(
                "coords".to_string(),
                json!({ "latitude": latitude, "longitude": longitude }),
            );
            query.insert("sort".to_string(), json!(SORT_DISTANCE));
            Ok(())
        }
        (None, None, None) => Ok(()),
        (_, _, Some(sort)) if sort != SORT_DISTANCE => Err(Error::validation(
            "query parameter 'sort' did not have a valid value",
        )),
        _ => Err(Error::validation(
            "both latitude and longitude must be provided as numbers, along with sort set to 'distance'",
        )),
    }
}
