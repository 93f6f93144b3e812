//! Blocking adapter over the async client
//!
//! A thin wrapper for callers without an async runtime: every method
//! drives the corresponding async query to completion on a private
//! current-thread runtime. No query logic lives here.

use crate::client::{AddressFilter, CallOptions, ClientConfig, PostcodeFilter};
use crate::error::Result;
use crate::types::Lookup;
use tokio::runtime::{Builder, Runtime};

/// Blocking client for the postcode API
#[derive(Debug)]
pub struct PostcodeClient {
    inner: crate::client::PostcodeClient,
    runtime: Runtime,
}

impl PostcodeClient {
    /// Create a blocking client with default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a blocking client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: crate::client::PostcodeClient::with_config(config),
            runtime,
        })
    }

    /// See [`crate::PostcodeClient::get_addresses`]
    pub fn get_addresses(&self, filter: &AddressFilter, options: &CallOptions) -> Result<Lookup> {
        self.runtime.block_on(self.inner.get_addresses(filter, options))
    }

    /// See [`crate::PostcodeClient::get_addresses_by_postcode_and_number`]
    pub fn get_addresses_by_postcode_and_number(
        &self,
        postcode: &str,
        number: u32,
        options: &CallOptions,
    ) -> Result<Lookup> {
        self.runtime.block_on(
            self.inner
                .get_addresses_by_postcode_and_number(postcode, number, options),
        )
    }

    /// See [`crate::PostcodeClient::get_address_by_id`]
    pub fn get_address_by_id(&self, id: &str, options: &CallOptions) -> Result<Lookup> {
        self.runtime
            .block_on(self.inner.get_address_by_id(id, options))
    }

    /// See [`crate::PostcodeClient::get_postcodes`]
    pub fn get_postcodes(&self, filter: &PostcodeFilter, options: &CallOptions) -> Result<Lookup> {
        self.runtime.block_on(self.inner.get_postcodes(filter, options))
    }

    /// See [`crate::PostcodeClient::get_postcode_area`]
    pub fn get_postcode_area(&self, postcode_area: &str, options: &CallOptions) -> Result<Lookup> {
        self.runtime
            .block_on(self.inner.get_postcode_area(postcode_area, options))
    }

    /// See [`crate::PostcodeClient::get_single_postcode`]
    pub fn get_single_postcode(&self, postcode: &str, options: &CallOptions) -> Result<Lookup> {
        self.runtime
            .block_on(self.inner.get_single_postcode(postcode, options))
    }
}
