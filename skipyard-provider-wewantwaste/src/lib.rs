//! Skip listing source backed by the We Want Waste by-location API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use skipyard_core::{
    model::{Location, RawSkip},
    ports::{SkipSource, SourceError},
};

/// Endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";

/// Listing source for the by-location endpoint.
pub struct WeWantWasteSource {
    client: Client,
    base_url: String,
}

impl WeWantWasteSource {
    /// Create a source bound to the given HTTP client and the default endpoint.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, DEFAULT_BASE_URL)
    }

    /// Create a source bound to the given HTTP client and endpoint.
    #[must_use]
    pub fn with_base_url<U: Into<String>>(client: Client, base_url: U) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Endpoint the source queries.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, location: &Location) -> RequestBuilder {
        self.client.get(&self.base_url).query(&[
            ("postcode", location.postcode.as_str()),
            ("area", location.area.as_str()),
        ])
    }
}

#[async_trait]
impl SkipSource for WeWantWasteSource {
    fn name(&self) -> &str {
        "wewantwaste"
    }

    async fn fetch(&self, location: &Location) -> Result<Vec<RawSkip>, SourceError> {
        debug!(url = %self.base_url, %location, "requesting skip listings");
        let listings = fetch_json::<Vec<RawSkip>>(self.request(location)).await?;
        debug!(count = listings.len(), "received skip listings");
        Ok(listings)
    }
}

/// Build a shared source, optionally overriding the endpoint.
#[must_use]
pub fn source(client: Client, base_url: Option<&str>) -> Arc<dyn SkipSource> {
    let base_url = base_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    Arc::new(WeWantWasteSource::with_base_url(client, base_url))
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, SourceError> {
    let resp = req.send().await.map_err(SourceError::from)?;

    let status = resp.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "skip source returned an error status");
        return Err(SourceError::Status(status.as_u16()));
    }

    resp.json().await.map_err(|err| {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Network(err)
        }
    })
}
