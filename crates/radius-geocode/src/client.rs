//! HTTP client for the geocoding provider.
//!
//! Wraps `reqwest` with typed response deserialization. Provider-level
//! conditions (zero results, quota exhaustion) are returned inside
//! [`GeocodeResult`], never as `Err` — the orchestrator owns that branching.

use std::time::Duration;

use reqwest::{Client, Url};

use radius_core::{Address, Coordinate};

use crate::error::GeocodeError;
use crate::types::{GeocodeResponse, GeocodeResult, GeocodeStatus};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const NO_COORDINATES_MESSAGE: &str = "Unable to fetch coordinates.";

/// Client for the geocoding HTTP API.
///
/// Holds the HTTP client and base URL only; the API key is passed per call
/// because the orchestrator rotates keys between searches.
pub struct GeocoderClient {
    client: Client,
    base_url: Url,
}

impl GeocoderClient {
    /// Creates a new client pointed at the production geocoding endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("radius/0.1 (proximity-search)")
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Resolves a postal address to coordinates with the given API key.
    ///
    /// A response with at least one result maps to [`GeocodeStatus::Success`]
    /// and the first result's lat/lng; zero results map to
    /// [`GeocodeStatus::Failed`] with no coordinates. Quota exhaustion is NOT
    /// an error: the provider status string is passed through and callers
    /// check [`GeocodeResult::is_over_quota`].
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(
        &self,
        address: &Address,
        api_key: &str,
    ) -> Result<GeocodeResult, GeocodeError> {
        let url = self.build_url(address, api_key);
        let body = self.request_json(&url).await?;

        let response: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("geocode({})", address.query_string()),
                source: e,
            })?;

        if let Some(first) = response.results.first() {
            return Ok(GeocodeResult {
                coordinates: Some(Coordinate {
                    latitude: first.geometry.location.lat,
                    longitude: first.geometry.location.lng,
                }),
                status: GeocodeStatus::Success,
                provider_status: response.status,
                message: None,
            });
        }

        tracing::debug!(
            address = %address.query_string(),
            provider_status = %response.status,
            "geocode returned no results"
        );
        Ok(GeocodeResult {
            coordinates: None,
            status: GeocodeStatus::Failed,
            provider_status: response.status,
            message: Some(NO_COORDINATES_MESSAGE.to_owned()),
        })
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, address: &Address, api_key: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("address", &address.query_string());
            pairs.append_pair("key", api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] on network failure or a non-2xx status.
    /// Returns [`GeocodeError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, GeocodeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
