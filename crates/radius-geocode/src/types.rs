//! Geocoding provider wire types and the caller-facing result.
//!
//! The provider responds with `{"status": "...", "results": [...]}` where each
//! result carries a `geometry.location.{lat,lng}`. Only the first result is
//! ever used.

use radius_core::Coordinate;
use serde::Deserialize;

/// Provider status string reported when the current API key has exhausted its
/// usage allowance.
pub const OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";

/// Top-level geocoding response envelope.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeHit>,
}

/// A single geocoding match.
#[derive(Debug, Deserialize)]
pub struct GeocodeHit {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Whether the provider resolved the address at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeStatus {
    Success,
    Failed,
}

/// Outcome of a single geocode call. Transient — produced per search, never
/// persisted.
#[derive(Debug, Clone)]
pub struct GeocodeResult {
    /// First result's coordinates; absent when the provider returned nothing.
    pub coordinates: Option<Coordinate>,
    pub status: GeocodeStatus,
    /// Raw provider status string (`"OK"`, `"ZERO_RESULTS"`,
    /// `"OVER_QUERY_LIMIT"`, ...), passed through for the orchestrator to
    /// detect quota exhaustion.
    pub provider_status: String,
    pub message: Option<String>,
}

impl GeocodeResult {
    /// True when the provider reported the current API key as over quota.
    #[must_use]
    pub fn is_over_quota(&self) -> bool {
        self.provider_status == OVER_QUERY_LIMIT
    }
}
