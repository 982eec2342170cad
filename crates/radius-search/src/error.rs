use thiserror::Error;

/// Errors returned by the search orchestrator.
///
/// Typed values rather than user-facing notifications: the caller decides how
/// to surface them. A failed search always leaves the previous result set
/// untouched.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A search was triggered before the startup tasks completed.
    #[error("search service startup has not completed")]
    NotReady,

    /// The geocoder produced no coordinates for the entered address.
    #[error("unable to get address coordinates")]
    NoCoordinates,

    /// The snapshot cache holds no record set.
    #[error("no cached records available")]
    EmptyCache,

    /// Quota exhaustion with no fallback key name left in the rotation.
    #[error("no fallback API key remaining in the rotation")]
    KeysExhausted,

    #[error("invalid state code: {0}")]
    InvalidState(String),

    /// The cached snapshot could not be (de)serialized.
    #[error("snapshot serialization: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("geocoding failed: {0}")]
    Geocode(#[from] radius_geocode::GeocodeError),

    #[error("CRM request failed: {0}")]
    Crm(#[from] radius_crm::CrmError),
}
