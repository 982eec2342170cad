use thiserror::Error;

/// Errors returned by the geocoding client.
///
/// Provider-reported conditions (zero results, quota exhaustion) are not
/// errors — they come back inside [`crate::GeocodeResult`] for the caller to
/// branch on. Only transport and decoding faults surface here.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
