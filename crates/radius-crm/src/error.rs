use thiserror::Error;

/// Errors returned by the CRM API client.
#[derive(Debug, Error)]
pub enum CrmError {
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

    /// The key-value store reported an error for the named organization
    /// variable, or the response carried neither branch of the envelope.
    #[error("organization variable \"{name}\": {message}")]
    Variable { name: String, message: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
