/// Application configuration assembled from environment variables.
///
/// Holds no secrets: the maps API keys live in the CRM's key-value store and
/// are provisioned at runtime, never through the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the CRM data/configuration API.
    pub crm_base_url: String,
    /// Base URL of the geocoding provider.
    pub geocode_base_url: String,
    /// CRM entity name for the record store fetch.
    pub record_entity: String,
    /// Ordered CRM variable names holding maps API keys; rotation order.
    pub key_variables: Vec<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
}
