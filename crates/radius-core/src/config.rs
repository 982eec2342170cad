use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_KEY_VARIABLES: &str = "googleMapsApiKey1,googleMapsApiKey2";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let crm_base_url = require("RADIUS_CRM_BASE_URL")?;
    let geocode_base_url = or_default("RADIUS_GEOCODE_BASE_URL", DEFAULT_GEOCODE_BASE_URL);
    let record_entity = or_default("RADIUS_RECORD_ENTITY", "Service_Provider");
    let log_level = or_default("RADIUS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("RADIUS_REQUEST_TIMEOUT_SECS", "30")?;

    let key_variables: Vec<String> = or_default("RADIUS_KEY_VARIABLES", DEFAULT_KEY_VARIABLES)
        .split(',')
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect();
    if key_variables.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "RADIUS_KEY_VARIABLES".to_string(),
            reason: "no variable names configured".to_string(),
        });
    }

    Ok(AppConfig {
        crm_base_url,
        geocode_base_url,
        record_entity,
        key_variables,
        request_timeout_secs,
        log_level,
    })
}
