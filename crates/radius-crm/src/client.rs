//! HTTP client for the CRM data and configuration APIs.
//!
//! Wraps `reqwest` with CRM-specific error handling and typed response
//! deserialization. Every operation first ensures the embedded-application
//! session handshake has run; the handshake happens at most once per client.

use std::time::Duration;

use reqwest::{Client, Url};
use tokio::sync::OnceCell;

use crate::error::CrmError;
use crate::types::{RecordsResponse, VariableResponse};

/// Records fetched per page of the record store API.
pub const PAGE_SIZE: u32 = 200;

/// Client for the CRM record store and key-value configuration store.
///
/// Use [`CrmClient::new`] for production or [`CrmClient::with_base_url`] to
/// point at a mock server in tests.
pub struct CrmClient {
    client: Client,
    base_url: Url,
    session: OnceCell<()>,
}

impl CrmClient {
    /// Creates a new client for the CRM API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`CrmError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, CrmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("radius/0.1 (proximity-search)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joins append path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CrmError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            session: OnceCell::new(),
        })
    }

    /// Alias of [`CrmClient::new`] for symmetry with the geocoder client in
    /// test setups.
    ///
    /// # Errors
    ///
    /// Same as [`CrmClient::new`].
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, CrmError> {
        Self::new(base_url, timeout_secs)
    }

    /// Fetches one page of records for `entity`.
    ///
    /// # Errors
    ///
    /// - [`CrmError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CrmError::Deserialize`] if the response does not match the expected
    ///   shape.
    pub async fn get_records_page(
        &self,
        entity: &str,
        page: u32,
    ) -> Result<RecordsResponse, CrmError> {
        self.ensure_session().await?;

        let mut url = self.join("records")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("entity", entity);
            pairs.append_pair("page", &page.to_string());
            pairs.append_pair("per_page", &PAGE_SIZE.to_string());
        }

        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| CrmError::Deserialize {
            context: format!("records(entity={entity}, page={page})"),
            source: e,
        })
    }

    /// Reads a named organization-level variable from the key-value
    /// configuration store.
    ///
    /// # Errors
    ///
    /// - [`CrmError::Variable`] if the store answered with its `Error`
    ///   envelope, or with neither envelope branch.
    /// - [`CrmError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CrmError::Deserialize`] if the response does not match the expected
    ///   shape.
    pub async fn get_org_variable(&self, name: &str) -> Result<String, CrmError> {
        self.ensure_session().await?;

        let url = self.join(&format!("variables/{name}"))?;
        let body = self.request_json(&url).await?;
        let response: VariableResponse =
            serde_json::from_value(body).map_err(|e| CrmError::Deserialize {
                context: format!("variables({name})"),
                source: e,
            })?;

        if let Some(error) = response.error {
            return Err(CrmError::Variable {
                name: name.to_owned(),
                message: error.content,
            });
        }
        response
            .success
            .map(|success| success.content)
            .ok_or_else(|| CrmError::Variable {
                name: name.to_owned(),
                message: "response carried neither Success nor Error".to_owned(),
            })
    }

    /// Runs the embedded-application session handshake exactly once per
    /// client. Subsequent calls are no-ops.
    async fn ensure_session(&self) -> Result<(), CrmError> {
        self.session
            .get_or_try_init(|| async {
                let url = self.join("session")?;
                self.client
                    .post(url)
                    .send()
                    .await?
                    .error_for_status()?;
                tracing::debug!("CRM session initialised");
                Ok::<(), CrmError>(())
            })
            .await?;
        Ok(())
    }

    fn join(&self, path: &str) -> Result<Url, CrmError> {
        self.base_url.join(path).map_err(|e| CrmError::InvalidBaseUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Http`] on network failure or a non-2xx status.
    /// Returns [`CrmError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, CrmError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CrmError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
