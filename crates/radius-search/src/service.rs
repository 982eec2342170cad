//! Search orchestration: wires the CRM client, geocoder, snapshot cache, key
//! ring, and ranker into a single `search` operation.

use radius_core::{Address, AppConfig, Coordinate, Record};
use radius_crm::CrmClient;
use radius_geocode::{GeocodeStatus, GeocoderClient};
use radius_rank::rank_by_distance;

use crate::cache::SnapshotCache;
use crate::error::SearchError;
use crate::keyring::KeyRing;

/// Result of one completed search: the geocoded centre point and the cached
/// records nearest to it, ascending by distance.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub centre: Coordinate,
    pub ranked: Vec<Record>,
}

/// Owns the record snapshot, the provisioned API key, and the current result
/// set.
///
/// All mutation goes through `&mut self`, so overlapping searches cannot
/// interleave writes to the session state. Startup work is tracked: a search
/// is refused with [`SearchError::NotReady`] until both the record load and
/// the key provisioning have completed.
pub struct SearchService {
    crm: CrmClient,
    geocoder: GeocoderClient,
    cache: SnapshotCache,
    keys: KeyRing,
    entity: String,
    api_key: Option<String>,
    records_ready: bool,
    last_results: Vec<Record>,
}

impl SearchService {
    /// Builds the service from configuration. No I/O happens until
    /// [`SearchService::start`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Crm`] or [`SearchError::Geocode`] if either
    /// HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SearchError> {
        let crm = CrmClient::with_base_url(&config.crm_base_url, config.request_timeout_secs)?;
        let geocoder =
            GeocoderClient::with_base_url(&config.geocode_base_url, config.request_timeout_secs)?;

        Ok(Self {
            crm,
            geocoder,
            cache: SnapshotCache::new(),
            keys: KeyRing::new(config.key_variables.clone()),
            entity: config.record_entity.clone(),
            api_key: None,
            records_ready: false,
            last_results: Vec::new(),
        })
    }

    /// Runs the two startup tasks — the one-shot record snapshot fetch and
    /// primary key provisioning — concurrently, and records their completion
    /// so [`SearchService::search`] can refuse to run against an empty cache
    /// or key.
    ///
    /// # Errors
    ///
    /// - [`SearchError::KeysExhausted`] if no key variable names are
    ///   configured.
    /// - [`SearchError::Crm`] if either fetch fails.
    /// - [`SearchError::Snapshot`] if the snapshot cannot be serialized.
    pub async fn start(&mut self) -> Result<(), SearchError> {
        let primary = self.keys.next_name().ok_or(SearchError::KeysExhausted)?;

        let records = self.crm.fetch_all_records(&self.entity, 1);
        let key = self.crm.get_org_variable(&primary);
        let (records, key) = tokio::join!(records, key);

        self.cache.store(&records?)?;
        self.records_ready = true;
        self.api_key = Some(key?);
        tracing::info!(entity = %self.entity, "search service ready");
        Ok(())
    }

    /// True once the record snapshot and an API key are both in place.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.records_ready && self.api_key.is_some()
    }

    /// Runs one search: geocode the address, rotate the API key on quota
    /// exhaustion, rank the cached records by distance, and store the ranked
    /// subset as the current result set.
    ///
    /// On quota exhaustion the next key in the ring is provisioned for
    /// subsequent searches; the current geocode result is still what this
    /// round proceeds with.
    ///
    /// # Errors
    ///
    /// - [`SearchError::NotReady`] before [`SearchService::start`] completes.
    /// - [`SearchError::KeysExhausted`] on quota exhaustion with no fallback
    ///   name left.
    /// - [`SearchError::EmptyCache`] / [`SearchError::NoCoordinates`] per the
    ///   missing-data taxonomy; both leave the previous results untouched.
    /// - [`SearchError::Geocode`] / [`SearchError::Crm`] on transport faults.
    pub async fn search(&mut self, address: &Address) -> Result<SearchOutcome, SearchError> {
        let Some(api_key) = self.api_key.clone() else {
            return Err(SearchError::NotReady);
        };
        if !self.records_ready {
            return Err(SearchError::NotReady);
        }

        let geocode = self.geocoder.geocode(address, &api_key).await?;

        if geocode.is_over_quota() {
            let fallback = self.keys.next_name().ok_or(SearchError::KeysExhausted)?;
            tracing::warn!(variable = %fallback, "geocode quota exceeded, rotating API key");
            self.api_key = Some(self.crm.get_org_variable(&fallback).await?);
        }

        let records = self.cache.load()?.ok_or(SearchError::EmptyCache)?;
        let centre = match (geocode.status, geocode.coordinates) {
            (GeocodeStatus::Success, Some(centre)) => centre,
            _ => return Err(SearchError::NoCoordinates),
        };

        let ranked = rank_by_distance(centre, records);
        self.last_results.clone_from(&ranked);
        Ok(SearchOutcome { centre, ranked })
    }

    /// Returns cached records located in the given US state, matching either
    /// the two-letter code or the full state name, case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidState`] for an unrecognised code.
    /// - [`SearchError::EmptyCache`] if no snapshot has been stored.
    pub fn filter_by_state(&self, code: &str) -> Result<Vec<Record>, SearchError> {
        let name = radius_core::states::state_name(code)
            .ok_or_else(|| SearchError::InvalidState(code.to_owned()))?;
        let records = self.cache.load()?.ok_or(SearchError::EmptyCache)?;
        Ok(records
            .into_iter()
            .filter(|record| {
                record.state.eq_ignore_ascii_case(code) || record.state.eq_ignore_ascii_case(name)
            })
            .collect())
    }

    /// The ranked subset from the most recent successful search.
    #[must_use]
    pub fn last_results(&self) -> &[Record] {
        &self.last_results
    }
}
