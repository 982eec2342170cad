//! Record store access: the fetch-all pagination loop and the keep/drop
//! filter that turns raw CRM items into canonical [`Record`]s.

use radius_core::{Coordinate, Record};

use crate::client::CrmClient;
use crate::error::CrmError;
use crate::types::RawRecord;

impl CrmClient {
    /// Fetches every record for `entity`, paginating from `start_page` until
    /// the API reports `more_records: false`. The continuation flag is trusted
    /// completely; there is no page-count upper bound.
    ///
    /// Each raw item passes through [`normalize_record`]; items that fail the
    /// keep/drop filter are compacted out of the returned sequence.
    ///
    /// **All-or-nothing semantics**: on any page failure, records from earlier
    /// pages are discarded and the error is returned — a partial snapshot
    /// would silently shrink the candidate set for every later search.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CrmClient::get_records_page`].
    pub async fn fetch_all_records(
        &self,
        entity: &str,
        start_page: u32,
    ) -> Result<Vec<Record>, CrmError> {
        let mut records: Vec<Record> = Vec::new();
        let mut page = start_page;

        loop {
            let response = self.get_records_page(entity, page).await?;
            records.extend(response.data.into_iter().filter_map(normalize_record));
            if !response.info.more_records {
                break;
            }
            page += 1;
        }

        tracing::debug!(entity, count = records.len(), "record snapshot fetched");
        Ok(records)
    }
}

/// Applies the keep/drop filter and maps a raw CRM item into a [`Record`].
///
/// Kept only if street, city, state, latitude, and longitude are all present
/// and non-empty, and `Current_Status` is not (case-insensitively)
/// `"inactive"`. Coordinate strings that fail to parse as `f64` drop the
/// record with a warning — a non-numeric position would poison the distance
/// sort downstream.
#[must_use]
pub fn normalize_record(raw: RawRecord) -> Option<Record> {
    let street = non_empty(raw.street)?;
    let city = non_empty(raw.city)?;
    let state = non_empty(raw.state)?;
    let latitude_raw = non_empty(raw.latitude)?;
    let longitude_raw = non_empty(raw.longitude)?;

    if raw
        .current_status
        .as_deref()
        .is_some_and(|status| status.eq_ignore_ascii_case("inactive"))
    {
        return None;
    }

    let (Ok(latitude), Ok(longitude)) = (
        latitude_raw.parse::<f64>(),
        longitude_raw.parse::<f64>(),
    ) else {
        tracing::warn!(
            id = %raw.id,
            latitude = %latitude_raw,
            longitude = %longitude_raw,
            "skipping record with unparseable coordinates"
        );
        return None;
    };

    let zip = raw.zip.filter(|zip| !zip.is_empty());
    let address = match &zip {
        Some(zip) => format!("{street}, {city}, {state}, {zip}"),
        None => format!("{street}, {city}, {state}"),
    };

    Some(Record {
        id: raw.id,
        name: raw.name.unwrap_or_default(),
        phone: raw.phone,
        availability: raw.availability,
        base_rate: raw.base_rate,
        street,
        city,
        state,
        zip,
        address,
        position: Coordinate {
            latitude,
            longitude,
        },
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(street: &str, city: &str, state: &str, zip: &str, lat: &str, lng: &str) -> RawRecord {
        RawRecord {
            id: "rec-1".to_owned(),
            name: Some("Acme Inspections".to_owned()),
            phone: Some("555-0100".to_owned()),
            availability: Some("Weekdays".to_owned()),
            base_rate: Some(150.0),
            current_status: Some("Active".to_owned()),
            street: Some(street.to_owned()).filter(|s| !s.is_empty()),
            city: Some(city.to_owned()).filter(|s| !s.is_empty()),
            state: Some(state.to_owned()).filter(|s| !s.is_empty()),
            zip: Some(zip.to_owned()),
            latitude: Some(lat.to_owned()).filter(|s| !s.is_empty()),
            longitude: Some(lng.to_owned()).filter(|s| !s.is_empty()),
        }
    }

    #[test]
    fn complete_record_is_kept_with_display_address() {
        let record = normalize_record(raw("1 Main St", "X", "FL", "", "28.0", "-81.0"))
            .expect("record should pass the filter");
        assert_eq!(record.address, "1 Main St, X, FL");
        assert!((record.position.latitude - 28.0).abs() < f64::EPSILON);
        assert!((record.position.longitude - -81.0).abs() < f64::EPSILON);
        assert!(record.zip.is_none());
    }

    #[test]
    fn zip_when_present_joins_display_address() {
        let record = normalize_record(raw("1 Main St", "X", "FL", "33884", "28.0", "-81.0"))
            .expect("record should pass the filter");
        assert_eq!(record.address, "1 Main St, X, FL, 33884");
        assert_eq!(record.zip.as_deref(), Some("33884"));
    }

    #[test]
    fn missing_street_is_dropped() {
        assert!(normalize_record(raw("", "X", "FL", "", "28.0", "-81.0")).is_none());
    }

    #[test]
    fn missing_coordinate_is_dropped() {
        assert!(normalize_record(raw("1 Main St", "X", "FL", "", "", "-81.0")).is_none());
        assert!(normalize_record(raw("1 Main St", "X", "FL", "", "28.0", "")).is_none());
    }

    #[test]
    fn inactive_status_is_dropped_case_insensitively() {
        let mut item = raw("1 Main St", "X", "FL", "", "28.0", "-81.0");
        item.current_status = Some("INACTIVE".to_owned());
        assert!(normalize_record(item).is_none());
    }

    #[test]
    fn missing_status_is_kept() {
        let mut item = raw("1 Main St", "X", "FL", "", "28.0", "-81.0");
        item.current_status = None;
        assert!(normalize_record(item).is_some());
    }

    #[test]
    fn unparseable_coordinates_are_dropped() {
        assert!(normalize_record(raw("1 Main St", "X", "FL", "", "north", "-81.0")).is_none());
    }
}
