//! Domain types shared across the workspace.

use serde::{Deserialize, Serialize};

/// A user-entered postal address. Immutable once submitted for a search.
///
/// `zip` is optional; [`Address::new`] treats an empty string as absent so the
/// rendered query line never carries a trailing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
}

impl Address {
    #[must_use]
    pub fn new(street: &str, city: &str, state: &str, zip: &str) -> Self {
        Self {
            street: street.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            zip: if zip.is_empty() {
                None
            } else {
                Some(zip.to_owned())
            },
        }
    }

    /// Renders the address as a single comma-separated line for the geocoding
    /// provider: `"Street, City, State"`, with `", Zip"` appended when present.
    #[must_use]
    pub fn query_string(&self) -> String {
        match &self.zip {
            Some(zip) => format!("{}, {}, {}, {}", self.street, self.city, self.state, zip),
            None => format!("{}, {}, {}", self.street, self.city, self.state),
        }
    }
}

/// A point on the globe in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Anything that sits at a [`Coordinate`] and can therefore be distance-ranked.
pub trait Positioned {
    fn position(&self) -> Coordinate;
}

impl Positioned for Coordinate {
    fn position(&self) -> Coordinate {
        *self
    }
}

/// A candidate service provider from the CRM record store.
///
/// Only records that passed the keep/drop filter become a `Record`: street,
/// city, state, and both coordinate components are always present, and
/// `address` is the derived single-line display form. Serialized as JSON into
/// the snapshot cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub availability: Option<String>,
    pub base_rate: Option<f64>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: Option<String>,
    /// Single-line display address: `"Street, City, State[, Zip]"`.
    pub address: String,
    pub position: Coordinate,
}

impl Positioned for Record {
    fn position(&self) -> Coordinate {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_joins_all_four_fields() {
        let address = Address::new("7450 Cypress Gardens Blvd", "Winter Haven", "FL", "33884");
        assert_eq!(
            address.query_string(),
            "7450 Cypress Gardens Blvd, Winter Haven, FL, 33884"
        );
    }

    #[test]
    fn query_string_omits_empty_zip() {
        let address = Address::new("1 Main St", "X", "FL", "");
        assert_eq!(address.query_string(), "1 Main St, X, FL");
    }

    #[test]
    fn empty_zip_is_absent() {
        let address = Address::new("1 Main St", "X", "FL", "");
        assert!(address.zip.is_none());
    }
}
