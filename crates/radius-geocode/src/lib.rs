pub mod client;
pub mod error;
pub mod types;

pub use client::GeocoderClient;
pub use error::GeocodeError;
pub use types::{GeocodeResult, GeocodeStatus, OVER_QUERY_LIMIT};
