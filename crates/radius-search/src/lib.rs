pub mod cache;
pub mod error;
pub mod keyring;
pub mod service;

pub use cache::SnapshotCache;
pub use error::SearchError;
pub use keyring::KeyRing;
pub use service::{SearchOutcome, SearchService};
