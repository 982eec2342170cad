pub mod client;
pub mod error;
pub mod records;
pub mod types;

pub use client::{CrmClient, PAGE_SIZE};
pub use error::CrmError;
pub use records::normalize_record;
pub use types::{RawRecord, RecordsResponse};
