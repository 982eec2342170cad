//! CRM API wire types.
//!
//! The record API pages with `{"data": [...], "info": {"more_records": bool}}`;
//! the key-value configuration store answers with either
//! `{"Success": {"Content": ...}}` or `{"Error": {"Content": ...}}`.

use serde::Deserialize;

/// One page of the record store response.
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    #[serde(default)]
    pub data: Vec<RawRecord>,
    pub info: PageInfo,
}

/// Pagination continuation flag; the fetch loop trusts it completely.
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    pub more_records: bool,
}

/// A record exactly as the CRM returns it, before the keep/drop filter.
///
/// Field names follow the CRM's `Pascal_Snake` convention; latitude and
/// longitude arrive as strings and are parsed during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
    #[serde(rename = "Availability", default)]
    pub availability: Option<String>,
    #[serde(rename = "Base_Rate", default)]
    pub base_rate: Option<f64>,
    #[serde(rename = "Current_Status", default)]
    pub current_status: Option<String>,
    #[serde(rename = "Street", default)]
    pub street: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "State", default)]
    pub state: Option<String>,
    #[serde(rename = "Zip", default)]
    pub zip: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub latitude: Option<String>,
    #[serde(rename = "Longitude", default)]
    pub longitude: Option<String>,
}

/// Envelope for an organization variable lookup.
#[derive(Debug, Deserialize)]
pub struct VariableResponse {
    #[serde(rename = "Success", default)]
    pub success: Option<VariableContent>,
    #[serde(rename = "Error", default)]
    pub error: Option<VariableContent>,
}

#[derive(Debug, Deserialize)]
pub struct VariableContent {
    #[serde(rename = "Content")]
    pub content: String,
}
