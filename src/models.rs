// Data structures shared between the catalog client, the view and the routes

use serde::{Deserialize, Serialize};
use std::fmt;

// Opaque record key; the service may use numbers or strings (e.g. UUIDs)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum VehicleId {
    Number(i64),
    Text(String),
}

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        VehicleId::Number(id)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleId::Number(id) => write!(f, "{id}"),
            VehicleId::Text(id) => f.write_str(id),
        }
    }
}

// A single inventory record as returned by the catalog service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")] // Match the service's JSON keys
pub struct Vehicle {
    pub id: VehicleId,
    pub model: String,
    pub brand: String,
    #[serde(rename = "type")] // `type` is a keyword
    pub vehicle_type: String,
    pub fuel_type: String,
    pub base_price: f64,
    pub is_on_sale: bool,
}

/// Which record attribute a search targets.
///
/// Anything outside the three known attributes is kept verbatim in `Other`;
/// the catalog service decides whether to reject it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchCriterion {
    #[default]
    Type,
    Brand,
    FuelType,
    Other(String),
}

impl SearchCriterion {
    // The options offered by the criterion selector, in display order
    pub const SELECTABLE: [SearchCriterion; 3] = [
        SearchCriterion::Type,
        SearchCriterion::Brand,
        SearchCriterion::FuelType,
    ];

    /// Name used on the wire (`criteria=` query parameter).
    pub fn as_str(&self) -> &str {
        match self {
            SearchCriterion::Type => "type",
            SearchCriterion::Brand => "brand",
            SearchCriterion::FuelType => "fuelType",
            SearchCriterion::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SearchCriterion::Type => "Type",
            SearchCriterion::Brand => "Brand",
            SearchCriterion::FuelType => "Fuel Type",
            SearchCriterion::Other(raw) => raw,
        }
    }
}

impl From<String> for SearchCriterion {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "type" => SearchCriterion::Type,
            "brand" => SearchCriterion::Brand,
            "fuelType" => SearchCriterion::FuelType,
            _ => SearchCriterion::Other(raw),
        }
    }
}

impl From<&str> for SearchCriterion {
    fn from(raw: &str) -> Self {
        SearchCriterion::from(raw.to_string())
    }
}

impl From<SearchCriterion> for String {
    fn from(criterion: SearchCriterion) -> Self {
        match criterion {
            SearchCriterion::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Search form submitted from the catalog page
#[derive(Debug, Deserialize, Clone)]
pub struct SearchForm {
    // Field names must match the 'name' attributes in the HTML form
    #[serde(default)]
    pub criteria: SearchCriterion,
    #[serde(default)]
    pub value: String,
}
