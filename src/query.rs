// Maps the selected criterion + typed value to search request parameters

use serde::Serialize;

use crate::models::SearchCriterion;

/// Query string parameters for `GET /api/catalog/vehicles/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameters {
    pub criteria: String,
    pub value: String,
}

/// Pairs criterion and value without transformation or validation.
///
/// Percent-encoding happens later in the HTTP client; this never fails, even
/// for an empty value or an unknown criterion.
pub fn build_query(criterion: &SearchCriterion, value: &str) -> QueryParameters {
    QueryParameters {
        criteria: criterion.as_str().to_string(),
        value: value.to_string(),
    }
}
