use serde::{Deserialize, Serialize};

use crate::domain::a001_city::aggregate::City;
use crate::shared::serde_utils::null_as_default;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityType {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deleted: i64,
}

/// Facility reference record from `GET /facility`.
///
/// `active_status = 0` marks an inactive facility; it is labelled in the UI
/// but stays selectable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facility {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: City,
    pub facility_type: Option<FacilityType>,
    pub parent_facility_id: Option<i64>,
    pub short_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub deleted: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub active_status: i64,
    pub cluster_id: Option<i64>,
}

impl Facility {
    pub fn is_active(&self) -> bool {
        self.active_status == 1
    }
}

/// Id of the named facility, looked up within the given city when one is set.
pub fn resolve_facility_id(facilities: &[Facility], city: &str, name: &str) -> Option<i64> {
    if name.is_empty() {
        return None;
    }
    facilities
        .iter()
        .find(|f| f.name == name && (city.is_empty() || f.city.name == city))
        .map(|f| f.id)
}
