//! City → facility cascade.
//!
//! Pure derivations over the reference lists; the UI calls them synchronously
//! whenever the city, the lists or the search text change.

use crate::domain::a001_city::aggregate::City;
use crate::domain::a002_facility::aggregate::Facility;

/// Substring (case-insensitive) of the city chosen by default.
pub const DEFAULT_CITY_HINT: &str = "chennai";

/// First city whose name contains [`DEFAULT_CITY_HINT`], else the first city.
pub fn default_city(cities: &[City]) -> Option<&City> {
    cities
        .iter()
        .find(|c| c.name.to_lowercase().contains(DEFAULT_CITY_HINT))
        .or_else(|| cities.first())
}

/// Facilities of the selected city; the full list when no city is selected.
pub fn facilities_in_city<'a>(facilities: &'a [Facility], city: &str) -> Vec<&'a Facility> {
    facilities
        .iter()
        .filter(|f| city.is_empty() || f.city.name == city)
        .collect()
}

/// Options shown in the facility select: the city-filtered set narrowed by
/// a case-insensitive name search.
pub fn visible_facilities<'a>(
    facilities: &'a [Facility],
    city: &str,
    search: &str,
) -> Vec<&'a Facility> {
    let needle = search.trim().to_lowercase();
    facilities_in_city(facilities, city)
        .into_iter()
        .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .collect()
}

/// Facility selection after the city-filtered set changed.
///
/// A prior selection still present in the set is kept. Otherwise the first
/// active facility wins, then the first facility; an empty set clears the
/// selection. The search text is deliberately not an input.
pub fn derive_facility_selection(facilities: &[Facility], city: &str, prior: &str) -> String {
    let candidates = facilities_in_city(facilities, city);

    if !prior.is_empty() && candidates.iter().any(|f| f.name == prior) {
        return prior.to_string();
    }

    candidates
        .iter()
        .find(|f| f.is_active())
        .or_else(|| candidates.first())
        .map(|f| f.name.clone())
        .unwrap_or_default()
}
