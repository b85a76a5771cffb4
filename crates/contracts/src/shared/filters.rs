use serde::{Deserialize, Serialize};

use crate::domain::a001_city::aggregate::City;
use crate::domain::a002_facility::aggregate::Facility;
use crate::shared::cascade::{default_city, derive_facility_selection, facilities_in_city};
use crate::shared::i18n::MessageKey;

/// Purchase-order type tag of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Normal,
    Urgent,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Normal => "normal",
            OrderType::Urgent => "urgent",
        }
    }

    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(OrderType::Normal),
            "urgent" => Some(OrderType::Urgent),
            _ => None,
        }
    }

    pub fn all() -> [OrderType; 2] {
        [OrderType::Normal, OrderType::Urgent]
    }

    /// Value of the `purchaseOrderType` query parameter.
    pub fn purchase_order_type(&self) -> u8 {
        match self {
            OrderType::Normal => 0,
            OrderType::Urgent => 1,
        }
    }

    pub fn label_key(&self) -> MessageKey {
        match self {
            OrderType::Normal => MessageKey::NormalOrder,
            OrderType::Urgent => MessageKey::UrgentOrder,
        }
    }
}

/// Filter bar state of the purchase-order page.
///
/// `facility` is either empty or names a facility of `city` in the current
/// facility list. Vendor and date are independent of the cascade and are
/// never reset by it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    pub city: String,
    pub facility: String,
    pub order_type: OrderType,
    pub vendor: String,
    /// `datetime-local` value, `yyyy-MM-ddTHH:mm`.
    pub date: String,
}

impl FilterSelection {
    pub fn new(date: String) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Re-run default selection after either reference list (re)loaded.
    pub fn apply_reference_data(&mut self, cities: &[City], facilities: &[Facility]) {
        if self.city.is_empty() {
            if let Some(city) = default_city(cities) {
                self.city = city.name.clone();
            }
        }
        self.facility = derive_facility_selection(facilities, &self.city, &self.facility);
    }

    pub fn select_city(&mut self, city: &str, facilities: &[Facility]) {
        self.city = city.to_string();
        self.facility = derive_facility_selection(facilities, &self.city, &self.facility);
    }

    /// Accepts only facilities of the selected city; returns whether the
    /// selection changed.
    pub fn select_facility(&mut self, name: &str, facilities: &[Facility]) -> bool {
        let allowed = facilities_in_city(facilities, &self.city)
            .iter()
            .any(|f| f.name == name);
        if allowed && self.facility != name {
            self.facility = name.to_string();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cascade::fixtures::{city, facility};

    fn lists() -> (Vec<City>, Vec<Facility>) {
        (
            vec![city(1, "Bengaluru"), city(2, "Chennai")],
            vec![
                facility(1, "BLR_Main_FC", "Bengaluru", true),
                facility(2, "CHN_Old_DC", "Chennai", false),
                facility(3, "B2C_Chennai_FK_FC", "Chennai", true),
            ],
        )
    }

    #[test]
    fn test_order_type_mapping() {
        assert_eq!(OrderType::Normal.purchase_order_type(), 0);
        assert_eq!(OrderType::Urgent.purchase_order_type(), 1);
        for t in OrderType::all() {
            assert_eq!(OrderType::from_tag(t.as_str()), Some(t));
        }
        assert_eq!(OrderType::from_tag("rush"), None);
    }

    #[test]
    fn test_reference_data_defaults() {
        let (cities, facilities) = lists();
        let mut filters = FilterSelection::new("2024-01-20T10:00".into());
        filters.apply_reference_data(&cities, &facilities);
        assert_eq!(filters.city, "Chennai");
        assert_eq!(filters.facility, "B2C_Chennai_FK_FC");
        assert_eq!(filters.order_type, OrderType::Normal);
    }

    #[test]
    fn test_cities_before_facilities() {
        let (cities, facilities) = lists();
        let mut filters = FilterSelection::default();
        filters.apply_reference_data(&cities, &[]);
        assert_eq!(filters.city, "Chennai");
        assert_eq!(filters.facility, "");
        filters.apply_reference_data(&cities, &facilities);
        assert_eq!(filters.facility, "B2C_Chennai_FK_FC");
    }

    #[test]
    fn test_user_city_survives_reload() {
        let (cities, facilities) = lists();
        let mut filters = FilterSelection::default();
        filters.apply_reference_data(&cities, &facilities);
        filters.select_city("Bengaluru", &facilities);
        filters.apply_reference_data(&cities, &facilities);
        assert_eq!(filters.city, "Bengaluru");
        assert_eq!(filters.facility, "BLR_Main_FC");
    }

    #[test]
    fn test_city_change_keeps_vendor_and_date() {
        let (cities, facilities) = lists();
        let mut filters = FilterSelection::new("2024-01-20T10:00".into());
        filters.apply_reference_data(&cities, &facilities);
        filters.vendor = "fresh".into();
        filters.select_city("Bengaluru", &facilities);
        assert_eq!(filters.facility, "BLR_Main_FC");
        assert_eq!(filters.vendor, "fresh");
        assert_eq!(filters.date, "2024-01-20T10:00");
    }

    #[test]
    fn test_select_facility_rejects_other_city() {
        let (cities, facilities) = lists();
        let mut filters = FilterSelection::default();
        filters.apply_reference_data(&cities, &facilities);
        assert!(!filters.select_facility("BLR_Main_FC", &facilities));
        assert_eq!(filters.facility, "B2C_Chennai_FK_FC");
        assert!(filters.select_facility("CHN_Old_DC", &facilities));
        assert_eq!(filters.facility, "CHN_Old_DC");
    }
}
