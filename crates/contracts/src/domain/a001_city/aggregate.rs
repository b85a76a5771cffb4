use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::null_as_default;

/// City reference record from `GET /city`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub language_id: Option<i64>,
    #[serde(default)]
    pub city_type: Option<i64>,
}

/// Id of the city with exactly this name.
pub fn resolve_city_id(cities: &[City], name: &str) -> Option<i64> {
    if name.is_empty() {
        return None;
    }
    cities.iter().find(|c| c.name == name).map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_list() {
        let cities: Vec<City> = serde_json::from_str(
            r#"[{"id":1,"name":"Chennai","languageId":1,"cityType":1},{"id":2,"name":"Bengaluru"}]"#,
        )
        .unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].language_id, Some(1));
        assert_eq!(cities[1].city_type, None);
        assert_eq!(resolve_city_id(&cities, "Bengaluru"), Some(2));
        assert_eq!(resolve_city_id(&cities, "bengaluru"), None);
        assert_eq!(resolve_city_id(&cities, ""), None);
    }

    #[test]
    fn test_parse_city_with_null_fields() {
        let cities: Vec<City> =
            serde_json::from_str(r#"[{"id":3,"name":null,"languageId":null},{"name":"Hyderabad"}]"#)
                .unwrap();
        assert_eq!(cities[0].id, 3);
        assert_eq!(cities[0].name, "");
        assert_eq!(cities[0].language_id, None);
        assert_eq!(cities[1].id, 0);
        assert_eq!(resolve_city_id(&cities, "Hyderabad"), Some(0));
    }
}
