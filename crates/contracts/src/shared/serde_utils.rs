//! Serde helpers for loosely typed upstream payloads.

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as `T::default()`.
///
/// `#[serde(default)]` covers missing keys only; upstream records also send
/// `null` for lists, names and nested records.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        items: Vec<i64>,
    }

    #[test]
    fn test_null_as_default() {
        let record: Record = serde_json::from_str(r#"{"name":null,"items":null}"#).unwrap();
        assert_eq!(record.name, "");
        assert!(record.items.is_empty());

        let record: Record = serde_json::from_str(r#"{"name":"Chennai","items":[1,2]}"#).unwrap();
        assert_eq!(record.name, "Chennai");
        assert_eq!(record.items, vec![1, 2]);

        let record: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(record.name, "");
    }
}
