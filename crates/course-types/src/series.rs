//! Ordered key/value series.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An insertion-ordered mapping from label to value.
///
/// Serializes as a JSON object whose keys keep this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series<V> {
    entries: Vec<(String, V)>,
}

impl<V> Series<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry without checking for an existing key.
    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.entries.push((key.into(), value));
    }

    /// Set the value for a key, keeping its original position if present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for a label, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> FromIterator<(String, V)> for Series<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V: Serialize> Serialize for Series<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_preserves_order() {
        let mut series = Series::new();
        series.push("zeta", 1u64);
        series.push("alpha", 2u64);
        assert_eq!(series.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(series.get("alpha"), Some(&2));
        assert_eq!(series.get("missing"), None);
    }

    #[test]
    fn test_series_insert_replaces_in_place() {
        let mut series = Series::new();
        series.insert("first", 1u64);
        series.insert("second", 2u64);
        series.insert("first", 3u64);
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.iter().collect::<Vec<_>>(),
            vec![("first", &3), ("second", &2)]
        );
    }

    #[test]
    fn test_series_serializes_as_ordered_object() {
        let series: Series<u64> = vec![("b".to_string(), 1), ("a".to_string(), 2)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"b":1,"a":2}"#);
    }
}
