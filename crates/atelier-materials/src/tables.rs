//! Keyed shading coefficients with an explicit fallback.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A hand-authored lookup from a material key to one shading coefficient.
///
/// Lookups never fail: a key without an entry (or a name that does not parse)
/// yields the table's fallback value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Hash + Eq",
    deserialize = "K: Deserialize<'de> + Hash + Eq"
))]
pub struct CoefficientTable<K> {
    #[serde(default = "IndexMap::new")]
    values: IndexMap<K, f32>,
    fallback: f32,
}

impl<K: Hash + Eq> CoefficientTable<K> {
    /// Create an empty table answering every lookup with `fallback`.
    pub fn new(fallback: f32) -> Self {
        Self {
            values: IndexMap::new(),
            fallback,
        }
    }

    /// Create a table from `(key, value)` pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, f32)>, fallback: f32) -> Self {
        Self {
            values: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Set the coefficient for one key.
    pub fn with(mut self, key: K, value: f32) -> Self {
        self.values.insert(key, value);
        self
    }

    /// Look up a coefficient, falling back for keys without an entry.
    pub fn lookup(&self, key: &K) -> f32 {
        self.values.get(key).copied().unwrap_or(self.fallback)
    }

    /// The value returned for keys without an entry.
    pub fn fallback(&self) -> f32 {
        self.fallback
    }

    /// Explicit entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&K, f32)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Hash + Eq> PartialEq for CoefficientTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.fallback == other.fallback
    }
}

impl<K> CoefficientTable<K>
where
    K: Hash + Eq + FromStr,
{
    /// Look up by user-facing name; unrecognized names get the fallback.
    pub fn lookup_named(&self, name: &str) -> f32 {
        match name.parse::<K>() {
            Ok(key) => self.lookup(&key),
            Err(_) => {
                log::warn!("unknown material key {name:?}, using fallback {}", self.fallback);
                self.fallback
            }
        }
    }
}

impl<K: fmt::Display> fmt::Display for CoefficientTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.values {
            write!(f, "{key}={value} ")?;
        }
        write!(f, "*={}", self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{FabricType, WoodType};

    fn roughness() -> CoefficientTable<WoodType> {
        CoefficientTable::from_entries([(WoodType::Oak, 0.55), (WoodType::Teak, 0.12)], 0.35)
    }

    #[test]
    fn test_lookup_entry() {
        let table = roughness();
        assert_eq!(table.lookup(&WoodType::Teak), 0.12);
        assert_eq!(table.lookup(&WoodType::Oak), 0.55);
    }

    #[test]
    fn test_missing_entry_uses_fallback() {
        let table = roughness();
        assert_eq!(table.lookup(&WoodType::Cherry), 0.35);
        assert_eq!(CoefficientTable::<FabricType>::new(0.0).lookup(&FabricType::Silk), 0.0);
    }

    #[test]
    fn test_lookup_named() {
        let table = roughness();
        assert_eq!(table.lookup_named("teak"), 0.12);
        assert_eq!(table.lookup_named("bamboo"), 0.35);
    }

    #[test]
    fn test_json_keys_are_names() {
        let json = r#"{"values": {"oak": 0.7, "teak": 0.25}, "fallback": 0.6}"#;
        let table: CoefficientTable<WoodType> = serde_json::from_str(json).unwrap();
        assert_eq!(table.lookup(&WoodType::Oak), 0.7);
        assert_eq!(table.lookup(&WoodType::Walnut), 0.6);
        assert_eq!(table.len(), 2);

        let only_fallback: CoefficientTable<WoodType> =
            serde_json::from_str(r#"{"fallback": 0.3}"#).unwrap();
        assert!(only_fallback.is_empty());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = CoefficientTable::new(0.35).with(WoodType::Teak, 0.12).with(WoodType::Oak, 0.55);
        assert_eq!(a, roughness());
        assert_ne!(a.clone().with(WoodType::Oak, 0.5), roughness());
        assert_ne!(CoefficientTable::<WoodType>::new(0.3), CoefficientTable::new(0.35));
    }

    #[test]
    fn test_display() {
        let table = CoefficientTable::new(0.5).with(WoodType::Oak, 0.7);
        assert_eq!(table.to_string(), "oak=0.7 *=0.5");
    }
}
