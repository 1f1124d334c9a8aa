//! Per-item size multipliers.

use atelier_core::{FurnitureItem, Size};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating a scale table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("Scale for {item} must be finite and positive, got {value}")]
    NonPositive { item: String, value: f32 },

    #[error("Scales for {item} must increase from small to large: {small} / {medium} / {large}")]
    NotIncreasing {
        item: String,
        small: f32,
        medium: f32,
        large: f32,
    },
}

/// The small/medium/large multipliers of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeScales {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl SizeScales {
    pub const fn new(small: f32, medium: f32, large: f32) -> Self {
        Self { small, medium, large }
    }

    pub fn get(&self, size: Size) -> f32 {
        match size {
            Size::Small => self.small,
            Size::Medium => self.medium,
            Size::Large => self.large,
        }
    }

    fn validate(&self, item: &str) -> Result<(), ScaleError> {
        for value in [self.small, self.medium, self.large] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScaleError::NonPositive {
                    item: item.to_string(),
                    value,
                });
            }
        }
        if !(self.small < self.medium && self.medium < self.large) {
            return Err(ScaleError::NotIncreasing {
                item: item.to_string(),
                small: self.small,
                medium: self.medium,
                large: self.large,
            });
        }
        Ok(())
    }
}

impl Default for SizeScales {
    fn default() -> Self {
        Self::new(0.85, 1.0, 1.15)
    }
}

/// Multipliers for every item, with a fallback triple for items without an
/// entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTable {
    #[serde(default)]
    items: IndexMap<FurnitureItem, SizeScales>,
    #[serde(default)]
    fallback: SizeScales,
}

impl ScaleTable {
    /// The same triple for every item.
    pub fn uniform(scales: SizeScales) -> Self {
        Self {
            items: IndexMap::new(),
            fallback: scales,
        }
    }

    /// One shared 0.85 / 1.0 / 1.15 triple.
    pub fn classic() -> Self {
        Self::uniform(SizeScales::new(0.85, 1.0, 1.15))
    }

    /// Per-item triples reflecting how each category grows and shrinks.
    pub fn proportional() -> Self {
        Self::uniform(SizeScales::default())
            .with(FurnitureItem::Chair, SizeScales::new(0.85, 1.0, 1.15))
            .with(FurnitureItem::Sofa, SizeScales::new(0.8, 1.0, 1.2))
            .with(FurnitureItem::Table, SizeScales::new(0.82, 1.0, 1.18))
            .with(FurnitureItem::Bookshelf, SizeScales::new(0.88, 1.0, 1.12))
            .with(FurnitureItem::Ottoman, SizeScales::new(0.9, 1.0, 1.1))
    }

    pub fn with(mut self, item: FurnitureItem, scales: SizeScales) -> Self {
        self.items.insert(item, scales);
        self
    }

    /// The triple used for `item`.
    pub fn scales(&self, item: FurnitureItem) -> SizeScales {
        self.items.get(&item).copied().unwrap_or(self.fallback)
    }

    pub fn resolve(&self, item: FurnitureItem, size: Size) -> f32 {
        self.scales(item).get(size)
    }

    /// Check that every triple is positive and strictly increasing.
    pub fn validate(&self) -> Result<(), ScaleError> {
        self.fallback.validate("fallback")?;
        for (item, scales) in &self.items {
            scales.validate(item.as_str())?;
        }
        Ok(())
    }
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self::proportional()
    }
}

/// Resolve the uniform scale factor for an item at a size.
pub fn resolve_scale(table: &ScaleTable, item: FurnitureItem, size: Size) -> f32 {
    table.resolve(item, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_proportional_values() {
        let table = ScaleTable::proportional();
        assert_eq!(resolve_scale(&table, FurnitureItem::Table, Size::Large), 1.18);
        assert_eq!(resolve_scale(&table, FurnitureItem::Sofa, Size::Small), 0.8);
        assert_eq!(resolve_scale(&table, FurnitureItem::Ottoman, Size::Small), 0.9);
        assert_eq!(resolve_scale(&table, FurnitureItem::Bookshelf, Size::Medium), 1.0);
    }

    #[test]
    fn test_sofa_shrinks_more_than_stool() {
        let table = ScaleTable::proportional();
        assert!(
            table.resolve(FurnitureItem::Sofa, Size::Small)
                < table.resolve(FurnitureItem::Ottoman, Size::Small)
        );
    }

    #[test]
    fn test_classic_is_uniform() {
        let table = ScaleTable::classic();
        for item in FurnitureItem::ALL {
            assert_eq!(table.scales(*item), SizeScales::new(0.85, 1.0, 1.15));
        }
    }

    #[test]
    fn test_validate_rejects_bad_triples() {
        let table =
            ScaleTable::proportional().with(FurnitureItem::Sofa, SizeScales::new(1.0, 1.0, 1.2));
        assert!(matches!(
            table.validate(),
            Err(ScaleError::NotIncreasing { item, .. }) if item == "sofa"
        ));

        let table = ScaleTable::uniform(SizeScales::new(0.0, 1.0, 1.1));
        assert!(matches!(table.validate(), Err(ScaleError::NonPositive { .. })));

        let table =
            ScaleTable::classic().with(FurnitureItem::Table, SizeScales::new(f32::NAN, 1.0, 1.1));
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_json_keys_are_item_names() {
        let json = serde_json::to_value(ScaleTable::proportional()).unwrap();
        assert_eq!(json["items"]["table"]["large"].as_f64().map(|v| v as f32), Some(1.18));

        let json = r#"{"items": {"stool": {"small": 0.5, "medium": 1.0, "large": 2.0}}}"#;
        let parsed: ScaleTable = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.resolve(FurnitureItem::Ottoman, Size::Large), 2.0);
        assert_eq!(parsed.resolve(FurnitureItem::Chair, Size::Large), 1.15);
    }

    fn any_item() -> impl Strategy<Value = FurnitureItem> {
        prop::sample::select(FurnitureItem::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn scales_increase_with_size(item in any_item()) {
            for table in [ScaleTable::proportional(), ScaleTable::classic()] {
                prop_assert!(table.resolve(item, Size::Small) < table.resolve(item, Size::Medium));
                prop_assert!(table.resolve(item, Size::Medium) < table.resolve(item, Size::Large));
            }
        }
    }
}
