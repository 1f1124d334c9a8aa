//! Material profiles: the shading data behind one visual theme.

use atelier_core::{Color, FabricType, WoodType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::MaterialDescriptor;
use crate::tables::CoefficientTable;

/// Errors found while validating a profile.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Coefficient {table}[{key}] = {value} is outside [0, 1]")]
    OutOfUnitRange {
        table: &'static str,
        key: String,
        value: f32,
    },

    #[error("Coefficient {table}[{key}] = {value} must be finite and non-negative")]
    Negative {
        table: &'static str,
        key: String,
        value: f32,
    },
}

/// Fixed finish of the wooden frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameFinish {
    pub clearcoat_roughness: f32,
    pub env_map_intensity: f32,
    pub normal_scale: f32,
}

/// Fixed finish shared by all non-leather upholstery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricFinish {
    pub env_map_intensity: f32,
    pub double_sided: bool,
}

/// Polished-surface overrides applied when the fabric is leather.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeatherFinish {
    pub metalness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub env_map_intensity: f32,
    /// Replaces the fabric roughness table entry when set.
    #[serde(default)]
    pub roughness: Option<f32>,
    /// Replaces the fabric bump table entry when set.
    #[serde(default)]
    pub bump_scale: Option<f32>,
}

/// Every coefficient the material factory reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProfile {
    pub wood_roughness: CoefficientTable<WoodType>,
    pub wood_metalness: CoefficientTable<WoodType>,
    pub wood_clearcoat: CoefficientTable<WoodType>,
    pub frame: FrameFinish,
    pub fabric_roughness: CoefficientTable<FabricType>,
    pub fabric_bump_scale: CoefficientTable<FabricType>,
    pub fabric_normal_scale: CoefficientTable<FabricType>,
    pub fabric: FabricFinish,
    pub leather: LeatherFinish,
    pub gold: MaterialDescriptor,
    pub brass: MaterialDescriptor,
}

fn wood(
    oak: f32,
    walnut: f32,
    mahogany: f32,
    cherry: f32,
    teak: f32,
    fallback: f32,
) -> CoefficientTable<WoodType> {
    CoefficientTable::from_entries(
        [
            (WoodType::Oak, oak),
            (WoodType::Walnut, walnut),
            (WoodType::Mahogany, mahogany),
            (WoodType::Cherry, cherry),
            (WoodType::Teak, teak),
        ],
        fallback,
    )
}

fn fabric(
    leather: f32,
    velvet: f32,
    cotton: f32,
    linen: f32,
    silk: f32,
    fallback: f32,
) -> CoefficientTable<FabricType> {
    CoefficientTable::from_entries(
        [
            (FabricType::Leather, leather),
            (FabricType::Velvet, velvet),
            (FabricType::Cotton, cotton),
            (FabricType::Linen, linen),
            (FabricType::Silk, silk),
        ],
        fallback,
    )
}

fn gold_leaf() -> MaterialDescriptor {
    MaterialDescriptor::metal(Color::from_rgb8(0xFF, 0xD7, 0x00), 0.08, 0.98)
        .with_env_map_intensity(3.5)
        .with_clearcoat(0.95, 0.02)
}

fn aged_brass() -> MaterialDescriptor {
    MaterialDescriptor::metal(Color::from_rgb8(0xB8, 0x86, 0x0B), 0.15, 0.9)
        .with_env_map_intensity(2.8)
        .with_clearcoat(0.8, 0.05)
}

impl MaterialProfile {
    /// Lacquered luxury finishes: glossy exotic woods, plush fabrics, gold and
    /// brass hardware.
    pub fn heritage() -> Self {
        Self {
            wood_roughness: wood(0.55, 0.3, 0.18, 0.22, 0.12, 0.35),
            wood_metalness: wood(0.08, 0.15, 0.22, 0.18, 0.28, 0.12),
            wood_clearcoat: wood(0.35, 0.55, 0.75, 0.65, 0.85, 0.5),
            frame: FrameFinish {
                clearcoat_roughness: 0.03,
                env_map_intensity: 2.5,
                normal_scale: 0.5,
            },
            fabric_roughness: fabric(0.28, 0.92, 0.72, 0.82, 0.04, 0.5),
            fabric_bump_scale: fabric(0.04, 0.15, 0.06, 0.1, 0.012, 0.04),
            fabric_normal_scale: CoefficientTable::new(0.0),
            fabric: FabricFinish {
                env_map_intensity: 1.2,
                double_sided: true,
            },
            leather: LeatherFinish {
                metalness: 0.1,
                clearcoat: 0.5,
                clearcoat_roughness: 0.1,
                env_map_intensity: 2.0,
                roughness: None,
                bump_scale: None,
            },
            gold: gold_leaf(),
            brass: aged_brass(),
        }
    }

    /// Natural satin finishes with a single fixed clearcoat.
    pub fn classic() -> Self {
        Self {
            wood_roughness: wood(0.7, 0.5, 0.3, 0.4, 0.25, 0.6),
            wood_metalness: wood(0.05, 0.08, 0.12, 0.1, 0.15, 0.08),
            wood_clearcoat: CoefficientTable::new(0.3),
            frame: FrameFinish {
                clearcoat_roughness: 0.1,
                env_map_intensity: 1.2,
                normal_scale: 0.0,
            },
            fabric_roughness: fabric(0.4, 0.9, 0.7, 0.8, 0.1, 0.6),
            fabric_bump_scale: fabric(0.01, 0.05, 0.02, 0.03, 0.005, 0.02),
            fabric_normal_scale: CoefficientTable::new(0.0),
            fabric: FabricFinish {
                env_map_intensity: 0.8,
                double_sided: false,
            },
            leather: LeatherFinish {
                metalness: 0.1,
                clearcoat: 0.2,
                clearcoat_roughness: 0.3,
                env_map_intensity: 1.0,
                roughness: Some(0.4),
                bump_scale: Some(0.02),
            },
            gold: gold_leaf(),
            brass: aged_brass(),
        }
    }

    /// Textured workshop finishes with normal-mapped fabrics.
    pub fn atelier() -> Self {
        Self {
            wood_roughness: wood(0.75, 0.45, 0.25, 0.35, 0.2, 0.6),
            wood_metalness: wood(0.06, 0.1, 0.15, 0.12, 0.18, 0.08),
            wood_clearcoat: wood(0.25, 0.35, 0.5, 0.4, 0.6, 0.3),
            frame: FrameFinish {
                clearcoat_roughness: 0.1,
                env_map_intensity: 1.5,
                normal_scale: 0.3,
            },
            fabric_roughness: fabric(0.35, 0.95, 0.75, 0.85, 0.08, 0.6),
            fabric_bump_scale: fabric(0.02, 0.08, 0.03, 0.05, 0.008, 0.02),
            fabric_normal_scale: fabric(0.3, 0.6, 0.25, 0.4, 0.1, 0.3),
            fabric: FabricFinish {
                env_map_intensity: 0.6,
                double_sided: false,
            },
            leather: LeatherFinish {
                metalness: 0.05,
                clearcoat: 0.3,
                clearcoat_roughness: 0.2,
                env_map_intensity: 1.2,
                roughness: None,
                bump_scale: None,
            },
            gold: gold_leaf(),
            brass: MaterialDescriptor::metal(Color::from_rgb8(0xC9, 0xB0, 0x37), 0.2, 0.9)
                .with_env_map_intensity(2.0)
                .with_clearcoat(0.8, 0.1),
        }
    }

    /// Check every coefficient against its physical range.
    pub fn validate(&self) -> Result<(), ProfileError> {
        unit_table("woodRoughness", &self.wood_roughness)?;
        unit_table("woodMetalness", &self.wood_metalness)?;
        unit_table("woodClearcoat", &self.wood_clearcoat)?;
        unit_table("fabricRoughness", &self.fabric_roughness)?;
        positive_table("fabricBumpScale", &self.fabric_bump_scale)?;
        positive_table("fabricNormalScale", &self.fabric_normal_scale)?;

        unit("frame", "clearcoatRoughness", self.frame.clearcoat_roughness)?;
        positive("frame", "envMapIntensity", self.frame.env_map_intensity)?;
        positive("frame", "normalScale", self.frame.normal_scale)?;
        positive("fabric", "envMapIntensity", self.fabric.env_map_intensity)?;

        unit("leather", "metalness", self.leather.metalness)?;
        unit("leather", "clearcoat", self.leather.clearcoat)?;
        unit("leather", "clearcoatRoughness", self.leather.clearcoat_roughness)?;
        positive("leather", "envMapIntensity", self.leather.env_map_intensity)?;
        if let Some(roughness) = self.leather.roughness {
            unit("leather", "roughness", roughness)?;
        }
        if let Some(bump) = self.leather.bump_scale {
            positive("leather", "bumpScale", bump)?;
        }

        descriptor("gold", &self.gold)?;
        descriptor("brass", &self.brass)
    }
}

fn unit(table: &'static str, key: &str, value: f32) -> Result<(), ProfileError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::OutOfUnitRange { table, key: key.to_string(), value })
    }
}

fn positive(table: &'static str, key: &str, value: f32) -> Result<(), ProfileError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProfileError::Negative { table, key: key.to_string(), value })
    }
}

fn unit_table<K>(table: &'static str, values: &CoefficientTable<K>) -> Result<(), ProfileError>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    unit(table, "*", values.fallback())?;
    values.entries().try_for_each(|(key, value)| unit(table, &key.to_string(), value))
}

fn positive_table<K>(table: &'static str, values: &CoefficientTable<K>) -> Result<(), ProfileError>
where
    K: std::hash::Hash + Eq + std::fmt::Display,
{
    positive(table, "*", values.fallback())?;
    values.entries().try_for_each(|(key, value)| positive(table, &key.to_string(), value))
}

fn descriptor(table: &'static str, material: &MaterialDescriptor) -> Result<(), ProfileError> {
    unit(table, "roughness", material.roughness)?;
    unit(table, "metalness", material.metalness)?;
    unit(table, "clearcoat", material.clearcoat)?;
    unit(table, "clearcoatRoughness", material.clearcoat_roughness)?;
    positive(table, "envMapIntensity", material.env_map_intensity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profiles() -> [MaterialProfile; 3] {
        [MaterialProfile::heritage(), MaterialProfile::classic(), MaterialProfile::atelier()]
    }

    #[test]
    fn test_builtin_profiles_validate() {
        for profile in profiles() {
            profile.validate().unwrap();
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut profile = MaterialProfile::heritage();
        profile.wood_roughness = profile.wood_roughness.with(WoodType::Oak, 1.4);
        assert_eq!(
            profile.validate(),
            Err(ProfileError::OutOfUnitRange {
                table: "woodRoughness",
                key: "oak".to_string(),
                value: 1.4,
            })
        );

        let mut profile = MaterialProfile::classic();
        profile.fabric_bump_scale = CoefficientTable::new(f32::NAN);
        assert!(matches!(profile.validate(), Err(ProfileError::Negative { .. })));
    }

    #[test]
    fn test_heritage_tables_encode_finish() {
        let profile = MaterialProfile::heritage();
        // Teak is the glossiest wood, oak the most matte.
        let roughness = |wood| profile.wood_roughness.lookup(&wood);
        let clearcoat = |wood| profile.wood_clearcoat.lookup(&wood);
        assert!(roughness(WoodType::Teak) < roughness(WoodType::Oak));
        assert!(clearcoat(WoodType::Teak) > clearcoat(WoodType::Oak));
        // Velvet has the deepest nap, silk the strongest sheen.
        assert!(profile.fabric_bump_scale.lookup(&FabricType::Velvet) > 0.1);
        assert!(profile.fabric_roughness.lookup(&FabricType::Silk) < 0.05);
    }

    #[test]
    fn test_profile_json_round_trip() {
        let profile = MaterialProfile::atelier();
        let json = serde_json::to_string(&profile).unwrap();
        let back: MaterialProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    proptest! {
        #[test]
        fn every_lookup_is_in_range(
            wood_index in 0usize..WoodType::ALL.len(),
            fabric_index in 0usize..FabricType::ALL.len(),
            profile_index in 0usize..3,
        ) {
            let profile = &profiles()[profile_index];
            let wood = WoodType::ALL[wood_index];
            let fabric = FabricType::ALL[fabric_index];

            for value in [
                profile.wood_roughness.lookup(&wood),
                profile.wood_metalness.lookup(&wood),
                profile.wood_clearcoat.lookup(&wood),
                profile.fabric_roughness.lookup(&fabric),
            ] {
                prop_assert!(value.is_finite());
                prop_assert!((0.0..=1.0).contains(&value));
            }
            for value in [
                profile.fabric_bump_scale.lookup(&fabric),
                profile.fabric_normal_scale.lookup(&fabric),
            ] {
                prop_assert!(value.is_finite() && value >= 0.0);
            }
        }
    }
}
