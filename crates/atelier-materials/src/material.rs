//! Material descriptors and the material factory.

use atelier_core::{Color, FabricType, FurnitureConfig, WoodType};
use serde::{Deserialize, Serialize};

use crate::profile::MaterialProfile;

/// A resolved surface description for one material role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialDescriptor {
    /// Base color of the material.
    pub base_color: Color,
    /// Roughness factor (0.0 = smooth/glossy, 1.0 = rough/matte).
    pub roughness: f32,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metalness: f32,
    /// Strength of the clear lacquer layer.
    pub clearcoat: f32,
    /// Roughness of the clear lacquer layer.
    pub clearcoat_roughness: f32,
    /// Bump map intensity.
    pub bump_scale: f32,
    /// Normal map intensity.
    pub normal_scale: f32,
    /// Environment reflection strength.
    pub env_map_intensity: f32,
    /// Render both faces (thin cushioned geometry).
    pub double_sided: bool,
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self {
            base_color: Color::rgb(0.8, 0.8, 0.8),
            roughness: 0.5,
            metalness: 0.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            bump_scale: 0.0,
            normal_scale: 0.0,
            env_map_intensity: 1.0,
            double_sided: false,
        }
    }
}

impl MaterialDescriptor {
    /// Create a new material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            base_color: color,
            ..Default::default()
        }
    }

    /// Create a polished metal hardware material.
    pub fn metal(color: Color, roughness: f32, metalness: f32) -> Self {
        Self::new(color).with_roughness(roughness).with_metalness(metalness)
    }

    /// Set the roughness.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set the metallic factor.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Set the clearcoat layer.
    pub fn with_clearcoat(mut self, clearcoat: f32, roughness: f32) -> Self {
        self.clearcoat = clearcoat.clamp(0.0, 1.0);
        self.clearcoat_roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set the environment reflection strength.
    pub fn with_env_map_intensity(mut self, intensity: f32) -> Self {
        self.env_map_intensity = intensity.max(0.0);
        self
    }
}

/// Decorative hardware finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Gold,
    Brass,
}

/// The functional category a part plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialRole {
    /// Structural wood.
    Frame,
    /// Upholstery.
    Fabric,
    /// Decorative hardware.
    Accent(Accent),
}

/// The descriptors of one render pass, one per role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSet {
    pub frame: MaterialDescriptor,
    pub fabric: MaterialDescriptor,
    pub gold: MaterialDescriptor,
    pub brass: MaterialDescriptor,
}

impl MaterialSet {
    /// The descriptor a part with `role` is drawn with.
    pub fn for_role(&self, role: MaterialRole) -> MaterialDescriptor {
        match role {
            MaterialRole::Frame => self.frame,
            MaterialRole::Fabric => self.fabric,
            MaterialRole::Accent(Accent::Gold) => self.gold,
            MaterialRole::Accent(Accent::Brass) => self.brass,
        }
    }
}

/// Build the structural wood material. Depends only on frame color and wood.
pub fn frame_material(
    profile: &MaterialProfile,
    color: Color,
    wood: WoodType,
) -> MaterialDescriptor {
    MaterialDescriptor {
        base_color: color,
        roughness: profile.wood_roughness.lookup(&wood),
        metalness: profile.wood_metalness.lookup(&wood),
        clearcoat: profile.wood_clearcoat.lookup(&wood),
        clearcoat_roughness: profile.frame.clearcoat_roughness,
        bump_scale: 0.0,
        normal_scale: profile.frame.normal_scale,
        env_map_intensity: profile.frame.env_map_intensity,
        double_sided: false,
    }
}

/// Build the upholstery material. Depends only on fabric color and fabric.
///
/// Leather is a hybrid surface: it picks up the profile's leather finish
/// (metalness, clearcoat, and optional roughness/bump overrides). Every other
/// fabric is a plain dielectric.
pub fn fabric_material(
    profile: &MaterialProfile,
    color: Color,
    fabric: FabricType,
) -> MaterialDescriptor {
    let mut material = MaterialDescriptor {
        base_color: color,
        roughness: profile.fabric_roughness.lookup(&fabric),
        metalness: 0.0,
        clearcoat: 0.0,
        clearcoat_roughness: 0.0,
        bump_scale: profile.fabric_bump_scale.lookup(&fabric),
        normal_scale: profile.fabric_normal_scale.lookup(&fabric),
        env_map_intensity: profile.fabric.env_map_intensity,
        double_sided: profile.fabric.double_sided,
    };

    if fabric == FabricType::Leather {
        let leather = &profile.leather;
        material.metalness = leather.metalness;
        material.clearcoat = leather.clearcoat;
        material.clearcoat_roughness = leather.clearcoat_roughness;
        material.env_map_intensity = leather.env_map_intensity;
        if let Some(roughness) = leather.roughness {
            material.roughness = roughness;
        }
        if let Some(bump) = leather.bump_scale {
            material.bump_scale = bump;
        }
    }

    material
}

/// Build every descriptor for one configuration.
///
/// Returns fresh values; nothing shared is mutated.
pub fn build_materials(profile: &MaterialProfile, config: &FurnitureConfig) -> MaterialSet {
    MaterialSet {
        frame: frame_material(profile, config.frame_color, config.wood_type),
        fabric: fabric_material(profile, config.fabric_color, config.fabric_type),
        gold: profile.gold,
        brass: profile.brass,
    }
}
