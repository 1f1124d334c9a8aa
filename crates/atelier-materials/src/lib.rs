//! Surface materials for Atelier furniture models.
//!
//! This crate provides:
//! - Coefficient tables keyed by wood or fabric type, with explicit fallbacks
//! - Material profiles (the swappable shading data of one theme)
//! - The material factory turning a configuration into role-tagged descriptors
//! - A cache that rebuilds each descriptor only when its own inputs change

mod cache;
mod material;
mod profile;
mod tables;

pub use cache::MaterialCache;
pub use material::{
    build_materials, fabric_material, frame_material, Accent, MaterialDescriptor, MaterialRole,
    MaterialSet,
};
pub use profile::{FabricFinish, FrameFinish, LeatherFinish, MaterialProfile, ProfileError};
pub use tables::CoefficientTable;
