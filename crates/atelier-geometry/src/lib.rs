//! Procedural furniture geometry for Atelier models.
//!
//! This crate provides:
//! - Primitive shapes (box, cylinder, sphere, torus) and bounding boxes
//! - Scene nodes carrying a material role and its resolved descriptor
//! - Per-item scale tables
//! - Item builders grouped by geometry style

mod builders;
mod geometry;
mod node;
mod scale;

pub use builders::{build_item, Blueprint, BuildFn, GeometryStyle};
pub use geometry::{BoundingBox, Primitive};
pub use node::{
    brass, fabric, frame, gold, group, Assembly, Group, GroupSpec, ItemModel, Part, PartSpec,
    SceneNode,
};
pub use scale::{resolve_scale, ScaleError, ScaleTable, SizeScales};
