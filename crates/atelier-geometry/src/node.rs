//! Scene nodes and the assembly helper item builders write into.

use atelier_core::FurnitureItem;
use atelier_materials::{Accent, MaterialDescriptor, MaterialRole, MaterialSet};
use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::builders::GeometryStyle;
use crate::geometry::{BoundingBox, Primitive};

/// One primitive-shape instance with its resolved material.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub name: String,
    pub primitive: Primitive,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub role: MaterialRole,
    pub material: MaterialDescriptor,
}

impl Part {
    /// Transform from part space to the parent's space.
    pub fn local_transform(&self) -> Mat4 {
        local_transform(self.position, self.rotation)
    }
}

/// A named sub-assembly (a leg with its caps, a shelf with its trim).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub children: Vec<SceneNode>,
}

/// A node of a furniture model tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneNode {
    Part(Part),
    Group(Group),
}

impl SceneNode {
    pub fn name(&self) -> &str {
        match self {
            SceneNode::Part(part) => &part.name,
            SceneNode::Group(group) => &group.name,
        }
    }

    /// Visit every part below this node, depth first, with its transform
    /// relative to `parent`.
    pub fn visit_parts<'a>(&'a self, parent: Mat4, visit: &mut impl FnMut(&'a Part, Mat4)) {
        match self {
            SceneNode::Part(part) => visit(part, parent * part.local_transform()),
            SceneNode::Group(group) => {
                let transform = parent * local_transform(group.position, group.rotation);
                for child in &group.children {
                    child.visit_parts(transform, visit);
                }
            }
        }
    }
}

fn local_transform(position: Vec3, rotation: Vec3) -> Mat4 {
    Mat4::from_rotation_translation(
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
        position,
    )
}

/// A part description before its material is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSpec {
    name: String,
    primitive: Primitive,
    role: MaterialRole,
    position: Vec3,
    rotation: Vec3,
}

impl PartSpec {
    pub fn new(name: impl Into<String>, primitive: Primitive, role: MaterialRole) -> Self {
        Self {
            name: name.into(),
            primitive,
            role,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Place the part.
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Rotate the part (Euler XYZ, radians).
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }
}

/// Placement of a sub-assembly; its children are positioned relative to it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    name: String,
    position: Vec3,
    rotation: Vec3,
}

impl GroupSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }
}

/// A sub-assembly placement.
pub fn group(name: impl Into<String>) -> GroupSpec {
    GroupSpec::new(name)
}

/// A structural wood part.
pub fn frame(name: impl Into<String>, primitive: Primitive) -> PartSpec {
    PartSpec::new(name, primitive, MaterialRole::Frame)
}

/// An upholstered part.
pub fn fabric(name: impl Into<String>, primitive: Primitive) -> PartSpec {
    PartSpec::new(name, primitive, MaterialRole::Fabric)
}

/// A gold hardware part.
pub fn gold(name: impl Into<String>, primitive: Primitive) -> PartSpec {
    PartSpec::new(name, primitive, MaterialRole::Accent(Accent::Gold))
}

/// A brass hardware part.
pub fn brass(name: impl Into<String>, primitive: Primitive) -> PartSpec {
    PartSpec::new(name, primitive, MaterialRole::Accent(Accent::Brass))
}

/// Collects nodes for one model, binding each part to its descriptor as it
/// is added.
pub struct Assembly<'m> {
    materials: &'m MaterialSet,
    nodes: Vec<SceneNode>,
}

impl<'m> Assembly<'m> {
    pub fn new(materials: &'m MaterialSet) -> Self {
        Self {
            materials,
            nodes: Vec::new(),
        }
    }

    /// Add a part, resolving its material from its role.
    pub fn add(&mut self, spec: PartSpec) -> &mut Self {
        let material = self.materials.for_role(spec.role);
        self.nodes.push(SceneNode::Part(Part {
            name: spec.name,
            primitive: spec.primitive,
            position: spec.position,
            rotation: spec.rotation,
            role: spec.role,
            material,
        }));
        self
    }

    /// Add a placed group whose children are written by `build`.
    pub fn add_group(
        &mut self,
        spec: GroupSpec,
        build: impl FnOnce(&mut Assembly<'m>),
    ) -> &mut Self {
        let mut inner = Assembly::new(self.materials);
        build(&mut inner);
        self.nodes.push(SceneNode::Group(Group {
            name: spec.name,
            position: spec.position,
            rotation: spec.rotation,
            children: inner.nodes,
        }));
        self
    }

    pub fn into_nodes(self) -> Vec<SceneNode> {
        self.nodes
    }
}

/// A complete furniture model, ready to mount under the root transform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemModel {
    /// The item that was requested.
    pub item: FurnitureItem,
    /// The design that was actually built.
    pub design: &'static str,
    pub style: GeometryStyle,
    /// Uniform scale factor for the whole assembly.
    pub scale: f32,
    /// Vertical offset aligning the model with the shared camera framing.
    pub offset_y: f32,
    pub nodes: Vec<SceneNode>,
}

impl ItemModel {
    /// Transform from model space to the root's parent space.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.offset_y, 0.0))
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// Every part with its transform in unscaled model space, depth first.
    pub fn parts(&self) -> Vec<(&Part, Mat4)> {
        let mut parts = Vec::new();
        for node in &self.nodes {
            node.visit_parts(Mat4::IDENTITY, &mut |part, transform| parts.push((part, transform)));
        }
        parts
    }

    pub fn part_count(&self) -> usize {
        self.parts().len()
    }

    /// Number of parts drawn with `role`.
    pub fn count_role(&self, role: MaterialRole) -> usize {
        self.parts().iter().filter(|(part, _)| part.role == role).count()
    }

    /// Bounds in unscaled model space.
    pub fn local_bounds(&self) -> Option<BoundingBox> {
        self.parts()
            .into_iter()
            .map(|(part, transform)| part.primitive.local_bounds().transformed(transform))
            .reduce(|a, b| a.union(&b))
    }

    /// Bounds after scale and vertical offset.
    pub fn world_bounds(&self) -> Option<BoundingBox> {
        self.local_bounds().map(|bounds| bounds.transformed(self.transform()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::FurnitureConfig;
    use atelier_materials::{build_materials, MaterialProfile};

    fn materials() -> MaterialSet {
        build_materials(&MaterialProfile::heritage(), &FurnitureConfig::default())
    }

    #[test]
    fn test_add_binds_material() {
        let materials = materials();
        let mut asm = Assembly::new(&materials);
        asm.add(fabric("cushion", Primitive::cuboid(1.0, 0.2, 1.0)).at(0.0, 0.5, 0.0))
            .add(brass("cap", Primitive::cylinder(0.1, 0.1, 0.02, 12)));

        let nodes = asm.into_nodes();
        let SceneNode::Part(cushion) = &nodes[0] else {
            panic!("Expected part");
        };
        assert_eq!(cushion.material, materials.fabric);
        assert_eq!(cushion.position, Vec3::new(0.0, 0.5, 0.0));
        let SceneNode::Part(cap) = &nodes[1] else {
            panic!("Expected part");
        };
        assert_eq!(cap.material, materials.brass);
    }

    #[test]
    fn test_group_collects_children() {
        let materials = materials();
        let mut asm = Assembly::new(&materials);
        asm.add_group(group("leg").at(0.0, -0.2, 0.0), |leg| {
            leg.add(frame("shaft", Primitive::cylinder(0.05, 0.05, 1.0, 8)))
                .add(gold("cap", Primitive::cylinder(0.06, 0.06, 0.02, 8)).at(0.0, -0.5, 0.0));
        });

        let model = ItemModel {
            item: FurnitureItem::Table,
            design: "test",
            style: GeometryStyle::Heritage,
            scale: 2.0,
            offset_y: -1.0,
            nodes: asm.into_nodes(),
        };
        assert_eq!(model.nodes.len(), 1);
        assert_eq!(model.nodes[0].name(), "leg");
        assert_eq!(model.part_count(), 2);
        assert_eq!(model.count_role(MaterialRole::Accent(Accent::Gold)), 1);

        let local = model.local_bounds().unwrap();
        assert!((local.min.y - -0.71).abs() < 1e-5);
        assert!((local.max.y - 0.3).abs() < 1e-5);
        let world = model.world_bounds().unwrap();
        assert!((world.min.y - (-0.71 * 2.0 - 1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_part_rotation_affects_bounds() {
        let materials = materials();
        let mut asm = Assembly::new(&materials);
        asm.add(
            frame("brace", Primitive::cuboid(2.0, 0.1, 0.1))
                .rotated(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        );
        let model = ItemModel {
            item: FurnitureItem::Table,
            design: "test",
            style: GeometryStyle::Classic,
            scale: 1.0,
            offset_y: 0.0,
            nodes: asm.into_nodes(),
        };
        let bounds = model.local_bounds().unwrap();
        assert!((bounds.size().z - 2.0).abs() < 1e-5);
    }
}
