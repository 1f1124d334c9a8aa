//! Atelier design: a single ultra-premium chair with brass foot caps.

use super::{corners, splay};
use crate::geometry::Primitive;
use crate::node::{brass, fabric, frame, group, Assembly};

pub(super) fn chair(asm: &mut Assembly<'_>) {
    asm.add(fabric("seat_cushion", Primitive::cuboid(1.65, 0.28, 1.45)).at(0.0, 0.1, 0.1))
        .add(frame("seat_frame", Primitive::cuboid(1.7, 0.1, 1.5)).at(0.0, -0.05, 0.1))
        .add(fabric("backrest_cushion", Primitive::cuboid(1.65, 1.35, 0.22)).at(0.0, 0.95, -0.62))
        .add(frame("backrest_frame", Primitive::cuboid(1.72, 1.4, 0.08)).at(0.0, 0.95, -0.75));

    for (corner, x, z) in corners(0.75, 0.6) {
        asm.add_group(group(format!("leg_{corner}")).at(x, -0.42, z), |leg| {
            leg.add(
                frame("shaft", Primitive::cylinder(0.045, 0.065, 0.88, 12))
                    .rotated(0.0, 0.0, splay(x, 0.015)),
            )
            .add(
                brass("foot_cap", Primitive::cylinder(0.048, 0.048, 0.02, 12)).at(0.0, -0.45, 0.0),
            );
        });
    }

    for (side, x) in [("left", -0.82), ("right", 0.82)] {
        asm.add(
            fabric(format!("armrest_{side}"), Primitive::cuboid(0.2, 0.14, 0.95)).at(x, 0.38, 0.15),
        );
    }
    for (side, x) in [("left", -0.82), ("right", 0.82)] {
        asm.add_group(group(format!("armrest_support_{side}")).at(x, 0.0, 0.58), |support| {
            support
                .add(frame("post", Primitive::cylinder(0.042, 0.052, 0.38, 10)).at(0.0, 0.2, 0.0))
                .add(
                    brass("collar", Primitive::cylinder(0.025, 0.025, 0.06, 8)).at(0.0, 0.32, 0.0),
                );
        });
    }

    asm.add(frame("rail_front", Primitive::cuboid(1.42, 0.08, 0.08)).at(0.0, -0.22, 0.6))
        .add(frame("rail_back", Primitive::cuboid(1.42, 0.08, 0.08)).at(0.0, -0.22, -0.6))
        .add(frame("side_brace_left", Primitive::cuboid(0.08, 0.08, 1.12)).at(-0.75, -0.22, 0.0))
        .add(frame("side_brace_right", Primitive::cuboid(0.08, 0.08, 1.12)).at(0.75, -0.22, 0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::FurnitureConfig;
    use atelier_materials::{build_materials, Accent, MaterialProfile, MaterialRole};

    use crate::node::SceneNode;

    #[test]
    fn test_brass_hardware() {
        let set = build_materials(&MaterialProfile::atelier(), &FurnitureConfig::default());
        let mut asm = Assembly::new(&set);
        chair(&mut asm);
        let nodes = asm.into_nodes();
        assert_eq!(nodes.len(), 16);

        let mut brass_parts = 0;
        for node in &nodes {
            node.visit_parts(glam::Mat4::IDENTITY, &mut |part, _| {
                if part.role == MaterialRole::Accent(Accent::Brass) {
                    assert_eq!(part.material, set.brass);
                    brass_parts += 1;
                }
            });
        }
        assert_eq!(brass_parts, 6);

        for node in &nodes {
            if let SceneNode::Group(leg) = node {
                if leg.name.starts_with("leg_") {
                    assert_eq!(leg.rotation, glam::Vec3::ZERO);
                    assert_eq!(leg.children[0].name(), "shaft");
                    let SceneNode::Part(shaft) = &leg.children[0] else {
                        panic!("Expected shaft part");
                    };
                    assert_eq!(shaft.rotation.z.abs(), 0.015);
                }
            }
        }
    }
}
