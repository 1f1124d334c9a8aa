//! Heritage designs: grouped sub-assemblies dressed in gold and brass.

use std::f32::consts::{FRAC_PI_2, PI};

use super::{corners, splay};
use crate::geometry::Primitive;
use crate::node::{brass, fabric, frame, gold, group, Assembly};

pub(super) fn armchair(asm: &mut Assembly<'_>) {
    asm.add(fabric("seat_cushion", Primitive::cuboid(1.75, 0.32, 1.55)).at(0.0, 0.18, 0.1))
        .add(frame("seat_frame", Primitive::cuboid(1.8, 0.14, 1.6)).at(0.0, 0.0, 0.1))
        .add(fabric("backrest_cushion", Primitive::cuboid(1.75, 1.5, 0.28)).at(0.0, 1.05, -0.58))
        .add(frame("backrest_frame", Primitive::cuboid(1.8, 1.55, 0.12)).at(0.0, 1.05, -0.72))
        .add(gold("crown", Primitive::cuboid(0.8, 0.15, 0.04)).at(0.0, 1.7, -0.66));

    for (corner, x, z) in corners(0.82, 0.7) {
        asm.add_group(group(format!("leg_{corner}")).at(x, -0.38, z), |leg| {
            leg.add(
                frame("shaft", Primitive::cylinder(0.055, 0.075, 0.95, 16))
                    .rotated(0.0, 0.0, splay(x, 0.02)),
            )
            .add(gold("foot_cap", Primitive::cylinder(0.058, 0.058, 0.04, 16)).at(0.0, -0.5, 0.0));
        });
    }

    for (side, x) in [("left", -0.88), ("right", 0.88)] {
        asm.add(
            fabric(format!("armrest_{side}"), Primitive::cuboid(0.24, 0.18, 1.05))
                .at(x, 0.42, 0.15),
        );
    }
    for (side, x) in [("left", -0.88), ("right", 0.88)] {
        asm.add_group(group(format!("armrest_support_{side}")).at(x, 0.0, 0.65), |support| {
            support
                .add(frame("post", Primitive::cylinder(0.048, 0.058, 0.42, 12)).at(0.0, 0.24, 0.0))
                .add(gold("collar", Primitive::cylinder(0.032, 0.032, 0.1, 12)).at(0.0, 0.37, 0.0));
        });
    }

    asm.add(frame("rail_front", Primitive::cuboid(1.5, 0.12, 0.12)).at(0.0, -0.18, 0.7))
        .add(frame("rail_back", Primitive::cuboid(1.5, 0.12, 0.12)).at(0.0, -0.18, -0.7));
}

pub(super) fn majlis_sofa(asm: &mut Assembly<'_>) {
    asm.add(frame("base", Primitive::cuboid(4.2, 0.15, 2.0)).at(0.0, 0.08, 0.0));

    let bays = [-1.4, -0.35, 0.35, 1.4];
    for (i, x) in bays.into_iter().enumerate() {
        asm.add(
            fabric(format!("seat_cushion_{i}"), Primitive::cuboid(0.85, 0.25, 1.8))
                .at(x, 0.25, 0.1),
        );
    }
    for (i, x) in bays.into_iter().enumerate() {
        asm.add(
            fabric(format!("back_cushion_{i}"), Primitive::cuboid(0.85, 0.8, 0.25))
                .at(x, 0.65, -0.85),
        );
    }

    asm.add(frame("back_frame", Primitive::cuboid(4.2, 0.85, 0.1)).at(0.0, 0.65, -0.98))
        .add(frame("side_left", Primitive::cuboid(0.15, 0.9, 2.0)).at(-2.0, 0.45, 0.0))
        .add(frame("side_right", Primitive::cuboid(0.15, 0.9, 2.0)).at(2.0, 0.45, 0.0));

    for (i, x) in [-1.5, -0.5, 0.5, 1.5].into_iter().enumerate() {
        asm.add(brass(format!("inlay_{i}"), Primitive::cuboid(0.6, 0.08, 0.02)).at(x, 0.65, -0.93));
    }

    for (corner, x, z) in corners(1.8, 0.8) {
        asm.add_group(group(format!("leg_{corner}")).at(x, -0.35, z), |leg| {
            leg.add(frame("foot", Primitive::cylinder(0.08, 0.1, 0.6, 12)))
                .add(
                    brass("foot_cap", Primitive::cylinder(0.085, 0.085, 0.04, 12))
                        .at(0.0, -0.32, 0.0),
                );
        });
    }

    let pillows = [-1.0, 0.0, 1.0];
    for (i, x) in pillows.into_iter().enumerate() {
        asm.add(fabric(format!("pillow_{i}"), Primitive::cuboid(0.4, 0.15, 0.4)).at(x, 0.45, -0.3));
    }
    for (i, x) in pillows.into_iter().enumerate() {
        asm.add(
            gold(format!("tassel_{i}"), Primitive::cylinder(0.01, 0.02, 0.08, 8)).at(x, 0.38, -0.1),
        );
    }
}

pub(super) fn table(asm: &mut Assembly<'_>) {
    // Top with its inlaid medallion.
    asm.add(frame("top", Primitive::cuboid(3.5, 0.12, 2.0)).at(0.0, 0.52, 0.0))
        .add(frame("top_molding", Primitive::cuboid(3.4, 0.04, 1.9)).at(0.0, 0.46, 0.0))
        .add(brass("edge_trim", Primitive::cuboid(3.45, 0.01, 1.95)).at(0.0, 0.585, 0.0))
        .add(brass("medallion", Primitive::cylinder(0.35, 0.35, 0.015, 24)).at(0.0, 0.595, 0.0))
        .add(
            brass("medallion_ring_outer", Primitive::torus(0.25, 0.02, 8, 24))
                .at(0.0, 0.6, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        )
        .add(
            brass("medallion_ring_inner", Primitive::torus(0.15, 0.015, 8, 24))
                .at(0.0, 0.6, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        );

    for i in 0..12 {
        let angle = i as f32 * PI / 6.0;
        asm.add(
            brass(format!("spoke_{i}"), Primitive::cuboid(0.15, 0.01, 0.02))
                .at(angle.cos() * 0.2, 0.595, angle.sin() * 0.2)
                .rotated(0.0, angle, 0.0),
        );
    }

    for (corner, x, z) in corners(1.5, 0.8) {
        asm.add(
            brass(format!("corner_{corner}"), Primitive::cylinder(0.08, 0.08, 0.01, 8))
                .at(x, 0.595, z),
        );
    }
    asm.add(brass("border_front", Primitive::cuboid(3.2, 0.01, 0.03)).at(0.0, 0.595, 0.9))
        .add(brass("border_back", Primitive::cuboid(3.2, 0.01, 0.03)).at(0.0, 0.595, -0.9))
        .add(brass("border_left", Primitive::cuboid(0.03, 0.01, 1.6)).at(-1.65, 0.595, 0.0))
        .add(brass("border_right", Primitive::cuboid(0.03, 0.01, 1.6)).at(1.65, 0.595, 0.0));

    // Carved apron.
    asm.add(frame("apron_front", Primitive::cuboid(3.2, 0.3, 0.1)).at(0.0, 0.35, 0.95))
        .add(frame("apron_back", Primitive::cuboid(3.2, 0.3, 0.1)).at(0.0, 0.35, -0.95))
        .add(frame("apron_left", Primitive::cuboid(0.1, 0.3, 1.8)).at(-1.7, 0.35, 0.0))
        .add(frame("apron_right", Primitive::cuboid(0.1, 0.3, 1.8)).at(1.7, 0.35, 0.0));
    for (i, x) in [-1.2, -0.4, 0.4, 1.2].into_iter().enumerate() {
        asm.add(brass(format!("carving_{i}"), Primitive::cuboid(0.2, 0.1, 0.02)).at(x, 0.35, 1.0));
    }

    // Turned legs.
    for (corner, x, z) in corners(1.4, 0.8) {
        asm.add_group(group(format!("leg_{corner}")).at(x, -0.05, z), turned_leg);
    }

    // Stretchers.
    asm.add(frame("stretcher_long", Primitive::cuboid(2.4, 0.1, 0.1)).at(0.0, -0.25, 0.0))
        .add(
            frame("stretcher_cross", Primitive::cuboid(1.4, 0.1, 0.1))
                .at(0.0, -0.25, 0.0)
                .rotated(0.0, FRAC_PI_2, 0.0),
        )
        .add(
            brass("stretcher_medallion", Primitive::cylinder(0.18, 0.18, 0.12, 24))
                .at(0.0, -0.25, 0.0),
        );
    for (i, (x, z)) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -0.6), (0.0, 0.6)].into_iter().enumerate() {
        asm.add(
            brass(format!("rosette_{i}"), Primitive::cylinder(0.06, 0.06, 0.02, 16))
                .at(x, -0.25, z),
        );
    }

    // Lower shelf.
    asm.add(frame("shelf", Primitive::cuboid(2.8, 0.06, 1.6)).at(0.0, -0.5, 0.0))
        .add(frame("shelf_molding", Primitive::cuboid(2.75, 0.02, 1.55)).at(0.0, -0.47, 0.0))
        .add(brass("shelf_trim_front", Primitive::cuboid(2.8, 0.01, 0.02)).at(0.0, -0.44, 0.78))
        .add(brass("shelf_trim_back", Primitive::cuboid(2.8, 0.01, 0.02)).at(0.0, -0.44, -0.78))
        .add(brass("shelf_trim_left", Primitive::cuboid(0.02, 0.01, 1.6)).at(-1.38, -0.44, 0.0))
        .add(brass("shelf_trim_right", Primitive::cuboid(0.02, 0.01, 1.6)).at(1.38, -0.44, 0.0))
        .add(brass("shelf_inlay_long", Primitive::cuboid(2.2, 0.005, 0.03)).at(0.0, -0.435, 0.0))
        .add(
            brass("shelf_inlay_cross", Primitive::cuboid(1.2, 0.005, 0.03))
                .at(0.0, -0.435, 0.0)
                .rotated(0.0, FRAC_PI_2, 0.0),
        );
    for (corner, x, z) in corners(1.2, 0.6) {
        let support = Primitive::cylinder(0.02, 0.02, 0.15, 12);
        asm.add(brass(format!("shelf_support_{corner}"), support).at(x, -0.375, z));
    }
}

/// A leg turned from a tapered shaft, bulbs and collars.
fn turned_leg(leg: &mut Assembly<'_>) {
    leg.add(frame("shaft", Primitive::cylinder(0.05, 0.08, 1.2, 24)))
        .add(frame("upper_bulb", Primitive::sphere(0.09, 20)).at(0.0, 0.5, 0.0))
        .add(frame("upper_turning", Primitive::cylinder(0.075, 0.075, 0.06, 24)).at(0.0, 0.2, 0.0))
        .add(frame("middle_turning", Primitive::cylinder(0.08, 0.08, 0.04, 24)))
        .add(frame("lower_bulb", Primitive::sphere(0.07, 20)).at(0.0, -0.3, 0.0))
        .add(brass("collar_upper", Primitive::cylinder(0.06, 0.06, 0.03, 24)).at(0.0, 0.4, 0.0))
        .add(brass("collar_middle", Primitive::cylinder(0.065, 0.065, 0.025, 24)).at(0.0, 0.1, 0.0))
        .add(brass("collar_lower", Primitive::cylinder(0.06, 0.06, 0.02, 24)).at(0.0, -0.2, 0.0))
        .add(brass("foot", Primitive::cylinder(0.09, 0.09, 0.04, 24)).at(0.0, -0.62, 0.0))
        .add(
            gold("foot_ring", Primitive::torus(0.08, 0.01, 8, 24))
                .at(0.0, -0.64, 0.0)
                .rotated(FRAC_PI_2, 0.0, 0.0),
        );
}

pub(super) fn bookshelf(asm: &mut Assembly<'_>) {
    asm.add(frame("back_panel", Primitive::cuboid(2.0, 2.4, 0.08)).at(0.0, 1.2, -0.4))
        .add(frame("side_left", Primitive::cuboid(0.08, 2.4, 0.8)).at(-0.96, 1.2, 0.0))
        .add(frame("side_right", Primitive::cuboid(0.08, 2.4, 0.8)).at(0.96, 1.2, 0.0))
        .add(frame("crown", Primitive::cuboid(2.16, 0.12, 0.88)).at(0.0, 2.38, 0.0))
        .add(brass("crown_detail", Primitive::cuboid(2.0, 0.04, 0.04)).at(0.0, 2.45, 0.0))
        .add(frame("base", Primitive::cuboid(2.0, 0.16, 0.8)).at(0.0, 0.08, 0.0));

    for (i, y) in [0.7, 1.2, 1.7, 2.1].into_iter().enumerate() {
        asm.add_group(group(format!("shelf_{i}")).at(0.0, y, 0.0), |shelf| {
            shelf
                .add(frame("board", Primitive::cuboid(1.84, 0.08, 0.72)))
                .add(brass("trim", Primitive::cuboid(1.8, 0.01, 0.02)).at(0.0, 0.04, 0.36))
                .add(
                    brass("pin_left", Primitive::cylinder(0.01, 0.01, 0.06, 8))
                        .at(-0.75, -0.04, 0.35),
                )
                .add(
                    brass("pin_right", Primitive::cylinder(0.01, 0.01, 0.06, 8))
                        .at(0.75, -0.04, 0.35),
                );
        });
    }

    for (side, x) in [("left", -0.45), ("right", 0.45)] {
        asm.add(
            frame(format!("door_{side}"), Primitive::cuboid(0.82, 0.5, 0.04)).at(x, 0.35, 0.38),
        );
    }
    for (side, x) in [("left", -0.65), ("right", 0.65)] {
        asm.add(
            brass(format!("handle_{side}"), Primitive::cylinder(0.015, 0.015, 0.08, 8))
                .at(x, 0.35, 0.42),
        );
    }

    asm.add(brass("accent_strip", Primitive::cuboid(1.8, 0.02, 0.04)).at(0.0, 2.25, 0.3));
    for (corner, x, z) in corners(0.8, 0.3) {
        asm.add(
            brass(format!("foot_{corner}"), Primitive::cylinder(0.02, 0.02, 0.1, 8))
                .at(x, -0.05, z),
        );
    }
}

pub(super) fn stool(asm: &mut Assembly<'_>) {
    asm.add(fabric("seat", Primitive::cylinder(0.45, 0.45, 0.15, 32)).at(0.0, 0.35, 0.0))
        .add(frame("seat_base", Primitive::cylinder(0.42, 0.42, 0.05, 32)).at(0.0, 0.25, 0.0));

    for (corner, x, z) in corners(0.3, 0.3) {
        asm.add_group(group(format!("leg_{corner}")).at(x, -0.15, z), |leg| {
            leg.add(
                frame("shaft", Primitive::cylinder(0.02, 0.035, 0.8, 16))
                    .rotated(0.0, 0.0, splay(x, 0.05)),
            )
            .add(brass("foot_cap", Primitive::cylinder(0.025, 0.025, 0.02, 16)).at(0.0, -0.42, 0.0))
            .add(brass("ring", Primitive::cylinder(0.022, 0.022, 0.015, 16)).at(0.0, 0.1, 0.0));
        });
    }

    let ring = |radius: f32, tube: f32| Primitive::torus(radius, tube, 8, 32);
    asm.add(frame("ring_brace", ring(0.35, 0.015)).at(0.0, -0.35, 0.0).rotated(FRAC_PI_2, 0.0, 0.0))
        .add(frame("column", Primitive::cylinder(0.04, 0.04, 0.4, 16)).at(0.0, 0.05, 0.0))
        .add(brass("seat_trim", ring(0.44, 0.01)).at(0.0, 0.42, 0.0).rotated(FRAC_PI_2, 0.0, 0.0))
        .add(brass("footrest", ring(0.25, 0.02)).at(0.0, -0.2, 0.0).rotated(FRAC_PI_2, 0.0, 0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::FurnitureConfig;
    use atelier_materials::{build_materials, MaterialProfile};

    use glam::Vec3;

    use crate::node::{Group, Part, SceneNode};

    fn build(builder: fn(&mut Assembly<'_>)) -> Vec<SceneNode> {
        let set = build_materials(&MaterialProfile::heritage(), &FurnitureConfig::default());
        let mut asm = Assembly::new(&set);
        builder(&mut asm);
        asm.into_nodes()
    }

    fn names(nodes: &[SceneNode]) -> Vec<&str> {
        nodes.iter().map(SceneNode::name).collect()
    }

    #[test]
    fn test_armchair_top_level_layout() {
        let nodes = build(armchair);
        insta::assert_debug_snapshot!(names(&nodes), @r###"
        [
            "seat_cushion",
            "seat_frame",
            "backrest_cushion",
            "backrest_frame",
            "crown",
            "leg_front_left",
            "leg_front_right",
            "leg_back_left",
            "leg_back_right",
            "armrest_left",
            "armrest_right",
            "armrest_support_left",
            "armrest_support_right",
            "rail_front",
            "rail_back",
        ]
        "###);
    }

    fn legs(nodes: &[SceneNode]) -> Vec<&Group> {
        nodes
            .iter()
            .filter_map(|node| match node {
                SceneNode::Group(group) if group.name.starts_with("leg_") => Some(group),
                _ => None,
            })
            .collect()
    }

    fn child<'a>(group: &'a Group, name: &str) -> &'a Part {
        group
            .children
            .iter()
            .find_map(|node| match node {
                SceneNode::Part(part) if part.name == name => Some(part),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_only_shafts_splay() {
        for (builder, angle) in [(armchair as fn(&mut Assembly<'_>), 0.02), (stool, 0.05)] {
            let nodes = build(builder);
            let legs = legs(&nodes);
            assert_eq!(legs.len(), 4);
            for leg in legs {
                assert_eq!(leg.rotation, Vec3::ZERO);
                let shaft = child(leg, "shaft");
                assert_eq!(shaft.rotation.z.abs(), angle);
                assert_eq!(shaft.rotation.z > 0.0, leg.position.x < 0.0);
                assert_eq!(child(leg, "foot_cap").rotation, Vec3::ZERO);
            }
        }
    }

    #[test]
    fn test_spokes_ring_the_medallion() {
        let nodes = build(table);
        let spokes: Vec<_> = nodes
            .iter()
            .filter_map(|node| match node {
                SceneNode::Part(part) if part.name.starts_with("spoke_") => Some(part),
                _ => None,
            })
            .collect();
        assert_eq!(spokes.len(), 12);
        for spoke in spokes {
            let radius = (spoke.position.x.powi(2) + spoke.position.z.powi(2)).sqrt();
            assert!((radius - 0.2).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rings_lie_flat() {
        let nodes = build(stool);
        for node in &nodes {
            if let SceneNode::Part(part) = node {
                if part.primitive.kind_name() == "torus" {
                    assert_eq!(part.rotation.x, FRAC_PI_2, "{}", part.name);
                }
            }
        }
    }
}
