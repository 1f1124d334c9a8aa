//! Classic designs: flat part lists, no hardware.

use std::f32::consts::FRAC_PI_2;

use super::{corners, splay};
use crate::geometry::Primitive;
use crate::node::{fabric, frame, Assembly};

pub(super) fn chair(asm: &mut Assembly<'_>) {
    asm.add(fabric("seat_cushion", Primitive::cuboid(1.6, 0.25, 1.4)).at(0.0, 0.05, 0.1))
        .add(frame("seat_frame", Primitive::cuboid(1.7, 0.08, 1.5)).at(0.0, -0.1, 0.1))
        .add(fabric("backrest_cushion", Primitive::cuboid(1.6, 1.3, 0.2)).at(0.0, 0.9, -0.65))
        .add(frame("backrest_frame", Primitive::cuboid(1.7, 1.4, 0.06)).at(0.0, 0.9, -0.75));

    for (corner, x, z) in corners(0.75, 0.6) {
        asm.add(
            frame(format!("leg_{corner}"), Primitive::cylinder(0.04, 0.06, 0.85, 8))
                .at(x, -0.45, z)
                .rotated(0.0, 0.0, splay(x, 0.02)),
        );
    }

    for (side, x) in [("left", -0.8), ("right", 0.8)] {
        asm.add(
            fabric(format!("armrest_{side}"), Primitive::cuboid(0.18, 0.12, 0.9)).at(x, 0.35, 0.15),
        );
    }
    for (side, x) in [("left", -0.8), ("right", 0.8)] {
        let post = Primitive::cylinder(0.04, 0.05, 0.35, 8);
        asm.add(frame(format!("armrest_support_{side}"), post).at(x, 0.18, 0.55));
    }

    asm.add(frame("brace_front", Primitive::cuboid(1.4, 0.06, 0.06)).at(0.0, -0.25, 0.6))
        .add(frame("brace_back", Primitive::cuboid(1.4, 0.06, 0.06)).at(0.0, -0.25, -0.6));
}

pub(super) fn sofa(asm: &mut Assembly<'_>) {
    let bays = [-1.1, 0.0, 1.1];
    for (i, x) in bays.into_iter().enumerate() {
        asm.add(
            fabric(format!("seat_cushion_{i}"), Primitive::cuboid(0.9, 0.3, 1.4)).at(x, 0.1, 0.1),
        );
    }
    asm.add(frame("base", Primitive::cuboid(3.4, 0.12, 1.6)).at(0.0, -0.1, 0.1));

    for (i, x) in bays.into_iter().enumerate() {
        asm.add(
            fabric(format!("back_cushion_{i}"), Primitive::cuboid(0.9, 1.2, 0.25))
                .at(x, 0.85, -0.7),
        );
    }
    asm.add(frame("back_frame", Primitive::cuboid(3.4, 1.3, 0.08)).at(0.0, 0.85, -0.82));

    for (side, x) in [("left", -1.6), ("right", 1.6)] {
        asm.add(fabric(format!("arm_{side}"), Primitive::cuboid(0.25, 0.8, 1.4)).at(x, 0.55, 0.1));
    }

    for (corner, x, z) in corners(1.4, 0.6) {
        asm.add(
            frame(format!("leg_{corner}"), Primitive::cylinder(0.05, 0.07, 0.7, 8)).at(x, -0.5, z),
        );
    }

    asm.add(
        frame("piping", Primitive::cylinder(0.02, 0.02, 3.2, 8))
            .at(0.0, 0.25, 0.8)
            .rotated(0.0, 0.0, FRAC_PI_2),
    );
}

pub(super) fn table(asm: &mut Assembly<'_>) {
    asm.add(frame("top", Primitive::cuboid(2.2, 0.08, 1.3)).at(0.0, 0.42, 0.0))
        .add(frame("bevel", Primitive::cuboid(2.1, 0.04, 1.2)).at(0.0, 0.38, 0.0));

    for (corner, x, z) in corners(0.9, 0.5) {
        asm.add(
            frame(format!("leg_{corner}"), Primitive::cylinder(0.03, 0.05, 1.15, 8))
                .at(x, -0.15, z)
                .rotated(0.0, 0.0, splay(x, 0.05)),
        );
    }

    asm.add(frame("brace_long", Primitive::cuboid(1.6, 0.04, 0.04)).at(0.0, -0.4, 0.0))
        .add(
            frame("brace_cross", Primitive::cuboid(0.8, 0.04, 0.04))
                .at(0.0, -0.4, 0.0)
                .rotated(0.0, FRAC_PI_2, 0.0),
        )
        .add(frame("center_post", Primitive::cylinder(0.08, 0.06, 0.4, 8)).at(0.0, -0.2, 0.0));
}

pub(super) fn bookshelf(asm: &mut Assembly<'_>) {
    asm.add(frame("back_panel", Primitive::cuboid(1.8, 2.2, 0.04)).at(0.0, 1.1, -0.38))
        .add(frame("side_left", Primitive::cuboid(0.04, 2.2, 0.8)).at(-0.88, 1.1, 0.0))
        .add(frame("side_right", Primitive::cuboid(0.04, 2.2, 0.8)).at(0.88, 1.1, 0.0))
        .add(frame("top_panel", Primitive::cuboid(1.8, 0.04, 0.8)).at(0.0, 2.18, 0.0))
        .add(frame("bottom_panel", Primitive::cuboid(1.8, 0.04, 0.8)).at(0.0, 0.02, 0.0));

    let shelves = [0.6, 1.1, 1.6];
    for (i, y) in shelves.into_iter().enumerate() {
        asm.add(frame(format!("shelf_{i}"), Primitive::cuboid(1.72, 0.06, 0.72)).at(0.0, y, 0.0));
    }
    for (i, y) in shelves.into_iter().enumerate() {
        for (side, x) in [("left", -0.7), ("right", 0.7)] {
            let pin = Primitive::cylinder(0.008, 0.008, 0.04, 6);
            asm.add(frame(format!("pin_{i}_{side}"), pin).at(x, y - 0.03, 0.35));
        }
    }

    asm.add(frame("plinth", Primitive::cuboid(1.9, 0.1, 0.85)).at(0.0, -0.05, 0.0));
}

pub(super) fn ottoman(asm: &mut Assembly<'_>) {
    asm.add(fabric("cushion", Primitive::cylinder(0.55, 0.55, 0.35, 16)).at(0.0, 0.25, 0.0));

    let tufts = [(0.0, 0.0), (-0.2, -0.2), (0.2, -0.2), (-0.2, 0.2), (0.2, 0.2)];
    for (i, (x, z)) in tufts.into_iter().enumerate() {
        asm.add(frame(format!("tuft_{i}"), Primitive::sphere(0.02, 8)).at(x, 0.42, z));
    }

    asm.add(frame("base", Primitive::cylinder(0.5, 0.52, 0.1, 16)).at(0.0, 0.05, 0.0));

    for (corner, x, z) in corners(0.35, 0.35) {
        asm.add(
            frame(format!("leg_{corner}"), Primitive::cylinder(0.015, 0.025, 0.6, 8))
                .at(x, -0.35, z)
                .rotated(0.0, 0.0, splay(x, 0.1)),
        );
    }

    asm.add(
        frame("base_ring", Primitive::torus(0.52, 0.015, 8, 32))
            .at(0.0, 0.08, 0.0)
            .rotated(FRAC_PI_2, 0.0, 0.0),
    );
}
