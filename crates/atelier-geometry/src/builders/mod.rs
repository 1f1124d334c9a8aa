//! Item builders, grouped by geometry style.
//!
//! Each builder is a plain function writing a fixed part list into an
//! [`Assembly`]. Dimensions and positions are in the unscaled design space;
//! [`build_item`] wraps the result with the resolved scale and the item's
//! vertical framing offset.

mod atelier;
mod classic;
mod heritage;

use atelier_core::FurnitureItem;
use atelier_materials::MaterialSet;
use serde::{Deserialize, Serialize};

use crate::node::{Assembly, ItemModel};

/// One family of per-item builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryStyle {
    /// Flat part lists with light detailing.
    Classic,
    /// Grouped sub-assemblies with gold and brass hardware.
    #[default]
    Heritage,
    /// A single detailed chair.
    Atelier,
}

/// Populates an assembly with one design's parts.
pub type BuildFn = fn(&mut Assembly<'_>);

/// A builder together with the framing it expects.
#[derive(Clone, Copy)]
pub struct Blueprint {
    /// Name of the design this builder produces.
    pub design: &'static str,
    /// Vertical offset aligning the model's sit height with the camera.
    pub offset_y: f32,
    pub build: BuildFn,
}

impl std::fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blueprint")
            .field("design", &self.design)
            .field("offset_y", &self.offset_y)
            .finish_non_exhaustive()
    }
}

const SEAT_OFFSET: f32 = -0.5;
const FLOOR_OFFSET: f32 = -0.8;

/// Four corners in front-left, front-right, back-left, back-right order.
fn corners(x: f32, z: f32) -> [(&'static str, f32, f32); 4] {
    [
        ("front_left", -x, z),
        ("front_right", x, z),
        ("back_left", -x, -z),
        ("back_right", x, -z),
    ]
}

/// Splay rolling the foot of a left-hand leg outwards.
fn splay(x: f32, angle: f32) -> f32 {
    if x < 0.0 {
        angle
    } else {
        -angle
    }
}

impl GeometryStyle {
    pub const ALL: &'static [GeometryStyle] =
        &[GeometryStyle::Classic, GeometryStyle::Heritage, GeometryStyle::Atelier];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryStyle::Classic => "classic",
            GeometryStyle::Heritage => "heritage",
            GeometryStyle::Atelier => "atelier",
        }
    }

    /// The builder this style ships for `item`, if any.
    pub fn blueprint(&self, item: FurnitureItem) -> Option<Blueprint> {
        use FurnitureItem as Item;

        let (design, offset_y, build): (&'static str, f32, BuildFn) = match (self, item) {
            (Self::Classic, Item::Chair) => ("premium chair", SEAT_OFFSET, classic::chair),
            (Self::Classic, Item::Sofa) => ("luxury sofa", SEAT_OFFSET, classic::sofa),
            (Self::Classic, Item::Table) => ("elegant table", FLOOR_OFFSET, classic::table),
            (Self::Classic, Item::Bookshelf) => {
                ("modern bookshelf", FLOOR_OFFSET, classic::bookshelf)
            }
            (Self::Classic, Item::Ottoman) => ("premium ottoman", FLOOR_OFFSET, classic::ottoman),
            (Self::Heritage, Item::Chair) => ("royal armchair", SEAT_OFFSET, heritage::armchair),
            (Self::Heritage, Item::Sofa) => ("majlis sofa", SEAT_OFFSET, heritage::majlis_sofa),
            (Self::Heritage, Item::Table) => ("heritage table", FLOOR_OFFSET, heritage::table),
            (Self::Heritage, Item::Bookshelf) => {
                ("executive bookshelf", FLOOR_OFFSET, heritage::bookshelf)
            }
            (Self::Heritage, Item::Ottoman) => ("designer stool", FLOOR_OFFSET, heritage::stool),
            (Self::Atelier, Item::Chair) => ("ultra-premium chair", SEAT_OFFSET, atelier::chair),
            (Self::Atelier, _) => return None,
        };
        Some(Blueprint {
            design,
            offset_y,
            build,
        })
    }

    /// The chair builder every style falls back to.
    pub fn default_blueprint(&self) -> Blueprint {
        match self.blueprint(FurnitureItem::Chair) {
            Some(blueprint) => blueprint,
            None => Blueprint {
                design: "royal armchair",
                offset_y: SEAT_OFFSET,
                build: heritage::armchair,
            },
        }
    }
}

impl std::fmt::Display for GeometryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a complete model for `item`.
///
/// Items the style has no builder for get the style's chair. Every part is
/// bound to its descriptor from `materials` as it is created.
pub fn build_item(
    style: GeometryStyle,
    item: FurnitureItem,
    scale: f32,
    materials: &MaterialSet,
) -> ItemModel {
    let blueprint = style.blueprint(item).unwrap_or_else(|| {
        log::warn!("{style} style has no {item} builder, falling back to the chair");
        style.default_blueprint()
    });

    let mut assembly = Assembly::new(materials);
    (blueprint.build)(&mut assembly);

    let model = ItemModel {
        item,
        design: blueprint.design,
        style,
        scale,
        offset_y: blueprint.offset_y,
        nodes: assembly.into_nodes(),
    };
    log::debug!(
        "Built {} ({} style) for {}: {} parts at scale {}",
        model.design,
        style,
        item,
        model.part_count(),
        scale
    );
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::FurnitureConfig;
    use atelier_materials::{build_materials, Accent, MaterialProfile, MaterialRole};
    use proptest::prelude::*;

    use crate::node::SceneNode;

    fn materials() -> MaterialSet {
        build_materials(&MaterialProfile::heritage(), &FurnitureConfig::default())
    }

    fn count(style: GeometryStyle, item: FurnitureItem) -> usize {
        build_item(style, item, 1.0, &materials()).part_count()
    }

    #[test]
    fn test_heritage_part_counts() {
        assert_eq!(count(GeometryStyle::Heritage, FurnitureItem::Chair), 21);
        assert_eq!(count(GeometryStyle::Heritage, FurnitureItem::Sofa), 30);
        assert_eq!(count(GeometryStyle::Heritage, FurnitureItem::Table), 93);
        assert_eq!(count(GeometryStyle::Heritage, FurnitureItem::Bookshelf), 31);
        assert_eq!(count(GeometryStyle::Heritage, FurnitureItem::Ottoman), 18);
    }

    #[test]
    fn test_classic_part_counts() {
        assert_eq!(count(GeometryStyle::Classic, FurnitureItem::Chair), 14);
        assert_eq!(count(GeometryStyle::Classic, FurnitureItem::Sofa), 15);
        assert_eq!(count(GeometryStyle::Classic, FurnitureItem::Table), 9);
        assert_eq!(count(GeometryStyle::Classic, FurnitureItem::Bookshelf), 15);
        assert_eq!(count(GeometryStyle::Classic, FurnitureItem::Ottoman), 12);
    }

    #[test]
    fn test_atelier_falls_back_to_chair() {
        let chair = build_item(GeometryStyle::Atelier, FurnitureItem::Chair, 1.0, &materials());
        assert_eq!(chair.part_count(), 22);
        for item in FurnitureItem::ALL {
            let model = build_item(GeometryStyle::Atelier, *item, 1.0, &materials());
            assert_eq!(model.item, *item);
            assert_eq!(model.design, "ultra-premium chair");
            assert_eq!(model.nodes, chair.nodes);
            assert_eq!(model.offset_y, SEAT_OFFSET);
        }
    }

    #[test]
    fn test_offsets() {
        for style in GeometryStyle::ALL {
            assert_eq!(style.default_blueprint().offset_y, SEAT_OFFSET);
        }
        let table = GeometryStyle::Heritage.blueprint(FurnitureItem::Table).unwrap();
        assert_eq!(table.offset_y, FLOOR_OFFSET);
        let sofa = GeometryStyle::Classic.blueprint(FurnitureItem::Sofa).unwrap();
        assert_eq!(sofa.offset_y, SEAT_OFFSET);
    }

    #[test]
    fn test_tables_have_no_fabric() {
        for style in [GeometryStyle::Classic, GeometryStyle::Heritage] {
            let table = build_item(style, FurnitureItem::Table, 1.0, &materials());
            assert_eq!(table.count_role(MaterialRole::Fabric), 0);
            let bookshelf = build_item(style, FurnitureItem::Bookshelf, 1.0, &materials());
            assert_eq!(bookshelf.count_role(MaterialRole::Fabric), 0);
        }
    }

    #[test]
    fn test_heritage_hardware() {
        let sofa = build_item(GeometryStyle::Heritage, FurnitureItem::Sofa, 1.0, &materials());
        assert_eq!(sofa.count_role(MaterialRole::Accent(Accent::Gold)), 3);
        assert_eq!(sofa.count_role(MaterialRole::Accent(Accent::Brass)), 8);
        assert_eq!(sofa.count_role(MaterialRole::Fabric), 11);

        let table = build_item(GeometryStyle::Heritage, FurnitureItem::Table, 1.0, &materials());
        assert_eq!(table.count_role(MaterialRole::Accent(Accent::Gold)), 4);
    }

    #[test]
    fn test_parts_carry_role_material() {
        let set = materials();
        for style in GeometryStyle::ALL {
            for item in FurnitureItem::ALL {
                let model = build_item(*style, *item, 1.0, &set);
                for (part, _) in model.parts() {
                    let expected = set.for_role(part.role);
                    assert_eq!(part.material, expected, "{} in {}", part.name, model.design);
                }
            }
        }
    }

    #[test]
    fn test_models_stand_near_the_floor() {
        let set = materials();
        for style in GeometryStyle::ALL {
            for item in FurnitureItem::ALL {
                let model = build_item(*style, *item, 1.0, &set);
                let bounds = model.world_bounds().unwrap();
                let floor = bounds.min.y;
                assert!(floor > -2.0 && floor < -0.5, "{}: {:?}", model.design, bounds);
                assert!(bounds.max.y > -0.5, "{}: {:?}", model.design, bounds);
            }
        }
    }

    #[test]
    fn test_heritage_table_legs_are_groups() {
        let table = build_item(GeometryStyle::Heritage, FurnitureItem::Table, 1.0, &materials());
        let legs: Vec<_> = table
            .nodes
            .iter()
            .filter_map(|node| match node {
                SceneNode::Group(group) if group.name.starts_with("leg") => Some(group),
                _ => None,
            })
            .collect();
        assert_eq!(legs.len(), 4);
        assert!(legs.iter().all(|leg| leg.children.len() == 10));
    }

    #[test]
    fn test_classic_chair_layout() {
        let chair = build_item(GeometryStyle::Classic, FurnitureItem::Chair, 1.0, &materials());
        let names: Vec<_> = chair.parts().iter().map(|(part, _)| part.name.as_str()).collect();
        insta::assert_debug_snapshot!(names, @r###"
        [
            "seat_cushion",
            "seat_frame",
            "backrest_cushion",
            "backrest_frame",
            "leg_front_left",
            "leg_front_right",
            "leg_back_left",
            "leg_back_right",
            "armrest_left",
            "armrest_right",
            "armrest_support_left",
            "armrest_support_right",
            "brace_front",
            "brace_back",
        ]
        "###);
    }

    fn any_style() -> impl Strategy<Value = GeometryStyle> {
        prop::sample::select(GeometryStyle::ALL.to_vec())
    }

    fn any_item() -> impl Strategy<Value = FurnitureItem> {
        prop::sample::select(FurnitureItem::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn builds_are_deterministic(
            style in any_style(),
            item in any_item(),
            scale in 0.5f32..1.5,
        ) {
            let set = materials();
            let a = build_item(style, item, scale, &set);
            let b = build_item(style, item, scale, &set);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn scale_only_changes_the_wrapper(
            style in any_style(),
            item in any_item(),
            scale in 0.5f32..1.5,
        ) {
            let set = materials();
            let unit = build_item(style, item, 1.0, &set);
            let scaled = build_item(style, item, scale, &set);
            prop_assert_eq!(&unit.nodes, &scaled.nodes);
            prop_assert_eq!(scaled.scale, scale);
        }
    }
}
