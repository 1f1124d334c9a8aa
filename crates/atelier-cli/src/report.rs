//! Human-readable summary of a composed scene.

use std::fmt::Write;

use atelier_geometry::ItemModel;
use atelier_materials::{Accent, MaterialDescriptor, MaterialRole};

fn material_line(label: &str, material: &MaterialDescriptor) -> String {
    format!(
        "{label:<8} {}  roughness {:.2}  metalness {:.2}  clearcoat {:.2}",
        material.base_color.to_hex(),
        material.roughness,
        material.metalness,
        material.clearcoat,
    )
}

fn first_material(model: &ItemModel, role: MaterialRole) -> Option<MaterialDescriptor> {
    model
        .parts()
        .into_iter()
        .find(|(part, _)| part.role == role)
        .map(|(part, _)| part.material)
}

/// Render the summary printed by `--summary`.
pub fn summary(theme: &str, model: &ItemModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "design   {} ({} style, {} theme)", model.design, model.style, theme);
    let _ = writeln!(out, "item     {}", model.item);
    let _ = writeln!(out, "scale    {:.2}  offset {:.2}", model.scale, model.offset_y);
    let _ = writeln!(
        out,
        "parts    {}  (frame {}, fabric {}, gold {}, brass {})",
        model.part_count(),
        model.count_role(MaterialRole::Frame),
        model.count_role(MaterialRole::Fabric),
        model.count_role(MaterialRole::Accent(Accent::Gold)),
        model.count_role(MaterialRole::Accent(Accent::Brass)),
    );
    if let Some(bounds) = model.world_bounds() {
        let size = bounds.size();
        let _ = writeln!(out, "bounds   {:.2} x {:.2} x {:.2}", size.x, size.y, size.z);
    }

    for (label, role) in [("frame", MaterialRole::Frame), ("fabric", MaterialRole::Fabric)] {
        if let Some(material) = first_material(model, role) {
            let _ = writeln!(out, "{}", material_line(label, &material));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{FurnitureConfig, FurnitureItem, Size};
    use atelier_scene::{SceneComposer, Theme};

    #[test]
    fn test_table_summary() {
        let mut composer = SceneComposer::new(Theme::heritage());
        let config = FurnitureConfig::default().with_size(Size::Large);
        let model = composer.compose(FurnitureItem::Table, &config);
        let text = summary("heritage", model);

        assert!(text.starts_with("design   heritage table (heritage style, heritage theme)\n"));
        assert!(text.contains("scale    1.18  offset -0.80\n"));
        assert!(text.contains("parts    93  (frame "));
        assert!(text.contains("fabric 0,"));
        assert!(text.contains("frame    #8B4513"));
        assert!(!text.contains("\nfabric   #"));
    }

    #[test]
    fn test_chair_lists_fabric() {
        let mut composer = SceneComposer::new(Theme::classic());
        let model = composer.compose(FurnitureItem::Chair, &FurnitureConfig::default());
        let text = summary("classic", model);
        assert!(text.contains("\nfabric   #2C1810"));
        assert!(text.contains("bounds   "));
    }
}
