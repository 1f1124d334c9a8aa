//! Rebuilds the mounted model from configuration snapshots.

use atelier_core::{FurnitureConfig, FurnitureItem};
use atelier_geometry::{build_item, resolve_scale, ItemModel};
use atelier_materials::MaterialCache;
use serde::Serialize;

use crate::root::RootTransform;
use crate::theme::Theme;

/// Parse an item name, falling back to the chair for unknown names.
pub fn item_or_default(name: &str) -> FurnitureItem {
    name.parse().unwrap_or_else(|_| {
        log::warn!("Unknown furniture item '{name}', showing the chair");
        FurnitureItem::default()
    })
}

#[derive(Debug, Clone)]
struct Mounted {
    item: FurnitureItem,
    config: FurnitureConfig,
    model: ItemModel,
}

/// What the rendering layer draws for one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot<'a> {
    pub theme: &'a str,
    pub root: &'a RootTransform,
    pub model: &'a ItemModel,
}

/// Owns the root transform and the model mounted under it.
///
/// `compose` and `tick` both take `&mut self`, so a rebuild always completes
/// before the next animation step reads the root.
#[derive(Debug)]
pub struct SceneComposer {
    theme: Theme,
    materials: MaterialCache,
    root: Option<RootTransform>,
    mounted: Option<Mounted>,
    stale: bool,
    rebuilds: usize,
}

impl SceneComposer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            materials: MaterialCache::new(),
            root: None,
            mounted: None,
            stale: false,
            rebuilds: 0,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme. The next `compose` rebuilds even for an unchanged
    /// snapshot.
    pub fn set_theme(&mut self, theme: Theme) {
        log::debug!("Switching theme '{}' -> '{}'", self.theme.name, theme.name);
        self.theme = theme;
        self.materials.clear();
        self.stale = true;
    }

    /// Mount the model for `item` under `config`.
    ///
    /// A snapshot equal to the mounted one is not rebuilt. Otherwise the whole
    /// model is replaced and the root is rebased to its framing without
    /// resetting the idle motion.
    pub fn compose(&mut self, item: FurnitureItem, config: &FurnitureConfig) -> &ItemModel {
        let stale = self.stale;
        let current = self
            .mounted
            .take()
            .filter(|mounted| !stale && mounted.item == item && mounted.config == *config);

        let mounted = match current {
            Some(mounted) => {
                log::trace!("Snapshot unchanged, keeping mounted {}", mounted.model.design);
                mounted
            }
            None => self.rebuild(item, config),
        };
        &self.mounted.insert(mounted).model
    }

    /// Like [`SceneComposer::compose`] for an item given by name.
    pub fn compose_named(&mut self, name: &str, config: &FurnitureConfig) -> &ItemModel {
        self.compose(item_or_default(name), config)
    }

    fn rebuild(&mut self, item: FurnitureItem, config: &FurnitureConfig) -> Mounted {
        let materials = self.materials.resolve(&self.theme.materials, config);
        let scale = resolve_scale(&self.theme.scales, item, config.size);
        let model = build_item(self.theme.style, item, scale, &materials);

        match self.root.as_mut() {
            Some(root) => root.rebase(model.offset_y, model.scale),
            None => self.root = Some(RootTransform::new(model.offset_y, model.scale)),
        }
        self.stale = false;
        self.rebuilds += 1;

        Mounted {
            item,
            config: config.clone(),
            model,
        }
    }

    /// Advance the idle animation. Before the first mount this does nothing
    /// and returns `None`.
    pub fn tick(&mut self, elapsed: f64) -> Option<&RootTransform> {
        self.theme.animation.tick(self.root.as_mut(), elapsed);
        self.root.as_ref()
    }

    pub fn root(&self) -> Option<&RootTransform> {
        self.root.as_ref()
    }

    pub fn model(&self) -> Option<&ItemModel> {
        self.mounted.as_ref().map(|mounted| &mounted.model)
    }

    pub fn snapshot(&self) -> Option<SceneSnapshot<'_>> {
        match (&self.root, &self.mounted) {
            (Some(root), Some(mounted)) => Some(SceneSnapshot {
                theme: &self.theme.name,
                root,
                model: &mounted.model,
            }),
            _ => None,
        }
    }

    /// Number of models built so far.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Frame and fabric descriptors built so far.
    pub fn material_builds(&self) -> (usize, usize) {
        (self.materials.frame_builds(), self.materials.fabric_builds())
    }
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
