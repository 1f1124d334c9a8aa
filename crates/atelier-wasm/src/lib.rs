//! WebAssembly bindings for the Atelier furniture configurator.
//!
//! The WebGL layer owns the canvas, lights and orbit controls; this crate
//! hands it the compiled scene and the animated root transform.
//!
//! ## Example
//!
//! ```js
//! import { Configurator } from 'atelier-wasm';
//!
//! const configurator = new Configurator('heritage');
//! configurator.setConfiguration({
//!   woodType: 'teak',
//!   fabricType: 'leather',
//!   frameColor: '#8B4513',
//!   fabricColor: '#2C1810',
//!   size: 'large',
//! });
//! const scene = configurator.selectItem('table');
//!
//! function frame(now) {
//!   const root = configurator.tick(now / 1000);
//!   // copy root.rotation / root.position / root.scale onto the three.js group
//!   requestAnimationFrame(frame);
//! }
//! ```

use atelier_core::{FurnitureConfig, FurnitureItem};
use atelier_scene::{item_or_default, SceneComposer, Theme, ThemeError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// The configurator core as seen from JavaScript.
#[wasm_bindgen]
pub struct Configurator {
    composer: SceneComposer,
    item: FurnitureItem,
    config: FurnitureConfig,
}

impl Configurator {
    fn with_theme(theme: Theme) -> Self {
        let mut configurator = Self {
            composer: SceneComposer::new(theme),
            item: FurnitureItem::default(),
            config: FurnitureConfig::default(),
        };
        configurator.recompose();
        configurator
    }

    fn recompose(&mut self) {
        self.composer.compose(self.item, &self.config);
    }

    fn switch_theme(&mut self, theme: Theme) {
        self.composer.set_theme(theme);
        self.recompose();
    }
}

#[wasm_bindgen]
impl Configurator {
    /// Create a configurator with a built-in theme (heritage when omitted).
    #[wasm_bindgen(constructor)]
    pub fn new(theme: Option<String>) -> Result<Configurator, JsError> {
        let theme = match theme {
            Some(name) => Theme::builtin(&name).map_err(theme_error)?,
            None => Theme::default(),
        };
        Ok(Self::with_theme(theme))
    }

    /// Get the version of the core.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Names of the built-in themes.
    #[wasm_bindgen(js_name = themeNames)]
    pub fn theme_names() -> Vec<String> {
        Theme::names().iter().map(|name| name.to_string()).collect()
    }

    /// Name of the active theme.
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.composer.theme().name.clone()
    }

    /// Switch to a built-in theme.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, name: &str) -> Result<(), JsError> {
        let theme = Theme::builtin(name).map_err(theme_error)?;
        self.switch_theme(theme);
        Ok(())
    }

    /// Switch to a theme described by a JSON string.
    #[wasm_bindgen(js_name = loadTheme)]
    pub fn load_theme(&mut self, json: &str) -> Result<(), JsError> {
        let theme = Theme::from_json(json).map_err(theme_error)?;
        self.switch_theme(theme);
        Ok(())
    }

    /// Replace the configuration snapshot and return the scene.
    #[wasm_bindgen(js_name = setConfiguration)]
    pub fn set_configuration(&mut self, config: JsValue) -> Result<JsValue, JsError> {
        self.config = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid configuration: {}", e)))?;
        self.recompose();
        self.scene()
    }

    /// Current configuration snapshot.
    #[wasm_bindgen(js_name = getConfiguration)]
    pub fn get_configuration(&self) -> Result<JsValue, JsError> {
        to_js(&self.config)
    }

    /// Select the item to show and return the scene. Unknown names show the
    /// chair.
    #[wasm_bindgen(js_name = selectItem)]
    pub fn select_item(&mut self, name: &str) -> Result<JsValue, JsError> {
        self.item = item_or_default(name);
        self.recompose();
        self.scene()
    }

    /// The mounted scene: theme name, root transform and model tree.
    #[wasm_bindgen]
    pub fn scene(&self) -> Result<JsValue, JsError> {
        match self.composer.snapshot() {
            Some(snapshot) => to_js(&snapshot),
            None => Ok(JsValue::NULL),
        }
    }

    /// Advance the idle animation to `elapsed` seconds and return the root
    /// transform.
    #[wasm_bindgen]
    pub fn tick(&mut self, elapsed: f64) -> Result<JsValue, JsError> {
        match self.composer.tick(elapsed) {
            Some(root) => to_js(root),
            None => Ok(JsValue::NULL),
        }
    }

    /// Number of primitive parts in the mounted model.
    #[wasm_bindgen(js_name = partCount)]
    pub fn part_count(&self) -> usize {
        self.composer.model().map_or(0, |model| model.part_count())
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn theme_error(error: ThemeError) -> JsError {
    log::warn!("Rejected theme: {}", error);
    JsError::new(&error.to_string())
}
