//! Scene composition for the Atelier furniture configurator.
//!
//! This crate provides:
//! - Themes bundling material, scale, geometry and motion data
//! - The scene composer that mounts a freshly built model per snapshot
//! - The persistent root transform and its idle animation
//!
//! ## Example
//!
//! ```
//! use atelier_core::{FurnitureConfig, FurnitureItem, Size};
//! use atelier_scene::{SceneComposer, Theme};
//!
//! let mut composer = SceneComposer::new(Theme::heritage());
//! let config = FurnitureConfig::default().with_size(Size::Large);
//! let model = composer.compose(FurnitureItem::Table, &config);
//! assert_eq!(model.scale, 1.18);
//!
//! // Once per rendered frame:
//! composer.tick(0.016);
//! ```

pub mod animator;
pub mod composer;
pub mod error;
pub mod root;
pub mod theme;

pub use animator::{Breathe, IdleAnimation, MAX_AMPLITUDE};
pub use composer::{item_or_default, SceneComposer, SceneSnapshot};
pub use error::{Result, ThemeError};
pub use root::RootTransform;
pub use theme::Theme;
