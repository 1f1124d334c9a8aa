//! Themes: one coherent set of material, scale, geometry and motion data.

use std::fs;
use std::path::Path;

use atelier_geometry::{GeometryStyle, ScaleTable};
use atelier_materials::MaterialProfile;
use serde::{Deserialize, Serialize};

use crate::animator::IdleAnimation;
use crate::error::{Result, ThemeError};

/// Everything that differs between catalog variants.
///
/// Built-in themes cover the shipped variants; any other variant is plain
/// data loaded with [`Theme::from_json`] or [`Theme::load`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub style: GeometryStyle,
    pub materials: MaterialProfile,
    #[serde(default)]
    pub scales: ScaleTable,
    #[serde(default)]
    pub animation: IdleAnimation,
}

impl Theme {
    /// Names accepted by [`Theme::builtin`], default first.
    pub const BUILTIN: &'static [&'static str] = &["heritage", "classic", "atelier"];

    /// Lacquered exotic woods, gold and brass hardware, barely moving.
    pub fn heritage() -> Self {
        Self {
            name: "heritage".to_string(),
            style: GeometryStyle::Heritage,
            materials: MaterialProfile::heritage(),
            scales: ScaleTable::proportional(),
            animation: IdleAnimation::heritage(),
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            style: GeometryStyle::Classic,
            materials: MaterialProfile::classic(),
            scales: ScaleTable::classic(),
            animation: IdleAnimation::classic(),
        }
    }

    pub fn atelier() -> Self {
        Self {
            name: "atelier".to_string(),
            style: GeometryStyle::Atelier,
            materials: MaterialProfile::atelier(),
            scales: ScaleTable::proportional(),
            animation: IdleAnimation::atelier(),
        }
    }

    /// Look up a built-in theme by name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "heritage" => Ok(Self::heritage()),
            "classic" => Ok(Self::classic()),
            "atelier" => Ok(Self::atelier()),
            _ => Err(ThemeError::UnknownTheme(name.to_string())),
        }
    }

    pub fn names() -> &'static [&'static str] {
        Self::BUILTIN
    }

    /// Parse and validate a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Read, parse and validate a theme file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading theme from {}", path.display());
        let theme = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded theme '{}' ({} style)", theme.name, theme.style);
        Ok(theme)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every coefficient, size triple and animation parameter.
    pub fn validate(&self) -> Result<()> {
        self.materials.validate()?;
        self.scales.validate()?;
        self.animation.validate()?;
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::heritage()
    }
}
