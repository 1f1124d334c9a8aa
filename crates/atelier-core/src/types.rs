//! Core value types for furniture configurations.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from hex string (e.g., "#8B4513" or "8B4513").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
                color.a = channel(6)? as f32 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| ParseError::InvalidColor { value: s.to_string() })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Declares a closed, string-named configuration axis.
macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $( $(#[$vmeta])* $(#[cfg_attr(feature = "serde", serde(alias = $alias))])* $variant, )+
        }

        impl $name {
            /// Every value of this axis, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The lowercase name used by the UI layer.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($label $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(ParseError::$err { value: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

attribute_enum! {
    /// Wood species used for the structural frame.
    WoodType, UnknownWood {
        Oak => "oak",
        #[default]
        Walnut => "walnut",
        Mahogany => "mahogany",
        Cherry => "cherry",
        Teak => "teak",
    }
}

attribute_enum! {
    /// Upholstery material.
    FabricType, UnknownFabric {
        #[default]
        Leather => "leather",
        Velvet => "velvet",
        Cotton => "cotton",
        Linen => "linen",
        Silk => "silk",
    }
}

attribute_enum! {
    /// Size variant of an item.
    Size, UnknownSize {
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
    }
}

attribute_enum! {
    /// The furniture types the configurator can show.
    FurnitureItem, UnknownItem {
        #[default]
        Chair => "chair",
        Sofa => "sofa",
        Table => "table",
        Bookshelf => "bookshelf",
        /// Shown as "stool" by some catalogs.
        Ottoman => "ottoman" | "stool",
    }
}

/// The user-selected attribute set for the model being viewed.
///
/// Every axis always holds exactly one value; `Default` is the configuration
/// the viewer starts with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FurnitureConfig {
    pub wood_type: WoodType,
    pub fabric_type: FabricType,
    pub frame_color: Color,
    pub fabric_color: Color,
    pub size: Size,
}

impl Default for FurnitureConfig {
    fn default() -> Self {
        Self {
            wood_type: WoodType::default(),
            fabric_type: FabricType::default(),
            frame_color: Color::from_rgb8(0x8B, 0x45, 0x13),
            fabric_color: Color::from_rgb8(0x2C, 0x18, 0x10),
            size: Size::default(),
        }
    }
}

impl FurnitureConfig {
    pub fn with_wood(mut self, wood_type: WoodType) -> Self {
        self.wood_type = wood_type;
        self
    }

    pub fn with_fabric(mut self, fabric_type: FabricType) -> Self {
        self.fabric_type = fabric_type;
        self
    }

    pub fn with_frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    pub fn with_fabric_color(mut self, color: Color) -> Self {
        self.fabric_color = color;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}
