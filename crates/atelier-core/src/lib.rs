//! Core types for the Atelier furniture configurator.
//!
//! This crate provides the value types shared by every other atelier crate:
//! - The closed attribute enums (wood, fabric, size, furniture item)
//! - Hex-parsed colors
//! - The `FurnitureConfig` snapshot handed over by the UI layer
//! - Parse errors

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
