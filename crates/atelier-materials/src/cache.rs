//! Dependency-keyed memoization of material descriptors.

use atelier_core::{Color, FabricType, FurnitureConfig, WoodType};

use crate::material::{fabric_material, frame_material, MaterialDescriptor, MaterialSet};
use crate::profile::MaterialProfile;

/// Remembers the last frame and fabric descriptors and the inputs they were
/// built from.
///
/// The frame descriptor is rebuilt only when `(frame_color, wood_type)`
/// changes and the fabric descriptor only when `(fabric_color, fabric_type)`
/// changes. Call [`MaterialCache::clear`] when the profile itself changes.
#[derive(Debug, Clone, Default)]
pub struct MaterialCache {
    frame: Option<((Color, WoodType), MaterialDescriptor)>,
    fabric: Option<((Color, FabricType), MaterialDescriptor)>,
    frame_builds: usize,
    fabric_builds: usize,
}

impl MaterialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the descriptors for `config`, rebuilding only stale ones.
    pub fn resolve(&mut self, profile: &MaterialProfile, config: &FurnitureConfig) -> MaterialSet {
        let frame_key = (config.frame_color, config.wood_type);
        let frame = match &self.frame {
            Some((key, material)) if *key == frame_key => {
                log::trace!("frame material cache hit ({})", config.wood_type);
                *material
            }
            _ => {
                log::trace!(
                    "building frame material ({}, {})",
                    config.frame_color,
                    config.wood_type
                );
                let material = frame_material(profile, config.frame_color, config.wood_type);
                self.frame = Some((frame_key, material));
                self.frame_builds += 1;
                material
            }
        };

        let fabric_key = (config.fabric_color, config.fabric_type);
        let fabric = match &self.fabric {
            Some((key, material)) if *key == fabric_key => {
                log::trace!("fabric material cache hit ({})", config.fabric_type);
                *material
            }
            _ => {
                log::trace!(
                    "building fabric material ({}, {})",
                    config.fabric_color,
                    config.fabric_type
                );
                let material = fabric_material(profile, config.fabric_color, config.fabric_type);
                self.fabric = Some((fabric_key, material));
                self.fabric_builds += 1;
                material
            }
        };

        MaterialSet {
            frame,
            fabric,
            gold: profile.gold,
            brass: profile.brass,
        }
    }

    /// Forget every cached descriptor.
    pub fn clear(&mut self) {
        self.frame = None;
        self.fabric = None;
    }

    /// Number of frame descriptors built so far.
    pub fn frame_builds(&self) -> usize {
        self.frame_builds
    }

    /// Number of fabric descriptors built so far.
    pub fn fabric_builds(&self) -> usize {
        self.fabric_builds
    }
}
