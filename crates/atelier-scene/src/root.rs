//! The persistent root transform models are mounted under.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

/// The one node that survives rebuilds.
///
/// The composer rebases it when a new model is mounted and the idle animator
/// writes its rotation, height and scale every frame. `base_y` and
/// `base_scale` are the rest values the animation oscillates around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootTransform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
    pub base_y: f32,
    pub base_scale: f32,
}

impl RootTransform {
    /// A root at rest for a model with the given offset and scale.
    pub fn new(base_y: f32, base_scale: f32) -> Self {
        Self {
            position: Vec3::new(0.0, base_y, 0.0),
            rotation: Vec3::ZERO,
            scale: base_scale,
            base_y,
            base_scale,
        }
    }

    /// Move the rest pose to a newly mounted model's framing.
    ///
    /// Rotation is left alone so the idle motion carries on across rebuilds.
    pub fn rebase(&mut self, base_y: f32, base_scale: f32) {
        self.position.y += base_y - self.base_y;
        self.scale *= base_scale / self.base_scale;
        self.base_y = base_y;
        self.base_scale = base_scale;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z),
            self.position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_at_rest() {
        let root = RootTransform::new(-0.8, 1.18);
        assert_eq!(root.position, Vec3::new(0.0, -0.8, 0.0));
        assert_eq!(root.scale, 1.18);
        assert_eq!(root.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_rebase_keeps_motion() {
        let mut root = RootTransform::new(-0.5, 1.0);
        root.rotation.y = 0.004;
        root.position.y = -0.5 + 0.001;
        root.rebase(-0.8, 0.8);

        assert_eq!(root.rotation.y, 0.004);
        assert!((root.position.y - (-0.8 + 0.001)).abs() < 1e-6);
        assert!((root.scale - 0.8).abs() < 1e-6);
        assert_eq!(root.base_y, -0.8);
    }

    #[test]
    fn test_matrix_applies_scale_then_offset() {
        let root = RootTransform::new(-0.5, 2.0);
        let p = root.matrix().transform_point3(Vec3::new(0.0, 1.0, 0.0));
        assert!((p.y - 1.5).abs() < 1e-6);
    }
}
