//! Primitive shapes and bounding boxes.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A primitive shape centered at its local origin.
///
/// Dimensions follow the conventions of the WebGL layer that draws them:
/// cylinders extend along Y, tori lie in the XY plane around the Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Primitive {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

impl Primitive {
    /// Create a box.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Primitive::Box { width, height, depth }
    }

    /// Create a (possibly tapered) cylinder along the Y axis.
    pub fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    ) -> Self {
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        }
    }

    /// Create a sphere with the same segment count in both directions.
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Primitive::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
        }
    }

    /// Create a torus around the Z axis.
    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Primitive::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        }
    }

    /// Short lowercase name of the shape kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Box { .. } => "box",
            Primitive::Cylinder { .. } => "cylinder",
            Primitive::Sphere { .. } => "sphere",
            Primitive::Torus { .. } => "torus",
        }
    }

    /// Bounding box in local (untransformed) space.
    pub fn local_bounds(&self) -> BoundingBox {
        let half = match *self {
            Primitive::Box { width, height, depth } => Vec3::new(width, height, depth) * 0.5,
            Primitive::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Primitive::Sphere { radius, .. } => Vec3::splat(radius),
            Primitive::Torus { radius, tube, .. } => {
                let outer = radius + tube;
                Vec3::new(outer, outer, tube)
            }
        };
        BoundingBox::new(-half, half)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl Iterator<Item = Vec3>) -> Option<Self> {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut has_points = false;

        for p in points {
            min = min.min(p);
            max = max.max(p);
            has_points = true;
        }

        if has_points {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Merge with another bounding box.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Check if a point is inside the bounding box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// The eight corner points.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Axis-aligned box enclosing this box after `matrix` is applied.
    pub fn transformed(&self, matrix: Mat4) -> BoundingBox {
        let corners = self.corners().map(|c| matrix.transform_point3(c));
        BoundingBox::from_points(corners.into_iter()).unwrap_or(*self)
    }
}
