//! Ray intersection with the finite ground tile.

use crate::hittable::Hittable;
use prism_core::{GroundTile, Material};
use prism_math::{Ray, Vec3};

/// Rays whose vertical direction component is at most this are treated as
/// parallel to the ground.
const PARALLEL_EPSILON: f32 = 1e-3;

impl Hittable for GroundTile {
    fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        if ray.direction.y.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let d = -(ray.origin.y - self.height) / ray.direction.y;
        if d > 0.0 && self.contains(ray.at(d)) {
            Some(d)
        } else {
            None
        }
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        Vec3::Y
    }

    fn material_at(&self, point: Vec3) -> Material {
        self.surface_material(point)
    }
}
