//! Hittable trait and HitRecord for ray-object intersection.

use prism_core::Material;
use prism_math::{Ray, Vec3};

/// Record of the nearest ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the intersection
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal (outward, not flipped toward the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Distance along the ray to the nearest intersection with non-negative
    /// parameter, if any.
    fn ray_intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Material at a point on the surface.
    fn material_at(&self, point: Vec3) -> Material;

    /// Build the full hit record for an intersection at `distance`.
    fn hit_record(&self, ray: &Ray, distance: f32) -> HitRecord {
        let point = ray.at(distance);
        HitRecord {
            distance,
            point,
            normal: self.normal_at(point),
            material: self.material_at(point),
        }
    }
}
