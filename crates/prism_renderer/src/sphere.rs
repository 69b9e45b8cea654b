//! Ray-sphere intersection.

use crate::hittable::Hittable;
use prism_core::{Material, Sphere};
use prism_math::{Ray, Vec3};

impl Hittable for Sphere {
    /// Geometric test: project the center onto the ray, compare the squared
    /// perpendicular distance with the squared radius, then step back and
    /// forth by the half-chord.
    fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        // Origin inside the sphere: the far root is the visible one
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            return None;
        }
        Some(t)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn material_at(&self, _point: Vec3) -> Material {
        self.material
    }
}
