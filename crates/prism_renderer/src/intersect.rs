//! Scene-wide nearest-hit search.

use crate::hittable::{HitRecord, Hittable};
use prism_core::{Material, Scene};
use prism_math::Ray;

/// Find the nearest surface hit by `ray` among all spheres and the ground
/// tile.
///
/// Spheres are tested in order and a later sphere only replaces the current
/// hit when it is strictly closer. The ground tile then wins if it is strictly
/// closer still; its hit keeps the material of the sphere it hides (the
/// default material when there is none) with the tile color painted on. The
/// hit is dropped when it lies `max_distance` or further along the ray.
pub fn scene_intersect(ray: &Ray, scene: &Scene, max_distance: f32) -> Option<HitRecord> {
    let mut closest: Option<HitRecord> = None;

    for sphere in &scene.spheres {
        if let Some(distance) = sphere.ray_intersect(ray) {
            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(sphere.hit_record(ray, distance));
            }
        }
    }

    if let Some(ground) = &scene.ground {
        if let Some(distance) = ground.ray_intersect(ray) {
            if closest.map_or(true, |hit| distance < hit.distance) {
                let point = ray.at(distance);
                let hidden = closest.map_or_else(Material::default, |hit| hit.material);
                closest = Some(HitRecord {
                    distance,
                    point,
                    normal: ground.normal_at(point),
                    material: ground.paint(hidden, point),
                });
            }
        }
    }

    closest.filter(|hit| hit.distance < max_distance)
}
