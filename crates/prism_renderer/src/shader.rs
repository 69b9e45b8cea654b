//! Recursive Whitted-style shading.

use crate::intersect::scene_intersect;
use crate::optics::{offset_origin, reflect, refract};
use crate::renderer::RenderConfig;
use prism_core::Scene;
use prism_math::{Color, Ray};

/// Compute the color seen along a ray.
///
/// Returns `config.background` when the ray escapes the scene or once
/// `depth` exceeds `config.max_depth`. Otherwise the reflected and refracted
/// rays are traced one level deeper and blended with the direct diffuse and
/// specular lighting of every unoccluded light, weighted by the material's
/// albedo. Colors are not clamped here.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }
    let Some(hit) = scene_intersect(ray, scene, config.max_distance) else {
        return config.background;
    };

    let point = hit.point;
    let normal = hit.normal;
    let material = hit.material;

    let reflect_direction = reflect(ray.direction, normal).normalize();
    let refract_direction =
        refract(ray.direction, normal, material.refractive_index, 1.0).normalize();

    // Both secondary rays are always traced, even with zero albedo weight
    let reflect_ray = Ray::new(
        offset_origin(point, reflect_direction, normal),
        reflect_direction,
    );
    let refract_ray = Ray::new(
        offset_origin(point, refract_direction, normal),
        refract_direction,
    );
    let reflect_color = cast_ray(&reflect_ray, scene, depth + 1, config);
    let refract_color = cast_ray(&refract_ray, scene, depth + 1, config);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;

    for light in &scene.lights {
        let to_light = light.position - point;
        let light_direction = to_light.normalize();
        let light_distance = to_light.length();

        let shadow_origin = offset_origin(point, light_direction, normal);
        let shadow_ray = Ray::new(shadow_origin, light_direction);
        let occluded = scene_intersect(&shadow_ray, scene, config.max_distance)
            .is_some_and(|blocker| (blocker.point - shadow_origin).length() < light_distance);
        if occluded {
            continue;
        }

        diffuse_intensity += light.intensity * light_direction.dot(normal).max(0.0);
        specular_intensity += (-reflect(-light_direction, normal))
            .dot(ray.direction)
            .max(0.0)
            .powf(material.specular_exponent)
            * light.intensity;
    }

    material.diffuse_color * diffuse_intensity * material.albedo[0]
        + Color::ONE * specular_intensity * material.albedo[1]
        + reflect_color * material.albedo[2]
        + refract_color * material.albedo[3]
}
