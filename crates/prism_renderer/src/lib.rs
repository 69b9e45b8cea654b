//! Prism Renderer - recursive ray tracing on the CPU.
//!
//! For every pixel a primary ray is cast from the eye; the shader follows
//! reflection and refraction rays up to a fixed depth and mixes them with
//! direct diffuse and specular lighting, testing every light for occlusion
//! with a shadow ray.

mod bucket;
mod camera;
mod ground;
mod hittable;
mod intersect;
mod optics;
mod output;
mod renderer;
mod shader;
mod sphere;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use intersect::scene_intersect;
pub use optics::{offset_origin, reflect, refract, SURFACE_EPSILON, TOTAL_INTERNAL_REFLECTION};
pub use output::{color_to_rgb, save_image, tone_map, write_ppm, OutputError, OutputResult};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use shader::cast_ray;

/// Re-export scene and math types used in the public API
pub use prism_core::{GroundTile, Light, Material, Scene, Sphere};
pub use prism_math::{Color, Ray, Vec3, Vec4};
