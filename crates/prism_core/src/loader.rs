//! JSON scene loading.
//!
//! A scene file looks like:
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [-3.0, 0.0, -16.0], "radius": 2.0, "material": "gray" },
//!     { "center": [1.5, -0.5, -18.0], "radius": 3.0,
//!       "material": { "albedo": [0.9, 0.1, 0.0, 0.0],
//!                     "diffuse_color": [0.2, 0.1, 0.3],
//!                     "specular_exponent": 10.0 } }
//!   ],
//!   "lights": [ { "position": [-20.0, 20.0, 20.0], "intensity": 1.5 } ],
//!   "ground": null
//! }
//! ```
//!
//! Materials are either a preset name or an inline table; omitted inline
//! fields take the default material's values. An omitted `ground` gives the
//! default tile, an explicit `null` removes it.

use std::path::Path;

use prism_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::scene::{GroundTile, Light, Material, Scene, Sphere};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sphere {index} has invalid radius {radius}")]
    InvalidSphere { index: usize, radius: f32 },

    #[error("Unknown material preset: {0}")]
    UnknownPreset(String),
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Deserialize)]
#[serde(untagged)]
enum MaterialEntry {
    Preset(String),
    Inline(Material),
}

impl Default for MaterialEntry {
    fn default() -> Self {
        MaterialEntry::Inline(Material::default())
    }
}

#[derive(Deserialize)]
struct SphereEntry {
    center: Vec3,
    radius: f32,
    #[serde(default)]
    material: MaterialEntry,
}

#[derive(Deserialize)]
struct SceneFile {
    #[serde(default)]
    spheres: Vec<SphereEntry>,
    #[serde(default)]
    lights: Vec<Light>,
    #[serde(default = "default_ground")]
    ground: Option<GroundTile>,
}

fn default_ground() -> Option<GroundTile> {
    Some(GroundTile::default())
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene from {}", path.display());

    let text = std::fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let file: SceneFile = serde_json::from_str(text)?;

    let mut spheres = Vec::with_capacity(file.spheres.len());
    for (index, entry) in file.spheres.into_iter().enumerate() {
        if !(entry.radius > 0.0 && entry.radius.is_finite()) {
            return Err(SceneError::InvalidSphere {
                index,
                radius: entry.radius,
            });
        }

        let material = match entry.material {
            MaterialEntry::Preset(name) => {
                Material::preset(&name).ok_or(SceneError::UnknownPreset(name))?
            }
            MaterialEntry::Inline(material) => material,
        };

        if material.albedo.min_element() < 0.0 {
            log::warn!("Sphere {index} has a negative albedo weight: {}", material.albedo);
        } else if material.albedo_sum() > 1.0 {
            log::warn!(
                "Sphere {index} albedo sums to {:.2}, surface will reflect more light than it receives",
                material.albedo_sum()
            );
        }

        spheres.push(Sphere::new(entry.center, entry.radius, material));
    }

    for (index, light) in file.lights.iter().enumerate() {
        if light.intensity <= 0.0 {
            log::warn!("Light {index} has non-positive intensity {}", light.intensity);
        }
    }

    let scene = Scene {
        spheres,
        lights: file.lights,
        ground: file.ground,
    };

    log::debug!(
        "Loaded scene: {} spheres, {} lights, ground {}",
        scene.sphere_count(),
        scene.light_count(),
        if scene.ground.is_some() { "on" } else { "off" }
    );

    Ok(scene)
}
