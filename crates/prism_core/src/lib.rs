//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`, `GroundTile`
//! - **Scene files**: JSON loading with material presets and validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_scene, Scene};
//!
//! let scene = load_scene("spheres.json")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{GroundTile, Light, Material, Scene, Sphere};
