//! Scene description types for Prism.
//!
//! A scene is a read-only bundle of spheres, point lights and an optional
//! ground tile. It is built once before rendering and passed by reference
//! into every intersection and shading call.

use prism_math::{Color, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Optical properties of a surface.
///
/// `albedo` weights the four shading channels: diffuse, specular,
/// reflection and refraction, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Index of refraction of the medium inside the surface
    pub refractive_index: f32,

    /// Channel weights (diffuse, specular, reflection, refraction)
    pub albedo: Vec4,

    /// Diffuse color (RGB)
    pub diffuse_color: Color,

    /// Phong exponent for the specular highlight
    pub specular_exponent: f32,
}

impl Default for Material {
    /// Fully diffuse, opaque and black.
    fn default() -> Self {
        Self {
            refractive_index: 1.0,
            albedo: Vec4::new(1.0, 0.0, 0.0, 0.0),
            diffuse_color: Color::ZERO,
            specular_exponent: 0.0,
        }
    }
}

impl Material {
    /// Create a new material.
    pub fn new(
        refractive_index: f32,
        albedo: Vec4,
        diffuse_color: Color,
        specular_exponent: f32,
    ) -> Self {
        Self {
            refractive_index,
            albedo,
            diffuse_color,
            specular_exponent,
        }
    }

    /// Mostly diffuse gray with a soft highlight.
    pub fn gray() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.6, 0.3, 0.1, 0.0),
            Color::new(0.4, 0.4, 0.3),
            50.0,
        )
    }

    /// Matte violet.
    pub fn violet() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.9, 0.1, 0.0, 0.0),
            Color::new(0.2, 0.1, 0.3),
            10.0,
        )
    }

    /// Near-perfect mirror with a very sharp, very bright highlight.
    pub fn mirror() -> Self {
        Self::new(
            1.0,
            Vec4::new(0.0, 10.0, 0.8, 0.0),
            Color::new(1.0, 1.0, 1.0),
            1425.0,
        )
    }

    /// Tinted glass (index 1.5), mostly refractive.
    pub fn glass() -> Self {
        Self::new(
            1.5,
            Vec4::new(0.0, 0.5, 0.1, 0.8),
            Color::new(0.6, 0.3, 0.8),
            75.0,
        )
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "gray" => Some(Self::gray()),
            "violet" => Some(Self::violet()),
            "mirror" => Some(Self::mirror()),
            "glass" => Some(Self::glass()),
            _ => None,
        }
    }

    /// Sum of the four channel weights.
    pub fn albedo_sum(&self) -> f32 {
        self.albedo.x + self.albedo.y + self.albedo.z + self.albedo.w
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }
}

/// The finite ground tile lying in the plane `y = height`.
///
/// Only points with `|x| < x_extent` and `z_far < z < z_near` belong to the
/// tile. The diffuse color alternates between `colors[0]` and `colors[1]` on a
/// 2x2 grid; both entries are the same color by default, so the tile renders
/// uniformly unless a scene asks for two tones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundTile {
    pub height: f32,
    pub x_extent: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub colors: [Color; 2],
}

impl Default for GroundTile {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_extent: 10.0,
            z_near: -10.0,
            z_far: -30.0,
            colors: [Color::new(0.3, 0.2, 0.1), Color::new(0.3, 0.2, 0.1)],
        }
    }
}

impl GroundTile {
    /// Check whether a point on the plane lies inside the tile.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x.abs() < self.x_extent && point.z < self.z_near && point.z > self.z_far
    }

    /// Diffuse color of the tile at a point.
    pub fn color_at(&self, point: Vec3) -> Color {
        // Truncation toward zero, offset in x keeps the pattern stable across x = 0.
        let cell = (0.5 * point.x + 1000.0) as i32 + (0.5 * point.z) as i32;
        self.colors[(cell & 1) as usize]
    }

    /// Repaint `base` with the tile color at `point`.
    ///
    /// Only the diffuse color changes; a ground hit in front of a sphere keeps
    /// that sphere's albedo, refractive index and specular exponent.
    pub fn paint(&self, base: Material, point: Vec3) -> Material {
        Material {
            diffuse_color: self.color_at(point),
            ..base
        }
    }

    /// Material of a ground hit with nothing behind it.
    pub fn surface_material(&self, point: Vec3) -> Material {
        self.paint(Material::default(), point)
    }
}

/// A complete scene: spheres, lights and the optional ground tile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Spheres, in declaration order
    pub spheres: Vec<Sphere>,

    /// Point lights, in declaration order
    pub lights: Vec<Light>,

    /// Ground tile, if the scene has one
    pub ground: Option<GroundTile>,
}

impl Scene {
    /// Create a scene without a ground tile.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self {
            spheres,
            lights,
            ground: None,
        }
    }

    /// Enable a ground tile.
    pub fn with_ground(mut self, ground: GroundTile) -> Self {
        self.ground = Some(ground);
        self
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// The built-in demo scene: two matte spheres, two mirrors, a large glass
    /// sphere and a row of six small glass beads over the ground tile, lit by
    /// three lights.
    pub fn demo() -> Self {
        let glass = Material::glass();
        let bead = |x: f32| Sphere::new(Vec3::new(x, -2.5, -9.0), 0.85, glass);

        let spheres = vec![
            Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, Material::gray()),
            Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, Material::violet()),
            Sphere::new(Vec3::new(-8.0, 5.0, -17.0), 4.0, Material::mirror()),
            Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, Material::mirror()),
            Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass),
            bead(1.3),
            bead(-3.1),
            bead(3.0),
            bead(-4.3),
            bead(4.67),
            Sphere::new(
                Vec3::new(-5.7, -2.5, -9.0),
                0.85,
                Material {
                    diffuse_color: Color::new(0.6, 0.2, 0.8),
                    ..glass
                },
            ),
        ];

        let lights = vec![
            Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5),
            Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8),
            Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7),
        ];

        Self::new(spheres, lights).with_ground(GroundTile::default())
    }
}
