//! Sequential reference renderer.
//!
//! Casts one primary ray per pixel through the pixel center and stores the
//! shaded, unclamped color in a row-major buffer.

use crate::shader::cast_ray;
use crate::Camera;
use prism_core::Scene;
use prism_math::Color;

/// Knobs shared by every ray of a render.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Deepest recursion level that is still shaded; deeper rays see the background
    pub max_depth: u32,
    /// Color returned by rays that escape the scene
    pub background: Color,
    /// Hits at or beyond this distance count as misses
    pub max_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: Color::new(0.1, 0.4, 0.5),
            max_distance: 1000.0,
        }
    }
}

/// Shade the primary ray through the center of pixel (`x`, `y`).
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    cast_ray(&camera.get_ray(x, y), scene, 0, config)
}

/// Linear, unclamped colors in scanline order: pixel (x, y) lives at
/// `x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// An all-black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }
}

/// Render the whole frame on the calling thread, top row first.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::debug!(
        "Rendering {}x{} sequentially, {} spheres, {} lights",
        camera.image_width,
        camera.image_height,
        scene.sphere_count(),
        scene.light_count()
    );

    let (width, height) = (camera.image_width, camera.image_height);
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| render_pixel(camera, scene, x, y, config))
        .collect();

    ImageBuffer {
        width,
        height,
        pixels,
    }
}
