//! Pinhole camera for primary ray generation.

use prism_math::{Ray, Vec3};

/// Pinhole camera looking down -Z with +Y up.
///
/// The image plane is centered on the view axis; pixel row 0 is the top of
/// the image.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Vertical field of view in degrees
    vfov: f32,

    eye: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            vfov: 60.0,
            eye: Vec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Vertical field of view in degrees.
    pub fn vfov(&self) -> f32 {
        self.vfov
    }

    /// Eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Generate the primary ray through the center of pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let x = (i as f32 + 0.5) - width / 2.0;
        // Flipped so that row 0 is at the top
        let y = -(j as f32 + 0.5) + height / 2.0;
        let z = -height / (2.0 * (self.vfov.to_radians() / 2.0).tan());

        Ray::new(self.eye, Vec3::new(x, y, z).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new().with_resolution(101, 101);
        let ray = camera.get_ray(50, 50);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert_eq!(camera.eye(), Vec3::ZERO);
        assert_eq!(camera.vfov(), 60.0);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_left_right_up_down() {
        let camera = Camera::new().with_resolution(800, 600);

        let center = camera.get_ray(400, 300).direction;
        let left = camera.get_ray(0, 300).direction;
        let right = camera.get_ray(799, 300).direction;
        let up = camera.get_ray(400, 0).direction;
        let down = camera.get_ray(400, 599).direction;

        assert!(left.x < center.x);
        assert!(right.x > center.x);
        assert!(up.y > center.y);
        assert!(down.y < center.y);
        assert!((left.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_vertical_field_of_view() {
        let camera = Camera::new().with_resolution(64, 64).with_fov(90.0);
        assert_eq!(camera.vfov(), 90.0);

        // Top edge of the image plane sits at 45 degrees
        let top = camera.get_ray(32, 0).direction;
        let angle = top.y.atan2(-top.z).to_degrees();
        assert!(angle < 45.0 && angle > 43.0, "angle = {angle}");
    }

    #[test]
    fn test_eye_offset() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new().with_resolution(10, 10).with_eye(eye);
        assert_eq!(camera.eye(), eye);
        assert_eq!(camera.get_ray(3, 7).origin, eye);
    }
}
