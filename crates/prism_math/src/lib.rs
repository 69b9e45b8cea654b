// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod ray;
pub use ray::Ray;

/// Linear RGB color, stored as (r, g, b) in x, y, z.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec4_indexing() {
        let albedo = Vec4::new(0.6, 0.3, 0.1, 0.0);
        assert_eq!(albedo[0], 0.6);
        assert_eq!(albedo[3], 0.0);
    }
}
