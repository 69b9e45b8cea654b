//! Mirror reflection, Snell refraction and secondary-ray origin offsets.

use prism_math::Vec3;

/// Distance secondary ray origins are pushed off the surface.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Direction returned by [`refract`] under total internal reflection.
///
/// It is traced like any other direction, so under total internal reflection
/// the refraction channel samples whatever lies along +X from the hit point.
pub const TOTAL_INTERNAL_REFLECTION: Vec3 = Vec3::X;

/// Reflect an incoming direction about a normal.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - normal * 2.0 * incident.dot(normal)
}

/// Refract an incoming direction through a surface with Snell's law.
///
/// `eta_t` is the index of the medium behind the surface (in the direction
/// the normal points away from), `eta_i` the index on the normal's side.
/// Rays arriving from inside the medium are handled by flipping the normal
/// and swapping the indices. The result is not normalized.
pub fn refract(incident: Vec3, normal: Vec3, eta_t: f32, eta_i: f32) -> Vec3 {
    let cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    if cosi < 0.0 {
        return refract(incident, -normal, eta_i, eta_t);
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        TOTAL_INTERNAL_REFLECTION
    } else {
        incident * eta + normal * (eta * cosi - k.sqrt())
    }
}

/// Origin for a secondary ray leaving `point` along `direction`.
///
/// The point is pushed below the surface when the ray heads into it and
/// above the surface otherwise, so the ray does not hit the surface it
/// starts on.
#[inline]
pub fn offset_origin(point: Vec3, direction: Vec3, normal: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - normal * SURFACE_EPSILON
    } else {
        point + normal * SURFACE_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_directions() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, -1.0, 0.0).normalize(),
            Vec3::new(0.3, -0.9, 0.2).normalize(),
            Vec3::new(-0.7, 0.1, -0.5).normalize(),
            Vec3::NEG_Y,
            Vec3::X,
        ]
    }

    #[test]
    fn test_reflect_mirrors_normal_component() {
        let normals = [Vec3::Y, Vec3::new(1.0, 2.0, -0.5).normalize()];

        for n in normals {
            for i in sample_directions() {
                let r = reflect(i, n);
                assert!(
                    (r.dot(n) + i.dot(n)).abs() < 1e-5,
                    "reflect({i}, {n}) = {r}"
                );
                // Length is preserved
                assert!((r.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_reflect_head_on() {
        assert_eq!(reflect(Vec3::NEG_Y, Vec3::Y), Vec3::Y);
    }

    #[test]
    fn test_refract_normal_incidence_equal_indices() {
        let n = Vec3::new(0.0, 0.0, 1.0);
        let i = -n;
        assert_eq!(refract(i, n, 1.0, 1.0), i);
    }

    #[test]
    fn test_refract_equal_indices_passes_straight() {
        for i in sample_directions() {
            if i.dot(Vec3::Y).abs() < 1e-3 {
                continue;
            }
            let t = refract(i, Vec3::Y, 1.0, 1.0);
            assert!((t - i).length() < 1e-5, "refract({i}) = {t}");
        }
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_glass() {
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(i, Vec3::Y, 1.5, 1.0).normalize();

        // sin(theta_t) = sin(45deg) / 1.5
        let expected_sin = std::f32::consts::FRAC_1_SQRT_2 / 1.5;
        assert!((t.x - expected_sin).abs() < 1e-5);
        assert!(t.y < 0.0);
    }

    #[test]
    fn test_refract_from_inside_swaps_indices() {
        // Leaving glass straight through the surface is unaffected
        let t = refract(Vec3::Y, Vec3::Y, 1.5, 1.0);
        assert!((t - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_total_internal_reflection_sentinel() {
        // Leaving glass (index 1.5) at decreasing grazing angles; the critical
        // angle is asin(1/1.5), about 41.8 degrees from the normal.
        for degrees in (0..90).step_by(3) {
            let theta = (degrees as f32).to_radians();
            let i = Vec3::new(theta.sin(), theta.cos(), 0.0);

            let cosi = i.dot(Vec3::Y);
            let eta = 1.5_f32;
            let k = 1.0 - eta * eta * (1.0 - cosi * cosi);

            let t = refract(i, Vec3::Y, 1.5, 1.0);
            if k < 0.0 {
                assert_eq!(t, TOTAL_INTERNAL_REFLECTION, "at {degrees} degrees");
            } else {
                assert_ne!(t, TOTAL_INTERNAL_REFLECTION, "at {degrees} degrees");
                assert!(t.y > 0.0);
            }
        }
    }

    #[test]
    fn test_offset_origin_side() {
        let point = Vec3::new(0.0, -4.0, -20.0);

        let above = offset_origin(point, Vec3::new(0.0, 1.0, -1.0), Vec3::Y);
        assert!((above.y - (-4.0 + SURFACE_EPSILON)).abs() < 1e-6);

        let below = offset_origin(point, Vec3::new(0.0, -1.0, -1.0), Vec3::Y);
        assert!((below.y - (-4.0 - SURFACE_EPSILON)).abs() < 1e-6);

        // Tangent directions stay on the outside
        let tangent = offset_origin(point, Vec3::X, Vec3::Y);
        assert!(tangent.y > point.y);
    }
}
