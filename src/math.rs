use bevy::math::Vec3;

pub type Real = f32;

pub type Vector = Vec3;
pub type Point = Vec3;

#[inline(always)]
pub fn zero_vector() -> Vector {
    Vec3::ZERO
}

/// Normalizes `v`, returning zero for degenerate input instead of NaN.
#[inline(always)]
pub fn safe_normalize(v: Vector) -> Vector {
    v.normalize_or_zero()
}

/// Exact zero check inverse (prevents NaN from division by zero)
#[inline(always)]
pub fn inv_exact(e: Real) -> Real {
    if e == 0.0 { 0.0 } else { 1.0 / e }
}

/// Area and unit normal of the triangle `(a, b, c)`.
///
/// The normal follows the winding `(b - a) x (c - a)`. A collapsed triangle
/// reports zero area and a zero normal.
#[inline(always)]
pub fn triangle_area_normal(a: Point, b: Point, c: Point) -> (Real, Vector) {
    let cross = (b - a).cross(c - a);
    (0.5 * cross.length(), safe_normalize(cross))
}

/// Splits `v` into the component along the unit `normal` and the remainder.
#[inline(always)]
pub fn decompose(v: Vector, normal: Vector) -> (Vector, Vector) {
    let along = v.dot(normal) * normal;
    (along, v - along)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_area_normal_follows_winding() {
        let (area, normal) = triangle_area_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((area - 0.5).abs() < 1e-6);
        assert!((normal - Vec3::Z).length() < 1e-6);

        let (_, flipped) = triangle_area_normal(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert!((flipped + Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn collapsed_triangle_has_no_normal() {
        let (area, normal) = triangle_area_normal(Vec3::ONE, Vec3::ONE, Vec3::ONE);
        assert_eq!(area, 0.0);
        assert_eq!(normal, Vec3::ZERO);
    }

    #[test]
    fn decompose_recombines() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        let (normal, tangent) = decompose(v, Vec3::Y);
        assert_eq!(normal, Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(tangent, Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(normal + tangent, v);
    }
}
