#[allow(unused_imports)]
use vek::num_traits::real::Real;

pub type Float = f64;
pub type Vector2 = vek::vec::repr_c::vec2::Vec2<Float>;

pub const TAU: Float = core::f64::consts::TAU;
pub const V_ZERO: Vector2 = Vector2::new(0.0, 0.0);
pub const V_UNIT: Vector2 = Vector2::new(1.0, 0.0);
pub const V_ONES: Vector2 = Vector2::new(1.0, 1.0);

/// Geometry helpers on top of vek's `Vec2`.
///
/// vek already provides `+`, `-`, `* Float`, negation, `dot`, `magnitude`,
/// `distance` and `normalized`. A zero vector normalizes to non-finite
/// components; callers must guard against it.
pub trait Vector2Ext: Sized {
    /// Same as `self - other`
    fn diff(self, other: Vector2) -> Vector2;

    /// Scales the displacement from `center` instead of the absolute
    /// coordinates, so that a shape grows around that point.
    fn scaled_about(self, factor: Float, center: Vector2) -> Vector2;

    /// Per-axis version of [`Vector2Ext::scaled_about`].
    fn scaled_by_about(self, factor: Vector2, center: Vector2) -> Vector2;

    /// Rotates around `pivot` by `angle` radians, through polar coordinates.
    fn rotated_about(self, angle: Float, pivot: Vector2) -> Vector2;

    /// 2D determinant of the two vectors.
    fn cross(self, other: Vector2) -> Float;

    /// Angle from the X axis, in radians, in `(-PI; PI]`.
    fn polar_angle(self) -> Float;

    /// (radius, angle)
    fn to_polar(self) -> Vector2;

    fn from_polar(radius: Float, angle: Float) -> Vector2;

    /// Unit vector a quarter turn away from this one.
    fn unit_normal(self) -> Vector2;

    fn with_length(self, length: Float) -> Vector2;

    fn with_polar_angle(self, angle: Float) -> Vector2;

    /// Strictly inside the `min → max` rectangle.
    fn within_bounds(self, max: Vector2, min: Vector2) -> bool;

    fn all_finite(self) -> bool;
}

impl Vector2Ext for Vector2 {
    fn diff(self, other: Vector2) -> Vector2 {
        self - other
    }

    fn scaled_about(self, factor: Float, center: Vector2) -> Vector2 {
        self.scaled_by_about(Vector2::new(factor, factor), center)
    }

    fn scaled_by_about(self, factor: Vector2, center: Vector2) -> Vector2 {
        let diff = self - center;
        Vector2::new(diff.x * factor.x, diff.y * factor.y) + center
    }

    fn rotated_about(self, angle: Float, pivot: Vector2) -> Vector2 {
        let polar = (self - pivot).to_polar();
        Vector2::from_polar(polar.x, polar.y + angle) + pivot
    }

    fn cross(self, other: Vector2) -> Float {
        self.x * other.y - self.y * other.x
    }

    fn polar_angle(self) -> Float {
        self.y.atan2(self.x)
    }

    fn to_polar(self) -> Vector2 {
        Vector2::new(self.magnitude(), self.polar_angle())
    }

    fn from_polar(radius: Float, angle: Float) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(cos * radius, sin * radius)
    }

    fn unit_normal(self) -> Vector2 {
        Vector2::new(-self.y, self.x).normalized()
    }

    fn with_length(self, length: Float) -> Vector2 {
        self.normalized() * length
    }

    fn with_polar_angle(self, angle: Float) -> Vector2 {
        Vector2::from_polar(self.magnitude(), angle)
    }

    fn within_bounds(self, max: Vector2, min: Vector2) -> bool {
        self.x < max.x && self.y < max.y && self.x > min.x && self.y > min.y
    }

    fn all_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Per-axis minimum of a point set; the origin if there are no points.
pub fn min_of(points: &[Vector2]) -> Vector2 {
    let mut iter = points.iter().copied();
    match iter.next() {
        Some(first) => iter.fold(first, |acc, p| Vector2::new(acc.x.min(p.x), acc.y.min(p.y))),
        None => V_ZERO,
    }
}

/// Per-axis maximum of a point set; the origin if there are no points.
pub fn max_of(points: &[Vector2]) -> Vector2 {
    let mut iter = points.iter().copied();
    match iter.next() {
        Some(first) => iter.fold(first, |acc, p| Vector2::new(acc.x.max(p.x), acc.y.max(p.y))),
        None => V_ZERO,
    }
}
