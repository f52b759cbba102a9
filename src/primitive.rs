use crate::bezier::{arc_length, cubic_extrema, quadratic_extremum};
use crate::bounds::AxisAlignedBox;
use crate::segment::Geometry;
use crate::vector::{Float, Vector2, Vector2Ext, TAU, V_ZERO};

use vek::bezier::CubicBezier2;
use vek::bezier::QuadraticBezier2;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

fn clamp_unit(t: Float) -> Float {
    t.clamp(0.0, 1.0)
}

/// Pen lift: nothing is drawn between `start` and `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Move {
    start: Vector2,
    end: Vector2,
}

impl Move {
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Per-axis version of [`Geometry::scale`].
    pub fn scale_by(&self, factor: Vector2, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_by_about(factor, center),
            self.end.scaled_by_about(factor, center),
        )
    }
}

impl Geometry for Move {
    fn start(&self) -> Vector2 {
        self.start
    }

    fn end(&self) -> Vector2 {
        self.end
    }

    /// A move has no interior: the first half samples `start`, the rest `end`.
    fn point(&self, t: Float) -> Vector2 {
        match t < 0.5 {
            true => self.start,
            false => self.end,
        }
    }

    fn tangent(&self, _t: Float) -> Vector2 {
        (self.end - self.start).normalized()
    }

    fn length(&self) -> Float {
        0.0
    }

    fn bounds(&self) -> AxisAlignedBox {
        AxisAlignedBox::new(self.start, self.end)
    }

    fn translate(&self, translation: Vector2) -> Self {
        Self::new(self.start + translation, self.end + translation)
    }

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self {
        Self::new(
            self.start.rotated_about(angle, pivot),
            self.end.rotated_about(angle, pivot),
        )
    }

    fn scale(&self, factor: Float, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_about(factor, center),
            self.end.scaled_about(factor, center),
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    start: Vector2,
    end: Vector2,
}

impl Line {
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Per-axis version of [`Geometry::scale`].
    pub fn scale_by(&self, factor: Vector2, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_by_about(factor, center),
            self.end.scaled_by_about(factor, center),
        )
    }
}

impl Geometry for Line {
    fn start(&self) -> Vector2 {
        self.start
    }

    fn end(&self) -> Vector2 {
        self.end
    }

    fn point(&self, t: Float) -> Vector2 {
        match clamp_unit(t) {
            t if t == 0.0 => self.start,
            t if t == 1.0 => self.end,
            t => self.start + (self.end - self.start) * t,
        }
    }

    fn tangent(&self, _t: Float) -> Vector2 {
        (self.end - self.start).normalized()
    }

    fn length(&self) -> Float {
        self.start.distance(self.end)
    }

    fn bounds(&self) -> AxisAlignedBox {
        AxisAlignedBox::new(self.start, self.end)
    }

    fn translate(&self, translation: Vector2) -> Self {
        Self::new(self.start + translation, self.end + translation)
    }

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self {
        Self::new(
            self.start.rotated_about(angle, pivot),
            self.end.rotated_about(angle, pivot),
        )
    }

    fn scale(&self, factor: Float, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_about(factor, center),
            self.end.scaled_about(factor, center),
        )
    }
}

/// Circular arc going from `start` around `center` by `angle` radians.
///
/// A positive angle turns from the X axis towards the Y axis.
/// The magnitude of the angle may exceed a full turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    start: Vector2,
    end: Vector2,
    center: Vector2,
    angle: Float,
    radius: Float,
}

impl Arc {
    pub fn new(start: Vector2, center: Vector2, angle: Float) -> Self {
        let end = center + (start - center).rotated_about(angle, V_ZERO);
        Self {
            start,
            end,
            center,
            angle,
            radius: start.distance(center),
        }
    }

    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Signed sweep, in radians
    pub fn angle(&self) -> Float {
        self.angle
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    // start, relative to the center, after `t * angle` radians
    fn radius_vector(&self, t: Float) -> Vector2 {
        (self.start - self.center).rotated_about(t * self.angle, V_ZERO)
    }

    /// Checks if the sweep passes through the direction `value`
    /// (radians from the X axis).
    pub fn arc_contains(&self, value: Float) -> bool {
        if self.angle.abs() >= TAU {
            return true;
        }

        let start = (self.start - self.center).polar_angle() - value;
        let end = (self.end - self.center).polar_angle() - value;

        match self.angle > 0.0 {
            true => (start <= 0.0 && end >= 0.0)
                || (start > 0.0 && end > 0.0 && start > end)
                || (start <= 0.0 && end <= 0.0 && start > end),
            false => (start >= 0.0 && end <= 0.0)
                || (start >= 0.0 && end >= 0.0 && start < end)
                || (start <= 0.0 && end <= 0.0 && start < end),
        }
    }

    /// Per-axis version of [`Geometry::scale`].
    ///
    /// An arc stays circular only if both factors have the same magnitude;
    /// `None` otherwise. Opposite signs mirror the arc, which reverses
    /// its sweep.
    pub fn scale_by(&self, factor: Vector2, center: Vector2) -> Option<Self> {
        let magnitude = factor.x.abs();
        if magnitude != factor.y.abs() {
            return None;
        }

        let mirrored = (factor.x < 0.0) != (factor.y < 0.0);
        let angle = match mirrored {
            true => -self.angle,
            false => self.angle,
        };

        let scaled = self.transformed(|p| p.scaled_by_about(factor, center), self.radius * magnitude);
        Some(Self { angle, ..scaled })
    }

    fn transformed<F: Fn(Vector2) -> Vector2>(&self, f: F, radius: Float) -> Self {
        Self {
            start: f(self.start),
            end: f(self.end),
            center: f(self.center),
            angle: self.angle,
            radius,
        }
    }
}

impl Geometry for Arc {
    fn start(&self) -> Vector2 {
        self.start
    }

    fn end(&self) -> Vector2 {
        self.end
    }

    fn point(&self, t: Float) -> Vector2 {
        match clamp_unit(t) {
            t if t == 0.0 => self.start,
            t if t == 1.0 => self.end,
            t => self.center + self.radius_vector(t),
        }
    }

    fn tangent(&self, t: Float) -> Vector2 {
        -self.normal(t).unit_normal()
    }

    /// Points towards the center for a positive sweep, away from it otherwise.
    fn normal(&self, t: Float) -> Vector2 {
        let sign = match self.angle < 0.0 {
            true => 1.0,
            false => -1.0,
        };
        (self.radius_vector(clamp_unit(t)) * sign).normalized()
    }

    fn length(&self) -> Float {
        (self.radius * self.angle).abs()
    }

    fn bounds(&self) -> AxisAlignedBox {
        let c = self.center;
        let r = self.radius;
        let endpoints = AxisAlignedBox::new(self.start, self.end);

        let right = match self.arc_contains(0.0) {
            true => c.x + r,
            false => endpoints.max.x,
        };
        let bottom = match self.arc_contains(TAU / 4.0) {
            true => c.y + r,
            false => endpoints.max.y,
        };
        let top = match self.arc_contains(-TAU / 4.0) {
            true => c.y - r,
            false => endpoints.min.y,
        };
        let left = match self.arc_contains(-TAU / 2.0) {
            true => c.x - r,
            false => endpoints.min.x,
        };

        AxisAlignedBox {
            min: Vector2::new(left, top),
            max: Vector2::new(right, bottom),
        }
    }

    fn translate(&self, translation: Vector2) -> Self {
        self.transformed(|p| p + translation, self.radius)
    }

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self {
        self.transformed(|p| p.rotated_about(angle, pivot), self.radius)
    }

    fn scale(&self, factor: Float, center: Vector2) -> Self {
        self.transformed(|p| p.scaled_about(factor, center), self.radius * factor.abs())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticCurve {
    start: Vector2,
    control: Vector2,
    end: Vector2,
}

impl QuadraticCurve {
    pub fn new(start: Vector2, control: Vector2, end: Vector2) -> Self {
        Self { start, control, end }
    }

    pub fn control(&self) -> Vector2 {
        self.control
    }

    /// Per-axis version of [`Geometry::scale`].
    pub fn scale_by(&self, factor: Vector2, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_by_about(factor, center),
            self.control.scaled_by_about(factor, center),
            self.end.scaled_by_about(factor, center),
        )
    }

    pub fn bezier(&self) -> QuadraticBezier2<Float> {
        QuadraticBezier2 {
            start: self.start,
            ctrl: self.control,
            end: self.end,
        }
    }
}

impl Geometry for QuadraticCurve {
    fn start(&self) -> Vector2 {
        self.start
    }

    fn end(&self) -> Vector2 {
        self.end
    }

    fn point(&self, t: Float) -> Vector2 {
        match clamp_unit(t) {
            t if t == 0.0 => self.start,
            t if t == 1.0 => self.end,
            t => self.bezier().evaluate(t),
        }
    }

    fn tangent(&self, t: Float) -> Vector2 {
        self.bezier().evaluate_derivative(clamp_unit(t)).normalized()
    }

    fn length(&self) -> Float {
        let bezier = self.bezier();
        arc_length(|t| bezier.evaluate_derivative(t).magnitude())
    }

    fn bounds(&self) -> AxisAlignedBox {
        let (p0, p1, p2) = (self.start, self.control, self.end);
        let mut bounds = AxisAlignedBox::new(p0, p2);

        let tx = quadratic_extremum(p0.x, p1.x, p2.x);
        let ty = quadratic_extremum(p0.y, p1.y, p2.y);
        for t in tx.into_iter().chain(ty) {
            bounds = bounds.expanded_to(self.point(t));
        }

        bounds
    }

    fn translate(&self, translation: Vector2) -> Self {
        Self::new(
            self.start + translation,
            self.control + translation,
            self.end + translation,
        )
    }

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self {
        Self::new(
            self.start.rotated_about(angle, pivot),
            self.control.rotated_about(angle, pivot),
            self.end.rotated_about(angle, pivot),
        )
    }

    fn scale(&self, factor: Float, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_about(factor, center),
            self.control.scaled_about(factor, center),
            self.end.scaled_about(factor, center),
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicCurve {
    start: Vector2,
    control1: Vector2,
    control2: Vector2,
    end: Vector2,
}

impl CubicCurve {
    pub fn new(start: Vector2, control1: Vector2, control2: Vector2, end: Vector2) -> Self {
        Self { start, control1, control2, end }
    }

    pub fn control1(&self) -> Vector2 {
        self.control1
    }

    pub fn control2(&self) -> Vector2 {
        self.control2
    }

    pub fn scale_by(&self, factor: Vector2, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_by_about(factor, center),
            self.control1.scaled_by_about(factor, center),
            self.control2.scaled_by_about(factor, center),
            self.end.scaled_by_about(factor, center),
        )
    }

    pub fn bezier(&self) -> CubicBezier2<Float> {
        CubicBezier2 {
            start: self.start,
            ctrl0: self.control1,
            ctrl1: self.control2,
            end: self.end,
        }
    }
}

impl Geometry for CubicCurve {
    fn start(&self) -> Vector2 {
        self.start
    }

    fn end(&self) -> Vector2 {
        self.end
    }

    fn point(&self, t: Float) -> Vector2 {
        match clamp_unit(t) {
            t if t == 0.0 => self.start,
            t if t == 1.0 => self.end,
            t => self.bezier().evaluate(t),
        }
    }

    fn tangent(&self, t: Float) -> Vector2 {
        self.bezier().evaluate_derivative(clamp_unit(t)).normalized()
    }

    fn length(&self) -> Float {
        let bezier = self.bezier();
        arc_length(|t| bezier.evaluate_derivative(t).magnitude())
    }

    fn bounds(&self) -> AxisAlignedBox {
        let (p0, p1, p2, p3) = (self.start, self.control1, self.control2, self.end);
        let mut bounds = AxisAlignedBox::new(p0, p3);

        let tx = cubic_extrema(p0.x, p1.x, p2.x, p3.x);
        let ty = cubic_extrema(p0.y, p1.y, p2.y, p3.y);
        for t in tx.into_iter().chain(ty).flatten() {
            bounds = bounds.expanded_to(self.point(t));
        }

        bounds
    }

    fn translate(&self, translation: Vector2) -> Self {
        Self::new(
            self.start + translation,
            self.control1 + translation,
            self.control2 + translation,
            self.end + translation,
        )
    }

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self {
        Self::new(
            self.start.rotated_about(angle, pivot),
            self.control1.rotated_about(angle, pivot),
            self.control2.rotated_about(angle, pivot),
            self.end.rotated_about(angle, pivot),
        )
    }

    fn scale(&self, factor: Float, center: Vector2) -> Self {
        Self::new(
            self.start.scaled_about(factor, center),
            self.control1.scaled_about(factor, center),
            self.control2.scaled_about(factor, center),
            self.end.scaled_about(factor, center),
        )
    }
}
