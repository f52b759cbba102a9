use crate::bounds::AxisAlignedBox;
use crate::primitive::{Arc, CubicCurve, Line, Move, QuadraticCurve};
use crate::vector::{Float, Vector2, Vector2Ext};

/// Operations every segment kind supports.
///
/// Parameters are local: `0.0` is the start of the segment, `1.0` its end.
/// Values outside of `[0; 1]` are clamped.
pub trait Geometry: Sized {
    fn start(&self) -> Vector2;

    fn end(&self) -> Vector2;

    /// `point(0.0)` and `point(1.0)` are exactly `start()` and `end()`.
    fn point(&self, t: Float) -> Vector2;

    /// Unit vector in the direction of travel.
    fn tangent(&self, t: Float) -> Vector2;

    /// Tangent rotated a quarter turn.
    fn normal(&self, t: Float) -> Vector2 {
        self.tangent(t).unit_normal()
    }

    fn length(&self) -> Float;

    fn bounds(&self) -> AxisAlignedBox;

    fn translate(&self, translation: Vector2) -> Self;

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self;

    /// Scales the distance of every point to `center`.
    fn scale(&self, factor: Float, center: Vector2) -> Self;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentType {
    /// Moves the position without drawing
    Move,
    Line,
    Arc,
    QuadraticCurve,
    CubicCurve,
}

impl SegmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentType::Move => "Move",
            SegmentType::Line => "Line",
            SegmentType::Arc => "Arc",
            SegmentType::QuadraticCurve => "QuadraticCurve",
            SegmentType::CubicCurve => "CubicCurve",
        }
    }

    /// Only moves contribute nothing to the length of a path.
    pub fn is_drawn(self) -> bool {
        self != SegmentType::Move
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Move(Move),
    Line(Line),
    Arc(Arc),
    QuadraticCurve(QuadraticCurve),
    CubicCurve(CubicCurve),
}

impl Segment {
    pub fn segment_type(&self) -> SegmentType {
        match self {
            Segment::Move(_) => SegmentType::Move,
            Segment::Line(_) => SegmentType::Line,
            Segment::Arc(_) => SegmentType::Arc,
            Segment::QuadraticCurve(_) => SegmentType::QuadraticCurve,
            Segment::CubicCurve(_) => SegmentType::CubicCurve,
        }
    }

    /// Scales each axis separately around `center`.
    ///
    /// `None` for an arc whose factors differ in magnitude, since
    /// the result would be elliptical.
    pub fn scale_by(&self, factor: Vector2, center: Vector2) -> Option<Self> {
        Some(match self {
            Segment::Move(s) => Segment::Move(s.scale_by(factor, center)),
            Segment::Line(s) => Segment::Line(s.scale_by(factor, center)),
            Segment::Arc(s) => Segment::Arc(s.scale_by(factor, center)?),
            Segment::QuadraticCurve(s) => Segment::QuadraticCurve(s.scale_by(factor, center)),
            Segment::CubicCurve(s) => Segment::CubicCurve(s.scale_by(factor, center)),
        })
    }

    /// False if a stored point or parameter is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        let ends = self.start().all_finite() && self.end().all_finite();
        ends && match self {
            Segment::Move(_) | Segment::Line(_) => true,
            Segment::Arc(s) => s.center().all_finite() && s.angle().is_finite() && s.radius().is_finite(),
            Segment::QuadraticCurve(s) => s.control().all_finite(),
            Segment::CubicCurve(s) => s.control1().all_finite() && s.control2().all_finite(),
        }
    }
}

impl Geometry for Segment {
    fn start(&self) -> Vector2 {
        match self {
            Segment::Move(s) => s.start(),
            Segment::Line(s) => s.start(),
            Segment::Arc(s) => s.start(),
            Segment::QuadraticCurve(s) => s.start(),
            Segment::CubicCurve(s) => s.start(),
        }
    }

    fn end(&self) -> Vector2 {
        match self {
            Segment::Move(s) => s.end(),
            Segment::Line(s) => s.end(),
            Segment::Arc(s) => s.end(),
            Segment::QuadraticCurve(s) => s.end(),
            Segment::CubicCurve(s) => s.end(),
        }
    }

    fn point(&self, t: Float) -> Vector2 {
        match self {
            Segment::Move(s) => s.point(t),
            Segment::Line(s) => s.point(t),
            Segment::Arc(s) => s.point(t),
            Segment::QuadraticCurve(s) => s.point(t),
            Segment::CubicCurve(s) => s.point(t),
        }
    }

    fn tangent(&self, t: Float) -> Vector2 {
        match self {
            Segment::Move(s) => s.tangent(t),
            Segment::Line(s) => s.tangent(t),
            Segment::Arc(s) => s.tangent(t),
            Segment::QuadraticCurve(s) => s.tangent(t),
            Segment::CubicCurve(s) => s.tangent(t),
        }
    }

    fn normal(&self, t: Float) -> Vector2 {
        match self {
            Segment::Move(s) => s.normal(t),
            Segment::Line(s) => s.normal(t),
            Segment::Arc(s) => s.normal(t),
            Segment::QuadraticCurve(s) => s.normal(t),
            Segment::CubicCurve(s) => s.normal(t),
        }
    }

    fn length(&self) -> Float {
        match self {
            Segment::Move(s) => s.length(),
            Segment::Line(s) => s.length(),
            Segment::Arc(s) => s.length(),
            Segment::QuadraticCurve(s) => s.length(),
            Segment::CubicCurve(s) => s.length(),
        }
    }

    fn bounds(&self) -> AxisAlignedBox {
        match self {
            Segment::Move(s) => s.bounds(),
            Segment::Line(s) => s.bounds(),
            Segment::Arc(s) => s.bounds(),
            Segment::QuadraticCurve(s) => s.bounds(),
            Segment::CubicCurve(s) => s.bounds(),
        }
    }

    fn translate(&self, translation: Vector2) -> Self {
        match self {
            Segment::Move(s) => Segment::Move(s.translate(translation)),
            Segment::Line(s) => Segment::Line(s.translate(translation)),
            Segment::Arc(s) => Segment::Arc(s.translate(translation)),
            Segment::QuadraticCurve(s) => Segment::QuadraticCurve(s.translate(translation)),
            Segment::CubicCurve(s) => Segment::CubicCurve(s.translate(translation)),
        }
    }

    fn rotate(&self, angle: Float, pivot: Vector2) -> Self {
        match self {
            Segment::Move(s) => Segment::Move(s.rotate(angle, pivot)),
            Segment::Line(s) => Segment::Line(s.rotate(angle, pivot)),
            Segment::Arc(s) => Segment::Arc(s.rotate(angle, pivot)),
            Segment::QuadraticCurve(s) => Segment::QuadraticCurve(s.rotate(angle, pivot)),
            Segment::CubicCurve(s) => Segment::CubicCurve(s.rotate(angle, pivot)),
        }
    }

    fn scale(&self, factor: Float, center: Vector2) -> Self {
        match self {
            Segment::Move(s) => Segment::Move(s.scale(factor, center)),
            Segment::Line(s) => Segment::Line(s.scale(factor, center)),
            Segment::Arc(s) => Segment::Arc(s.scale(factor, center)),
            Segment::QuadraticCurve(s) => Segment::QuadraticCurve(s.scale(factor, center)),
            Segment::CubicCurve(s) => Segment::CubicCurve(s.scale(factor, center)),
        }
    }
}

impl From<Move> for Segment {
    fn from(segment: Move) -> Self {
        Segment::Move(segment)
    }
}

impl From<Line> for Segment {
    fn from(segment: Line) -> Self {
        Segment::Line(segment)
    }
}

impl From<Arc> for Segment {
    fn from(segment: Arc) -> Self {
        Segment::Arc(segment)
    }
}

impl From<QuadraticCurve> for Segment {
    fn from(segment: QuadraticCurve) -> Self {
        Segment::QuadraticCurve(segment)
    }
}

impl From<CubicCurve> for Segment {
    fn from(segment: CubicCurve) -> Self {
        Segment::CubicCurve(segment)
    }
}
