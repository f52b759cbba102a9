use crate::bounds::AxisAlignedBox;
use crate::primitive::{Arc, CubicCurve, Line, Move, QuadraticCurve};
use crate::segment::{Geometry, Segment};
use crate::vector::{Float, Vector2, Vector2Ext, TAU, V_UNIT, V_ZERO};

use core::fmt;
use alloc::vec::Vec;

use PathError::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathError {
    /// Segment `index` does not start where the previous one ends
    Discontinuity { index: usize },
    /// Segment `index` holds a NaN or infinite value;
    /// `None` designates the start point of the path
    NonFinite { index: Option<usize> },
    /// Segment `index` is an arc, which can't be scaled
    /// by different factors on each axis
    NonUniformArc { index: usize },
}

pub type PathResult<T> = Result<T, PathError>;

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discontinuity { index } => write!(f, "segment {} is not connected to the previous one", index),
            NonFinite { index: Some(index) } => write!(f, "segment {} holds a non-finite value", index),
            NonFinite { index: None } => write!(f, "the start point is not finite"),
            NonUniformArc { index } => write!(f, "segment {} is an arc and cannot be scaled non-uniformly", index),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub center: Vector2,
    pub radius: Float,
}

impl Circle {
    pub fn new(center: Vector2, radius: Float) -> Self {
        Self { center, radius }
    }
}

/// Continuous chain of segments, parameterized by arc length.
///
/// Growth and transform methods consume the path, rewrite its storage in
/// place and hand it back, so a path being modified is never shared.
/// Keep a `clone()` around to preserve a previous state.
///
/// Queries take a global position in `[0; 1]` (clamped): `0.0` is the
/// start of the path, `1.0` its end, and `0.5` the point that splits its
/// length in two halves. NaN or infinite inputs are the responsibility of
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    start: Vector2,
    end: Vector2,
    segments: Vec<Segment>,
}

/// Construction
impl Path {
    pub fn new(start: Vector2) -> Self {
        Self {
            start,
            end: start,
            segments: Vec::new(),
        }
    }

    pub fn from_point(start: Vector2) -> Self {
        Self::new(start)
    }

    pub fn from_line(line: Line) -> Self {
        Self::new(line.start()).line_to(line.end())
    }

    /// Full turn starting on the right of the circle.
    pub fn from_circle(circle: Circle) -> Self {
        let start = circle.center + V_UNIT * circle.radius;
        Self::new(start).arc_to(TAU, circle.center)
    }

    /// Clockwise on screen (Y pointing down), from the `min` corner.
    pub fn from_rectangle(rectangle: AxisAlignedBox) -> Self {
        let AxisAlignedBox { min, max } = rectangle;
        Self::new(min)
            .line_to(Vector2::new(max.x, min.y))
            .line_to(max)
            .line_to(Vector2::new(min.x, max.y))
            .line_to(min)
    }

    pub fn from_quadratic(curve: QuadraticCurve) -> Self {
        Self::from_segment(curve)
    }

    pub fn from_cubic(curve: CubicCurve) -> Self {
        Self::from_segment(curve)
    }

    /// Polyline through every point.
    ///
    /// Without any point, this is an empty path at the origin.
    pub fn from_points<I: IntoIterator<Item = Vector2>>(points: I) -> Self {
        let mut points = points.into_iter();
        match points.next() {
            Some(first) => points.fold(Self::new(first), |path, point| path.line_to(point)),
            None => {
                log::debug!("building a path from zero points; starting at the origin");
                Self::new(V_ZERO)
            }
        }
    }

    pub fn from_segment<S: Into<Segment>>(segment: S) -> Self {
        let segment = segment.into();
        Self::new(segment.start()).add(segment)
    }

    /// Structural copy of another path.
    pub fn from_path(path: &Path) -> Self {
        path.segments.iter().fold(Self::new(path.start), |copy, segment| copy.add(*segment))
    }
}

/// Growth
impl Path {
    pub fn move_to(self, destination: Vector2) -> Self {
        let segment = Move::new(self.end, destination);
        self.push(segment.into())
    }

    pub fn line_to(self, destination: Vector2) -> Self {
        let segment = Line::new(self.end, destination);
        self.push(segment.into())
    }

    /// Turns around `center` by `angle` radians.
    pub fn arc_to(self, angle: Float, center: Vector2) -> Self {
        let segment = Arc::new(self.end, center, angle);
        self.push(segment.into())
    }

    pub fn quad_to(self, end: Vector2, control: Vector2) -> Self {
        let segment = QuadraticCurve::new(self.end, control, end);
        self.push(segment.into())
    }

    pub fn cubic_to(self, end: Vector2, control1: Vector2, control2: Vector2) -> Self {
        let segment = CubicCurve::new(self.end, control1, control2, end);
        self.push(segment.into())
    }

    /// Appends an existing segment.
    ///
    /// If it doesn't start at the current end of the path, a [`Move`]
    /// to its start is inserted first.
    pub fn add<S: Into<Segment>>(self, segment: S) -> Self {
        let segment = segment.into();
        match segment.start() == self.end {
            true => self.push(segment),
            false => {
                log::debug!(
                    "{} segment doesn't start at the end of the path; inserting a move",
                    segment.segment_type().as_str(),
                );
                let bridge = Move::new(self.end, segment.start());
                self.push(bridge.into()).push(segment)
            }
        }
    }

    /// Appends an existing segment which must start at the current end of the path.
    pub fn try_add<S: Into<Segment>>(self, segment: S) -> PathResult<Self> {
        let segment = segment.into();
        match segment.start() == self.end {
            true => Ok(self.push(segment)),
            false => Err(Discontinuity { index: self.segments.len() }),
        }
    }

    fn push(mut self, segment: Segment) -> Self {
        self.end = segment.end();
        self.segments.push(segment);
        self
    }
}

/// Queries
impl Path {
    pub fn start(&self) -> Vector2 {
        self.start
    }

    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Read-only view of the segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn length(&self) -> Float {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Includes the start point, even if the first segment is a move.
    pub fn bounds(&self) -> AxisAlignedBox {
        let initial = AxisAlignedBox::new(self.start, self.start);
        self.segments.iter().fold(initial, |bounds, segment| bounds.union(&segment.bounds()))
    }

    /// Finds the segment covering `position` and the local parameter
    /// within that segment.
    ///
    /// Returns `None` for a path without any segment. On a path of zero
    /// length, every position past the start maps to the end of the last
    /// segment.
    pub fn locate(&self, position: Float) -> Option<(usize, Float)> {
        self.locate_in(&self.segment_lengths(), position)
    }

    fn segment_lengths(&self) -> Vec<Float> {
        self.segments.iter().map(Segment::length).collect()
    }

    // `lengths` holds the length of each segment, in order
    fn locate_in(&self, lengths: &[Float], position: Float) -> Option<(usize, Float)> {
        let last = self.segments.len().checked_sub(1)?;
        let position = position.clamp(0.0, 1.0);

        if position == 0.0 {
            return Some((0, 0.0));
        }

        if position == 1.0 {
            return Some((last, 1.0));
        }

        let total: Float = lengths.iter().sum();

        if total <= 0.0 || total.is_nan() {
            return Some((last, 1.0));
        }

        let mut traveled = 0.0;
        for (i, length) in lengths.iter().enumerate() {
            let ratio = length / total;

            if traveled + ratio >= position {
                let local = match ratio > 0.0 {
                    true => ((position - traveled) / ratio).clamp(0.0, 1.0),
                    false => 1.0,
                };
                return Some((i, local));
            }

            traveled += ratio;
        }

        log::warn!(
            "position {} was not covered by any segment (accumulated {}); using the end of the path",
            position,
            traveled,
        );

        Some((last, 1.0))
    }

    pub fn point(&self, position: Float) -> Vector2 {
        self.point_in(&self.segment_lengths(), position)
    }

    fn point_in(&self, lengths: &[Float], position: Float) -> Vector2 {
        let position = position.clamp(0.0, 1.0);

        if position == 0.0 {
            return self.start;
        }

        if position == 1.0 {
            return self.end;
        }

        match self.locate_in(lengths, position) {
            Some((i, t)) => self.segments[i].point(t),
            None => self.start,
        }
    }

    /// `None` if the path has no segment.
    pub fn tangent(&self, position: Float) -> Option<Vector2> {
        let (i, t) = self.locate(position)?;
        Some(self.segments[i].tangent(t))
    }

    /// `None` if the path has no segment.
    pub fn normal(&self, position: Float) -> Option<Vector2> {
        let (i, t) = self.locate(position)?;
        Some(self.segments[i].normal(t))
    }

    /// `None` if the path has no segment.
    pub fn segment_at(&self, position: Float) -> Option<&Segment> {
        let (i, _) = self.locate(position)?;
        self.segments.get(i)
    }

    /// Points at `divisions + 1` evenly spaced positions, both ends included.
    /// Segment lengths are integrated once for all of them.
    ///
    /// Fewer than two divisions only yields the two ends.
    pub fn samples(&self, divisions: usize) -> Vec<Vector2> {
        let lengths = self.segment_lengths();
        ratios(divisions).map(|ratio| self.point_in(&lengths, ratio)).collect()
    }

    /// Checks continuity and finiteness of every stored point.
    pub fn validate(&self) -> PathResult<()> {
        if !self.start.all_finite() {
            return Err(NonFinite { index: None });
        }

        let mut previous_end = self.start;
        for (index, segment) in self.segments.iter().enumerate() {
            if !segment.is_finite() {
                return Err(NonFinite { index: Some(index) });
            }

            if segment.start() != previous_end {
                return Err(Discontinuity { index });
            }

            previous_end = segment.end();
        }

        Ok(())
    }
}

/// Transforms
impl Path {
    pub fn translate(mut self, translation: Vector2) -> Self {
        self.start = self.start + translation;
        self.end = self.end + translation;
        for segment in self.segments.iter_mut() {
            *segment = segment.translate(translation);
        }
        self
    }

    pub fn rotate(mut self, angle: Float, pivot: Vector2) -> Self {
        self.start = self.start.rotated_about(angle, pivot);
        self.end = self.end.rotated_about(angle, pivot);
        for segment in self.segments.iter_mut() {
            *segment = segment.rotate(angle, pivot);
        }
        self
    }

    pub fn scale(mut self, factor: Float, center: Vector2) -> Self {
        self.start = self.start.scaled_about(factor, center);
        self.end = self.end.scaled_about(factor, center);
        for segment in self.segments.iter_mut() {
            *segment = segment.scale(factor, center);
        }
        self
    }

    /// Scales each axis separately around `center`.
    ///
    /// Fails without touching the path if an arc would become elliptical,
    /// which happens when the two factors differ in magnitude.
    pub fn scale_by(mut self, factor: Vector2, center: Vector2) -> PathResult<Self> {
        let mut scaled = Vec::with_capacity(self.segments.len());
        for (index, segment) in self.segments.iter().enumerate() {
            match segment.scale_by(factor, center) {
                Some(segment) => scaled.push(segment),
                None => return Err(NonUniformArc { index }),
            }
        }

        self.start = self.start.scaled_by_about(factor, center);
        self.end = self.end.scaled_by_about(factor, center);
        self.segments = scaled;
        Ok(self)
    }

    /// Builds a polyline from points sampled along this path.
    ///
    /// `f` receives each sampled point, its index, its position along
    /// this path and this path; it returns the vertex to use instead.
    /// See [`Path::samples`] for the spacing.
    pub fn map<F>(&self, divisions: usize, mut f: F) -> Path
    where
        F: FnMut(Vector2, usize, Float, &Path) -> Vector2,
    {
        let lengths = self.segment_lengths();
        let points = ratios(divisions)
            .enumerate()
            .map(|(i, ratio)| f(self.point_in(&lengths, ratio), i, ratio, self));
        Path::from_points(points.collect::<Vec<_>>())
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Self::from_segment(segment)
    }
}

impl From<Line> for Path {
    fn from(line: Line) -> Self {
        Self::from_line(line)
    }
}

impl From<Circle> for Path {
    fn from(circle: Circle) -> Self {
        Self::from_circle(circle)
    }
}

fn ratios(divisions: usize) -> impl Iterator<Item = Float> {
    let divisions = divisions.max(1);
    (0..=divisions).map(move |i| match i == divisions {
        true => 1.0,
        false => (i as Float) / (divisions as Float),
    })
}
