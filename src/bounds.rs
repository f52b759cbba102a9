use crate::vector::{Float, Vector2, V_ZERO, min_of, max_of};

use vek::geom::repr_c::Aabr;

/// Rectangle defined by its top left (`min`) and bottom right (`max`) corners.
///
/// Every constructor of this type keeps `min <= max` on both axes;
/// building one from the raw fields skips that guarantee.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AxisAlignedBox {
    pub min: Vector2,
    pub max: Vector2,
}

impl AxisAlignedBox {
    /// Box spanning two opposite corners, in any order.
    pub fn new(a: Vector2, b: Vector2) -> Self {
        Self::bounding(&[a, b])
    }

    pub fn from_corner_dimensions(corner: Vector2, width: Float, height: Float) -> Self {
        Self::new(corner, corner + Vector2::new(width, height))
    }

    pub fn from_corner_size(corner: Vector2, size: Vector2) -> Self {
        Self::new(corner, corner + size)
    }

    pub fn from_center_size(center: Vector2, width: Float, height: Float) -> Self {
        let half = Vector2::new(width / 2.0, height / 2.0);
        Self::new(center - half, center + half)
    }

    /// Box from the origin to `size`.
    pub fn from_size(size: Vector2) -> Self {
        Self::new(V_ZERO, size)
    }

    /// Smallest box containing every point.
    ///
    /// Without any point, this is a zero-sized box at the origin.
    pub fn bounding(points: &[Vector2]) -> Self {
        Self {
            min: min_of(points),
            max: max_of(points),
        }
    }

    pub fn width(&self) -> Float {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> Float {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x
            && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Boxes which only share an edge or a corner overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x
            && self.min.y <= other.max.y && other.min.y <= self.max.y
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        match self.overlaps(other) {
            true => Some(Self {
                min: Vector2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
                max: Vector2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
            }),
            false => None,
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::bounding(&[self.min, self.max, other.min, other.max])
    }

    pub fn expanded_to(&self, point: Vector2) -> Self {
        Self::bounding(&[self.min, self.max, point])
    }
}

impl From<Aabr<Float>> for AxisAlignedBox {
    fn from(aabr: Aabr<Float>) -> Self {
        Self::new(aabr.min, aabr.max)
    }
}

impl From<AxisAlignedBox> for Aabr<Float> {
    fn from(bounds: AxisAlignedBox) -> Self {
        Aabr {
            min: bounds.min,
            max: bounds.max,
        }
    }
}
