#![no_std]
extern crate alloc;

pub mod vector;
pub mod bounds;
pub mod bezier;
pub mod primitive;
pub mod segment;
pub mod path;


#[doc(inline)]
pub use {
    vector::Float,
    vector::Vector2,
    vector::Vector2Ext,
    bounds::AxisAlignedBox,
    primitive::{Move, Line, Arc, QuadraticCurve, CubicCurve},
    segment::{Geometry, Segment, SegmentType},
    path::{Path, Circle, PathError, PathResult},
};
