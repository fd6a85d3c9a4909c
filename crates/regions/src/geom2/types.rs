//! Basic 2D value types used by the kernel and the polygon validator.

use nalgebra::Vector2;

/// A planar point `(x, y)`.
pub type Point = Vector2<f64>;

/// Shorthand constructor, mirrors `Vector2::new`.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Directed segment `p -> q`.
///
/// Derived from a polygon's vertex sequence; never stored on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p: Point,
    pub q: Point,
}

impl Segment {
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        Self { p, q }
    }
}

/// Turning direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}
