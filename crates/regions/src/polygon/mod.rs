//! Simple closed polygon validation.
//!
//! Purpose
//! - Classify a vertex sequence as a legal simple closed polygon or report the
//!   first rule it breaks, with the vertex or edge indices involved.
//!
//! Model
//! - Input repeats the first vertex at the end (explicit closing vertex).
//! - Edge `k` runs from vertex `k` to vertex `k + 1`; the last edge closes the ring.
//! - Checks run in a fixed order and stop at the first failure:
//!   size, closure, duplicate vertices, self-intersection.
//!
//! The self-intersection scan is quadratic in the vertex count. Region
//! polygons here have tens of vertices, so no spatial index is used.

mod types;
mod validate;

pub use types::{PolygonError, ValidatedPolygon, MIN_POLYGON_POINTS};
pub use validate::validate_polygon;

#[cfg(test)]
mod tests;
