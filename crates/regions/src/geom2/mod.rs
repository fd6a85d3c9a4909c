//! Planar geometry kernel (points, segments, orientation).
//!
//! Purpose
//! - Provide the exact, epsilon-free predicates the polygon validator is built
//!   on: orientation of three points, bounded containment on a collinear
//!   segment, and the classic orientation-based segment intersection test.
//! - Keep every turning-direction decision behind `orientation`; callers never
//!   re-derive the cross product.
//!
//! Equality is exact. Coordinates are compared as supplied; noisy inputs must
//! be snapped by the caller.

mod kernel;
mod types;

pub use kernel::{adjacent_edges_overlap, on_segment, orientation, segments_intersect};
pub use types::{point, Orientation, Point, Segment};
