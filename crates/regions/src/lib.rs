//! Validation core for region descriptors attached to a record.
//!
//! A record carries free-text notes, point markers and closed polygon regions
//! drawn on a planar coordinate space. This crate decides whether each
//! descriptor is well formed (polygons must be simple and closed) and whether
//! the collection as a whole is acceptable (at most one text note).
//!
//! Layout (leaves first)
//! - `geom2`: orientation, point-on-segment and segment-intersection primitives.
//! - `polygon`: closure, size, duplicate and self-intersection checks.
//! - `descriptor`: tagged union {text, point, polygon} and its single dispatch.
//! - `collection`: record-level rules over an ordered descriptor list.
//! - `identifier`: integer-or-string type check for record identifiers.
//! - `sample`: reproducible random simple polygons for benches and tests.
//!
//! All entry points are pure and synchronous; nothing here stores state.

pub mod collection;
pub mod descriptor;
pub mod geom2;
pub mod identifier;
pub mod polygon;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use collection::{
    validate_collection, validate_collection_values, validate_collection_with, CollectionError,
};
pub use geom2::Point;
pub use polygon::{validate_polygon, PolygonError, ValidatedPolygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::collection::{
        validate_collection, validate_collection_values, validate_collection_with, CollectionCfg,
        CollectionError, DescriptorFailure, ErrorPolicy, ValidatedCollection,
    };
    pub use crate::descriptor::{
        validate_descriptor, Descriptor, DescriptorError, DescriptorKind, RawDescriptor,
    };
    pub use crate::geom2::{on_segment, orientation, segments_intersect, Orientation, Point, Segment};
    pub use crate::identifier::{Identifier, IdentifierError};
    pub use crate::polygon::{validate_polygon, PolygonError, ValidatedPolygon};
    pub use nalgebra::Vector2 as Vec2;
}
