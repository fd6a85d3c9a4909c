//! Descriptor variants {text, point, polygon} and their single dispatch point.
//!
//! Purpose
//! - Turn a loosely typed payload (JSON object with a `"type"` tag) into a
//!   `RawDescriptor`, then into a validated `Descriptor`.
//! - Keep geometry out of this module: polygons are handed to
//!   `polygon::validate_polygon` and its error is re-surfaced unchanged.
//!
//! Adding a kind means a new `RawDescriptor`/`Descriptor` case and a new arm
//! in `validate_descriptor`; existing arms are unaffected.

mod dispatch;
mod types;

pub use dispatch::validate_descriptor;
pub use types::{Descriptor, DescriptorError, DescriptorKind, RawDescriptor};
