use crate::geom2::{point, Point};
use crate::polygon::validate_polygon;

use super::types::{Descriptor, DescriptorError, DescriptorKind, RawDescriptor};

/// Validate one raw descriptor according to its kind.
///
/// - text: structural only.
/// - point: both coordinates finite.
/// - polygon: all coordinates finite, then `validate_polygon`.
pub fn validate_descriptor(raw: &RawDescriptor) -> Result<Descriptor, DescriptorError> {
    match raw {
        RawDescriptor::Text { text } => Ok(Descriptor::Text { text: text.clone() }),
        RawDescriptor::Point { coordinates, text } => {
            let at = finite_point(*coordinates, DescriptorKind::Point, 0)?;
            Ok(Descriptor::Point {
                at,
                text: text.clone(),
            })
        }
        RawDescriptor::Polygon { coordinates, text } => {
            let vertices = coordinates
                .iter()
                .enumerate()
                .map(|(i, &xy)| finite_point(xy, DescriptorKind::Polygon, i))
                .collect::<Result<Vec<Point>, _>>()?;
            let polygon = validate_polygon(&vertices)?;
            Ok(Descriptor::Polygon {
                polygon,
                text: text.clone(),
            })
        }
    }
}

#[inline]
fn finite_point(
    (x, y): (f64, f64),
    kind: DescriptorKind,
    index: usize,
) -> Result<Point, DescriptorError> {
    if x.is_finite() && y.is_finite() {
        Ok(point(x, y))
    } else {
        Err(DescriptorError::NonFiniteCoordinate { kind, index })
    }
}

impl TryFrom<&RawDescriptor> for Descriptor {
    type Error = DescriptorError;

    fn try_from(raw: &RawDescriptor) -> Result<Self, Self::Error> {
        validate_descriptor(raw)
    }
}
