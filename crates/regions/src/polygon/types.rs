use thiserror::Error;

use crate::geom2::{Point, Segment};

/// Smallest accepted sequence: three distinct corners plus the closing vertex.
pub const MIN_POLYGON_POINTS: usize = 4;

/// Why a vertex sequence is not a simple closed polygon.
///
/// Vertex indices refer to positions in the submitted sequence; edge `k` runs
/// from vertex `k` to vertex `k + 1`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolygonError {
    #[error(
        "polygon must have at least {} points including the closing point, got {}",
        MIN_POLYGON_POINTS,
        .count
    )]
    TooFewPoints { count: usize },
    #[error(
        "polygon must be closed: first point {} differs from last point {}",
        xy(.first),
        xy(.last)
    )]
    NotClosed { first: Point, last: Point },
    #[error("polygon repeats a vertex: points {first} and {second} are equal")]
    DuplicateVertex { first: usize, second: usize },
    #[error("polygon sides intersect: {}", edge_pair(.edges))]
    SelfIntersecting { edges: (usize, usize) },
}

fn xy(p: &Point) -> String {
    format!("({}, {})", p.x, p.y)
}

fn edge_pair(&(i, j): &(usize, usize)) -> String {
    format!("edge {i} touches or crosses edge {j}")
}

impl PolygonError {
    /// Stable rule name for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooFewPoints { .. } => "TooFewPoints",
            Self::NotClosed { .. } => "NotClosed",
            Self::DuplicateVertex { .. } => "DuplicateVertex",
            Self::SelfIntersecting { .. } => "SelfIntersecting",
        }
    }
}

/// A vertex sequence that passed `validate_polygon`.
///
/// Invariants:
/// - At least `MIN_POLYGON_POINTS` vertices, first equals last.
/// - No vertex repeats apart from the closing one.
/// - Edges only meet where consecutive edges share their common vertex.
///
/// Holds the input coordinates unchanged; there is no mutable access.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedPolygon {
    vertices: Vec<Point>,
}

impl ValidatedPolygon {
    /// Wrap a sequence that already satisfies the invariants above.
    #[inline]
    pub(crate) fn new_unchecked(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// All vertices, closing vertex included.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Distinct corners (closing vertex dropped).
    #[inline]
    pub fn corners(&self) -> &[Point] {
        &self.vertices[..self.vertices.len() - 1]
    }

    /// Number of edges, equal to the number of corners.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Directed edges in ring order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.vertices.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

impl AsRef<[Point]> for ValidatedPolygon {
    fn as_ref(&self) -> &[Point] {
        &self.vertices
    }
}
