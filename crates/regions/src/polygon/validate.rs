use crate::geom2::{adjacent_edges_overlap, segments_intersect, Point, Segment};

use super::types::{PolygonError, ValidatedPolygon, MIN_POLYGON_POINTS};

/// Validate a closed vertex sequence as a simple polygon.
///
/// Pre: `vertices` repeats the first point at the end.
/// Post: on success the returned polygon wraps exactly the input coordinates.
/// The first failing check is reported; later checks are not run.
pub fn validate_polygon(vertices: &[Point]) -> Result<ValidatedPolygon, PolygonError> {
    match check_ring(vertices) {
        Ok(()) => Ok(ValidatedPolygon::new_unchecked(vertices.to_vec())),
        Err(err) => {
            tracing::trace!(code = err.code(), %err, vertices = vertices.len(), "polygon rejected");
            Err(err)
        }
    }
}

fn check_ring(vertices: &[Point]) -> Result<(), PolygonError> {
    let n = vertices.len();
    if n < MIN_POLYGON_POINTS {
        return Err(PolygonError::TooFewPoints { count: n });
    }
    let (first, last) = (vertices[0], vertices[n - 1]);
    if first != last {
        return Err(PolygonError::NotClosed { first, last });
    }
    if let Some((i, j)) = find_duplicate(&vertices[..n - 1]) {
        return Err(PolygonError::DuplicateVertex {
            first: i,
            second: j,
        });
    }
    match find_self_intersection(vertices) {
        Some(edges) => Err(PolygonError::SelfIntersecting { edges }),
        None => Ok(()),
    }
}

/// First pair `(i, j)`, `i < j`, of exactly equal corners in lexicographic order.
fn find_duplicate(corners: &[Point]) -> Option<(usize, usize)> {
    for i in 0..corners.len() {
        for j in (i + 1)..corners.len() {
            if corners[i] == corners[j] {
                return Some((i, j));
            }
        }
    }
    None
}

/// First pair of edges `(i, j)`, `i < j`, that meet improperly.
///
/// Pre: `ring` is closed and its corners are pairwise distinct.
/// Edges adjacent in ring order are allowed to share their common vertex and
/// nothing else; every other pair must be disjoint.
fn find_self_intersection(ring: &[Point]) -> Option<(usize, usize)> {
    let m = ring.len() - 1;
    let edge = |k: usize| Segment::new(ring[k], ring[k + 1]);
    for i in 0..m {
        for j in (i + 1)..m {
            let hit = if j == i + 1 {
                // e_i = (v_i, v_j), e_j = (v_j, v_{j+1})
                adjacent_edges_overlap(ring[i], ring[j], ring[j + 1])
            } else if i == 0 && j == m - 1 {
                // Closing edge e_{m-1} = (v_{m-1}, v_0) runs into e_0 = (v_0, v_1).
                adjacent_edges_overlap(ring[m - 1], ring[0], ring[1])
            } else {
                segments_intersect(edge(i), edge(j))
            };
            if hit {
                return Some((i, j));
            }
        }
    }
    None
}
