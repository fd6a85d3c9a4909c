use super::types::{Orientation, Point, Segment};

/// Largest binary exponent of an input coordinate that keeps the differences
/// below 2^511, their products below 2^1022 and the final difference finite.
const MAX_SAFE_EXP: i32 = 509;

/// Turning direction of `p -> q -> r`.
///
/// Sign of `(q.y-p.y)*(r.x-q.x) - (q.x-p.x)*(r.y-q.y)`: zero is collinear,
/// positive is clockwise (y axis up), negative is counterclockwise.
/// Very large coordinates are first scaled down by a power of two so the
/// cross product cannot overflow; such scaling does not change its sign.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let (p, q, r) = match overflow_scale(p.amax().max(q.amax()).max(r.amax())) {
        Some(s) => (p * s, q * s, r * s),
        None => (p, q, r),
    };
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Power of two `2^-k` bringing `max_abs` down to at most `2^MAX_SAFE_EXP`,
/// or `None` when no scaling is needed.
#[inline]
fn overflow_scale(max_abs: f64) -> Option<f64> {
    // Finite inputs only; the biased exponent field is below 2047.
    let exp = ((max_abs.to_bits() >> 52) & 0x7ff) as i32 - 1023;
    if !max_abs.is_finite() || exp <= MAX_SAFE_EXP {
        return None;
    }
    let k = exp - MAX_SAFE_EXP;
    Some(f64::from_bits(((1023 - k) as u64) << 52))
}

/// Whether `q` lies within the bounding box of segment `p r`.
///
/// Pre: `orientation(p, q, r)` is `Collinear`; this is a containment check only.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether two closed segments share at least one point.
///
/// Proper crossings, endpoint touches and collinear overlaps all count.
pub fn segments_intersect(s1: Segment, s2: Segment) -> bool {
    let (p1, q1) = (s1.p, s1.q);
    let (p2, q2) = (s2.p, s2.q);
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear triples: touching or overlapping on the boundary.
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Whether consecutive edges `a -> b` and `b -> c` share more than `b`.
///
/// Two edges meeting at `b` can only share further points when the path folds
/// back on itself: `a`, `b`, `c` collinear with `c` on `a b` or `a` on `b c`.
/// Assumes `a != b`, `b != c` and `a != c`.
pub fn adjacent_edges_overlap(a: Point, b: Point, c: Point) -> bool {
    orientation(a, b, c) == Orientation::Collinear && (on_segment(a, c, b) || on_segment(b, a, c))
}
