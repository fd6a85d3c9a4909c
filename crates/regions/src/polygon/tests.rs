use super::*;
use crate::geom2::{point, Point};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| point(x, y)).collect()
}

#[test]
fn unit_square_is_valid() {
    let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
    let poly = validate_polygon(&square).expect("square is simple");
    assert_eq!(poly.vertices(), square.as_slice());
    assert_eq!(poly.corners().len(), 4);
    assert_eq!(poly.num_edges(), 4);
    assert_eq!(poly.edges().count(), 4);
}

#[test]
fn triangle_is_valid() {
    let tri = pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0), (0.0, 0.0)]);
    assert!(validate_polygon(&tri).is_ok());
}

#[test]
fn concave_polygon_is_valid() {
    // Arrow head with a reflex vertex at (2, 1).
    let arrow = pts(&[
        (0.0, 0.0),
        (2.0, 1.0),
        (4.0, 0.0),
        (2.0, 4.0),
        (0.0, 0.0),
    ]);
    assert!(validate_polygon(&arrow).is_ok());
}

#[test]
fn collinear_consecutive_corners_are_allowed() {
    // (1, 0) sits on the straight bottom side; edges only share vertices.
    let square = pts(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (0.0, 0.0),
    ]);
    assert!(validate_polygon(&square).is_ok());
}

#[test]
fn closing_edge_continuing_straight_is_allowed() {
    // Closing edge (0, 0) -> (1, 0) runs straight on into edge 0 (1, 0) -> (2, 0).
    let seq = pts(&[
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (0.0, 0.0),
        (1.0, 0.0),
    ]);
    assert!(validate_polygon(&seq).is_ok());
}

#[test]
fn too_few_points() {
    for n in 0..4 {
        let seq = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)][..n.min(3)]);
        let err = validate_polygon(&seq).unwrap_err();
        assert_eq!(err, PolygonError::TooFewPoints { count: seq.len() });
    }
}

#[test]
fn open_ring_is_rejected() {
    let open = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    assert_eq!(
        validate_polygon(&open).unwrap_err(),
        PolygonError::NotClosed {
            first: point(0.0, 0.0),
            last: point(1.0, 0.0)
        }
    );
}

#[test]
fn repeated_corner_is_rejected() {
    let seq = pts(&[
        (0.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (0.0, 0.0),
    ]);
    assert_eq!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::DuplicateVertex {
            first: 1,
            second: 3
        }
    );
}

#[test]
fn closing_vertex_is_not_a_duplicate_but_an_inner_repeat_of_it_is() {
    let seq = pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (0.0, 0.0),
        (0.0, 2.0),
        (0.0, 0.0),
    ]);
    assert_eq!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::DuplicateVertex {
            first: 0,
            second: 2
        }
    );
}

#[test]
fn bowtie_self_intersects() {
    let bowtie = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
    assert_eq!(
        validate_polygon(&bowtie).unwrap_err(),
        PolygonError::SelfIntersecting { edges: (0, 2) }
    );
}

#[test]
fn vertex_touching_a_non_adjacent_edge_is_rejected() {
    // Vertex 3 at (2, 0) lies on edge 0 from (0, 0) to (4, 0).
    let seq = pts(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (2.0, 0.0),
        (0.0, 4.0),
        (0.0, 0.0),
    ]);
    assert_eq!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::SelfIntersecting { edges: (0, 2) }
    );
}

#[test]
fn degenerate_collinear_triangle_is_rejected() {
    // All corners on one line: the closing edge runs back over the others.
    let seq = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
    assert!(matches!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::SelfIntersecting { .. }
    ));
}

#[test]
fn spike_folding_back_onto_previous_edge_is_rejected() {
    // Edge 1 runs from (4, 0) back to (2, 0), over edge 0.
    let seq = pts(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (2.0, 0.0),
        (2.0, 3.0),
        (0.0, 0.0),
    ]);
    assert_eq!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::SelfIntersecting { edges: (0, 1) }
    );
}

#[test]
fn closing_edge_folding_onto_first_edge_is_rejected() {
    // Closing edge (1, 0) -> (0, 0) overlaps edge 0 (0, 0) -> (2, 0).
    let seq = pts(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 2.0),
        (1.0, 0.0),
        (0.0, 0.0),
    ]);
    assert!(matches!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::SelfIntersecting { .. }
    ));
}

#[test]
fn checks_run_in_order() {
    // Open and self-intersecting: closure is reported first.
    let seq = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.5, 2.0)]);
    assert!(matches!(
        validate_polygon(&seq).unwrap_err(),
        PolygonError::NotClosed { .. }
    ));
}

#[test]
fn revalidation_is_idempotent() {
    let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
    let once = validate_polygon(&square).unwrap();
    let twice = validate_polygon(once.vertices()).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.into_vertices(), square);
}

#[test]
fn error_messages_name_rule_and_location() {
    let msg = PolygonError::SelfIntersecting { edges: (0, 2) }.to_string();
    assert!(msg.contains("edge 0") && msg.contains("edge 2"));
    let msg = PolygonError::TooFewPoints { count: 2 }.to_string();
    assert!(msg.contains("at least 4") && msg.contains("got 2"));
    let msg = PolygonError::NotClosed {
        first: point(0.0, 0.0),
        last: point(1.5, 2.0),
    }
    .to_string();
    assert!(msg.contains("(1.5, 2)"));
}

#[test]
fn crossing_ring_at_huge_scale_is_rejected() {
    let ring = [(-1.0, -2.0), (3.0, 2.0), (2.0, -1.0), (-2.0, 3.0), (-1.0, -2.0)];
    for scale in [1.0, 1e154, 1e200, 1e307] {
        let seq: Vec<Point> = ring.iter().map(|&(x, y)| point(x * scale, y * scale)).collect();
        assert!(
            matches!(
                validate_polygon(&seq),
                Err(PolygonError::SelfIntersecting { .. })
            ),
            "scale {scale}"
        );
    }
}

#[test]
fn square_at_huge_scale_is_valid() {
    for scale in [1e154, 1e300] {
        let square: Vec<Point> = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]
            .iter()
            .map(|&(x, y)| point(x * scale, y * scale))
            .collect();
        assert!(validate_polygon(&square).is_ok(), "scale {scale}");
    }
}

mod logging {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;

    struct CountEvents(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountEvents {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn events_during(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountEvents(count.clone()));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    #[test]
    fn every_rejection_rule_logs_once() {
        let rejected = [
            pts(&[(0.0, 0.0), (1.0, 0.0)]),
            pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]),
            pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
            pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]),
        ];
        for seq in &rejected {
            assert_eq!(
                events_during(|| {
                    let _ = validate_polygon(seq);
                }),
                1,
                "{seq:?}"
            );
        }
    }

    #[test]
    fn accepted_polygon_logs_nothing() {
        let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        assert_eq!(
            events_during(|| {
                let _ = validate_polygon(&square);
            }),
            0
        );
    }
}
