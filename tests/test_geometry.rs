use starshot::game::geometry::{intersects, Rect};

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, w, h)
}

// ── intersects ────────────────────────────────────────────────────────────────

#[test]
fn symmetric_for_overlapping_pairs() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    assert!(intersects(a, b));
    assert!(intersects(b, a));
}

#[test]
fn symmetric_for_disjoint_pairs() {
    let a = rect(0.0, 0.0, 4.0, 4.0);
    let b = rect(50.0, 50.0, 4.0, 4.0);
    assert!(!intersects(a, b));
    assert!(!intersects(b, a));
}

#[test]
fn reflexive_for_non_degenerate_rects() {
    let a = rect(3.0, 7.0, 2.5, 9.0);
    assert!(intersects(a, a));
}

#[test]
fn separated_on_x_axis_only() {
    let a = rect(0.0, 0.0, 4.0, 4.0);
    let b = rect(4.5, 0.0, 4.0, 4.0);
    assert!(!intersects(a, b));
}

#[test]
fn separated_on_y_axis_only() {
    let a = rect(0.0, 0.0, 4.0, 4.0);
    let b = rect(0.0, 4.5, 4.0, 4.0);
    assert!(!intersects(a, b));
}

#[test]
fn touching_edges_count_as_overlap() {
    // Strictly-beyond separation: a shared edge is not separation
    let a = rect(0.0, 0.0, 4.0, 4.0);
    let b = rect(4.0, 0.0, 4.0, 4.0);
    assert!(intersects(a, b));
    assert!(intersects(b, a));
}

#[test]
fn containment_overlaps() {
    let outer = rect(0.0, 0.0, 20.0, 20.0);
    let inner = rect(5.0, 5.0, 2.0, 2.0);
    assert!(intersects(outer, inner));
    assert!(intersects(inner, outer));
}

#[test]
fn rect_dimensions() {
    let r = rect(2.0, 3.0, 7.0, 11.0);
    assert_eq!(r.width(), 7.0);
    assert_eq!(r.height(), 11.0);
    assert_eq!(r.right, 9.0);
    assert_eq!(r.bottom, 14.0);
}
