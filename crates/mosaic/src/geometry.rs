//! Planar primitives: side-of-line tests, edge intersection and vertex cleanup.

use nalgebra::{Point2, Vector2};

/// A point in the mosaic plane.
pub type Point = Point2<f64>;

/// A 2D translation applied to a polygon at render time.
pub type Offset = Vector2<f64>;

/// Tolerance for orientation and intersection tests.
/// Orientation values within this distance of zero are considered "on" the line.
pub const EPSILON: f64 = 1e-9;

/// Per-axis tolerance below which two vertices are considered the same point.
pub const DUPLICATE_EPSILON: f64 = 1e-6;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Point is left of `start -> end` (positive cross product)
    Positive,
    /// Point is right of `start -> end` (negative cross product)
    Negative,
    /// Point lies on the line (within `EPSILON`)
    Boundary,
}

impl Side {
    /// Returns true if a vertex on this side belongs to the positive half of a cut.
    #[inline]
    pub fn keeps_positive(self) -> bool {
        matches!(self, Side::Positive | Side::Boundary)
    }

    /// Returns true if a vertex on this side belongs to the negative half of a cut.
    #[inline]
    pub fn keeps_negative(self) -> bool {
        matches!(self, Side::Negative | Side::Boundary)
    }
}

/// Computes the cross product `(end - start) × (p - start)`.
///
/// - Positive: `p` is to the left of the directed line
/// - Negative: `p` is to the right
/// - Zero: `p` is on the line
///
/// The magnitude is twice the area of the triangle `(start, end, p)`.
#[inline]
pub fn orientation(p: Point, line_start: Point, line_end: Point) -> f64 {
    (line_end.x - line_start.x) * (p.y - line_start.y)
        - (line_end.y - line_start.y) * (p.x - line_start.x)
}

/// Classifies which side of the directed line `line_start -> line_end` a point lies on.
pub fn classify_point(p: Point, line_start: Point, line_end: Point) -> Side {
    let value = orientation(p, line_start, line_end);
    if value > EPSILON {
        Side::Positive
    } else if value < -EPSILON {
        Side::Negative
    } else {
        Side::Boundary
    }
}

/// Intersects the segment `a_start -> a_end` with the infinite line through
/// `b_start` and `b_end`.
///
/// Returns `None` if the two lines are parallel or collinear, or if the
/// crossing falls outside segment A's bounding box (expanded by `EPSILON`
/// on every side, so hits exactly on A's endpoints are kept).
/// No bounds are applied to B.
pub fn intersect(a_start: Point, a_end: Point, b_start: Point, b_end: Point) -> Option<Point> {
    // Both lines in the form a*x + b*y = c
    let a1 = b_end.y - b_start.y;
    let b1 = b_start.x - b_end.x;
    let c1 = a1 * b_start.x + b1 * b_start.y;

    let a2 = a_end.y - a_start.y;
    let b2 = a_start.x - a_end.x;
    let c2 = a2 * a_start.x + b2 * a_start.y;

    let determinant = a1 * b2 - a2 * b1;
    if determinant.abs() < EPSILON {
        return None;
    }

    let x = (b2 * c1 - b1 * c2) / determinant;
    let y = (a1 * c2 - a2 * c1) / determinant;

    let outside_x = x < a_start.x.min(a_end.x) - EPSILON || x > a_start.x.max(a_end.x) + EPSILON;
    let outside_y = y < a_start.y.min(a_end.y) - EPSILON || y > a_start.y.max(a_end.y) + EPSILON;
    if outside_x || outside_y {
        return None;
    }

    Some(Point::new(x, y))
}

/// Returns true if `a` and `b` are within `DUPLICATE_EPSILON` on both axes.
#[inline]
pub fn nearly_equal(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < DUPLICATE_EPSILON && (a.y - b.y).abs() < DUPLICATE_EPSILON
}

/// Removes every point that coincides with an earlier one.
///
/// First-seen order is preserved, and survivors keep their relative order.
pub fn dedupe(points: &[Point]) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if !points[..i].iter().any(|earlier| nearly_equal(*p, *earlier)) {
            unique.push(*p);
        }
    }
    unique
}

/// Computes the vertex centroid: the arithmetic mean of the vertices.
///
/// This is not the area centroid. The two agree for the near-regular convex
/// pieces the generator produces closely enough to anchor the animation.
///
/// # Panics
/// Panics if `vertices` is empty.
pub fn centroid(vertices: &[Point]) -> Point {
    assert!(!vertices.is_empty(), "Centroid of an empty vertex list");
    let sum: Vector2<f64> = vertices.iter().map(|p| p.coords).sum();
    Point::from(sum / vertices.len() as f64)
}

/// Computes the signed area of a vertex ring using the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = ring_edges(vertices)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice / 2.0
}

/// Iterates over the edges `(current, next)` of a vertex ring, wrapping from
/// the last vertex to the first.
pub fn ring_edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// Signed distance from `p` to the line through `a` and `b`, positive on the left.
///
/// Returns 0 for a degenerate line (`a` and `b` within `DUPLICATE_EPSILON`).
pub fn signed_distance(p: Point, a: Point, b: Point) -> f64 {
    if nearly_equal(a, b) {
        return 0.0;
    }
    orientation(p, a, b) / (b - a).norm()
}
