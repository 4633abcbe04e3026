//! Polygon cutting for mosaic subdivision.

use log::trace;
use rand::Rng;

use crate::color::Rgb;
use crate::geometry::{self, Point};
use crate::{LineSegment, Polygon};

/// Trait for geometry that can be cut by a chord's infinite line.
pub trait Cuttable {
    /// Cuts the geometry along the line through `line`.
    ///
    /// Returns the surviving pieces, each a fresh polygon with a random color
    /// and its anchor set to its own centroid:
    ///
    /// - **Spanning**: two pieces sharing the cut seam as an edge
    /// - **One side** (or only grazing a vertex/edge): one piece covering the whole polygon
    /// - **No surviving ring**: `[self]`, the original polygon unchanged
    fn cut<R: Rng + ?Sized>(&self, line: &LineSegment, rng: &mut R) -> Vec<Polygon>;
}

impl Cuttable for Polygon {
    fn cut<R: Rng + ?Sized>(&self, line: &LineSegment, rng: &mut R) -> Vec<Polygon> {
        let (positive, negative) = split_rings(self.vertices(), line);

        let mut pieces = Vec::with_capacity(2);
        for ring in [positive, negative] {
            if ring.len() >= 3 {
                pieces.push(Polygon::new(ring, Rgb::random(rng)));
            } else {
                trace!("dropping degenerate ring with {} vertices", ring.len());
            }
        }

        if pieces.is_empty() {
            return vec![self.clone()];
        }
        pieces
    }
}

/// Walks a vertex ring and builds the positive and negative halves of a cut.
///
/// Each vertex goes to the half(s) matching its side; boundary vertices go to
/// both. Every edge crossing of the line is appended to both halves, so the
/// two share the seam. Both rings are deduplicated before returning.
///
/// Rings with fewer than 3 vertices are returned as-is; callers decide what
/// to do with them.
///
/// # Panics
/// Panics if `vertices` has fewer than 3 points.
pub fn split_rings(vertices: &[Point], line: &LineSegment) -> (Vec<Point>, Vec<Point>) {
    let n = vertices.len();
    assert!(n >= 3, "Cannot cut a polygon with fewer than 3 vertices");

    let mut positive = Vec::with_capacity(n + 2);
    let mut negative = Vec::with_capacity(n + 2);

    for (current, next) in geometry::ring_edges(vertices) {
        let side = line.side_of(current);

        if side.keeps_positive() {
            positive.push(current);
        }
        if side.keeps_negative() {
            negative.push(current);
        }

        if let Some(crossing) = line.intersect_edge(current, next) {
            positive.push(crossing);
            negative.push(crossing);
        }
    }

    (geometry::dedupe(&positive), geometry::dedupe(&negative))
}
