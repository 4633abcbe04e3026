//! Chords used as cutting lines.

use crate::geometry::{self, Offset, Point, Side};

/// A chord across the mosaic, defined by two distinct points.
///
/// When cutting, the chord is extended to an infinite line; its endpoints
/// only fix the line's position and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
}

impl LineSegment {
    /// Creates a new chord from `start` to `end`.
    ///
    /// # Panics
    /// Panics if the endpoints coincide exactly (the chord would define no line).
    pub fn new(start: Point, end: Point) -> Self {
        assert!(start != end, "Chord endpoints must be distinct");
        Self { start, end }
    }

    /// Returns the start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the (unnormalized) direction `end - start`.
    #[inline]
    pub fn direction(&self) -> Offset {
        self.end - self.start
    }

    /// Classifies a point against this chord's directed line.
    #[inline]
    pub fn side_of(&self, point: Point) -> Side {
        geometry::classify_point(point, self.start, self.end)
    }

    /// Intersects the polygon edge `edge_start -> edge_end` with this chord's line.
    ///
    /// The edge is bounded; the chord's line is not.
    #[inline]
    pub fn intersect_edge(&self, edge_start: Point, edge_end: Point) -> Option<Point> {
        geometry::intersect(edge_start, edge_end, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_of_diagonal() {
        let diagonal = LineSegment::new(Point::new(0.0, 0.0), Point::new(400.0, 400.0));
        assert_eq!(diagonal.side_of(Point::new(0.0, 400.0)), Side::Positive);
        assert_eq!(diagonal.side_of(Point::new(400.0, 0.0)), Side::Negative);
        assert_eq!(diagonal.side_of(Point::new(200.0, 200.0)), Side::Boundary);
    }

    #[test]
    fn intersect_edge_extends_chord() {
        let chord = LineSegment::new(Point::new(5.0, -5.0), Point::new(5.0, 5.0));
        let hit = chord
            .intersect_edge(Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .unwrap();
        assert!((hit - Point::new(5.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn direction_runs_start_to_end() {
        let chord = LineSegment::new(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(chord.direction(), Offset::new(3.0, 4.0));
    }

    #[test]
    #[should_panic(expected = "distinct")]
    fn coincident_endpoints_panic() {
        LineSegment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
    }
}
