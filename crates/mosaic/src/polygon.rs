//! Mosaic pieces.

use crate::color::Rgb;
use crate::geometry::{self, Offset, Point};

/// A convex piece of the mosaic, defined by an ordered ring of vertices.
///
/// The ring is not closed: the last vertex connects back to the first.
/// A polygon never changes after creation; cutting one produces new polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    color: Rgb,
    centroid: Point,
    original_position: Point,
}

impl Polygon {
    /// Creates a new polygon from a vertex ring and a fill color.
    ///
    /// The centroid is computed from the vertices, and the anchor position is
    /// fixed to that centroid for the polygon's lifetime.
    ///
    /// # Panics
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Point>, color: Rgb) -> Self {
        assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices"
        );
        let centroid = geometry::centroid(&vertices);
        Self {
            vertices,
            color,
            centroid,
            original_position: centroid,
        }
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the fill color.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Returns the vertex centroid.
    #[inline]
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Returns the anchor that sets this polygon's displacement direction.
    #[inline]
    pub fn original_position(&self) -> Point {
        self.original_position
    }

    /// Iterates over the edges `(current, next)`, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        geometry::ring_edges(&self.vertices)
    }

    /// Returns true if every vertex lies on the inner side of every edge,
    /// allowing vertices up to `tolerance` (a distance) outside.
    ///
    /// Holds for either winding direction.
    pub fn is_convex(&self, tolerance: f64) -> bool {
        let winding = self.winding();
        self.edges().all(|(a, b)| {
            self.vertices
                .iter()
                .all(|v| winding * geometry::signed_distance(*v, a, b) >= -tolerance)
        })
    }

    /// Returns true if `point` lies inside the polygon or within `tolerance`
    /// of its boundary. Only meaningful for convex polygons.
    pub fn contains(&self, point: Point, tolerance: f64) -> bool {
        let winding = self.winding();
        self.edges()
            .all(|(a, b)| winding * geometry::signed_distance(point, a, b) >= -tolerance)
    }

    /// Computes the unsigned area.
    pub fn area(&self) -> f64 {
        geometry::signed_area(&self.vertices).abs()
    }

    /// Returns the vertices translated by `offset`, leaving the polygon untouched.
    pub fn displaced_vertices(&self, offset: Offset) -> Vec<Point> {
        self.vertices.iter().map(|v| *v + offset).collect()
    }

    fn winding(&self) -> f64 {
        if geometry::signed_area(&self.vertices) < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}
