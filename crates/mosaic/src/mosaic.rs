//! The flat set of pieces partitioning the square.

use crate::Polygon;

/// A partition of the square into convex polygons.
///
/// The pieces cover the square without overlapping, so their areas sum to
/// `size²` up to floating-point tolerance. A regenerated mosaic replaces the
/// old one wholesale; pieces are never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosaic {
    size: f64,
    polygons: Vec<Polygon>,
}

impl Mosaic {
    pub(crate) fn new(size: f64, polygons: Vec<Polygon>) -> Self {
        Self { size, polygons }
    }

    /// Side length of the partitioned square.
    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the pieces, in generation order.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns the number of pieces.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if there are no pieces (never the case for a generated mosaic).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Iterates over the pieces.
    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Sums the areas of all pieces.
    pub fn total_area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }
}

impl IntoIterator for Mosaic {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mosaic {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
