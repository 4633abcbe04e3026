//! Mosaic construction by repeated random chords.
//!
//! Generation starts from one square piece and applies each chord, in order,
//! to every live piece. A chord replaces each piece by the pieces its cut
//! produces, so the working set grows roughly like a binary partition. Only
//! the final flat set is kept; no tree of cuts is retained.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::Rgb;
use crate::config::MosaicConfig;
use crate::geometry::Point;
use crate::{Cuttable, LineSegment, Mosaic, Polygon};

/// Builds mosaics for a fixed configuration, drawing chords and colors from `R`.
#[derive(Debug, Clone)]
pub struct MosaicGenerator<R = StdRng> {
    config: MosaicConfig,
    rng: R,
}

impl MosaicGenerator<StdRng> {
    /// Creates a reproducible generator: the same seed yields the same mosaics.
    pub fn seeded(config: MosaicConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_entropy(config: MosaicConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> MosaicGenerator<R> {
    /// Creates a generator using the given random source.
    pub fn new(config: MosaicConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MosaicConfig {
        &self.config
    }

    /// Creates the starting piece: the whole square, counter-clockwise from the origin.
    pub fn initial_square(&mut self) -> Polygon {
        let size = self.config.size();
        Polygon::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(size, 0.0),
                Point::new(size, size),
                Point::new(0.0, size),
            ],
            Rgb::random(&mut self.rng),
        )
    }

    /// Samples a point uniformly on the square's border.
    ///
    /// One of the four sides is picked uniformly, then a position along it.
    pub fn random_border_point(&mut self) -> Point {
        let size = self.config.size();
        let along = self.rng.gen_range(0.0..size);
        match self.rng.gen_range(0..4) {
            0 => Point::new(along, 0.0),
            1 => Point::new(size, along),
            2 => Point::new(along, size),
            _ => Point::new(0.0, along),
        }
    }

    /// Samples a chord between two distinct border points.
    pub fn random_chord(&mut self) -> LineSegment {
        let start = self.random_border_point();
        let mut end = self.random_border_point();
        while end == start {
            end = self.random_border_point();
        }
        LineSegment::new(start, end)
    }

    /// Samples `count` independent chords.
    pub fn random_chords(&mut self, count: usize) -> Vec<LineSegment> {
        (0..count).map(|_| self.random_chord()).collect()
    }

    /// Generates a mosaic cut by `num_lines` random chords.
    ///
    /// `num_lines == 0` yields the initial square alone. Keep the count in the
    /// tens: every chord is tested against every live piece.
    pub fn generate(&mut self, num_lines: usize) -> Mosaic {
        let initial = self.initial_square();
        let chords = self.random_chords(num_lines);
        self.cut_all(initial, &chords)
    }

    /// Generates a mosaic by applying the given chords, in order, to the square.
    pub fn generate_with_chords(&mut self, chords: &[LineSegment]) -> Mosaic {
        let initial = self.initial_square();
        self.cut_all(initial, chords)
    }

    fn cut_all(&mut self, initial: Polygon, chords: &[LineSegment]) -> Mosaic {
        debug!("generating mosaic with {} chords", chords.len());

        let mut pieces = vec![initial];
        for (i, chord) in chords.iter().enumerate() {
            let mut next = Vec::with_capacity(pieces.len() * 2);
            for piece in &pieces {
                next.extend(piece.cut(chord, &mut self.rng));
            }
            trace!("chord {}: {} -> {} pieces", i, pieces.len(), next.len());
            pieces = next;
        }

        debug!("mosaic generated: {} pieces", pieces.len());
        Mosaic::new(self.config.size(), pieces)
    }
}
