//! Random-chord mosaics: a square cut into convex pieces that drift apart and back.
//!
//! # Example
//!
//! ```
//! use mosaic::{AnimationDriver, AnimationState, MosaicConfig, MosaicGenerator};
//!
//! let config = MosaicConfig::default();
//! let mut generator = MosaicGenerator::seeded(config, 7);
//! let mut mosaic = generator.generate(12);
//!
//! let driver = AnimationDriver::from_config(&config);
//! let mut state = AnimationState::new();
//!
//! for timestamp in [0.0, 1500.0, 3000.0, 5200.0] {
//!     let frame = driver.advance(&mut state, timestamp);
//!     if frame.cycle_started {
//!         mosaic = generator.generate(12);
//!     }
//!     for piece in &mosaic {
//!         let offset = driver.displacement(frame.factor, piece.original_position());
//!         let _outline = piece.displaced_vertices(offset);
//!     }
//! }
//! ```

pub mod animation;
mod color;
mod config;
mod cuttable;
pub mod geometry;
mod generator;
mod mosaic;
mod polygon;
mod segment;

pub use animation::{ease_in_out_quad, AnimationDriver, AnimationState, Frame, Phase};
pub use color::Rgb;
pub use config::{
    ConfigError, MosaicConfig, DEFAULT_FINAL_SCALE, DEFAULT_PERIOD_MS, DEFAULT_SIZE,
};
pub use cuttable::{split_rings, Cuttable};
pub use generator::MosaicGenerator;
pub use geometry::{Offset, Point, Side};
pub use mosaic::Mosaic;
pub use polygon::Polygon;
pub use segment::LineSegment;
