//! Explode-and-return animation of mosaic pieces.
//!
//! Each cycle of length `period` is split into three phases by its progress
//! `t` in `[0, 1)`:
//!
//! - `[0, 0.2)`: rest, factor 0
//! - `[0.2, 0.6)`: expand, factor eases 0 -> 1
//! - `[0.6, 1.0)`: contract, factor eases 1 -> 0
//!
//! The factor scales each piece's radial offset from the mosaic center. The
//! driver never touches geometry; callers add the returned offsets at render
//! time.
//!
//! Cycle tracking lives in an [`AnimationState`] owned by the caller, so
//! several mosaics can animate independently and tests can feed synthetic
//! timestamps.

use log::debug;

use crate::Mosaic;
use crate::config::MosaicConfig;
use crate::geometry::{Offset, Point};

/// Progress at which the rest phase ends and expansion begins.
pub const REST_END: f64 = 0.2;

/// Progress at which expansion peaks and contraction begins.
pub const PEAK: f64 = 0.6;

const PHASE_SPAN: f64 = PEAK - REST_END;

/// Quadratic ease-in-out: `2x²` below one half, `-1 + (4 - 2x)x` above.
///
/// `f(0) = 0`, `f(0.5) = 0.5`, `f(1) = 1`, and `f(x) = 1 - f(1 - x)`.
/// Value and slope are continuous at `x = 0.5`.
#[inline]
pub fn ease_in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        -1.0 + (4.0 - 2.0 * x) * x
    }
}

/// Which part of the cycle a progress value falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pieces sit in place
    Rest,
    /// Pieces move outward
    Expanding,
    /// Pieces move back
    Contracting,
}

impl Phase {
    /// Returns the phase for a progress value in `[0, 1)`.
    pub fn at(progress: f64) -> Self {
        if progress < REST_END || progress >= 1.0 {
            Phase::Rest
        } else if progress < PEAK {
            Phase::Expanding
        } else {
            Phase::Contracting
        }
    }
}

/// Cycle bookkeeping for one animated mosaic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    start: Option<f64>,
    last_cycle: u64,
}

impl AnimationState {
    /// Creates a state that will anchor on the first timestamp it sees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the anchor timestamp and the cycle count.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the first timestamp seen since creation or the last reset.
    #[inline]
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    /// Returns the index of the most recently entered cycle.
    #[inline]
    pub fn last_cycle(&self) -> u64 {
        self.last_cycle
    }
}

/// What the animation looks like at one timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Displacement factor in `[0, 1]`.
    pub factor: f64,
    /// Phase the current progress falls in.
    pub phase: Phase,
    /// Zero-based index of the current cycle.
    pub cycle: u64,
    /// Position within the current cycle, in `[0, 1)`.
    pub progress: f64,
    /// True on the first frame observed in a new cycle. Callers that
    /// regenerate the mosaic each cycle do so when this is set.
    pub cycle_started: bool,
}

/// Maps timestamps to displacement factors and factors to per-piece offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDriver {
    period: f64,
    final_scale: f64,
    center: Point,
}

impl AnimationDriver {
    /// Creates a driver.
    ///
    /// `period` is in the same unit as the timestamps passed to [`advance`](Self::advance).
    ///
    /// # Panics
    /// Panics if `period` is not positive or `final_scale` is not greater than 1.
    pub fn new(period: f64, final_scale: f64, center: Point) -> Self {
        assert!(
            period.is_finite() && period > 0.0,
            "Animation period must be positive"
        );
        assert!(
            final_scale.is_finite() && final_scale > 1.0,
            "Final scale must be greater than 1"
        );
        Self {
            period,
            final_scale,
            center,
        }
    }

    /// Creates a driver for mosaics built with `config` (timestamps in milliseconds).
    pub fn from_config(config: &MosaicConfig) -> Self {
        Self::new(config.period(), config.final_scale(), config.center())
    }

    /// Returns the cycle length.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns the point pieces move away from.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Computes the frame for `timestamp`, updating the cycle bookkeeping in `state`.
    ///
    /// The first call anchors `state` at `timestamp`. Timestamps may grow
    /// without bound; ones earlier than the anchor are treated as the anchor.
    /// Repeating a timestamp returns the same frame, except that
    /// `cycle_started` is only reported once per cycle.
    pub fn advance(&self, state: &mut AnimationState, timestamp: f64) -> Frame {
        let start = *state.start.get_or_insert(timestamp);
        let elapsed = (timestamp - start).max(0.0);

        // Cycle index and progress come from the same quotient so they agree at boundaries
        let cycles = elapsed / self.period;
        let whole = cycles.floor();
        let cycle = whole as u64;
        let progress = cycles - whole;

        let cycle_started = cycle > state.last_cycle;
        if cycle_started {
            debug!("animation entered cycle {cycle}");
            state.last_cycle = cycle;
        }

        Frame {
            factor: self.factor_at(progress),
            phase: Phase::at(progress),
            cycle,
            progress,
            cycle_started,
        }
    }

    /// Returns the displacement factor for a progress value, with no bookkeeping.
    ///
    /// Values outside `[0, 1)` are clamped; progress 1 (the period boundary) is rest.
    pub fn factor_at(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        let factor = match Phase::at(t) {
            Phase::Rest => 0.0,
            Phase::Expanding => ease_in_out_quad((t - REST_END) / PHASE_SPAN),
            Phase::Contracting => 1.0 - ease_in_out_quad((t - PEAK) / PHASE_SPAN),
        };
        factor.clamp(0.0, 1.0)
    }

    /// Offset for a piece anchored at `anchor` when the factor is `factor`.
    ///
    /// At factor 1 the piece sits where scaling the mosaic by `final_scale`
    /// about its center would put its anchor; at factor 0 it does not move.
    pub fn displacement(&self, factor: f64, anchor: Point) -> Offset {
        (anchor - self.center) * ((self.final_scale - 1.0) * factor)
    }

    /// Offsets for every piece of `mosaic`, in the same order as its polygons.
    pub fn displacements(&self, factor: f64, mosaic: &Mosaic) -> Vec<Offset> {
        mosaic
            .iter()
            .map(|piece| self.displacement(factor, piece.original_position()))
            .collect()
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::from_config(&MosaicConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MosaicGenerator;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn driver() -> AnimationDriver {
        AnimationDriver::default()
    }

    #[test]
    fn easing_fixed_points() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert_eq!(ease_in_out_quad(0.25), 0.125);
    }

    #[test]
    fn easing_slope_continuous_at_half() {
        let h = 1e-6;
        let left = (ease_in_out_quad(0.5) - ease_in_out_quad(0.5 - h)) / h;
        let right = (ease_in_out_quad(0.5 + h) - ease_in_out_quad(0.5)) / h;
        assert!((left - 2.0).abs() < 1e-4);
        assert!((right - 2.0).abs() < 1e-4);
    }

    #[test]
    fn phases() {
        assert_eq!(Phase::at(0.0), Phase::Rest);
        assert_eq!(Phase::at(0.19), Phase::Rest);
        assert_eq!(Phase::at(0.2), Phase::Expanding);
        assert_eq!(Phase::at(0.59), Phase::Expanding);
        assert_eq!(Phase::at(0.6), Phase::Contracting);
        assert_eq!(Phase::at(0.99), Phase::Contracting);
        assert_eq!(Phase::at(1.0), Phase::Rest);
    }

    #[test]
    fn factor_curve_landmarks() {
        let d = driver();
        assert_eq!(d.factor_at(0.0), 0.0);
        assert_eq!(d.factor_at(0.1), 0.0);
        assert_eq!(d.factor_at(0.2), 0.0);
        assert!((d.factor_at(0.4) - 0.5).abs() < TOLERANCE);
        assert_eq!(d.factor_at(0.6), 1.0);
        assert!((d.factor_at(0.8) - 0.5).abs() < TOLERANCE);
        assert_eq!(d.factor_at(1.0), 0.0);
    }

    #[test]
    fn advance_anchors_on_first_timestamp() {
        let d = driver();
        let mut state = AnimationState::new();
        let frame = d.advance(&mut state, 123_456.0);

        assert_eq!(state.start(), Some(123_456.0));
        assert_eq!(frame.cycle, 0);
        assert_eq!(frame.factor, 0.0);
        assert_eq!(frame.phase, Phase::Rest);
        assert!(!frame.cycle_started);
    }

    #[test]
    fn advance_follows_the_period() {
        let d = driver();
        let mut state = AnimationState::new();
        d.advance(&mut state, 1000.0);

        // 0.6 of a 5000 ms period
        let peak = d.advance(&mut state, 4000.0);
        assert_eq!(peak.phase, Phase::Contracting);
        assert!((peak.factor - 1.0).abs() < TOLERANCE);

        let boundary = d.advance(&mut state, 6000.0);
        assert_eq!(boundary.cycle, 1);
        assert_eq!(boundary.factor, 0.0);
        assert!(boundary.cycle_started);
        assert_eq!(state.last_cycle(), 1);
    }

    #[test]
    fn repeated_timestamp_is_idempotent() {
        let d = driver();
        let mut state = AnimationState::new();
        d.advance(&mut state, 0.0);

        let first = d.advance(&mut state, 7500.0);
        let second = d.advance(&mut state, 7500.0);
        assert!(first.cycle_started);
        assert!(!second.cycle_started);
        assert_eq!(first.factor, second.factor);
        assert_eq!(first.cycle, second.cycle);
        assert_eq!(first.progress, second.progress);
    }

    #[test]
    fn skipped_cycles_signal_once() {
        let d = driver();
        let mut state = AnimationState::new();
        d.advance(&mut state, 0.0);

        let frame = d.advance(&mut state, 5000.0 * 7.0 + 100.0);
        assert_eq!(frame.cycle, 7);
        assert!(frame.cycle_started);
        assert!(!d.advance(&mut state, 5000.0 * 7.0 + 200.0).cycle_started);
    }

    #[test]
    fn cycle_and_progress_agree_on_boundary() {
        // 0.5 / 0.1 rounds to exactly 5 while 0.5 % 0.1 is just under 0.1
        let d = AnimationDriver::new(0.1, 1.1, Point::origin());
        let mut state = AnimationState::new();
        d.advance(&mut state, 0.0);

        let frame = d.advance(&mut state, 0.5);
        assert_eq!(frame.cycle, 5);
        assert_eq!(frame.progress, 0.0);
        assert_eq!(frame.phase, Phase::Rest);
        assert_eq!(frame.factor, 0.0);
        assert!(frame.cycle_started);
    }

    #[test]
    fn timestamps_before_start_rest() {
        let d = driver();
        let mut state = AnimationState::new();
        d.advance(&mut state, 10_000.0);
        let frame = d.advance(&mut state, 9_000.0);
        assert_eq!(frame.factor, 0.0);
        assert_eq!(frame.cycle, 0);
    }

    #[test]
    fn reset_reanchors() {
        let d = driver();
        let mut state = AnimationState::new();
        d.advance(&mut state, 0.0);
        d.advance(&mut state, 12_000.0);
        state.reset();

        assert_eq!(state, AnimationState::new());
        let frame = d.advance(&mut state, 12_000.0);
        assert_eq!(frame.cycle, 0);
        assert_eq!(frame.progress, 0.0);
    }

    #[test]
    fn independent_states_do_not_interfere() {
        let d = driver();
        let mut a = AnimationState::new();
        let mut b = AnimationState::new();
        d.advance(&mut a, 0.0);
        d.advance(&mut b, 2000.0);

        let fa = d.advance(&mut a, 3000.0);
        let fb = d.advance(&mut b, 3000.0);
        assert!((fa.factor - 1.0).abs() < TOLERANCE);
        assert_eq!(fb.factor, 0.0);
    }

    #[test]
    fn displacement_is_radial() {
        let d = driver();
        let anchor = Point::new(300.0, 200.0);

        assert_eq!(d.displacement(0.0, anchor), Offset::zeros());

        let peak = d.displacement(1.0, anchor);
        assert!((peak.x - 10.0).abs() < TOLERANCE);
        assert!(peak.y.abs() < TOLERANCE);

        // Scaling about the center by final_scale
        let moved = anchor + peak;
        let scaled = d.center() + (anchor - d.center()) * 1.1;
        assert!((moved - scaled).norm() < TOLERANCE);

        assert_eq!(d.displacement(1.0, d.center()), Offset::zeros());
    }

    #[test]
    fn displacements_cover_every_piece() {
        let d = driver();
        let mosaic = MosaicGenerator::seeded(MosaicConfig::default(), 9).generate(6);
        let offsets = d.displacements(0.5, &mosaic);

        assert_eq!(offsets.len(), mosaic.len());
        for (piece, offset) in mosaic.iter().zip(&offsets) {
            assert_eq!(*offset, d.displacement(0.5, piece.original_position()));
        }
    }

    #[test]
    #[should_panic(expected = "period must be positive")]
    fn zero_period_panics() {
        AnimationDriver::new(0.0, 1.1, Point::origin());
    }

    #[test]
    #[should_panic(expected = "greater than 1")]
    fn non_expanding_scale_panics() {
        AnimationDriver::new(1000.0, 1.0, Point::origin());
    }

    proptest! {
        #[test]
        fn easing_is_symmetric(x in 0.0f64..=1.0) {
            prop_assert!((ease_in_out_quad(x) - (1.0 - ease_in_out_quad(1.0 - x))).abs() < 1e-12);
        }

        #[test]
        fn easing_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out_quad(lo) <= ease_in_out_quad(hi) + 1e-15);
        }

        #[test]
        fn factor_stays_in_unit_range(timestamp in 0.0f64..1e12) {
            let d = driver();
            let mut state = AnimationState::new();
            d.advance(&mut state, 0.0);
            let frame = d.advance(&mut state, timestamp);
            prop_assert!((0.0..=1.0).contains(&frame.factor));
            prop_assert!((0.0..1.0).contains(&frame.progress));
        }

        #[test]
        fn cycle_and_progress_rebuild_elapsed(
            period in 1e-3f64..1e4,
            elapsed in 0.0f64..1e7,
        ) {
            let d = AnimationDriver::new(period, 1.1, Point::origin());
            let mut state = AnimationState::new();
            d.advance(&mut state, 0.0);
            let frame = d.advance(&mut state, elapsed);

            prop_assert!((0.0..1.0).contains(&frame.progress));
            let rebuilt = (frame.cycle as f64 + frame.progress) * period;
            prop_assert!((rebuilt - elapsed).abs() <= 1e-9 * elapsed.max(1.0));
        }

        #[test]
        fn landmarks_hold_for_any_period(period in 1e-3f64..1e6) {
            let d = AnimationDriver::new(period, 1.5, Point::origin());
            let mut state = AnimationState::new();
            let origin = 1_000.0;

            prop_assert_eq!(d.advance(&mut state, origin).factor, 0.0);
            let peak = d.advance(&mut state, origin + 0.6 * period).factor;
            prop_assert!((peak - 1.0).abs() < 1e-6);
            let end = d.advance(&mut state, origin + period).factor;
            prop_assert!(end < 1e-6);
        }
    }
}
