//! Chord-by-chord stepping through a mosaic's construction.

use macroquad::prelude::*;
use mosaic::{LineSegment, Mosaic, MosaicConfig, MosaicGenerator, Offset};

use crate::{draw_polygon, View};

/// Interactive viewer that replays generation one chord at a time.
///
/// Every step rebuilds the mosaic from the same seed, so stepping back and
/// forth always shows the same pieces.
pub struct ChordStepper {
    config: MosaicConfig,
    seed: u64,
    chords: Vec<LineSegment>,
    applied: usize,
    mosaic: Mosaic,
}

impl ChordStepper {
    /// Samples `num_lines` chords from `seed` and starts with none applied.
    pub fn new(config: MosaicConfig, seed: u64, num_lines: usize) -> Self {
        let chords = MosaicGenerator::seeded(config, seed).random_chords(num_lines);
        let mosaic = MosaicGenerator::seeded(config, seed).generate_with_chords(&[]);
        Self {
            config,
            seed,
            chords,
            applied: 0,
            mosaic,
        }
    }

    /// Returns how many chords have been applied.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Returns the mosaic after the applied chords.
    pub fn mosaic(&self) -> &Mosaic {
        &self.mosaic
    }

    /// Applies one more chord. Returns true if there was one left.
    pub fn step_forward(&mut self) -> bool {
        if self.applied == self.chords.len() {
            return false;
        }
        self.applied += 1;
        self.rebuild();
        true
    }

    /// Removes the last applied chord. Returns true if any were applied.
    pub fn step_back(&mut self) -> bool {
        if self.applied == 0 {
            return false;
        }
        self.applied -= 1;
        self.rebuild();
        true
    }

    /// Handles keyboard input: [N]ext, [P]revious, [R]estart.
    /// Returns true if the displayed mosaic changed.
    pub fn update(&mut self) -> bool {
        let mut changed = false;

        if is_key_pressed(KeyCode::N) {
            changed = self.step_forward();
        }
        if is_key_pressed(KeyCode::P) {
            changed = self.step_back();
        }
        if is_key_pressed(KeyCode::R) && self.applied > 0 {
            self.applied = 0;
            self.rebuild();
            changed = true;
        }

        changed
    }

    /// Draws the current pieces and highlights the most recent chord.
    pub fn render(&self, view: &View) {
        for piece in &self.mosaic {
            draw_polygon(piece, Offset::zeros(), view);
        }
        if let Some(chord) = self.applied.checked_sub(1).map(|i| self.chords[i]) {
            let a = view.project(chord.start());
            let b = view.project(chord.end());
            draw_line(a.x, a.y, b.x, b.y, 2.0, YELLOW);
        }
    }

    /// Draws the step counter and key help.
    pub fn draw_ui(&self, y_offset: f32) {
        draw_text(
            &format!(
                "Chords: {}/{} | Pieces: {}",
                self.applied,
                self.chords.len(),
                self.mosaic.len()
            ),
            10.0,
            y_offset,
            18.0,
            WHITE,
        );
        draw_text(
            "[N]ext | [P]revious | [R]estart",
            10.0,
            y_offset + 20.0,
            16.0,
            DARKGRAY,
        );
    }

    fn rebuild(&mut self) {
        self.mosaic = MosaicGenerator::seeded(self.config, self.seed)
            .generate_with_chords(&self.chords[..self.applied]);
    }
}
