use macroquad::prelude::*;
use mosaic::MosaicConfig;
use mosaic_viz::{ChordStepper, View};

const NUM_LINES: usize = 12;
const DEFAULT_SEED: u64 = 42;

#[macroquad::main("Mosaic Construction")]
async fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let config = MosaicConfig::default();
    let mut stepper = ChordStepper::new(config, seed, NUM_LINES);

    loop {
        if stepper.update() {
            log::debug!(
                "showing {} chords, {} pieces",
                stepper.applied(),
                stepper.mosaic().len()
            );
        }

        clear_background(Color::from_rgba(15, 15, 25, 255));

        let view = View::fit(config.size(), config.final_scale());
        stepper.render(&view);

        draw_text(
            &format!("Mosaic Construction - seed {}", seed),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        stepper.draw_ui(50.0);

        next_frame().await
    }
}
