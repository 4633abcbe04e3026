use log::info;
use macroquad::prelude::*;
use mosaic::{AnimationDriver, AnimationState, MosaicConfig, MosaicGenerator};
use mosaic_viz::{draw_polygon, View};

const NUM_LINES: usize = 12;
const DEFAULT_SEED: u64 = 42;

#[macroquad::main("Mosaic")]
async fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let config = MosaicConfig::default();
    let mut generator = MosaicGenerator::seeded(config, seed);
    let driver = AnimationDriver::from_config(&config);
    let mut state = AnimationState::new();

    let mut mosaic = generator.generate(NUM_LINES);
    info!("seed {}: {} pieces", seed, mosaic.len());

    loop {
        let frame = driver.advance(&mut state, get_time() * 1000.0);
        if frame.cycle_started {
            mosaic = generator.generate(NUM_LINES);
            info!("cycle {}: {} pieces", frame.cycle, mosaic.len());
        }

        clear_background(Color::from_rgba(20, 20, 30, 255));

        let view = View::fit(config.size(), config.final_scale());
        for (piece, offset) in mosaic.iter().zip(driver.displacements(frame.factor, &mosaic)) {
            draw_polygon(piece, offset, &view);
        }

        draw_text(
            &format!("Mosaic - {} pieces | cycle {}", mosaic.len(), frame.cycle),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("{:?} | factor {:.2}", frame.phase, frame.factor),
            10.0,
            45.0,
            18.0,
            GRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 65.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
