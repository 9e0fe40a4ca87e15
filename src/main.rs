//! Conveyor Catch entry point
//!
//! Wires the collaborator interfaces and runs a short scripted demo
//! session headlessly. A real shell swaps in its renderer, audio
//! device, and input sampling; everything else stays the same.

use conveyor_catch::audio::{route_events, NullAudio};
use conveyor_catch::consts::SCREEN_HEIGHT;
use conveyor_catch::render::NullRenderer;
use conveyor_catch::scores::ScoreFile;
use conveyor_catch::sim::{frame, FrameInput, GameMode, GameSession, MainMenuLayout};
use conveyor_catch::ui;

fn main() {
    env_logger::init();

    let seed = rand::random::<u64>();
    let store = ScoreFile::new("score.json");
    let mut session = GameSession::new(seed, 0.0, store);
    let mut audio = NullAudio;
    let mut renderer = NullRenderer;
    let mut visuals = ui::VisualState::new();

    log::info!("starting demo run (seed {seed})");

    // Click Start on the main menu
    let start = MainMenuLayout::new().start.center();
    let click = FrameInput {
        mouse: start,
        mouse_down: true,
        ..Default::default()
    };
    frame(&mut session, &click, 0.0);

    // Drift the plate back and forth until the run ends
    let step = 1.0 / 60.0;
    let mut now = 0.0f32;
    while session.mode == GameMode::Game && now < 120.0 {
        now += step;
        let sweep_left = (now as u32 / 2) % 2 == 0;
        let input = FrameInput {
            left: sweep_left,
            right: !sweep_left,
            mouse: glam::Vec2::new(0.0, SCREEN_HEIGHT),
            ..Default::default()
        };
        frame(&mut session, &input, now);

        let events = session.drain_events();
        for event in &events {
            log::debug!("{event:?}");
        }
        route_events(&events, &mut audio);

        visuals.advance(&session, step);
        ui::draw(&session, &visuals, &mut renderer, now);
    }

    let stats = &session.stats;
    log::info!(
        "demo over after {:.1}s: collected {} missed {} lives {}",
        stats.elapsed,
        stats.collected,
        session.missed(),
        stats.lives
    );
}
