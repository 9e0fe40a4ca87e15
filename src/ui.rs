//! HUD and menu draw pass
//!
//! Walks the session and issues renderer calls; nothing in here
//! mutates gameplay state. Layout rectangles come from `sim::menu` so
//! the labels land on the same boxes the click handling tests.

use glam::{Mat4, Vec2, Vec3};

use crate::assets::ModelId;
use crate::consts::*;
use crate::render::{Color, Renderer};
use crate::sim::{
    devil_capture_rect, DifficultyLevel, FallingKind, GameMode, GameOverLayout, GameSession,
    GuideLayout, MainMenuLayout, PauseMenuLayout, Rect,
};

/// Render-only state the simulation does not care about: the scrolling
/// belt strips and the alien hovering over the last laser's lane
#[derive(Debug, Clone)]
pub struct VisualState {
    pub belt_offsets: [f32; 2],
    pub alien_x: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualState {
    pub fn new() -> Self {
        Self {
            belt_offsets: [0.0, CONVEYOR_WRAP],
            alien_x: 0.0,
        }
    }

    /// Scroll the belt and track the most recent laser's lane
    pub fn advance(&mut self, session: &GameSession, dt: f32) {
        for offset in &mut self.belt_offsets {
            *offset -= CONVEYOR_SPEED * dt;
            if *offset <= -CONVEYOR_WRAP {
                *offset = CONVEYOR_WRAP;
            }
        }
        if let Some(laser) = session
            .foods
            .iter()
            .filter(|f| f.active && f.kind == FallingKind::Laser)
            .last()
        {
            self.alien_x = laser.position.x;
        }
    }
}

/// Issue all draw calls for the current frame
pub fn draw(session: &GameSession, visuals: &VisualState, renderer: &mut dyn Renderer, now: f32) {
    match session.mode {
        GameMode::MainMenu => draw_main_menu(session, renderer),
        GameMode::Game => draw_game(session, visuals, renderer, now),
        GameMode::PauseMenu => draw_pause_menu(renderer),
        GameMode::GameOverMenu => draw_game_over(session, renderer),
        GameMode::GuideMenu => draw_guide(renderer),
    }
}

fn spin_transform(position: Vec3, scale: f32, angle: f32) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_scale(Vec3::splat(scale))
        * Mat4::from_rotation_y(angle)
}

/// Per-model scale factor in the world transform
fn model_scale(model: ModelId) -> f32 {
    match model {
        ModelId::Croissant => 0.2,
        ModelId::Cup => 0.045,
        ModelId::Gus => 0.03,
        ModelId::Muffin => 0.04,
        ModelId::Laser => 0.06,
        ModelId::Devil => 0.08,
        ModelId::Carrot => 0.1,
        ModelId::Wine => 0.04,
        ModelId::Plate => 0.1,
        ModelId::Alien => 0.15,
        ModelId::Aura => 0.13,
        ModelId::Rocket => 0.045,
    }
}

/// Lives readout: a shrinking bar that goes green, yellow, red
fn lives_bar(lives: u8) -> Option<(Rect, Color)> {
    let (fraction, color) = match lives {
        0 => return None,
        1 => (0.33, Color::RED),
        2 => (0.66, Color::YELLOW),
        _ => (1.0, Color::GREEN),
    };
    let width = 150.0 * fraction;
    Some((
        Rect::from_bounds(
            SCREEN_WIDTH - 160.0,
            SCREEN_WIDTH - 160.0 + width,
            SCREEN_HEIGHT - 30.0,
            SCREEN_HEIGHT - 15.0,
        ),
        color,
    ))
}

fn draw_main_menu(session: &GameSession, renderer: &mut dyn Renderer) {
    let cx = SCREEN_WIDTH / 2.0;
    let cy = SCREEN_HEIGHT / 2.0;
    let menu = MainMenuLayout::new();

    renderer.draw_text(
        "Welcome!",
        Vec2::new(cx - 100.0, cy + 130.0),
        1.0,
        Color::WHITE,
    );
    renderer.draw_text(
        "Choose difficulty:",
        Vec2::new(cx - 130.0, cy + 50.0),
        0.7,
        Color::WHITE,
    );

    for (label, rect, level) in [
        ("Easy", &menu.easy, DifficultyLevel::Easy),
        ("Medium", &menu.medium, DifficultyLevel::Medium),
        ("Hard", &menu.hard, DifficultyLevel::Hard),
    ] {
        let color = if session.difficulty == level {
            Color::YELLOW
        } else {
            Color::WHITE
        };
        renderer.draw_text(label, Vec2::new(rect.left, rect.top - 20.0), 0.6, color);
    }

    renderer.draw_text(
        "Start Game",
        Vec2::new(menu.start.left, menu.start.bottom),
        0.8,
        Color::GREEN,
    );
    renderer.draw_text(
        "Quit",
        Vec2::new(menu.quit.left, menu.quit.bottom),
        0.8,
        Color::RED,
    );
    renderer.draw_text(
        "Guide Page",
        Vec2::new(menu.guide.left, menu.guide.bottom),
        0.8,
        Color::YELLOW,
    );

    let line = 30.0;
    let last = &session.menu_scores.last_run;
    let left = Vec2::new(cx - 370.0, cy + 250.0);
    renderer.draw_text(
        &format!("Last run - collected: {}", last.collected),
        left,
        0.5,
        Color::WHITE,
    );
    renderer.draw_text(
        &format!("Objects dropped: {}", last.dropped),
        left - Vec2::new(0.0, line),
        0.5,
        Color::WHITE,
    );
    renderer.draw_text(
        &format!("Time played: {}", last.time_played.round() as i64),
        left - Vec2::new(0.0, 2.0 * line),
        0.5,
        Color::WHITE,
    );

    let best = &session.menu_scores.best_run;
    let right = Vec2::new(cx + 150.0, cy + 250.0);
    renderer.draw_text(
        &format!("Best run - collected: {}", best.collected),
        right,
        0.5,
        Color::YELLOW,
    );
    renderer.draw_text(
        &format!("Objects dropped: {}", best.dropped),
        right - Vec2::new(0.0, line),
        0.5,
        Color::YELLOW,
    );
    renderer.draw_text(
        &format!("Time played: {}", best.time_played.round() as i64),
        right - Vec2::new(0.0, 2.0 * line),
        0.5,
        Color::YELLOW,
    );
}

fn draw_game(
    session: &GameSession,
    visuals: &VisualState,
    renderer: &mut dyn Renderer,
    now: f32,
) {
    // Belt strips behind everything
    for offset in visuals.belt_offsets {
        renderer.draw_rect(
            Rect::from_bounds(-0.6, 0.6, offset - 1.2, offset + 1.2),
            Color::rgb(0.25, 0.25, 0.3),
        );
    }

    for food in &session.foods {
        if !food.active || food.position.y <= CATCH_LINE_Y {
            continue;
        }
        match food.kind {
            FallingKind::Laser => {
                renderer.draw_rect(
                    Rect::from_bounds(
                        food.position.x - 0.03,
                        food.position.x + 0.03,
                        food.position.y,
                        food.position.y + 0.2,
                    ),
                    Color::RED,
                );
            }
            kind => {
                let model = ModelId::for_kind(kind);
                renderer.draw_model(
                    model,
                    spin_transform(food.position, model_scale(model), now),
                );
                if kind == FallingKind::Devil {
                    renderer.draw_rect(
                        devil_capture_rect(food.position, session.capture_offset),
                        Color::RED,
                    );
                }
            }
        }
    }

    for rocket in &session.rockets {
        if rocket.collided {
            continue;
        }
        renderer.draw_model(
            ModelId::Rocket,
            spin_transform(rocket.position, model_scale(ModelId::Rocket), now),
        );
    }

    let plate_pos = session.plate.position + Vec3::new(session.plate.display_offset, 0.0, 0.0);
    renderer.draw_model(
        ModelId::Plate,
        Mat4::from_translation(plate_pos)
            * Mat4::from_scale(Vec3::splat(model_scale(ModelId::Plate))),
    );
    if session.powerup.active.is_some() {
        renderer.draw_model(
            ModelId::Aura,
            spin_transform(plate_pos, model_scale(ModelId::Aura), 80.0),
        );
    }

    renderer.draw_model(
        ModelId::Alien,
        spin_transform(
            Vec3::new(visuals.alien_x, 1.10, 0.0),
            model_scale(ModelId::Alien),
            now,
        ),
    );

    // HUD text column
    let powerup_line = match (session.powerup.active, session.powerup.collected) {
        (Some(kind), _) => format!("Powerup: {kind:?} (active)"),
        (None, Some(kind)) => format!("Powerup: {kind:?}"),
        (None, None) => "Powerup: none".to_string(),
    };
    renderer.draw_text(
        &format!("Objects dropped: {}", session.stats.spawned),
        Vec2::new(10.0, 550.0),
        0.6,
        Color::WHITE,
    );
    renderer.draw_text(
        &format!("Objects collected: {}", session.stats.collected),
        Vec2::new(10.0, 480.0),
        0.6,
        Color::WHITE,
    );
    renderer.draw_text(
        &format!("Lives: {}", session.stats.lives),
        Vec2::new(10.0, 410.0),
        0.6,
        Color::WHITE,
    );
    renderer.draw_text(&powerup_line, Vec2::new(10.0, 340.0), 0.6, Color::WHITE);

    if let Some((bar, color)) = lives_bar(session.stats.lives) {
        renderer.draw_rect(bar, color);
    }
}

fn draw_pause_menu(renderer: &mut dyn Renderer) {
    let menu = PauseMenuLayout::new();
    renderer.draw_text(
        "Pause",
        Vec2::new(SCREEN_WIDTH / 2.0 - 100.0, SCREEN_HEIGHT / 2.0 + 100.0),
        1.0,
        Color::WHITE,
    );
    renderer.draw_text(
        "Resume Game",
        Vec2::new(menu.resume.left, menu.resume.bottom),
        0.8,
        Color::GREEN,
    );
    renderer.draw_text(
        "Restart Game",
        Vec2::new(menu.restart.left, menu.restart.bottom),
        0.8,
        Color::GREEN,
    );
    renderer.draw_text(
        "Quit",
        Vec2::new(menu.quit.left, menu.quit.bottom),
        0.8,
        Color::RED,
    );
}

fn draw_game_over(session: &GameSession, renderer: &mut dyn Renderer) {
    let cx = SCREEN_WIDTH / 2.0;
    let cy = SCREEN_HEIGHT / 2.0;
    let menu = GameOverLayout::new();

    renderer.draw_text(
        "Game Over",
        Vec2::new(cx - 100.0, cy + 100.0),
        1.0,
        Color::RED,
    );
    renderer.draw_text(
        &format!("Objects collected: {}", session.stats.collected),
        Vec2::new(cx - 140.0, cy + 40.0),
        0.8,
        Color::WHITE,
    );
    renderer.draw_text(
        &format!("Total objects dropped: {}", session.missed()),
        Vec2::new(cx - 140.0, cy - 10.0),
        0.8,
        Color::WHITE,
    );
    renderer.draw_text(
        "Restart",
        Vec2::new(menu.restart.left, menu.restart.bottom),
        0.8,
        Color::GREEN,
    );
    renderer.draw_text(
        "Quit",
        Vec2::new(menu.quit.left, menu.quit.bottom),
        0.8,
        Color::RED,
    );
}

fn draw_guide(renderer: &mut dyn Renderer) {
    let start_x = SCREEN_WIDTH / 2.0 - 300.0;
    let mut y = SCREEN_HEIGHT / 2.0 + 250.0;
    let line = 30.0;
    let title = Color::YELLOW;
    let text = Color::WHITE;

    renderer.draw_text("GUIDE", Vec2::new(start_x, y), 0.7, title);

    y -= line * 2.0;
    renderer.draw_text("Powerups:", Vec2::new(start_x, y), 0.6, title);
    renderer.draw_text(
        "- Carrot: invincible for 10 seconds",
        Vec2::new(start_x + 20.0, y - line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- Wine: fire rockets that destroy lasers for 10 seconds",
        Vec2::new(start_x + 20.0, y - 2.0 * line),
        0.5,
        text,
    );

    y -= 4.0 * line;
    renderer.draw_text("Controls:", Vec2::new(start_x, y), 0.6, title);
    renderer.draw_text(
        "- A / left arrow: move left",
        Vec2::new(start_x + 20.0, y - line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- D / right arrow: move right",
        Vec2::new(start_x + 20.0, y - 2.0 * line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- SPACE: activate a collected powerup",
        Vec2::new(start_x + 20.0, y - 3.0 * line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- Left mouse button: capture the devil",
        Vec2::new(start_x + 20.0, y - 4.0 * line),
        0.5,
        text,
    );

    y -= 6.0 * line;
    renderer.draw_text("Objects:", Vec2::new(start_x, y), 0.6, title);
    renderer.draw_text(
        "- Laser: fired by the alien, costs a life on contact",
        Vec2::new(start_x + 20.0, y - line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- Devil: costs a life on contact, click its box to capture it",
        Vec2::new(start_x + 20.0, y - 2.0 * line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- Carrot / Wine: grant powerups",
        Vec2::new(start_x + 20.0, y - 3.0 * line),
        0.5,
        text,
    );
    renderer.draw_text(
        "- Everything else: collectible",
        Vec2::new(start_x + 20.0, y - 4.0 * line),
        0.5,
        text,
    );

    let quit = GuideLayout::new().quit;
    renderer.draw_text("Quit", Vec2::new(quit.left, quit.bottom), 0.8, Color::RED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::ScoreFile;
    use crate::sim::{FallingEntity, GameSession};

    #[derive(Default)]
    struct Recorder {
        models: Vec<ModelId>,
        rects: Vec<(Rect, Color)>,
        texts: Vec<String>,
    }

    impl Renderer for Recorder {
        fn draw_model(&mut self, model: ModelId, _transform: Mat4) {
            self.models.push(model);
        }
        fn draw_rect(&mut self, bounds: Rect, color: Color) {
            self.rects.push((bounds, color));
        }
        fn draw_text(&mut self, text: &str, _position: Vec2, _scale: f32, _color: Color) {
            self.texts.push(text.to_string());
        }
    }

    fn game_session() -> (GameSession, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreFile::new(dir.path().join("score.json"));
        let mut session = GameSession::new(9, 0.0, store);
        session.start_run(0.0);
        session.enter_mode(GameMode::Game, 0.0);
        session.foods.clear();
        (session, dir)
    }

    #[test]
    fn inactive_entities_are_not_drawn() {
        let (mut session, _dir) = game_session();
        session
            .foods
            .push(FallingEntity::new(FallingKind::Muffin, Vec3::new(0.0, 0.5, SPAWN_Z)));
        let mut dead = FallingEntity::new(FallingKind::Muffin, Vec3::new(0.3, 0.5, SPAWN_Z));
        dead.active = false;
        session.foods.push(dead);

        let mut recorder = Recorder::default();
        draw(&session, &VisualState::new(), &mut recorder, 1.0);

        let muffins = recorder
            .models
            .iter()
            .filter(|m| **m == ModelId::Muffin)
            .count();
        assert_eq!(muffins, 1);
    }

    #[test]
    fn lives_bar_shrinks_and_changes_color() {
        let (full, green) = lives_bar(3).unwrap();
        let (_, yellow) = lives_bar(2).unwrap();
        let (low, red) = lives_bar(1).unwrap();
        assert_eq!(green, Color::GREEN);
        assert_eq!(yellow, Color::YELLOW);
        assert_eq!(red, Color::RED);
        assert!(low.right - low.left < full.right - full.left);
        assert!(lives_bar(0).is_none());
    }

    #[test]
    fn main_menu_shows_the_best_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = ScoreFile::new(dir.path().join("score.json"));
        store
            .save(&crate::scores::RunSummary {
                collected: 12,
                dropped: 3,
                time_played: 45.0,
            })
            .unwrap();
        let session = GameSession::new(9, 0.0, store);

        let mut recorder = Recorder::default();
        draw(&session, &VisualState::new(), &mut recorder, 0.0);

        assert!(
            recorder
                .texts
                .iter()
                .any(|t| t == "Best run - collected: 12")
        );
    }

    #[test]
    fn aura_is_drawn_only_while_a_powerup_runs() {
        let (mut session, _dir) = game_session();
        let mut recorder = Recorder::default();
        draw(&session, &VisualState::new(), &mut recorder, 0.0);
        assert!(!recorder.models.contains(&ModelId::Aura));

        session.powerup.collect(crate::sim::PowerupKind::Invincibility);
        session.powerup.try_activate(0.0);
        let mut recorder = Recorder::default();
        draw(&session, &VisualState::new(), &mut recorder, 0.0);
        assert!(recorder.models.contains(&ModelId::Aura));
    }

    #[test]
    fn belt_strips_wrap_around() {
        let (session, _dir) = game_session();
        let mut visuals = VisualState::new();
        visuals.belt_offsets = [-CONVEYOR_WRAP + 0.001, 0.0];
        visuals.advance(&session, 1.0);
        assert_eq!(visuals.belt_offsets[0], CONVEYOR_WRAP);
    }
}
