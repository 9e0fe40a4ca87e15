//! Per-frame update and the menu/game state machine
//!
//! One call to [`frame`] advances the session by one frame. The shell
//! samples the clock and the input snapshot once per frame and passes
//! both in; nothing in here polls a device or reads a global.
//!
//! Mode transitions:
//!
//! | From | Trigger | To |
//! |---|---|---|
//! | MainMenu | click Start | Game (full reset) |
//! | MainMenu | click Guide / key H | GuideMenu |
//! | MainMenu | click Quit / Esc | exit |
//! | Game | lives reach 0 | GameOverMenu (score saved) |
//! | Game | Esc (debounced) | PauseMenu |
//! | PauseMenu | click Resume / Esc | Game |
//! | PauseMenu | click Restart | Game (full reset) |
//! | PauseMenu | click Quit | save score, exit |
//! | GameOverMenu | click Restart | Game (full reset) |
//! | GameOverMenu | click Quit / Esc | exit |
//! | GuideMenu | click Quit / Esc | MainMenu |

use glam::Vec2;

use super::collision::{devil_capture_rect, Aabb};
use super::menu::{GameOverLayout, GuideLayout, MainMenuLayout, PauseMenuLayout};
use super::state::{DifficultyLevel, FallingKind, GameEvent, GameMode, GameSession, PowerupKind};
use crate::consts::*;

/// Per-frame input snapshot, sampled once by the shell
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Power-up activation / rocket fire (space)
    pub action: bool,
    /// Guide page shortcut (H)
    pub guide: bool,
    pub escape: bool,
    /// Mouse position in logical screen coordinates, y up
    pub mouse: Vec2,
    pub mouse_down: bool,
}

/// Advance the session by one frame
pub fn frame(session: &mut GameSession, input: &FrameInput, now: f32) {
    let dt = (now - session.last_frame).max(0.0);
    session.last_frame = now;

    match session.mode {
        GameMode::MainMenu => main_menu_frame(session, input, now),
        GameMode::Game => game_frame(session, input, now, dt),
        GameMode::PauseMenu => pause_menu_frame(session, input, now),
        GameMode::GameOverMenu => game_over_frame(session, input, now),
        GameMode::GuideMenu => guide_frame(session, input, now),
    }
}

fn main_menu_frame(session: &mut GameSession, input: &FrameInput, now: f32) {
    if input.guide {
        session.enter_mode(GameMode::GuideMenu, now);
        return;
    }

    if input.mouse_down {
        let menu = MainMenuLayout::new();
        if menu.start.contains(input.mouse) {
            session.start_run(now);
            session.enter_mode(GameMode::Game, now);
            return;
        }
        if menu.quit.contains(input.mouse) {
            session.exit_requested = true;
            return;
        }
        if menu.guide.contains(input.mouse) {
            session.enter_mode(GameMode::GuideMenu, now);
            return;
        }
        if menu.easy.contains(input.mouse) {
            session.difficulty = DifficultyLevel::Easy;
        }
        if menu.medium.contains(input.mouse) {
            session.difficulty = DifficultyLevel::Medium;
        }
        if menu.hard.contains(input.mouse) {
            session.difficulty = DifficultyLevel::Hard;
        }
    }

    if session.esc_pressed(input.escape, now) {
        session.exit_requested = true;
    }
}

fn game_frame(session: &mut GameSession, input: &FrameInput, now: f32, dt: f32) {
    if session.stats.lives == 0 {
        session.enter_mode(GameMode::GameOverMenu, now);
        return;
    }

    if input.right {
        session.plate.shift(PLATE_SPEED * dt);
    }
    if input.left {
        session.plate.shift(-PLATE_SPEED * dt);
    }
    if input.action {
        handle_action(session, now);
    }

    if session.tuning.escalate_if_due(now) {
        log::debug!(
            "difficulty level {} (speed {:.3}, delay {:.2})",
            session.tuning.level,
            session.tuning.fall_speed,
            session.tuning.spawn_delay
        );
    }
    if now - session.last_spawn >= session.tuning.spawn_delay {
        session.spawn_entity(now);
    }
    if session.powerup.expire_if_due(now) {
        session.events.push(GameEvent::PowerupExpired);
    }

    update_foods(session, input, now, dt);
    update_rockets(session, dt);
    session.compact();

    session.plate.update_vibration(now);
    session.stats.elapsed = now - session.stats.started_at;

    if session.esc_pressed(input.escape, now) {
        session.enter_mode(GameMode::PauseMenu, now);
    }
}

/// Space activates the queued power-up, or fires a rocket while the
/// launcher is already running
fn handle_action(session: &mut GameSession, now: f32) {
    if session.powerup.active == Some(PowerupKind::RocketLauncher) {
        session.fire_rocket();
    } else if let Some(kind) = session.powerup.try_activate(now) {
        session.events.push(GameEvent::PowerupActivated(kind));
    }
}

/// Drop every active entity and resolve plate contact and Devil captures
fn update_foods(session: &mut GameSession, input: &FrameInput, now: f32, dt: f32) {
    let plate_box = Aabb::for_plate(session.plate.position);
    let fall = session.tuning.fall_speed;
    let invincible = session.powerup.invincible();
    let capture_offset = session.capture_offset;

    let GameSession {
        foods,
        events,
        stats,
        powerup,
        plate,
        ..
    } = session;

    for food in foods.iter_mut() {
        if !food.active {
            continue;
        }
        if food.position.y <= CATCH_LINE_Y {
            food.active = false;
            continue;
        }

        food.position.y -= fall * dt;

        if Aabb::for_entity(food.position).overlaps(&plate_box) {
            if food.kind.is_damaging() {
                if !invincible {
                    stats.lives = stats.lives.saturating_sub(1);
                    plate.start_vibration(now);
                    events.push(GameEvent::LifeLost);
                }
                food.active = false;
            } else {
                if let Some(kind) = food.kind.powerup() {
                    powerup.collect(kind);
                }
                stats.collected += 1;
                events.push(GameEvent::Collected(food.kind));
                food.active = false;
            }
            continue;
        }

        // A Devil can still be defused by clicking its capture box
        if food.kind == FallingKind::Devil
            && input.mouse_down
            && devil_capture_rect(food.position, capture_offset).contains(input.mouse)
        {
            stats.collected += 1;
            events.push(GameEvent::DevilCaptured);
            food.active = false;
        }
    }
}

/// Advance rockets and let each one take down at most one laser per frame
fn update_rockets(session: &mut GameSession, dt: f32) {
    let GameSession {
        foods,
        rockets,
        events,
        ..
    } = session;

    for rocket in rockets.iter_mut() {
        if rocket.collided {
            continue;
        }
        rocket.position.y += rocket.speed_y * dt;
        let rocket_box = Aabb::for_rocket(rocket.position, rocket.size);

        for food in foods.iter_mut() {
            if !food.active || food.kind != FallingKind::Laser {
                continue;
            }
            if rocket_box.overlaps(&Aabb::for_entity(food.position)) {
                food.active = false;
                rocket.collided = true;
                events.push(GameEvent::LaserDestroyed);
                break;
            }
        }
    }
}

fn pause_menu_frame(session: &mut GameSession, input: &FrameInput, now: f32) {
    if input.mouse_down {
        let menu = PauseMenuLayout::new();
        if menu.resume.contains(input.mouse) {
            session.last_spawn = now;
            session.enter_mode(GameMode::Game, now);
            return;
        }
        if menu.restart.contains(input.mouse) {
            session.start_run(now);
            session.enter_mode(GameMode::Game, now);
            return;
        }
        if menu.quit.contains(input.mouse) {
            session.finish_run(now);
            session.exit_requested = true;
            return;
        }
    }

    if session.esc_pressed(input.escape, now) {
        session.last_spawn = now;
        session.enter_mode(GameMode::Game, now);
    }
}

fn game_over_frame(session: &mut GameSession, input: &FrameInput, now: f32) {
    if input.mouse_down {
        let menu = GameOverLayout::new();
        if menu.restart.contains(input.mouse) {
            session.start_run(now);
            session.enter_mode(GameMode::Game, now);
            return;
        }
        if menu.quit.contains(input.mouse) {
            session.exit_requested = true;
            return;
        }
    }

    if session.esc_pressed(input.escape, now) {
        session.exit_requested = true;
    }
}

fn guide_frame(session: &mut GameSession, input: &FrameInput, now: f32) {
    if input.mouse_down && GuideLayout::new().quit.contains(input.mouse) {
        session.enter_mode(GameMode::MainMenu, now);
        return;
    }

    if session.esc_pressed(input.escape, now) {
        session.enter_mode(GameMode::MainMenu, now);
    }
}
