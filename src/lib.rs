//! Conveyor Catch - a falling-object catching arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, power-ups, game modes)
//! - `scores`: Last/best run persistence
//! - `assets` / `audio` / `render`: collaborator interfaces for the shell
//! - `ui`: menu layout and the per-mode draw pass

pub mod assets;
pub mod audio;
pub mod render;
pub mod scores;
pub mod sim;
pub mod ui;

pub use scores::{RunSummary, ScoreFile, ScoreRecord};
pub use sim::{FrameInput, GameMode, GameSession};

/// Game configuration constants
pub mod consts {
    /// Logical screen size for menu hit tests and text layout
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Plate defaults - resting y doubles as the catch line
    pub const PLATE_START_Y: f32 = -1.10;
    pub const PLATE_X_LIMIT: f32 = 0.45;
    pub const PLATE_SPEED: f32 = 1.0;

    /// Falling entities at or below this line are tombstoned
    pub const CATCH_LINE_Y: f32 = -1.10;

    /// Collision box half-extents
    pub const ENTITY_HALF_WIDTH: f32 = 0.075;
    pub const ENTITY_HALF_HEIGHT: f32 = 0.075;
    pub const ENTITY_HALF_DEPTH: f32 = 0.01;
    /// Extra reach above the plate (the catch box is taller above than below)
    pub const PLATE_CATCH_REACH: f32 = 0.05;

    /// Spawn lanes and per-spawn jitter
    pub const SPAWN_LANES: [f32; 3] = [-0.35, 0.0, 0.35];
    pub const LANE_JITTER: f32 = 0.15;
    pub const LASER_SPAWN_Y: f32 = 0.88;
    pub const FOOD_SPAWN_Y: f32 = 1.20;
    pub const SPAWN_Z: f32 = 0.2;

    /// Difficulty base values and escalation steps
    pub const BASE_FALL_SPEED: f32 = 0.8;
    pub const BASE_SPAWN_DELAY: f32 = 2.0;
    pub const ESCALATION_PERIOD: f32 = 6.0;
    pub const ESCALATION_SPEED_STEP: f32 = 0.003;
    pub const ESCALATION_DELAY_STEP: f32 = 0.5;

    /// Power-up lifetime in seconds
    pub const POWERUP_DURATION: f32 = 10.0;

    /// Rocket projectile edge length
    pub const ROCKET_SIZE: f32 = 0.1;

    /// Plate vibration after a damaging hit
    pub const VIBRATION_DURATION: f32 = 0.9;
    pub const VIBRATION_INTENSITY: f32 = 0.2;
    pub const VIBRATION_RATE: f32 = 50.0;

    /// Esc is ignored for this long after entering a mode
    pub const ESC_DEBOUNCE: f32 = 0.5;

    /// Devil capture box half-size (screen px) and offset ranges
    pub const CAPTURE_HALF: f32 = 30.0;
    pub const CAPTURE_X_RANGE: std::ops::RangeInclusive<i32> = 570..=770;
    pub const CAPTURE_Y_RANGE: std::ops::RangeInclusive<i32> = 30..=570;

    /// Tombstones tolerated before a collection compacts
    pub const COMPACT_THRESHOLD: usize = 32;

    /// Conveyor strip scroll (visual only)
    pub const CONVEYOR_SPEED: f32 = 0.2;
    pub const CONVEYOR_WRAP: f32 = 2.4;

    pub const STARTING_LIVES: u8 = 3;
}
