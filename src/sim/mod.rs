//! Deterministic simulation module
//!
//! All gameplay logic lives here. The shell samples the clock and the
//! input once per frame and passes both in; nothing in this module
//! touches the renderer, the audio device, or the filesystem beyond
//! the score adapter the session owns.

pub mod collision;
pub mod menu;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{devil_capture_rect, Aabb, Rect};
pub use menu::{GameOverLayout, GuideLayout, MainMenuLayout, PauseMenuLayout};
pub use spawn::SpawnPolicy;
pub use state::{
    DifficultyLevel, DifficultyState, FallingEntity, FallingKind, GameEvent, GameMode,
    GameSession, Plate, PowerupKind, PowerupState, Projectile, RunStats,
};
pub use tick::{frame, FrameInput};
