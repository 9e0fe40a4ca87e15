//! Game state and core simulation types
//!
//! Everything the per-frame update mutates lives in the owned
//! [`GameSession`] aggregate; the shell threads it `&mut` through
//! [`frame`](super::tick::frame) and nothing is ambient.

use glam::{Vec2, Vec3};

use super::spawn::SpawnPolicy;
use crate::consts::*;
use crate::scores::{RunSummary, ScoreFile, ScoreRecord};

/// Kinds of falling entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallingKind {
    Croissant,
    Cup,
    Gus,
    Muffin,
    Laser,
    Devil,
    Carrot,
    Wine,
}

impl FallingKind {
    /// Draw order used by the spawn policy (the laser sits in slot 4)
    pub const DRAW_ORDER: [FallingKind; 8] = [
        FallingKind::Croissant,
        FallingKind::Cup,
        FallingKind::Gus,
        FallingKind::Muffin,
        FallingKind::Laser,
        FallingKind::Devil,
        FallingKind::Carrot,
        FallingKind::Wine,
    ];

    /// Touching this on the plate costs a life
    pub fn is_damaging(self) -> bool {
        matches!(self, FallingKind::Laser | FallingKind::Devil)
    }

    /// The power-up granted when caught, if any
    pub fn powerup(self) -> Option<PowerupKind> {
        match self {
            FallingKind::Carrot => Some(PowerupKind::Invincibility),
            FallingKind::Wine => Some(PowerupKind::RocketLauncher),
            _ => None,
        }
    }

    /// Lasers enter the belt lower than everything else
    pub fn spawn_y(self) -> f32 {
        if self == FallingKind::Laser {
            LASER_SPAWN_Y
        } else {
            FOOD_SPAWN_Y
        }
    }
}

/// An object descending toward the plate
#[derive(Debug, Clone)]
pub struct FallingEntity {
    pub position: Vec3,
    pub kind: FallingKind,
    /// Cleared when caught, captured, shot down, or past the catch line;
    /// inactive entities are compacted away between frames
    pub active: bool,
}

impl FallingEntity {
    pub fn new(kind: FallingKind, position: Vec3) -> Self {
        Self {
            position,
            kind,
            active: true,
        }
    }
}

/// A rocket fired upward from the plate
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Vec3,
    pub speed_y: f32,
    pub size: f32,
    pub collided: bool,
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    Invincibility,
    RocketLauncher,
}

/// Collected/active power-up tracking
///
/// `Idle -> Collected -> Active -> Idle`. Collecting while something is
/// queued overwrites it (last-collected-wins); expiry clears both slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerupState {
    pub collected: Option<PowerupKind>,
    pub active: Option<PowerupKind>,
    pub started_at: f32,
}

impl PowerupState {
    pub fn collect(&mut self, kind: PowerupKind) {
        self.collected = Some(kind);
    }

    /// `Collected -> Active`; a no-op while another power-up is running
    pub fn try_activate(&mut self, now: f32) -> Option<PowerupKind> {
        if self.active.is_some() {
            return None;
        }
        let kind = self.collected?;
        self.active = Some(kind);
        self.started_at = now;
        Some(kind)
    }

    /// `Active -> Idle` at the first frame past the duration
    pub fn expire_if_due(&mut self, now: f32) -> bool {
        if self.active.is_some() && now - self.started_at >= POWERUP_DURATION {
            self.collected = None;
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn invincible(&self) -> bool {
        self.active == Some(PowerupKind::Invincibility)
    }
}

/// Player-selected run difficulty, applied once at run start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    pub fn speed_factor(self) -> f32 {
        match self {
            DifficultyLevel::Easy => 1.0,
            DifficultyLevel::Medium => 1.5,
            DifficultyLevel::Hard => 2.0,
        }
    }

    pub fn delay_factor(self) -> f32 {
        match self {
            DifficultyLevel::Easy => 1.0,
            DifficultyLevel::Medium => 0.75,
            DifficultyLevel::Hard => 0.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        }
    }
}

/// Difficulty ramp within a run: the delay only shrinks and the fall
/// speed only grows between escalations
#[derive(Debug, Clone)]
pub struct DifficultyState {
    pub level: u32,
    pub fall_speed: f32,
    pub spawn_delay: f32,
    pub last_escalation: f32,
}

impl DifficultyState {
    pub fn new(selected: DifficultyLevel, now: f32) -> Self {
        Self {
            level: 1,
            fall_speed: BASE_FALL_SPEED * selected.speed_factor(),
            spawn_delay: BASE_SPAWN_DELAY * selected.delay_factor(),
            last_escalation: now,
        }
    }

    /// Step the ramp once the escalation period has elapsed
    ///
    /// The speed guard is checked against the pre-increment level, so
    /// the first escalation shortens the delay but leaves the speed.
    pub fn escalate_if_due(&mut self, now: f32) -> bool {
        if now - self.last_escalation < ESCALATION_PERIOD {
            return false;
        }
        if self.level > 1 {
            self.fall_speed += ESCALATION_SPEED_STEP / self.level as f32;
        }
        self.spawn_delay -= ESCALATION_DELAY_STEP / self.level as f32;
        self.level += 1;
        self.last_escalation = now;
        true
    }
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Catchable (non-laser) entities dropped onto the belt
    pub spawned: u32,
    pub collected: u32,
    pub lives: u8,
    pub started_at: f32,
    pub elapsed: f32,
}

impl RunStats {
    pub fn new(now: f32) -> Self {
        Self {
            spawned: 0,
            collected: 0,
            lives: STARTING_LIVES,
            started_at: now,
            elapsed: 0.0,
        }
    }
}

/// The player's plate
#[derive(Debug, Clone)]
pub struct Plate {
    pub position: Vec3,
    /// Sinusoidal x offset applied to the render transform only;
    /// collision keeps using `position`
    pub display_offset: f32,
    vibrating_since: Option<f32>,
}

impl Default for Plate {
    fn default() -> Self {
        Self::new()
    }
}

impl Plate {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, PLATE_START_Y, SPAWN_Z),
            display_offset: 0.0,
            vibrating_since: None,
        }
    }

    /// Move along x, clamped to the belt
    pub fn shift(&mut self, dx: f32) {
        self.position.x = (self.position.x + dx).clamp(-PLATE_X_LIMIT, PLATE_X_LIMIT);
    }

    pub fn start_vibration(&mut self, now: f32) {
        self.vibrating_since = Some(now);
    }

    /// Advance the hit vibration: full amplitude while the effect runs,
    /// one final half-amplitude kick past the duration, then stop
    pub fn update_vibration(&mut self, now: f32) {
        let Some(start) = self.vibrating_since else {
            self.display_offset = 0.0;
            return;
        };
        let elapsed = now - start;
        let offset = (elapsed * VIBRATION_RATE).sin() * VIBRATION_INTENSITY;
        if elapsed < VIBRATION_DURATION {
            self.display_offset = offset;
        } else {
            self.display_offset = offset / 2.0;
            self.vibrating_since = None;
        }
    }
}

/// Top-level modes; see the transition table in `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    MainMenu,
    Game,
    PauseMenu,
    GameOverMenu,
    GuideMenu,
}

/// Observable things that happened during a frame; drained by the
/// shell to drive audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Collected(FallingKind),
    LifeLost,
    PowerupActivated(PowerupKind),
    PowerupExpired,
    RocketFired,
    LaserDestroyed,
    DevilCaptured,
    RunEnded,
}

/// Complete game state for one session, menus included
#[derive(Debug)]
pub struct GameSession {
    pub mode: GameMode,
    pub difficulty: DifficultyLevel,
    pub plate: Plate,
    pub foods: Vec<FallingEntity>,
    pub rockets: Vec<Projectile>,
    pub spawn: SpawnPolicy,
    pub tuning: DifficultyState,
    pub powerup: PowerupState,
    pub stats: RunStats,
    pub events: Vec<GameEvent>,
    /// Screen-space offset of the Devil capture box, redrawn per Devil spawn
    pub capture_offset: Vec2,
    /// Last/best runs shown in the main menu, refreshed on menu entry
    pub menu_scores: ScoreRecord,
    pub exit_requested: bool,
    scores: ScoreFile,
    pub(crate) entered_at: f32,
    pub(crate) esc_latched: bool,
    pub(crate) last_spawn: f32,
    pub(crate) last_frame: f32,
    score_saved: bool,
}

impl GameSession {
    /// Create a session sitting on the main menu
    pub fn new(seed: u64, now: f32, scores: ScoreFile) -> Self {
        let menu_scores = scores.load().unwrap_or_else(|err| {
            log::debug!("no score history: {err}");
            ScoreRecord::default()
        });
        Self {
            mode: GameMode::MainMenu,
            difficulty: DifficultyLevel::default(),
            plate: Plate::new(),
            foods: Vec::new(),
            rockets: Vec::new(),
            spawn: SpawnPolicy::new(seed),
            tuning: DifficultyState::new(DifficultyLevel::default(), now),
            powerup: PowerupState::default(),
            stats: RunStats::new(now),
            events: Vec::new(),
            capture_offset: Vec2::ZERO,
            menu_scores,
            exit_requested: false,
            scores,
            entered_at: now,
            esc_latched: false,
            last_spawn: now,
            last_frame: now,
            score_saved: true,
        }
    }

    /// Reset all run state and drop the first entity onto the belt
    pub fn start_run(&mut self, now: f32) {
        self.stats = RunStats::new(now);
        self.plate = Plate::new();
        self.tuning = DifficultyState::new(self.difficulty, now);
        self.powerup = PowerupState::default();
        self.foods.clear();
        self.rockets.clear();
        self.capture_offset = self.spawn.next_capture_offset();
        self.score_saved = false;
        self.last_spawn = now;
        self.spawn_entity(now);
        log::info!("run started on {}", self.difficulty.as_str());
    }

    /// Switch modes, recording the entry time for the Esc debounce
    pub(crate) fn enter_mode(&mut self, mode: GameMode, now: f32) {
        self.mode = mode;
        self.entered_at = now;
        self.esc_latched = false;
        match mode {
            GameMode::MainMenu => {
                self.menu_scores = self.scores.load().unwrap_or_else(|err| {
                    log::debug!("no score history: {err}");
                    ScoreRecord::default()
                });
            }
            GameMode::GameOverMenu => self.finish_run(now),
            _ => {}
        }
    }

    /// Debounced, edge-triggered Esc: ignored for the first half second
    /// after mode entry, then fires once per press
    pub(crate) fn esc_pressed(&mut self, esc_down: bool, now: f32) -> bool {
        if now - self.entered_at <= ESC_DEBOUNCE {
            return false;
        }
        if esc_down {
            if !self.esc_latched {
                self.esc_latched = true;
                return true;
            }
            false
        } else {
            self.esc_latched = false;
            false
        }
    }

    /// Draw a kind and a lane and push the entity onto the belt
    pub(crate) fn spawn_entity(&mut self, now: f32) {
        let kind = self.spawn.next_kind();
        let position = self.spawn.next_position(kind);
        self.foods.push(FallingEntity::new(kind, position));
        if kind == FallingKind::Devil {
            self.capture_offset = self.spawn.next_capture_offset();
        }
        if kind != FallingKind::Laser {
            self.stats.spawned += 1;
        }
        self.last_spawn = now;
        log::debug!(
            "spawned {kind:?} at x={:.2} (speed {:.3}, delay {:.2})",
            position.x,
            self.tuning.fall_speed,
            self.tuning.spawn_delay
        );
    }

    pub(crate) fn fire_rocket(&mut self) {
        self.rockets.push(Projectile {
            position: self.plate.position,
            speed_y: self.tuning.fall_speed,
            size: ROCKET_SIZE,
            collided: false,
        });
        self.events.push(GameEvent::RocketFired);
    }

    /// Catchable entities the player let fall past the plate
    pub fn missed(&self) -> u32 {
        let still_falling = self
            .foods
            .iter()
            .filter(|f| f.active && f.kind != FallingKind::Laser)
            .count() as u32;
        self.stats
            .spawned
            .saturating_sub(self.stats.collected + still_falling)
    }

    /// Persist the run once; safe to call from both game-over entry and
    /// the pause menu's quit button
    pub(crate) fn finish_run(&mut self, now: f32) {
        if self.score_saved {
            return;
        }
        self.stats.elapsed = now - self.stats.started_at;
        let summary = RunSummary {
            collected: self.stats.collected,
            dropped: self.missed(),
            time_played: self.stats.elapsed,
        };
        match self.scores.save(&summary) {
            Ok(()) => log::info!(
                "run over: collected {} dropped {} in {:.1}s",
                summary.collected,
                summary.dropped,
                summary.time_played
            ),
            Err(err) => log::warn!("failed to save score: {err}"),
        }
        self.score_saved = true;
        self.events.push(GameEvent::RunEnded);
    }

    /// Drop tombstoned entries once enough of them pile up
    pub(crate) fn compact(&mut self) {
        if self.foods.iter().filter(|f| !f.active).count() > COMPACT_THRESHOLD {
            self.foods.retain(|f| f.active);
        }
        if self.rockets.iter().filter(|r| r.collided).count() > COMPACT_THRESHOLD {
            self.rockets.retain(|r| !r.collided);
        }
    }

    /// Hand the frame's events to the shell
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
