//! Quick Dual - a split-screen dual-minigame arcade round
//!
//! Core modules:
//! - `sim`: Deterministic simulation (timer, physics, collisions, session state machine)
//! - `config`: Round configuration presets (difficulty policy, step mode, scoring rules)
//! - `leaderboard`: Local top-10 leaderboard
//! - `persistence`: JSON file save/load helpers

pub mod config;
pub mod leaderboard;
pub mod persistence;
pub mod sim;

pub use config::{RoundConfig, StepMode};
pub use leaderboard::Leaderboard;
pub use sim::{GamePhase, GameSession, HudSink};

/// Game configuration constants
pub mod consts {
    /// Reference frame duration (60 fps) used to normalize per-tick physics deltas
    pub const TARGET_FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest frame delta fed into physics (a stalled tab must not teleport entities)
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Fixed-step preset: simulation step duration
    pub const FIXED_STEP_MS: f64 = 1000.0 / 60.0;
    /// Fixed-step preset: accumulator cap (3 frames of backlog)
    pub const FIXED_STEP_BACKLOG_MS: f64 = FIXED_STEP_MS * 3.0;
    /// One round lasts two minutes
    pub const ROUND_DURATION_MS: f64 = 120_000.0;

    /// Logical playfield size of each minigame pane
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Bird bounding box is a square of this side
    pub const BIRD_SIZE: f32 = 30.0;
    /// Bird stays in a fixed column; pipes move past it
    pub const BIRD_X: f32 = VIEW_WIDTH / 4.0;
    /// Downward acceleration per reference frame
    pub const BIRD_GRAVITY: f32 = 0.125;
    /// Upward velocity set by a flap
    pub const FLAP_IMPULSE: f32 = -2.25;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 250.0;
    /// Leftward pipe speed per reference frame (before difficulty scaling)
    pub const PIPE_SPEED: f32 = 3.0;
    /// Horizontal distance between consecutive spawns
    pub const PIPE_SPACING: f32 = 400.0;
    /// Wider spacing used by the irregular-spacing mode
    pub const PIPE_SPACING_IRREGULAR: f32 = 500.0;
    /// Minimum distance between a gap edge and the top/bottom of the pane
    pub const PIPE_MARGIN: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Ball speed per reference frame; restored exactly on every respawn and bounce
    pub const BALL_SPEED: f32 = 4.0;
    pub const BALL_SPAWN_Y: f32 = 100.0;

    /// Paddle defaults - paddle slides along a band near the bottom edge
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance from the bottom edge to the paddle's top surface
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Fraction of the remaining distance covered per reference frame
    pub const PADDLE_SMOOTHING: f32 = 0.2;
    /// Bounce direction is at most this far from vertical (radians, 60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Scoring
    pub const PIPE_SCORE: i64 = 100;
    pub const BIRD_DEATH_PENALTY: i64 = -50;
    pub const BALL_MISS_PENALTY: i64 = -100;

    /// Combo preset: window within which consecutive scores chain
    pub const COMBO_WINDOW_MS: f64 = 5_000.0;
    pub const COMBO_STEP: f32 = 0.5;
    pub const COMBO_MAX: f32 = 3.0;
    /// Penalty-cooldown preset: penalties within this window are suppressed
    pub const PENALTY_COOLDOWN_MS: f64 = 500.0;

    /// Floating score text lifetime
    pub const FLOAT_TEXT_LIFETIME_MS: f64 = 1_000.0;
}

/// Normalize a frame delta to the 60 fps reference frame
#[inline]
pub fn time_scale(dt_ms: f64) -> f32 {
    (dt_ms / consts::TARGET_FRAME_MS) as f32
}
