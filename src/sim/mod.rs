//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time scaled off caller-supplied millisecond timestamps
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod driver;
pub mod flappy;
pub mod reflex;
pub mod score;
pub mod session;
pub mod timer;

pub use difficulty::DifficultyPolicy;
pub use driver::{FrameTick, GameLoop};
pub use flappy::{Bird, FlappyGame, Pipe};
pub use reflex::{Ball, Paddle, ReflexGame};
pub use score::{FloatingText, ScoreBoard, ScoreRules, TextColor};
pub use session::{GamePhase, GameSession, HudSink, TickInput};
pub use timer::RoundTimer;
