//! Round configuration and policy presets
//!
//! Rule variants are explicit fields behind named presets, not dead
//! code paths: difficulty policy, step mode, combo chains, penalty
//! cooldown, irregular pipe spacing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::persistence::{self, PersistError};
use crate::sim::difficulty::DifficultyPolicy;
use crate::sim::score::ScoreRules;

/// How simulation time advances relative to frame callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StepMode {
    /// One step per displayed frame, scaled by the raw frame delta
    #[default]
    PerFrame,
    /// Fixed 60 Hz steps drained from an accumulator, backlog capped
    Fixed,
}

impl StepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepMode::PerFrame => "PerFrame",
            StepMode::Fixed => "Fixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "perframe" | "per_frame" | "variable" => Some(StepMode::PerFrame),
            "fixed" => Some(StepMode::Fixed),
            _ => None,
        }
    }
}

/// Everything tunable about a round, resolved before `start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Round length in milliseconds
    pub duration_ms: f64,

    // === Policies ===
    /// What drives the speed multiplier
    pub difficulty: DifficultyPolicy,
    /// How frame deltas become simulation steps
    pub step_mode: StepMode,

    // === Alternate rules ===
    /// Windowed combo multiplier on consecutive scores
    pub combo: bool,
    /// Suppress penalties landing inside the cooldown window
    pub penalty_cooldown: bool,
    /// Randomly stretched pipe spacing in the bird lane
    pub irregular_pipes: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl RoundConfig {
    /// Canonical rules: time-driven difficulty, per-frame stepping,
    /// no alternate scoring policies.
    pub fn classic() -> Self {
        Self {
            duration_ms: consts::ROUND_DURATION_MS,
            difficulty: DifficultyPolicy::Time,
            step_mode: StepMode::PerFrame,
            combo: false,
            penalty_cooldown: false,
            irregular_pipes: false,
        }
    }

    /// The alternate-policy bundle: score-driven difficulty, fixed
    /// stepping, combo chains, penalty cooldown.
    pub fn arcade() -> Self {
        Self {
            difficulty: DifficultyPolicy::Score,
            step_mode: StepMode::Fixed,
            combo: true,
            penalty_cooldown: true,
            ..Self::classic()
        }
    }

    /// The scoring-policy slice handed to the score board.
    pub fn score_rules(&self) -> ScoreRules {
        ScoreRules {
            combo: self.combo,
            penalty_cooldown: self.penalty_cooldown,
        }
    }

    /// Load from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match persistence::load_json(path) {
            Ok(config) => {
                log::info!("Loaded round config from {}", path.display());
                config
            }
            Err(err) => {
                log::info!("Using default round config ({})", err);
                Self::default()
            }
        }
    }

    /// Save as JSON.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persistence::save_json(path, self)
    }
}
