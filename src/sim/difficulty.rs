//! Difficulty scaling policies
//!
//! The multiplier is recomputed from current round state every tick
//! (never accumulated) and scales movement deltas only - pipe speed and
//! ball speed, not gravity.

use serde::{Deserialize, Serialize};

/// How the speed multiplier grows over a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPolicy {
    /// +30% every 15 seconds of play time, uncapped
    #[default]
    Time,
    /// +1x per 2000 points, capped at 3x
    Score,
}

impl DifficultyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPolicy::Time => "time",
            DifficultyPolicy::Score => "score",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "time" => Some(DifficultyPolicy::Time),
            "score" => Some(DifficultyPolicy::Score),
            _ => None,
        }
    }

    /// Multiplier for the current round state. Always >= 1.
    pub fn multiplier(&self, elapsed_ms: f64, score: i64) -> f32 {
        match self {
            DifficultyPolicy::Time => {
                let steps = (elapsed_ms / 15_000.0).floor().max(0.0) as i32;
                1.3_f32.powi(steps)
            }
            DifficultyPolicy::Score => (1.0 + score as f32 / 2000.0).min(3.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_time_policy_steps_every_15_seconds() {
        let policy = DifficultyPolicy::Time;
        assert_eq!(policy.multiplier(0.0, 0), 1.0);
        assert_eq!(policy.multiplier(14_999.0, 0), 1.0);
        assert!((policy.multiplier(15_000.0, 0) - 1.3).abs() < 1e-6);
        assert!((policy.multiplier(30_000.0, 0) - 1.69).abs() < 1e-5);
        // End of a two-minute round: 8 steps
        assert!((policy.multiplier(120_000.0, 0) - 1.3f32.powi(8)).abs() < 1e-4);
    }

    #[test]
    fn test_time_policy_ignores_score() {
        let policy = DifficultyPolicy::Time;
        assert_eq!(policy.multiplier(0.0, 50_000), 1.0);
    }

    #[test]
    fn test_score_policy_caps_at_3x() {
        let policy = DifficultyPolicy::Score;
        assert_eq!(policy.multiplier(0.0, 0), 1.0);
        assert!((policy.multiplier(0.0, 2_000) - 2.0).abs() < 1e-6);
        assert_eq!(policy.multiplier(0.0, 4_000), 3.0);
        assert_eq!(policy.multiplier(0.0, 1_000_000), 3.0);
    }

    proptest! {
        #[test]
        fn prop_multiplier_never_below_one(
            elapsed in 0.0..240_000.0f64,
            score in 0i64..200_000,
        ) {
            prop_assert!(DifficultyPolicy::Time.multiplier(elapsed, score) >= 1.0);
            prop_assert!(DifficultyPolicy::Score.multiplier(elapsed, score) >= 1.0);
        }
    }
}
