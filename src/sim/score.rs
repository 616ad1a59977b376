//! Score aggregation, combo chains, and floating score text
//!
//! All scoring flows through one board per round: subsystems report
//! events, the board clamps the total at zero and emits self-expiring
//! text popups for the render layer to draw.

use glam::Vec2;

use crate::consts::*;

/// Semantic color of a floating score text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Reward,
    Penalty,
    Combo,
}

/// Transient score popup; aged each tick, dropped after its lifetime
#[derive(Debug, Clone)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub color: TextColor,
    pub age_ms: f64,
}

/// Alternate scoring policies (both off in the classic preset)
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreRules {
    /// Chain scores landing within a shared window into a growing multiplier
    pub combo: bool,
    /// Suppress a penalty landing within the cooldown of the previous one
    pub penalty_cooldown: bool,
}

/// Running score for one round
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    rules: ScoreRules,
    score: i64,
    combo: f32,
    last_score_ms: f64,
    last_penalty_ms: f64,
    texts: Vec<FloatingText>,
}

impl ScoreBoard {
    pub fn new(rules: ScoreRules) -> Self {
        Self {
            rules,
            score: 0,
            combo: 1.0,
            last_score_ms: f64::NEG_INFINITY,
            last_penalty_ms: f64::NEG_INFINITY,
            texts: Vec::new(),
        }
    }

    /// Clear score, combo, and pending texts for a fresh round.
    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 1.0;
        self.last_score_ms = f64::NEG_INFINITY;
        self.last_penalty_ms = f64::NEG_INFINITY;
        self.texts.clear();
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn combo(&self) -> f32 {
        self.combo
    }

    pub fn texts(&self) -> &[FloatingText] {
        &self.texts
    }

    /// Clamped score adjustment. The total never drops below zero.
    pub fn add(&mut self, delta: i64) {
        self.score = (self.score + delta).max(0);
    }

    /// Positive scoring event. Applies the combo multiplier when enabled.
    pub fn award(&mut self, pos: Vec2, base: i64, now: f64) {
        let mult = if self.rules.combo {
            self.advance_combo(now)
        } else {
            1.0
        };
        let gained = (base as f32 * mult) as i64;
        self.add(gained);
        if mult > 1.0 {
            self.push_text(pos, format!("+{} x{:.1}", gained, mult), TextColor::Combo);
        } else {
            self.push_text(pos, format!("+{}", gained), TextColor::Reward);
        }
    }

    /// Negative scoring event. Gated by the cooldown when enabled; an
    /// applied penalty always breaks the combo chain.
    pub fn penalize(&mut self, pos: Vec2, base: i64, now: f64) {
        if self.rules.penalty_cooldown && now - self.last_penalty_ms < PENALTY_COOLDOWN_MS {
            return;
        }
        self.last_penalty_ms = now;
        self.combo = 1.0;
        self.add(base);
        self.push_text(pos, format!("{}", base), TextColor::Penalty);
    }

    /// Grow the chain if the previous score landed within the window.
    fn advance_combo(&mut self, now: f64) -> f32 {
        self.combo = if now - self.last_score_ms < COMBO_WINDOW_MS {
            (self.combo + COMBO_STEP).min(COMBO_MAX)
        } else {
            1.0
        };
        self.last_score_ms = now;
        self.combo
    }

    fn push_text(&mut self, pos: Vec2, text: String, color: TextColor) {
        self.texts.push(FloatingText {
            pos,
            text,
            color,
            age_ms: 0.0,
        });
    }

    /// Age floating texts and lapse an idle combo chain.
    pub fn tick(&mut self, dt_ms: f64, now: f64) {
        for text in &mut self.texts {
            text.age_ms += dt_ms;
        }
        self.texts.retain(|t| t.age_ms < FLOAT_TEXT_LIFETIME_MS);

        if self.rules.combo && self.combo > 1.0 && now - self.last_score_ms >= COMBO_WINDOW_MS {
            self.combo = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn classic() -> ScoreBoard {
        ScoreBoard::new(ScoreRules::default())
    }

    #[test]
    fn test_add_clamps_at_zero() {
        let mut board = classic();
        board.add(50);
        board.add(-200);
        assert_eq!(board.score(), 0);
        board.add(-5);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn test_award_and_penalize_move_score() {
        let mut board = classic();
        board.award(Vec2::ZERO, 100, 0.0);
        assert_eq!(board.score(), 100);
        assert_eq!(board.texts()[0].text, "+100");
        assert_eq!(board.texts()[0].color, TextColor::Reward);

        board.penalize(Vec2::ZERO, -50, 10.0);
        assert_eq!(board.score(), 50);
        assert_eq!(board.texts()[1].text, "-50");
        assert_eq!(board.texts()[1].color, TextColor::Penalty);
    }

    #[test]
    fn test_classic_rules_never_multiply() {
        let mut board = classic();
        board.award(Vec2::ZERO, 100, 0.0);
        board.award(Vec2::ZERO, 100, 100.0);
        board.award(Vec2::ZERO, 100, 200.0);
        assert_eq!(board.score(), 300);
        assert_eq!(board.combo(), 1.0);
    }

    #[test]
    fn test_combo_grows_within_window() {
        let mut board = ScoreBoard::new(ScoreRules {
            combo: true,
            ..Default::default()
        });
        board.award(Vec2::ZERO, 100, 0.0);
        assert_eq!(board.score(), 100);
        board.award(Vec2::ZERO, 100, 1_000.0);
        assert_eq!(board.score(), 250); // x1.5
        board.award(Vec2::ZERO, 100, 2_000.0);
        assert_eq!(board.score(), 450); // x2.0
        assert_eq!(board.combo(), 2.0);
        assert_eq!(board.texts()[2].color, TextColor::Combo);
    }

    #[test]
    fn test_combo_caps_at_max() {
        let mut board = ScoreBoard::new(ScoreRules {
            combo: true,
            ..Default::default()
        });
        for i in 0..10 {
            board.award(Vec2::ZERO, 100, i as f64 * 1_000.0);
        }
        assert_eq!(board.combo(), COMBO_MAX);
    }

    #[test]
    fn test_combo_lapses_after_idle_window() {
        let mut board = ScoreBoard::new(ScoreRules {
            combo: true,
            ..Default::default()
        });
        board.award(Vec2::ZERO, 100, 0.0);
        board.award(Vec2::ZERO, 100, 1_000.0);
        assert_eq!(board.combo(), 1.5);
        board.tick(16.0, 7_000.0);
        assert_eq!(board.combo(), 1.0);
        // The next score starts a fresh chain
        board.award(Vec2::ZERO, 100, 7_000.0);
        assert_eq!(board.score(), 100 + 150 + 100);
    }

    #[test]
    fn test_penalty_breaks_combo() {
        let mut board = ScoreBoard::new(ScoreRules {
            combo: true,
            ..Default::default()
        });
        board.award(Vec2::ZERO, 100, 0.0);
        board.award(Vec2::ZERO, 100, 500.0);
        assert_eq!(board.combo(), 1.5);
        board.penalize(Vec2::ZERO, -50, 600.0);
        assert_eq!(board.combo(), 1.0);
    }

    #[test]
    fn test_penalty_cooldown_suppresses_rapid_penalties() {
        let mut board = ScoreBoard::new(ScoreRules {
            penalty_cooldown: true,
            ..Default::default()
        });
        board.add(500);
        board.penalize(Vec2::ZERO, -100, 0.0);
        assert_eq!(board.score(), 400);
        // Within the cooldown: suppressed, no text either
        board.penalize(Vec2::ZERO, -100, 200.0);
        assert_eq!(board.score(), 400);
        assert_eq!(board.texts().len(), 1);
        // Past the cooldown
        board.penalize(Vec2::ZERO, -100, 600.0);
        assert_eq!(board.score(), 300);
    }

    #[test]
    fn test_floating_texts_expire_after_lifetime() {
        let mut board = classic();
        board.award(Vec2::new(10.0, 20.0), 100, 0.0);
        board.tick(500.0, 500.0);
        assert_eq!(board.texts().len(), 1);
        board.tick(600.0, 1_100.0);
        assert!(board.texts().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = ScoreBoard::new(ScoreRules {
            combo: true,
            penalty_cooldown: true,
        });
        board.award(Vec2::ZERO, 100, 0.0);
        board.award(Vec2::ZERO, 100, 100.0);
        board.reset();
        assert_eq!(board.score(), 0);
        assert_eq!(board.combo(), 1.0);
        assert!(board.texts().is_empty());
        // A penalty right away is not suppressed by pre-reset history
        board.add(100);
        board.penalize(Vec2::ZERO, -100, 120.0);
        assert_eq!(board.score(), 0);
    }

    proptest! {
        #[test]
        fn prop_score_never_negative(
            events in proptest::collection::vec(
                (any::<bool>(), 1i64..500, 0.0..2_000.0f64),
                0..64,
            )
        ) {
            let mut board = ScoreBoard::new(ScoreRules {
                combo: true,
                ..Default::default()
            });
            let mut now = 0.0;
            for (is_award, amount, step) in events {
                now += step;
                if is_award {
                    board.award(Vec2::ZERO, amount, now);
                } else {
                    board.penalize(Vec2::ZERO, -amount, now);
                }
                prop_assert!(board.score() >= 0);
            }
        }
    }
}
