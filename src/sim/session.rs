//! Round orchestration: the phase machine and the per-tick pipeline
//!
//! One `GameSession` owns every piece of round state and is its only
//! writer. Each playing tick runs a fixed order: advance timer,
//! recompute difficulty, check expiry, bird lane, ball lane, HUD push.

use crate::config::{RoundConfig, StepMode};
use crate::consts::*;
use crate::sim::driver::GameLoop;
use crate::sim::flappy::FlappyGame;
use crate::sim::reflex::ReflexGame;
use crate::sim::score::ScoreBoard;
use crate::sim::timer::RoundTimer;
use crate::time_scale;

/// Lifecycle of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Inputs sampled between frames and consumed by the next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Edge-triggered: one queued press yields one impulse.
    pub flap: bool,
    /// Latest valid pointer sample; `None` means unset.
    pub paddle_x: Option<f32>,
}

/// Observer for HUD-facing values. The session pushes, the UI draws;
/// nothing is ever pulled back out.
pub trait HudSink {
    fn score_changed(&mut self, score: i64);
    fn timer_changed(&mut self, display: &str);
}

/// Headless sink for tests and benchmark drives.
impl HudSink for () {
    fn score_changed(&mut self, _score: i64) {}
    fn timer_changed(&mut self, _display: &str) {}
}

/// A full round of both lanes plus timer, score, and loop driver.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: RoundConfig,
    phase: GamePhase,
    driver: GameLoop,
    timer: RoundTimer,
    board: ScoreBoard,
    flappy: FlappyGame,
    reflex: ReflexGame,
    difficulty_mult: f32,
    input: TickInput,
    accumulator: f64,
}

impl GameSession {
    pub fn new(seed: u64, config: RoundConfig) -> Self {
        log::debug!("session seed {}", seed);
        Self {
            phase: GamePhase::Menu,
            driver: GameLoop::new(),
            timer: RoundTimer::new(config.duration_ms),
            board: ScoreBoard::new(config.score_rules()),
            flappy: FlappyGame::new(seed, config.irregular_pipes),
            // Decorrelate the two lanes' random streams
            reflex: ReflexGame::new(seed ^ 0x9E37_79B9_7F4A_7C15),
            difficulty_mult: 1.0,
            input: TickInput::default(),
            accumulator: 0.0,
            config,
        }
    }

    /// Reset score, difficulty, timer, and both lanes, then enter
    /// `Playing`. Valid from any phase, including `GameOver`.
    pub fn start(&mut self, now: f64) {
        self.driver.stop();
        self.board.reset();
        self.difficulty_mult = 1.0;
        self.timer = RoundTimer::new(self.config.duration_ms);
        self.timer.start(now);
        self.flappy.reset();
        self.reflex.reset();
        self.input = TickInput::default();
        self.accumulator = 0.0;
        self.phase = GamePhase::Playing;
        self.driver.start(now);
        log::info!("round started ({})", self.config.difficulty.as_str());
    }

    /// No-op unless currently `Playing`. The driver keeps running so
    /// the host can keep rendering; the timer stops accruing.
    pub fn pause(&mut self, now: f64) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            self.timer.pause(now);
            log::debug!("paused at {:.0}ms remaining", self.timer.remaining_ms());
        }
    }

    /// No-op unless currently `Paused`.
    pub fn resume(&mut self, now: f64) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            self.timer.resume(now);
            log::debug!("resumed");
        }
    }

    fn end(&mut self) {
        self.phase = GamePhase::GameOver;
        self.driver.stop();
        log::info!("round over, final score {}", self.board.score());
    }

    /// Queue one flap impulse for the next tick. Ignored outside
    /// `Playing`, so presses on menus never leak into a round.
    pub fn queue_flap(&mut self) {
        if self.phase == GamePhase::Playing {
            self.input.flap = true;
        }
    }

    /// Record a pointer sample. Non-finite values are ignored rather
    /// than raised.
    pub fn set_paddle_target(&mut self, x: f32) {
        if x.is_finite() {
            self.input.paddle_x = Some(x);
        }
    }

    /// Mark the pointer sample unset; the paddle will hold position.
    pub fn clear_paddle_target(&mut self) {
        self.input.paddle_x = None;
    }

    /// Drive one frame callback. Returns true when a frame was
    /// consumed and the host should render; false once stopped.
    pub fn on_frame(&mut self, now: f64, hud: &mut dyn HudSink) -> bool {
        let Some(tick) = self.driver.frame(now) else {
            return false;
        };
        match self.config.step_mode {
            StepMode::PerFrame => {
                self.step(tick.dt.min(MAX_FRAME_MS), now, hud);
            }
            StepMode::Fixed => {
                // Cap the backlog so a stalled tab cannot spiral
                self.accumulator = (self.accumulator + tick.dt).min(FIXED_STEP_BACKLOG_MS);
                while self.accumulator >= FIXED_STEP_MS {
                    self.accumulator -= FIXED_STEP_MS;
                    self.step(FIXED_STEP_MS, now, hud);
                }
            }
        }
        true
    }

    fn step(&mut self, dt: f64, now: f64, hud: &mut dyn HudSink) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.timer.update(now);
        self.difficulty_mult = self
            .config
            .difficulty
            .multiplier(self.timer.elapsed_ms(), self.board.score());

        if self.timer.is_over() {
            self.end();
            hud.score_changed(self.board.score());
            hud.timer_changed(&self.timer.display());
            return;
        }

        let ts = time_scale(dt);

        if self.input.flap {
            self.flappy.flap();
            self.input.flap = false;
        }
        self.flappy.update(ts, self.difficulty_mult, &mut self.board, now);
        self.reflex
            .update(ts, self.difficulty_mult, self.input.paddle_x, &mut self.board, now);
        self.board.tick(dt, now);

        hud.score_changed(self.board.score());
        hud.timer_changed(&self.timer.display());
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn score(&self) -> i64 {
        self.board.score()
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty_mult
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    pub fn board(&self) -> &ScoreBoard {
        &self.board
    }

    pub fn flappy(&self) -> &FlappyGame {
        &self.flappy
    }

    pub fn reflex(&self) -> &ReflexGame {
        &self.reflex
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }
}
