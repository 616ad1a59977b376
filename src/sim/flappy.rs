//! Bird lane: gravity, flap impulses, and the scrolling pipe field
//!
//! Integration is semi-implicit Euler against a 60fps-normalized time
//! scale, so the lane plays identically at any refresh rate given the
//! same seed and inputs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::score::ScoreBoard;

/// The player avatar: a square of side `BIRD_SIZE` centered on
/// (`BIRD_X`, `y`).
#[derive(Debug, Clone)]
pub struct Bird {
    pub y: f32,
    pub vy: f32,
    pub is_dead: bool,
}

impl Bird {
    fn spawn() -> Self {
        Self {
            y: VIEW_HEIGHT / 2.0,
            vy: 0.0,
            is_dead: false,
        }
    }

    /// Edge-triggered upward impulse; ignored once dead.
    pub fn flap(&mut self) {
        if !self.is_dead {
            self.vy = FLAP_IMPULSE;
        }
    }

    /// Integrate one step. Returns true on the step that hits the floor.
    fn update(&mut self, ts: f32) -> bool {
        if self.is_dead {
            return false;
        }
        self.vy += BIRD_GRAVITY * ts;
        self.y += self.vy * ts;

        let half = BIRD_SIZE / 2.0;
        if self.y < half {
            // Ceiling is a clamp, not a kill
            self.y = half;
            self.vy = 0.0;
        }
        if self.y > VIEW_HEIGHT - half {
            self.y = VIEW_HEIGHT - half;
            self.vy = 0.0;
            self.is_dead = true;
            return true;
        }
        false
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y - BIRD_SIZE / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + BIRD_SIZE / 2.0
    }
}

/// One pipe pair; the vertical gap spans `gap_top..gap_bottom` at
/// column `x..x + PIPE_WIDTH`.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub passed: bool,
}

/// Bird lane state: one bird, a left-scrolling pipe field, and the
/// seeded generator that places gaps.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    rng: Pcg32,
    irregular_spacing: bool,
}

impl FlappyGame {
    pub fn new(seed: u64, irregular_spacing: bool) -> Self {
        Self {
            bird: Bird::spawn(),
            pipes: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            irregular_spacing,
        }
    }

    /// Clear the pipe field and respawn the bird at lane center.
    pub fn reset(&mut self) {
        self.bird = Bird::spawn();
        self.pipes.clear();
    }

    pub fn flap(&mut self) {
        self.bird.flap();
    }

    /// One simulation step at the given speed multiplier.
    pub fn update(&mut self, ts: f32, speed_mult: f32, board: &mut ScoreBoard, now: f64) {
        // Floor deaths penalize on the transition, never while resting
        if self.bird.update(ts) {
            board.penalize(Vec2::new(BIRD_X, self.bird.y), BIRD_DEATH_PENALTY, now);
        }

        if self.pipe_due() {
            let gap_top = self
                .rng
                .random_range(PIPE_MARGIN..=VIEW_HEIGHT - PIPE_GAP - PIPE_MARGIN);
            self.pipes.push(Pipe {
                x: VIEW_WIDTH,
                gap_top,
                gap_bottom: gap_top + PIPE_GAP,
                passed: false,
            });
        }

        let step = PIPE_SPEED * speed_mult * ts;
        for pipe in &mut self.pipes {
            pipe.x -= step;

            // Trailing edge crossing the bird column scores exactly once
            if !pipe.passed && pipe.x + PIPE_WIDTH < BIRD_X {
                pipe.passed = true;
                board.award(Vec2::new(BIRD_X, self.bird.y), PIPE_SCORE, now);
            }
        }

        // Collision only while alive, so a floor hit cannot double-kill
        if !self.bird.is_dead && self.hits_pipe() {
            self.bird.is_dead = true;
            board.penalize(Vec2::new(BIRD_X, self.bird.y), BIRD_DEATH_PENALTY, now);
        }

        self.pipes.retain(|p| p.x >= -PIPE_WIDTH);

        if self.bird.is_dead {
            self.reset();
        }
    }

    /// A new pipe is due once the rightmost one has scrolled a full
    /// spacing in. Irregular mode stretches the spacing with a
    /// per-tick coin flip on top of a wider threshold.
    fn pipe_due(&mut self) -> bool {
        let spacing = if self.irregular_spacing {
            PIPE_SPACING_IRREGULAR
        } else {
            PIPE_SPACING
        };
        let due = match self.pipes.last() {
            Some(last) => last.x < VIEW_WIDTH - spacing,
            None => true,
        };
        if due && self.irregular_spacing {
            return self.rng.random_bool(0.5);
        }
        due
    }

    fn hits_pipe(&self) -> bool {
        let half = BIRD_SIZE / 2.0;
        let left = BIRD_X - half;
        let right = BIRD_X + half;
        self.pipes.iter().any(|p| {
            right > p.x
                && left < p.x + PIPE_WIDTH
                && (self.bird.top() < p.gap_top || self.bird.bottom() > p.gap_bottom)
        })
    }
}
