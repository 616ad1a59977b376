//! Ball lane: wall reflection, paddle bounces, and the pointer follower
//!
//! The paddle never snaps: it eases toward the newest pointer sample
//! and holds still while no sample exists. Bounce direction comes from
//! where the ball lands on the paddle, speed magnitude is fixed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::score::ScoreBoard;

/// The ball: a circle of radius `BALL_RADIUS`.
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Pointer-following paddle along the lane floor.
#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub target_x: f32,
}

impl Paddle {
    fn centered() -> Self {
        let x = (VIEW_WIDTH - PADDLE_WIDTH) / 2.0;
        Self { x, target_x: x }
    }

    /// Ease toward the latest pointer sample. An absent sample holds
    /// the paddle where it is, it never snaps to a default.
    fn update(&mut self, ts: f32, pointer_x: Option<f32>) {
        let Some(px) = pointer_x else {
            return;
        };
        self.target_x = (px - PADDLE_WIDTH / 2.0).clamp(0.0, VIEW_WIDTH - PADDLE_WIDTH);
        self.x += (self.target_x - self.x) * PADDLE_SMOOTHING * ts;
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.x + PADDLE_WIDTH / 2.0
    }

    /// Top edge of the paddle band.
    #[inline]
    pub fn top() -> f32 {
        VIEW_HEIGHT - PADDLE_BOTTOM_OFFSET
    }
}

/// Ball lane state: one ball, the follower paddle, and the seeded
/// generator that serves.
#[derive(Debug, Clone)]
pub struct ReflexGame {
    pub ball: Ball,
    pub paddle: Paddle,
    rng: Pcg32,
}

impl ReflexGame {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            paddle: Paddle::centered(),
            rng: Pcg32::seed_from_u64(seed),
        };
        game.reset_ball();
        game
    }

    /// Recenter the paddle and serve a fresh ball.
    pub fn reset(&mut self) {
        self.paddle = Paddle::centered();
        self.reset_ball();
    }

    /// Serve from the top center: direction drawn from 60-120 degrees
    /// off the horizontal, mirrored by a coin flip, at fixed speed.
    pub fn reset_ball(&mut self) {
        let angle = self.rng.random_range(60.0f32..120.0).to_radians();
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball = Ball {
            pos: Vec2::new(VIEW_WIDTH / 2.0, BALL_SPAWN_Y),
            vel: Vec2::new(angle.cos() * BALL_SPEED * dir, angle.sin() * BALL_SPEED),
        };
    }

    /// One simulation step at the given speed multiplier.
    pub fn update(
        &mut self,
        ts: f32,
        speed_mult: f32,
        pointer_x: Option<f32>,
        board: &mut ScoreBoard,
        now: f64,
    ) {
        self.paddle.update(ts, pointer_x);

        self.ball.pos += self.ball.vel * speed_mult * ts;

        let r = BALL_RADIUS;

        // Side walls reflect and clamp back into view
        if self.ball.pos.x - r < 0.0 || self.ball.pos.x + r > VIEW_WIDTH {
            self.ball.vel.x = -self.ball.vel.x;
            self.ball.pos.x = self.ball.pos.x.clamp(r, VIEW_WIDTH - r);
        }

        if self.ball.pos.y - r < 0.0 {
            self.ball.vel.y = -self.ball.vel.y;
            self.ball.pos.y = r;
        }

        // Paddle: only a descending ball in the band can bounce
        let top = Paddle::top();
        if self.ball.pos.y + r >= top
            && self.ball.pos.y - r <= top + PADDLE_HEIGHT
            && self.ball.pos.x >= self.paddle.x
            && self.ball.pos.x <= self.paddle.x + PADDLE_WIDTH
            && self.ball.vel.y > 0.0
        {
            let offset = ((self.ball.pos.x - self.paddle.center()) / (PADDLE_WIDTH / 2.0))
                .clamp(-1.0, 1.0);
            let angle = offset * MAX_BOUNCE_ANGLE;
            self.ball.vel = Vec2::new(angle.sin(), -angle.cos()) * BALL_SPEED;
            // Nudge above the band so the next step cannot re-trigger
            self.ball.pos.y = top - r;
        }

        // Dropping past the floor costs points and serves again
        if self.ball.pos.y - r > VIEW_HEIGHT {
            board.penalize(
                Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0),
                BALL_MISS_PENALTY,
                now,
            );
            self.reset_ball();
        }
    }
}
