//! Headless demo round
//!
//! Drives a full round with a scripted autopilot on a synthetic 60fps
//! clock, then submits the result to the local leaderboard.
//!
//! Environment:
//! - `QUICKDUAL_SEED`: pin the RNG seed for a reproducible round
//! - `QUICKDUAL_PRESET`: `classic` (default) or `arcade`
//! - `QUICKDUAL_CONFIG`: path to a round-config JSON, overrides preset

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use quick_dual::consts::*;
use quick_dual::sim::{GameSession, HudSink};
use quick_dual::{Leaderboard, RoundConfig};

/// HUD sink that logs once per displayed clock second.
struct LogHud {
    last_display: String,
    score: i64,
}

impl HudSink for LogHud {
    fn score_changed(&mut self, score: i64) {
        self.score = score;
    }

    fn timer_changed(&mut self, display: &str) {
        if display != self.last_display {
            log::info!("{}  score {}", display, self.score);
            self.last_display = display.to_string();
        }
    }
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Flap toward the next gap center, track the ball with the paddle.
fn autopilot(session: &mut GameSession) {
    let flappy = session.flappy();
    let aim_y = flappy
        .pipes
        .iter()
        .find(|p| p.x + PIPE_WIDTH >= BIRD_X - BIRD_SIZE)
        .map(|p| (p.gap_top + p.gap_bottom) / 2.0)
        .unwrap_or(VIEW_HEIGHT / 2.0);
    let below = flappy.bird.y - aim_y;
    let falling = flappy.bird.vy >= 0.0;
    // Hover at the target, climb hard when it jumps between gaps
    if below > 40.0 || (below > 0.0 && falling) {
        session.queue_flap();
    }

    let ball_x = session.reflex().ball.pos.x;
    session.set_paddle_target(ball_x);
}

fn main() {
    env_logger::init();
    log::info!("Quick Dual (headless) starting...");

    let seed = std::env::var("QUICKDUAL_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(unix_ms);
    let config = if let Ok(path) = std::env::var("QUICKDUAL_CONFIG") {
        RoundConfig::load(Path::new(&path))
    } else {
        match std::env::var("QUICKDUAL_PRESET").as_deref() {
            Ok("arcade") => RoundConfig::arcade(),
            _ => RoundConfig::classic(),
        }
    };
    log::info!(
        "seed {}, {} difficulty, {} stepping",
        seed,
        config.difficulty.as_str(),
        config.step_mode.as_str()
    );

    let mut session = GameSession::new(seed, config);
    let mut hud = LogHud {
        last_display: String::new(),
        score: 0,
    };

    session.start(0.0);
    let mut now = 0.0;
    while session.is_running() {
        now += 1000.0 / 60.0;
        autopilot(&mut session);
        session.on_frame(now, &mut hud);
    }

    let final_score = session.score();
    println!("\nFinal score: {}", final_score);

    let path = PathBuf::from("quickdual_scores.json");
    let mut board = Leaderboard::load(&path);
    if let Some(rank) = board.add_score("autopilot", final_score, unix_ms() as f64) {
        log::info!("New leaderboard entry at rank {}", rank);
        if let Err(err) = board.save(&path) {
            log::warn!("Failed to save leaderboard: {}", err);
        }
    }

    for (i, entry) in board.entries.iter().enumerate() {
        println!("{:>2}. {:<12} {:>6}", i + 1, entry.name, entry.score);
    }
}
