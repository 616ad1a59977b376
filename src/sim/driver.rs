//! Frame-callback loop driver
//!
//! Converts the host's animation-frame timestamp stream into `(dt, now)`
//! ticks and owns the start/stop lifecycle. The session performs exactly
//! one update-then-render pass per tick the driver yields.

/// One tick yielded by the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Milliseconds since the previous tick (since `start` for the first)
    pub dt: f64,
    /// Host timestamp of this tick (milliseconds, monotonic)
    pub now: f64,
}

/// Start/stop gate between host frame callbacks and simulation ticks
#[derive(Debug, Clone, Default)]
pub struct GameLoop {
    running: bool,
    last: f64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the driver and record the tick origin. No-op while already running.
    pub fn start(&mut self, now: f64) {
        if self.running {
            return;
        }
        self.running = true;
        self.last = now;
    }

    /// Disarm the driver. Idempotent; a callback already requested by the
    /// host yields nothing once this has been called.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Host frame callback. Yields a tick while armed, `None` after `stop`.
    pub fn frame(&mut self, now: f64) -> Option<FrameTick> {
        if !self.running {
            return None;
        }
        let dt = (now - self.last).max(0.0);
        self.last = now;
        Some(FrameTick { dt, now })
    }
}
