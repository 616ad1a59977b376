//! Round countdown timer
//!
//! Tracks remaining wall time for a fixed-duration round against a
//! monotonic millisecond clock. Paused spans are excluded from elapsed
//! time by shifting the origin forward on resume.

/// Countdown for one timed round
#[derive(Debug, Clone)]
pub struct RoundTimer {
    duration_ms: f64,
    origin_ms: f64,
    remaining_ms: f64,
    paused_at: Option<f64>,
}

impl RoundTimer {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            origin_ms: 0.0,
            remaining_ms: duration_ms,
            paused_at: None,
        }
    }

    /// (Re)start the countdown from `now`.
    pub fn start(&mut self, now: f64) {
        self.origin_ms = now;
        self.remaining_ms = self.duration_ms;
        self.paused_at = None;
    }

    /// Freeze the countdown. No-op while already paused.
    pub fn pause(&mut self, now: f64) {
        if self.paused_at.is_some() {
            return;
        }
        self.recompute(now);
        self.paused_at = Some(now);
    }

    /// Unfreeze the countdown. No-op unless paused.
    pub fn resume(&mut self, now: f64) {
        if let Some(paused_at) = self.paused_at.take() {
            self.origin_ms += now - paused_at;
        }
    }

    /// Recompute remaining from the clock. No-op while paused.
    pub fn update(&mut self, now: f64) {
        if self.paused_at.is_some() {
            return;
        }
        self.recompute(now);
    }

    fn recompute(&mut self, now: f64) {
        self.remaining_ms = (self.duration_ms - (now - self.origin_ms)).max(0.0);
    }

    pub fn remaining_ms(&self) -> f64 {
        self.remaining_ms
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.duration_ms - self.remaining_ms
    }

    pub fn is_over(&self) -> bool {
        self.remaining_ms <= 0.0
    }

    /// Remaining time as `M:SS` for the HUD.
    pub fn display(&self) -> String {
        let total_secs = (self.remaining_ms / 1000.0).floor() as u64;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 120_000.0;

    #[test]
    fn test_countdown_tracks_clock() {
        let mut timer = RoundTimer::new(DURATION);
        timer.start(1_000.0);
        timer.update(31_000.0);
        assert_eq!(timer.remaining_ms(), DURATION - 30_000.0);
        assert_eq!(timer.elapsed_ms(), 30_000.0);
        assert!(!timer.is_over());
    }

    #[test]
    fn test_pause_excludes_wall_time_from_elapsed() {
        let mut timer = RoundTimer::new(DURATION);
        timer.start(0.0);
        timer.pause(1_000.0);
        timer.resume(5_000.0);
        timer.update(5_000.0);
        assert_eq!(timer.remaining_ms(), DURATION - 1_000.0);
    }

    #[test]
    fn test_update_while_paused_is_frozen() {
        let mut timer = RoundTimer::new(DURATION);
        timer.start(0.0);
        timer.pause(2_000.0);
        timer.update(50_000.0);
        assert_eq!(timer.remaining_ms(), DURATION - 2_000.0);
    }

    #[test]
    fn test_double_pause_keeps_first_pause_point() {
        let mut timer = RoundTimer::new(DURATION);
        timer.start(0.0);
        timer.pause(1_000.0);
        timer.pause(3_000.0);
        timer.resume(5_000.0);
        timer.update(5_000.0);
        assert_eq!(timer.remaining_ms(), DURATION - 1_000.0);
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let mut timer = RoundTimer::new(DURATION);
        timer.start(0.0);
        timer.resume(5_000.0);
        timer.update(6_000.0);
        assert_eq!(timer.remaining_ms(), DURATION - 6_000.0);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let mut timer = RoundTimer::new(DURATION);
        timer.start(0.0);
        timer.update(DURATION + 5_000.0);
        assert_eq!(timer.remaining_ms(), 0.0);
        assert!(timer.is_over());
    }

    #[test]
    fn test_display_formats_minutes_and_padded_seconds() {
        let mut timer = RoundTimer::new(DURATION);
        assert_eq!(timer.display(), "2:00");
        timer.start(0.0);
        timer.update(59_000.0);
        assert_eq!(timer.display(), "1:01");
        timer.update(111_000.0);
        assert_eq!(timer.display(), "0:09");
        timer.update(DURATION);
        assert_eq!(timer.display(), "0:00");
    }
}
