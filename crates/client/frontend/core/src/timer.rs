//! Stopwatch for timing a run.
use std::time::{Duration, Instant};

/// Pausable stopwatch. Elapsed time accumulates across start/stop cycles
/// until [`RunTimer::reset`].
///
/// Every method has an `_at` variant taking the current instant, so callers
/// with their own clock (and tests) never depend on wall time.
#[derive(Clone, Debug, Default)]
pub struct RunTimer {
    accumulated: Duration,
    started: Option<Instant>,
}

impl RunTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn toggle(&mut self) {
        self.toggle_at(Instant::now());
    }

    pub fn toggle_at(&mut self, now: Instant) {
        match self.started.take() {
            Some(started) => self.accumulated += now.saturating_duration_since(started),
            None => self.started = Some(now),
        }
    }

    /// Stops the timer and zeroes it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let running = self
            .started
            .map_or(Duration::ZERO, |started| now.saturating_duration_since(started));
        self.accumulated + running
    }

    /// `H:MM:SS.d`, hours unpadded.
    pub fn display(&self) -> String {
        format_duration(self.elapsed())
    }
}

pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let tenths = duration.subsec_millis() / 100;
    format!(
        "{}:{:02}:{:02}.{}",
        total / 3600,
        (total / 60) % 60,
        total % 60,
        tenths
    )
}
