//! Wall-clock timing for frame updates.

use std::time::{Duration, Instant};

/// Measures elapsed wall time since creation or the last reset.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    /// Restart measuring from now.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds.
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Return the elapsed seconds and restart.
    pub fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.start).as_secs_f32();
        self.start = now;
        delta
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_restarts_measurement() {
        let mut watch = Stopwatch::new();
        std::thread::sleep(Duration::from_millis(5));
        let first = watch.lap();
        assert!(first >= 0.005);
        assert!(watch.elapsed_secs() < first);
    }

    #[test]
    fn test_reset() {
        let mut watch = Stopwatch::new();
        std::thread::sleep(Duration::from_millis(2));
        watch.reset();
        assert!(watch.elapsed() < Duration::from_millis(2));
    }
}
