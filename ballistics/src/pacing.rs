//! Frame pacing between presented frames.
//!
//! `Fixed` sleeps the full interval after every frame regardless of how long the
//! frame took, so the real period is work time plus the interval and the loop runs
//! a little under 60 Hz. `Adaptive` only sleeps what is left of the interval.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Pacing {
    #[default]
    Fixed,
    Adaptive,
}

/// How long to sleep after a frame whose work took `work`.
pub fn frame_delay(pacing: Pacing, interval: Duration, work: Duration) -> Duration {
    match pacing {
        Pacing::Fixed => interval,
        Pacing::Adaptive => interval.saturating_sub(work),
    }
}

pub trait Pacer {
    /// Called once at the end of every rendered frame
    fn pace(&mut self);
}

/// Blocks the thread between frames.
pub struct SleepPacer {
    pacing: Pacing,
    interval: Duration,
    frame_start: Instant,
}

impl SleepPacer {
    pub fn new(pacing: Pacing, interval: Duration) -> Self {
        Self {
            pacing,
            interval,
            frame_start: Instant::now(),
        }
    }
}

impl Pacer for SleepPacer {
    fn pace(&mut self) {
        let delay = frame_delay(self.pacing, self.interval, self.frame_start.elapsed());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.frame_start = Instant::now();
    }
}

/// Runs frames back to back.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pace(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn test_fixed_ignores_work_time() {
        for work in [0, 5, 16, 40] {
            assert_eq!(
                frame_delay(Pacing::Fixed, INTERVAL, Duration::from_millis(work)),
                INTERVAL
            );
        }
    }

    #[test]
    fn test_adaptive_subtracts_work_time() {
        assert_eq!(
            frame_delay(Pacing::Adaptive, INTERVAL, Duration::from_millis(6)),
            Duration::from_millis(10)
        );
        assert_eq!(
            frame_delay(Pacing::Adaptive, INTERVAL, Duration::ZERO),
            INTERVAL
        );
    }

    #[test]
    fn test_adaptive_clamps_to_zero() {
        assert_eq!(
            frame_delay(Pacing::Adaptive, INTERVAL, Duration::from_millis(25)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_sleep_pacer_waits_at_least_interval() {
        let interval = Duration::from_millis(5);
        let mut pacer = SleepPacer::new(Pacing::Fixed, interval);
        let start = Instant::now();
        pacer.pace();
        assert!(start.elapsed() >= interval);
    }
}
