//! Frame pacing

use std::time::{Duration, Instant};

/// Caps how often the frame loop runs
pub trait FrameClock {
    /// Block until a full `1 / target_fps` has passed since the previous
    /// call, then return the time since that call (including the wait).
    fn tick(&mut self, target_fps: u32) -> Duration;
}

/// Sleeps the calling thread to hold a maximum frame rate.
///
/// Best effort: an overrunning frame is not made up for later, the loop just
/// runs slower. A `target_fps` of 0 disables the cap.
#[derive(Debug, Default)]
pub struct FixedRateClock {
    last_tick: Option<Instant>,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame interval for a rate, `None` when uncapped
    pub fn interval(target_fps: u32) -> Option<Duration> {
        (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(target_fps)))
    }
}

impl FrameClock for FixedRateClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        if let Some(interval) = Self::interval(target_fps) {
            let elapsed = last.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
            }
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now - last
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(FixedRateClock::interval(0), None);
        let sixty = FixedRateClock::interval(60).unwrap();
        assert!(sixty > Duration::from_micros(16_600) && sixty < Duration::from_micros(16_700));
    }

    #[test]
    fn test_first_tick_does_not_wait() {
        let mut clock = FixedRateClock::new();
        let start = Instant::now();
        assert_eq!(clock.tick(10), Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_tick_holds_rate() {
        let mut clock = FixedRateClock::new();
        clock.tick(50);
        let dt = clock.tick(50);
        assert!(dt >= Duration::from_millis(20), "tick returned after {dt:?}");
    }

    #[test]
    fn test_overrun_does_not_sleep() {
        let mut clock = FixedRateClock::new();
        clock.tick(10);
        std::thread::sleep(Duration::from_millis(120));
        let start = Instant::now();
        let dt = clock.tick(10);
        assert!(start.elapsed() < Duration::from_millis(50));
        assert!(dt >= Duration::from_millis(120));
    }
}
