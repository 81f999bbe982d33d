//! Time calculation utilities for scroll animations
//!
//! Pure functions over an explicit `now` timestamp; nothing in here reads
//! the clock, so animation frames can be replayed exactly in tests.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at time `now` for an
/// animation that started at `start` and runs for `duration`
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if the animation has run its full duration at time `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two offsets
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(700.0, 0.0, 0.5) - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_is_deterministic_for_given_now() {
        let start = Instant::now();
        let halfway = start + Duration::from_millis(600);
        let p = progress(start, Duration::from_millis(1200), halfway);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_clamps_past_duration() {
        let start = Instant::now();
        let late = start + Duration::from_millis(5000);
        assert!((progress(start, Duration::from_millis(1200), late) - 1.0).abs() < 1e-9);
        assert!(is_complete(start, Duration::from_millis(1200), late));
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_now_before_start_is_zero_progress() {
        let start = Instant::now() + Duration::from_millis(100);
        let p = progress(start, Duration::from_millis(1200), Instant::now());
        assert_eq!(p, 0.0);
    }
}
