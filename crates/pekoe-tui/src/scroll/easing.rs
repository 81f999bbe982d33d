//! Pure easing functions for scroll animations
//!
//! Each function maps elapsed-time fraction [0, 1] to motion-progress
//! fraction [0, 1].

pub use pekoe_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::CubicInOut => cubic_ease_in_out(t),
            EasingType::CubicOut => cubic_ease_out(t),
            EasingType::QuinticOut => quintic_ease_out(t),
            EasingType::ExponentialOut => exponential_ease_out(t),
        }
    }
}

/// Cubic ease-in-out:
/// f(t) = 4t³ for t < ½, 1 - (-2t + 2)³ / 2 otherwise
///
/// Both halves meet at f(½) = ½, so the curve is continuous.
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::CubicInOut,
        EasingType::CubicOut,
        EasingType::QuinticOut,
        EasingType::ExponentialOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            // t=0 should give 0 (except None which jumps)
            if easing != EasingType::None {
                assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            // t=1 should give 1
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_in_out_continuous_at_midpoint() {
        let easing = EasingType::CubicInOut;
        let below = easing.apply(0.5 - 1e-9);
        let at = easing.apply(0.5);
        let above = easing.apply(0.5 + 1e-9);
        assert!((at - 0.5).abs() < 1e-6);
        assert!((at - below).abs() < 1e-6);
        assert!((above - at).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_known_values() {
        let easing = EasingType::CubicInOut;
        // 4t³ on the first half
        assert!((easing.apply(0.25) - 4.0 * 0.25f64.powi(3)).abs() < 1e-12);
        // 1 - (-2t+2)³/2 on the second half
        assert!((easing.apply(0.75) - (1.0 - 0.5f64.powi(3) / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), easing.apply(0.0));
            assert_eq!(easing.apply(1.5), easing.apply(1.0));
        }
    }
}
