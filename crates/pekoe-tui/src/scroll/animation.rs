//! Scroll animation controller
//!
//! Combines easing functions and timing utilities into the smooth scroll
//! navigator. Call `scroll_to_anchor()` (or the key-driven motions), then
//! `update()` each frame with the frame timestamp to get the current
//! interpolated offset.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Set on the first frame the animation is updated
    started: Option<Instant>,
    /// Starting scroll offset
    from: f64,
    /// Target scroll offset
    to: f64,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Scroll animation controller for the page viewport.
///
/// At most one animation is in flight: starting a new gesture while one is
/// running replaces it, beginning from the current interpolated offset, so
/// overlapping navigations can never fight over the scroll position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current scroll offset (always up-to-date)
    current_scroll: f64,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            animation: None,
            config: ScrollConfig::default(),
            current_scroll: 0.0,
            pending_delta: 0.0,
        }
    }
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0.0,
            pending_delta: 0.0,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Get the target scroll offset (final offset after animation)
    pub fn target_scroll(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    /// Get the current interpolated scroll offset
    #[inline]
    pub fn current_scroll(&self) -> f64 {
        self.current_scroll
    }

    /// Set scroll offset immediately (no animation)
    pub fn set_scroll(&mut self, scroll: f64) {
        self.animation = None;
        self.current_scroll = scroll.max(0.0);
        self.pending_delta = 0.0;
    }

    /// Begin animated navigation to an anchor's document row, offset by
    /// the configured header clearance.
    ///
    /// Anchor resolution happens before this call; an unresolvable anchor
    /// never reaches the animator.
    pub fn scroll_to_anchor(&mut self, anchor_top: f64, max_scroll: f64) {
        let target = (anchor_top - self.config.header_clearance).max(0.0);
        self.scroll_to(target, max_scroll);
    }

    /// Start a scroll animation to a target offset
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    /// If an animation is in flight, it is cancelled and the new one
    /// starts from the current interpolated offset.
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64) {
        let target = target.clamp(0.0, max_scroll.max(0.0));

        if !self.config.is_smooth() {
            // Instant jump when smooth scrolling is disabled
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        // Start from the current visible offset, replacing any in-flight
        // animation (takeover, not merge)
        let from = self.current_scroll;

        // Skip animation if already at target
        if (from - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            started: None,
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta amount (positive = down, negative = up)
    ///
    /// Multiple scroll events within the same animation frame are batched
    /// together for smoother handling of rapid key presses.
    pub fn scroll_by(&mut self, delta: f64, max_scroll: f64) {
        if !self.config.is_smooth() {
            // Instant scroll
            self.current_scroll = (self.current_scroll + delta).clamp(0.0, max_scroll.max(0.0));
            self.animation = None;
            return;
        }

        // Accumulate delta for batching
        self.pending_delta += delta;
    }

    /// Scroll down by configured line count
    pub fn scroll_down(&mut self, max_scroll: f64) {
        let lines = if self.config.is_smooth() {
            1.0 // Smooth scroll moves 1 row at a time for fine control
        } else {
            self.config.scroll_lines as f64
        };
        self.scroll_by(lines, max_scroll);
    }

    /// Scroll up by configured line count
    pub fn scroll_up(&mut self, max_scroll: f64) {
        let lines = if self.config.is_smooth() {
            1.0
        } else {
            self.config.scroll_lines as f64
        };
        self.scroll_by(-lines, max_scroll);
    }

    /// Scroll down by half page
    pub fn scroll_half_page_down(&mut self, viewport_height: f64, max_scroll: f64) {
        self.scroll_by((viewport_height / 2.0).max(1.0), max_scroll);
    }

    /// Scroll up by half page
    pub fn scroll_half_page_up(&mut self, viewport_height: f64, max_scroll: f64) {
        self.scroll_by(-(viewport_height / 2.0).max(1.0), max_scroll);
    }

    /// Scroll down by full page
    pub fn scroll_full_page_down(&mut self, viewport_height: f64, max_scroll: f64) {
        self.scroll_by(viewport_height, max_scroll);
    }

    /// Scroll up by full page
    pub fn scroll_full_page_up(&mut self, viewport_height: f64, max_scroll: f64) {
        self.scroll_by(-viewport_height, max_scroll);
    }

    /// Advance the animation to time `now` and return the current offset
    ///
    /// Call this every frame. The frame that reaches the full duration
    /// snaps the offset to the exact target, so arrival is never subject
    /// to float timing error.
    pub fn update(&mut self, now: Instant, max_scroll: f64) -> f64 {
        // Process any pending scroll delta
        if self.pending_delta != 0.0 {
            let target = self.target_scroll();
            let new_target = (target + self.pending_delta).clamp(0.0, max_scroll.max(0.0));
            self.pending_delta = 0.0;

            // Start or update animation to the new target
            if (new_target - self.current_scroll).abs() > f64::EPSILON {
                self.animation = Some(ActiveAnimation {
                    started: None,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        // Update active animation
        if let Some(ref mut anim) = self.animation {
            // First frame of the run fixes the start timestamp
            let started = *anim.started.get_or_insert(now);

            if is_complete(started, anim.duration, now) {
                // Exact arrival on the final frame
                self.current_scroll = anim.to.min(max_scroll.max(0.0));
                self.animation = None;
            } else {
                let t = progress(started, anim.duration, now);
                let eased = anim.easing.apply(t);
                self.current_scroll = lerp(anim.from, anim.to, eased).min(max_scroll.max(0.0));
            }
        }

        self.current_scroll
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }

    /// Reset to initial state
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_scroll = 0.0;
        self.pending_delta = 0.0;
    }
}
