//! Smooth scrolling system for the Pekoe page viewer
//!
//! Implements animated anchor navigation and key-driven scrolling with
//! configurable easing. The animator is frame-driven: call
//! `update(now, max_scroll)` once per frame with the current timestamp and
//! read back the interpolated offset. Timestamps are passed in rather than
//! sampled internally so frames are deterministic under test.
//!
//! - `easing` - Pure easing functions (cubic in/out, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Duration helpers over the core scroll configuration
//! - `animation` - The animation controller combining the above

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;
pub use easing::EasingTypeExt;
pub use pekoe_core::{EasingType, ScrollConfig};
