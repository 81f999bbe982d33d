//! Intersection geometry for reveal watchers
//!
//! Mirrors the trigger geometry of browser intersection tracking: a signed
//! margin grows or shrinks the effective viewport box before the visible
//! fraction of a block is measured against a threshold.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Signed margin applied symmetrically to the top and bottom of the
/// viewport box. Positive values grow the box (earlier triggering),
/// negative values shrink it (later triggering).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootMargin {
    /// Absolute rows
    Rows(f64),
    /// Percentage of the viewport height
    Percent(f64),
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin::Rows(0.0)
    }
}

impl RootMargin {
    /// Resolve to rows for a concrete viewport height
    pub fn resolve(&self, viewport_height: f64) -> f64 {
        match self {
            RootMargin::Rows(rows) => *rows,
            RootMargin::Percent(pct) => pct / 100.0 * viewport_height,
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootMargin::Rows(rows) => write!(f, "{}", rows),
            RootMargin::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl Serialize for RootMargin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// Accepts a bare number (rows) or a string like "-40" / "-10%"
impl<'de> Deserialize<'de> for RootMargin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RootMarginVisitor;

        impl<'de> Visitor<'de> for RootMarginVisitor {
            type Value = RootMargin;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number of rows or a string like \"-40\" or \"-10%\"")
            }

            fn visit_f64<E>(self, value: f64) -> Result<RootMargin, E>
            where
                E: de::Error,
            {
                Ok(RootMargin::Rows(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<RootMargin, E>
            where
                E: de::Error,
            {
                Ok(RootMargin::Rows(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<RootMargin, E>
            where
                E: de::Error,
            {
                Ok(RootMargin::Rows(value as f64))
            }

            fn visit_str<E>(self, value: &str) -> Result<RootMargin, E>
            where
                E: de::Error,
            {
                let value = value.trim();
                if let Some(pct) = value.strip_suffix('%') {
                    pct.trim()
                        .parse::<f64>()
                        .map(RootMargin::Percent)
                        .map_err(|_| de::Error::custom(format!("invalid margin: {value}")))
                } else {
                    let rows = value.strip_suffix("px").unwrap_or(value);
                    rows.trim()
                        .parse::<f64>()
                        .map(RootMargin::Rows)
                        .map_err(|_| de::Error::custom(format!("invalid margin: {value}")))
                }
            }
        }

        deserializer.deserialize_any(RootMarginVisitor)
    }
}

/// Fraction of a block's area visible inside the margin-adjusted viewport.
///
/// The viewport box is `[scroll - margin, scroll + viewport_height + margin]`;
/// the result is clamped to [0, 1]. Zero-height blocks count as fully
/// visible when their top row is inside the box.
pub fn intersection_ratio(
    block_top: f64,
    block_height: f64,
    scroll: f64,
    viewport_height: f64,
    margin: RootMargin,
) -> f64 {
    let m = margin.resolve(viewport_height);
    let box_top = scroll - m;
    let box_bottom = scroll + viewport_height + m;
    if box_bottom <= box_top {
        return 0.0;
    }

    if block_height <= 0.0 {
        return if block_top >= box_top && block_top <= box_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = (block_top + block_height).min(box_bottom) - block_top.max(box_top);
    (overlap / block_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        let r = intersection_ratio(10.0, 20.0, 0.0, 50.0, RootMargin::default());
        assert!((r - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fully_outside() {
        let r = intersection_ratio(100.0, 20.0, 0.0, 50.0, RootMargin::default());
        assert_eq!(r, 0.0);
    }

    #[test]
    fn test_partial_entry_from_below() {
        // Block top at row 45, viewport ends at 50 -> 5 of 20 rows visible
        let r = intersection_ratio(45.0, 20.0, 0.0, 50.0, RootMargin::default());
        assert!((r - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_negative_margin_delays_trigger() {
        // With the box shrunk by 10 rows, the same block is not yet visible
        let with_margin = intersection_ratio(45.0, 20.0, 0.0, 50.0, RootMargin::Rows(-10.0));
        assert_eq!(with_margin, 0.0);

        let without = intersection_ratio(45.0, 20.0, 0.0, 50.0, RootMargin::default());
        assert!(without > 0.0);
    }

    #[test]
    fn test_percent_margin_scales_with_viewport() {
        // -10% of 50 rows shrinks the box bottom from 50 to 45
        let r = intersection_ratio(45.0, 20.0, 0.0, 50.0, RootMargin::Percent(-10.0));
        assert_eq!(r, 0.0);
        let r = intersection_ratio(40.0, 20.0, 0.0, 50.0, RootMargin::Percent(-10.0));
        assert!((r - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_positive_margin_triggers_early() {
        let r = intersection_ratio(55.0, 20.0, 0.0, 50.0, RootMargin::Rows(10.0));
        assert!((r - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_margin_parse_and_display() {
        assert_eq!(RootMargin::Rows(-40.0).to_string(), "-40");
        assert_eq!(RootMargin::Percent(-10.0).to_string(), "-10%");
    }
}
