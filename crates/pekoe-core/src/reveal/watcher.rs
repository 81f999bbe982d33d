//! Reveal watcher: a one-way visibility latch over a set of blocks

use tracing::debug;

use crate::config::WatcherConfig;
use crate::page::Page;

use super::geometry::{intersection_ratio, RootMargin};

/// Per-block reveal state. Revealed is terminal: once a block has crossed
/// its watcher's threshold it never goes back, even if it leaves the
/// viewport again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Unrevealed,
    Revealed,
}

#[derive(Debug, Clone)]
struct WatchEntry {
    block: usize,
    state: RevealState,
}

/// Watches a group of blocks against one trigger geometry.
///
/// Registration tags a block as animatable (`reveal` class); the first
/// time its visible fraction reaches the threshold inside the
/// margin-adjusted viewport it gains the watcher's reveal class and is
/// dropped from active observation.
#[derive(Debug, Clone)]
pub struct RevealWatcher {
    threshold: f64,
    root_margin: RootMargin,
    reveal_class: String,
    entries: Vec<WatchEntry>,
}

impl RevealWatcher {
    pub fn new(threshold: f64, root_margin: RootMargin, reveal_class: impl Into<String>) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin,
            reveal_class: reveal_class.into(),
            entries: Vec::new(),
        }
    }

    pub fn from_config(config: &WatcherConfig) -> Self {
        Self::new(config.threshold, config.root_margin, config.class.clone())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> RootMargin {
        self.root_margin
    }

    /// Register a block for observation and tag it animatable.
    ///
    /// Idempotent: registering the same block twice has no additional
    /// effect. An out-of-range index is ignored; a dangling registration
    /// is a content problem, not a runtime fault.
    pub fn register(&mut self, page: &mut Page, block: usize) {
        let Some(target) = page.blocks.get_mut(block) else {
            debug!(block, "reveal registration ignored: no such block");
            return;
        };
        if self.entries.iter().any(|e| e.block == block) {
            return;
        }
        target.classes.add("reveal");
        self.entries.push(WatchEntry {
            block,
            state: RevealState::Unrevealed,
        });
    }

    pub fn state(&self, block: usize) -> Option<RevealState> {
        self.entries.iter().find(|e| e.block == block).map(|e| e.state)
    }

    /// Blocks still under active observation
    pub fn observed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.state == RevealState::Unrevealed)
            .count()
    }

    pub fn revealed_count(&self) -> usize {
        self.entries.len() - self.observed_count()
    }

    /// Latch every observed block whose visible fraction has reached the
    /// threshold. Returns the indices revealed by this pass. Blocks that
    /// fall back below the threshold are never unlatched.
    pub fn evaluate(&mut self, page: &mut Page, scroll: f64, viewport_height: f64) -> Vec<usize> {
        let mut newly = Vec::new();
        for entry in &mut self.entries {
            if entry.state == RevealState::Revealed {
                continue;
            }
            let Some(block) = page.blocks.get_mut(entry.block) else {
                continue;
            };
            let ratio = intersection_ratio(
                block.top,
                block.height,
                scroll,
                viewport_height,
                self.root_margin,
            );
            if ratio > 0.0 && ratio >= self.threshold {
                entry.state = RevealState::Revealed;
                block.classes.add(&self.reveal_class);
                newly.push(entry.block);
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Block, BlockRole, ClassSet, Page, Section};

    fn page_with_block(top: f64, height: f64) -> Page {
        Page {
            title: "t".to_string(),
            sections: vec![Section {
                anchor: "s".to_string(),
                title: "S".to_string(),
                top: 0.0,
            }],
            blocks: vec![Block {
                section: 0,
                role: BlockRole::TeaCard,
                lines: vec!["x".to_string()],
                top,
                height,
                classes: ClassSet::new(),
            }],
            total_height: top + height + 100.0,
            menu_button: false,
            menu_overlay: false,
            hours_toggle: false,
            hours_panel: None,
        }
    }

    #[test]
    fn test_register_tags_reveal_class() {
        let mut page = page_with_block(200.0, 30.0);
        let mut watcher = RevealWatcher::new(0.1, RootMargin::default(), "active");
        watcher.register(&mut page, 0);
        assert!(page.blocks[0].classes.contains("reveal"));
        assert!(!page.blocks[0].classes.contains("active"));
        assert_eq!(watcher.state(0), Some(RevealState::Unrevealed));
    }

    #[test]
    fn test_double_registration_is_single_entry() {
        let mut page = page_with_block(0.0, 30.0);
        let mut watcher = RevealWatcher::new(0.1, RootMargin::default(), "active");
        watcher.register(&mut page, 0);
        watcher.register(&mut page, 0);
        assert_eq!(watcher.observed_count(), 1);

        // And exactly one reveal transition ever happens
        let newly = watcher.evaluate(&mut page, 0.0, 50.0);
        assert_eq!(newly, vec![0]);
        let again = watcher.evaluate(&mut page, 0.0, 50.0);
        assert!(again.is_empty());
    }

    #[test]
    fn test_register_out_of_range_is_inert() {
        let mut page = page_with_block(0.0, 30.0);
        let mut watcher = RevealWatcher::new(0.1, RootMargin::default(), "active");
        watcher.register(&mut page, 7);
        assert_eq!(watcher.observed_count(), 0);
        assert!(watcher.evaluate(&mut page, 0.0, 50.0).is_empty());
    }

    #[test]
    fn test_reveal_is_a_one_way_latch() {
        let mut page = page_with_block(200.0, 30.0);
        let mut watcher = RevealWatcher::new(0.1, RootMargin::default(), "active");
        watcher.register(&mut page, 0);

        // Out of view: nothing happens
        assert!(watcher.evaluate(&mut page, 0.0, 50.0).is_empty());

        // Scrolled into view: latch fires once
        let newly = watcher.evaluate(&mut page, 190.0, 50.0);
        assert_eq!(newly, vec![0]);
        assert!(page.blocks[0].classes.contains("active"));

        // Scrolled away again: the mark stays
        assert!(watcher.evaluate(&mut page, 0.0, 50.0).is_empty());
        assert_eq!(watcher.state(0), Some(RevealState::Revealed));
        assert!(page.blocks[0].classes.contains("active"));
    }

    #[test]
    fn test_threshold_gates_partial_visibility() {
        let mut page = page_with_block(45.0, 20.0);
        let mut watcher = RevealWatcher::new(0.5, RootMargin::default(), "active");
        watcher.register(&mut page, 0);

        // Only 5 of 20 rows visible: below the 50% threshold
        assert!(watcher.evaluate(&mut page, 0.0, 50.0).is_empty());

        // 15 of 20 rows visible: latches
        assert_eq!(watcher.evaluate(&mut page, 10.0, 50.0), vec![0]);
    }

    #[test]
    fn test_revealed_blocks_leave_observation() {
        let mut page = page_with_block(0.0, 30.0);
        let mut watcher = RevealWatcher::new(0.1, RootMargin::default(), "visible");
        watcher.register(&mut page, 0);
        watcher.evaluate(&mut page, 0.0, 50.0);
        assert_eq!(watcher.observed_count(), 0);
        assert_eq!(watcher.revealed_count(), 1);
    }
}
