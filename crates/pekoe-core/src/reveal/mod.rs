//! Viewport reveal engine
//!
//! A set of independently configured visibility watchers, each bound to a
//! group of blocks and a trigger geometry. Blocks are marked revealed the
//! first time they cross their watcher's threshold and never unmarked.
//!
//! Watchers are built exactly once at startup from [`RevealConfig`]; the
//! engine's lifetime equals the page's lifetime and there is no teardown.

mod geometry;
mod watcher;

pub use geometry::{intersection_ratio, RootMargin};
pub use watcher::{RevealState, RevealWatcher};

use crate::config::RevealConfig;
use crate::page::{BlockRole, Page};

/// All reveal watchers for one page, registered by block role
#[derive(Debug, Clone)]
pub struct RevealEngine {
    content: RevealWatcher,
    title: RevealWatcher,
    story: RevealWatcher,
}

impl RevealEngine {
    /// Build the watcher table and register every animatable block.
    ///
    /// Content cards (tea, menu, about) go to the content watcher, section
    /// titles to the title watcher, story image/text blocks to the story
    /// watcher. Plain blocks are never observed. Each block belongs to
    /// exactly one watcher.
    pub fn from_config(config: &RevealConfig, page: &mut Page) -> Self {
        let mut content = RevealWatcher::from_config(&config.content);
        let mut title = RevealWatcher::from_config(&config.title);
        let mut story = RevealWatcher::from_config(&config.story);

        for idx in 0..page.blocks.len() {
            match page.blocks[idx].role {
                BlockRole::TeaCard | BlockRole::MenuCard | BlockRole::AboutText => {
                    content.register(page, idx)
                }
                BlockRole::SectionTitle => title.register(page, idx),
                BlockRole::StoryImage | BlockRole::StoryText => story.register(page, idx),
                BlockRole::Plain | BlockRole::Hero => {}
            }
        }

        Self { content, title, story }
    }

    /// Run one reveal pass over every watcher. Returns the number of
    /// blocks newly revealed by this pass.
    pub fn evaluate(&mut self, page: &mut Page, scroll: f64, viewport_height: f64) -> usize {
        let mut newly = 0;
        for watcher in [&mut self.content, &mut self.title, &mut self.story] {
            newly += watcher.evaluate(page, scroll, viewport_height).len();
        }
        newly
    }

    /// Whether the given block has latched in any watcher
    pub fn is_revealed(&self, block: usize) -> bool {
        [&self.content, &self.title, &self.story]
            .iter()
            .any(|w| w.state(block) == Some(RevealState::Revealed))
    }

    pub fn revealed_count(&self) -> usize {
        self.content.revealed_count() + self.title.revealed_count() + self.story.revealed_count()
    }

    /// Blocks still waiting for their first threshold crossing
    pub fn observed_count(&self) -> usize {
        self.content.observed_count() + self.title.observed_count() + self.story.observed_count()
    }
}
