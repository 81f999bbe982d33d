use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use pekoe_core::controls::{HoursAccordion, MenuOverlay, ScrollTopButton};
use pekoe_core::{AppConfig, Page, RevealEngine};

use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Section menu overlay is open (scrolling is locked)
    Menu,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// The loaded page
    pub page: Page,
    /// Reveal watchers, built once at startup
    pub reveal: RevealEngine,
    /// Menu overlay control, when the page declares one
    pub menu: Option<MenuOverlay>,
    /// Hours accordion control, when the page declares one
    pub hours: Option<HoursAccordion>,
    /// "Back to top" affordance
    pub top_button: ScrollTopButton,
    /// Smooth scroll navigator
    pub animator: ScrollAnimator,
    /// Current application mode
    pub mode: Mode,
    /// Theme
    pub theme: Theme,
    /// Rows available for page content in the current terminal
    pub viewport_height: u16,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Build the full runtime state for a page. This is the single
    /// startup initialization point: all watchers are constructed and all
    /// blocks registered here, and nothing is ever torn down afterwards.
    pub fn new(config: Arc<AppConfig>, mut page: Page) -> Self {
        let reveal = RevealEngine::from_config(&config.reveal, &mut page);
        let menu = MenuOverlay::from_page(&page);
        let hours = HoursAccordion::from_page(&page);
        let mut top_button = ScrollTopButton::new(config.scroll.top_button_threshold);
        // Evaluate once at startup, like the first scroll event
        top_button.update(0.0);

        Self {
            animator: ScrollAnimator::new(config.scroll.clone()),
            config,
            page,
            reveal,
            menu,
            hours,
            top_button,
            mode: Mode::Normal,
            theme: Theme::default(),
            viewport_height: 0,
            status_message: None,
            pending_key: None,
            should_quit: false,
        }
    }

    /// Greatest valid scroll offset for the current viewport
    pub fn max_scroll(&self) -> f64 {
        self.page.max_scroll(self.viewport_height as f64)
    }

    /// Whether page scrolling is currently locked by the menu overlay
    pub fn is_scroll_locked(&self) -> bool {
        self.menu.as_ref().map_or(false, |m| m.is_scroll_locked())
    }

    /// Navigate to a fragment identifier.
    ///
    /// Unresolvable fragments are a silent no-op: dangling anchors are a
    /// content problem and must not disturb the rest of the page. When
    /// triggered from inside the open menu overlay the overlay closes
    /// first, then the navigation runs.
    pub fn go_to_anchor(&mut self, fragment: &str) {
        let Some(anchor_top) = self.page.resolve_anchor(fragment) else {
            debug!(fragment, "anchor navigation ignored: no such section");
            return;
        };

        if let Some(menu) = self.menu.as_mut() {
            menu.close_on_navigate();
        }
        if self.mode == Mode::Menu {
            self.mode = Mode::Normal;
        }

        let max = self.max_scroll();
        self.animator.scroll_to_anchor(anchor_top, max);

        let name = fragment.strip_prefix('#').unwrap_or(fragment);
        if let Some(section) = self.page.sections.iter().find(|s| s.anchor == name) {
            self.set_status(section.title.clone());
        }
    }

    /// Navigate to a section by index (menu overlay entries, number keys)
    pub fn go_to_section(&mut self, index: usize) {
        let Some(anchor) = self.page.sections.get(index).map(|s| s.anchor.clone()) else {
            return;
        };
        self.go_to_anchor(&anchor);
    }

    /// Animate to the section after the one currently at the top
    pub fn next_section(&mut self) {
        let current = self.current_section_index().unwrap_or(0);
        if current + 1 < self.page.sections.len() {
            self.go_to_section(current + 1);
        }
    }

    /// Animate to the section before the one currently at the top
    pub fn prev_section(&mut self) {
        if let Some(current) = self.current_section_index() {
            if current > 0 {
                self.go_to_section(current - 1);
            }
        }
    }

    /// Animate back to the top of the page
    pub fn scroll_to_top(&mut self) {
        let max = self.max_scroll();
        self.animator.scroll_to(0.0, max);
    }

    /// Index of the section containing the current scroll offset
    pub fn current_section_index(&self) -> Option<usize> {
        // Bias by the header clearance so the section being read under
        // the sticky header counts as current
        let probe = self.animator.current_scroll() + self.config.scroll.header_clearance;
        self.page.section_at(probe)
    }

    /// Open or close the menu overlay (no-op when the page has none)
    pub fn toggle_menu(&mut self) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        menu.toggle();
        self.mode = if menu.is_open() { Mode::Menu } else { Mode::Normal };
    }

    /// Expand or collapse the hours accordion (no-op when the page has none)
    pub fn toggle_hours(&mut self) {
        if let Some(hours) = self.hours.as_mut() {
            hours.toggle();
        }
    }

    /// Per-frame update: advance the scroll animation, re-check the
    /// top-button threshold and run a reveal pass at the new offset
    pub fn update_frame(&mut self, now: Instant) {
        let max = self.max_scroll();
        let scroll = self.animator.update(now, max);
        self.top_button.update(scroll);
        self.reveal
            .evaluate(&mut self.page, scroll, self.viewport_height as f64);
    }

    /// Whether the next loop iteration needs the fast animation tick
    pub fn needs_animation_frame(&self) -> bool {
        self.animator.needs_update()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
