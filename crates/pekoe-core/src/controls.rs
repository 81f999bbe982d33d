//! Simple page controls: menu overlay, back-to-top button, hours accordion
//!
//! These are stateless UI wiring around the scroll engine, not part of it.
//! Each control only exists when the page declares both sides of its
//! trigger/panel pairing; a half-declared control is never constructed and
//! the rest of the page keeps working.

use crate::page::{ClassSet, Page};

/// Full-screen navigation overlay with a scroll lock.
///
/// Toggling flips `active` on both the trigger and the overlay and locks
/// document scrolling while open. Navigating from inside the open overlay
/// closes it.
#[derive(Debug, Clone)]
pub struct MenuOverlay {
    trigger_classes: ClassSet,
    overlay_classes: ClassSet,
    scroll_locked: bool,
}

impl MenuOverlay {
    /// Construct only when the page declares both the button and the overlay
    pub fn from_page(page: &Page) -> Option<Self> {
        if page.menu_button && page.menu_overlay {
            Some(Self {
                trigger_classes: ClassSet::new(),
                overlay_classes: ClassSet::new(),
                scroll_locked: false,
            })
        } else {
            None
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay_classes.contains("active")
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn trigger_classes(&self) -> &ClassSet {
        &self.trigger_classes
    }

    pub fn overlay_classes(&self) -> &ClassSet {
        &self.overlay_classes
    }

    /// Flip the overlay open or closed, moving trigger, overlay and
    /// scroll lock together
    pub fn toggle(&mut self) {
        self.trigger_classes.toggle("active");
        self.overlay_classes.toggle("active");
        self.scroll_locked = self.overlay_classes.contains("active");
    }

    /// A link inside the open overlay was followed; closes iff open
    pub fn close_on_navigate(&mut self) {
        if self.is_open() {
            self.toggle();
        }
    }
}

/// "Back to top" affordance that activates past a scroll threshold.
///
/// Unlike reveal state this is a true toggle: the `active` class comes and
/// goes on every threshold crossing, in both directions.
#[derive(Debug, Clone)]
pub struct ScrollTopButton {
    threshold: f64,
    classes: ClassSet,
}

impl ScrollTopButton {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            classes: ClassSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.classes.contains("active")
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// Re-evaluate against the current scroll offset; call on every
    /// scroll change (and once at startup)
    pub fn update(&mut self, scroll: f64) {
        if scroll > self.threshold {
            self.classes.add("active");
        } else {
            self.classes.remove("active");
        }
    }
}

/// Opening-hours accordion: flips `expanded` on the panel and `active`
/// on the trigger button
#[derive(Debug, Clone)]
pub struct HoursAccordion {
    panel_classes: ClassSet,
    button_classes: ClassSet,
}

impl HoursAccordion {
    /// Construct only when the page declares both the toggle and the panel
    pub fn from_page(page: &Page) -> Option<Self> {
        if page.hours_toggle && page.hours_panel.is_some() {
            Some(Self {
                panel_classes: ClassSet::new(),
                button_classes: ClassSet::new(),
            })
        } else {
            None
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.panel_classes.contains("expanded")
    }

    pub fn panel_classes(&self) -> &ClassSet {
        &self.panel_classes
    }

    pub fn button_classes(&self) -> &ClassSet {
        &self.button_classes
    }

    pub fn toggle(&mut self) {
        self.panel_classes.toggle("expanded");
        self.button_classes.toggle("active");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_overlay_requires_both_sides() {
        let mut page = Page::sample();
        assert!(MenuOverlay::from_page(&page).is_some());

        page.menu_overlay = false;
        assert!(MenuOverlay::from_page(&page).is_none());

        page.menu_overlay = true;
        page.menu_button = false;
        assert!(MenuOverlay::from_page(&page).is_none());
    }

    #[test]
    fn test_menu_toggle_moves_classes_and_scroll_lock_together() {
        let page = Page::sample();
        let mut menu = MenuOverlay::from_page(&page).unwrap();

        assert!(!menu.is_open());
        assert!(!menu.is_scroll_locked());

        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.trigger_classes().contains("active"));
        assert!(menu.overlay_classes().contains("active"));
        assert!(menu.is_scroll_locked());

        menu.toggle();
        assert!(!menu.is_open());
        assert!(!menu.trigger_classes().contains("active"));
        assert!(!menu.is_scroll_locked());
    }

    #[test]
    fn test_menu_closes_on_navigation_only_when_open() {
        let page = Page::sample();
        let mut menu = MenuOverlay::from_page(&page).unwrap();

        // Closed: navigating does nothing
        menu.close_on_navigate();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close_on_navigate();
        assert!(!menu.is_open());
        assert!(!menu.is_scroll_locked());
    }

    #[test]
    fn test_scroll_top_button_toggles_bidirectionally() {
        let mut button = ScrollTopButton::new(300.0);
        button.update(0.0);
        assert!(!button.is_active());

        button.update(301.0);
        assert!(button.is_active());

        button.update(299.0);
        assert!(!button.is_active());

        // Every crossing, both directions, repeatedly
        button.update(500.0);
        assert!(button.is_active());
        button.update(50.0);
        assert!(!button.is_active());
    }

    #[test]
    fn test_threshold_itself_is_not_past() {
        let mut button = ScrollTopButton::new(300.0);
        button.update(300.0);
        assert!(!button.is_active());
    }

    #[test]
    fn test_hours_accordion_pairs_and_toggles() {
        let page = Page::sample();
        let mut hours = HoursAccordion::from_page(&page).unwrap();

        assert!(!hours.is_expanded());
        hours.toggle();
        assert!(hours.is_expanded());
        assert!(hours.panel_classes().contains("expanded"));
        assert!(hours.button_classes().contains("active"));
        hours.toggle();
        assert!(!hours.is_expanded());
    }

    #[test]
    fn test_hours_accordion_absent_panel_is_inert() {
        let mut page = Page::sample();
        page.hours_panel = None;
        assert!(HoursAccordion::from_page(&page).is_none());
    }
}
