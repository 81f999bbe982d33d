mod nav_bar;
mod overlay;
mod page_view;
mod status_bar;

pub use nav_bar::NavBarWidget;
pub use overlay::{HelpWidget, HoursPanelWidget, MenuOverlayWidget};
pub use page_view::PageViewWidget;
pub use status_bar::StatusBarWidget;
