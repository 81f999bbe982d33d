pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::{App, Mode};
pub use keymap::Keymap;
pub use theme::Theme;
