//! Page model for Pekoe
//!
//! A page is a vertical document measured in rows: sections addressed by
//! anchor, each holding typed blocks with fixed geometry. Behavioral state
//! is exposed through per-block class sets, which the presentation layer
//! interprets; the model itself never renders anything.

mod loader;
mod model;
mod sample;

pub use model::{Block, BlockRole, ClassSet, HoursPanel, Page, Section};
