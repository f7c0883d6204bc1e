//! Menu widget bridge.
//!
//! The menu widget itself is an external collaborator; this module
//! carries the data handed across that boundary and the display helper
//! that feeds the widget from a page registry.

mod display;
mod widget;

pub use display::display_menu;
pub use widget::{MenuSpec, MenuWidget, Orientation, Placement};
