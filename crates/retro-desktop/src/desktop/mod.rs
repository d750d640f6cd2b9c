//! Desktop surface
//!
//! Icons on the desktop background and what double-clicking them does.

mod icon;

pub use icon::{DesktopIcon, IconAction};
