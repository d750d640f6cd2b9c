//! Core geometry types for the desktop shell
//!
//! All coordinates are in CSS pixels with a top-left origin, matching the
//! browser viewport the shell is rendered into.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
