//! Window host
//!
//! Tracks which windows are open, their stacking order and which one has
//! focus. Geometry is none of its business.

#[allow(clippy::module_inception)]
mod host;
mod taskbar;

pub use host::WindowHost;
pub use taskbar::TaskbarEntry;
