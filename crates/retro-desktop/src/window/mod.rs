//! Window module
//!
//! A [`Window`] owns its own geometry: position, size, maximize state and
//! the in-progress pointer gesture. It reports to its host only through
//! [`WindowEvent`]s and never touches focus or z-order itself.

mod descriptor;
mod edge;
mod event;
mod region;
#[allow(clippy::module_inception)]
mod window;
mod work_area;

pub use descriptor::{catalog_from_json, WindowDescriptor};
pub use edge::{EdgeMotion, EdgeRule, ResizeEdge};
pub use event::WindowEvent;
pub use region::WindowRegion;
pub use window::{Gesture, Window, WindowMode};
pub use work_area::WorkArea;

pub use crate::types::WindowId;
