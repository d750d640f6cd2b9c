//! Taskbar view of the open set

use serde::Serialize;

use crate::types::WindowId;

/// One taskbar button
///
/// Entries are derived from the host on demand and never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: Option<String>,
    /// Button is drawn pressed
    pub focused: bool,
    pub minimized: bool,
}
