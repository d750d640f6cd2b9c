//! Events a window reports to its host

use serde::Serialize;

use crate::types::WindowId;

/// High-level request emitted by a window
///
/// Windows never change focus or membership themselves; they ask the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum WindowEvent {
    /// The window received a primary interaction and wants to be on top
    ActivateRequested(WindowId),
    /// The user pressed the close button
    CloseRequested(WindowId),
}

impl WindowEvent {
    /// The window that emitted this event
    pub fn window_id(&self) -> &WindowId {
        match self {
            WindowEvent::ActivateRequested(id) | WindowEvent::CloseRequested(id) => id,
        }
    }
}
