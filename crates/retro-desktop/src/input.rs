//! Pointer routing
//!
//! A press on window chrome may start a gesture; from then until release
//! every pointer move belongs to that window, wherever the pointer is.

use serde::Serialize;

use crate::types::WindowId;

/// Result of routing an input event
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum InputResult {
    /// Event was consumed by the window manager
    Handled,
    /// Event missed every window (desktop background)
    Unhandled,
    /// Event landed in a window's content area; coordinates are window-local
    Forward {
        window_id: WindowId,
        local_x: f32,
        local_y: f32,
    },
}

/// Tracks the window that owns the current gesture
#[derive(Clone, Debug, Default)]
pub struct PointerCapture {
    owner: Option<WindowId>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route subsequent moves to `id` until release
    pub fn capture(&mut self, id: WindowId) {
        self.owner = Some(id);
    }

    /// End the capture, returning the window that held it
    pub fn release(&mut self) -> Option<WindowId> {
        self.owner.take()
    }

    /// Drop the capture if `id` holds it
    pub fn release_if(&mut self, id: &WindowId) {
        if self.owner.as_ref() == Some(id) {
            self.owner = None;
        }
    }

    pub fn owner(&self) -> Option<&WindowId> {
        self.owner.as_ref()
    }

    pub fn is_captured(&self) -> bool {
        self.owner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lifecycle() {
        let mut capture = PointerCapture::new();
        assert!(!capture.is_captured());

        capture.capture(WindowId::from("a"));
        assert_eq!(capture.owner(), Some(&WindowId::from("a")));

        capture.release_if(&WindowId::from("b"));
        assert!(capture.is_captured());

        assert_eq!(capture.release(), Some(WindowId::from("a")));
        assert_eq!(capture.release(), None);
    }
}
