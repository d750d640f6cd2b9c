//! Shell configuration
//!
//! [`DesktopConfig`] carries the few tunables the window manager needs.
//! It deserializes from JSON with every field optional, so a host page can
//! override only what it cares about.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::Size;

/// Height of the taskbar strip reserved at the bottom of the viewport.
///
/// Windows may not be dragged into this strip, and a maximized window
/// stops at its top edge.
pub const TASKBAR_HEIGHT: f32 = 28.0;

/// Smallest size a window can be resized down to, unless its descriptor
/// asks for a different minimum.
pub const DEFAULT_MIN_WINDOW_SIZE: Size = Size::new(200.0, 150.0);

/// Local storage key holding the logged-in username.
pub const DEFAULT_STORAGE_KEY: &str = "win98_username";

/// Window manager configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Pixels reserved for the taskbar at the bottom of the viewport
    pub taskbar_height: f32,
    /// Minimum window size applied when a descriptor doesn't set its own
    pub min_window_size: Size,
    /// Storage key for the persisted username
    pub storage_key: String,
    /// Viewport size assumed until the first resize notification
    pub viewport: Size,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: TASKBAR_HEIGHT,
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            viewport: Size::new(1024.0, 768.0),
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builder: set the initial viewport size
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Size::new(width, height);
        self
    }
}

/// Window chrome metrics used for hit testing
pub struct FrameStyle {
    /// Height of the title bar; everything below it is content
    pub title_bar_height: f32,
    /// Thickness of the edge resize handles
    pub edge_handle_size: f32,
    /// Side of the square corner resize handles
    pub corner_handle_size: f32,
    /// Title bar button width
    pub button_width: f32,
    /// Title bar button height, centered vertically in the title bar
    pub button_height: f32,
    /// Gap between adjacent title bar buttons
    pub button_spacing: f32,
    /// Gap between the close button and the right edge of the frame
    pub button_margin: f32,
}

/// Default frame style, matching the classic 98-style chrome
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 22.0,
    edge_handle_size: 4.0,
    corner_handle_size: 8.0,
    button_width: 16.0,
    button_height: 14.0,
    button_spacing: 2.0,
    button_margin: 3.0,
};
