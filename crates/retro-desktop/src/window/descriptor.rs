//! Window descriptors
//!
//! A descriptor is the caller-supplied recipe for a window. It is read when
//! the window opens and never changes while the window is alive.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::{Size, Vec2};
use crate::types::WindowId;

/// Description of a window, supplied by the shell that wants to open it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    /// Stable identifier, unique among registered descriptors
    pub id: WindowId,
    /// Title bar and taskbar text
    pub title: String,
    /// Title bar and taskbar icon (URL, data URI or icon name)
    #[serde(default)]
    pub icon: Option<String>,
    /// Initial top-left position
    #[serde(default = "default_position")]
    pub position: Vec2,
    /// Initial size
    #[serde(default = "default_size")]
    pub size: Size,
    /// Whether the resize handles are offered
    #[serde(default = "enabled")]
    pub resizable: bool,
    /// Whether the minimize button is offered
    #[serde(default = "enabled")]
    pub minimizable: bool,
    /// Whether the maximize button (and title bar double-click) is offered
    #[serde(default = "enabled")]
    pub maximizable: bool,
    /// Per-window minimum size; falls back to the configured default
    #[serde(default)]
    pub min_size: Option<Size>,
    /// Opaque content key handed back to the renderer
    #[serde(default)]
    pub content: String,
}

fn default_position() -> Vec2 {
    Vec2::new(50.0, 50.0)
}

fn default_size() -> Size {
    Size::new(400.0, 300.0)
}

fn enabled() -> bool {
    true
}

impl WindowDescriptor {
    /// Create a descriptor with default geometry and every capability enabled
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            position: default_position(),
            size: default_size(),
            resizable: true,
            minimizable: true,
            maximizable: true,
            min_size: None,
            content: String::new(),
        }
    }

    /// Builder: set the initial position
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Builder: set the initial size
    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Builder: set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder: set the content key
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builder: override the minimum size
    pub fn with_min_size(mut self, width: f32, height: f32) -> Self {
        self.min_size = Some(Size::new(width, height));
        self
    }

    /// Builder: disable the resize handles
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }

    /// Builder: disable maximize
    pub fn without_maximize(mut self) -> Self {
        self.maximizable = false;
        self
    }

    /// Builder: disable minimize
    pub fn without_minimize(mut self) -> Self {
        self.minimizable = false;
        self
    }
}

/// Parse a JSON array of descriptors
pub fn catalog_from_json(json: &str) -> DesktopResult<Vec<WindowDescriptor>> {
    Ok(serde_json::from_str(json)?)
}
