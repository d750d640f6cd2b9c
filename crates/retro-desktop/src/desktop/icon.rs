//! Desktop icons and what launching them does.

use serde::{Deserialize, Serialize};

use crate::types::WindowId;

/// What a desktop icon does when launched
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "window", rename_all = "snake_case")]
pub enum IconAction {
    /// Open (or bring forward) a window from the catalog
    Open(WindowId),
    /// End the session
    Logout,
}

/// An icon on the desktop background
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopIcon {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub action: IconAction,
}

impl DesktopIcon {
    /// Icon that opens `window`
    pub fn opens(id: impl Into<String>, label: impl Into<String>, window: impl Into<WindowId>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            action: IconAction::Open(window.into()),
        }
    }

    /// Icon that logs out
    pub fn logout(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            action: IconAction::Logout,
        }
    }

    /// Builder: set the image
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
