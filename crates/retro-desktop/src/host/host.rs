//! Stacking order, focus and minimize state of open windows.

use std::collections::BTreeSet;

use super::taskbar::TaskbarEntry;
use crate::types::WindowId;
use crate::window::WindowDescriptor;

/// Open set, z-order and focus
///
/// `order` runs bottom to top and holds each ID at most once. The focused
/// window, when there is one, is the topmost window that isn't minimized.
/// `launched` holds the same IDs in the order they were opened; activation
/// never reorders it.
#[derive(Clone, Debug, Default)]
pub struct WindowHost {
    order: Vec<WindowId>,
    launched: Vec<WindowId>,
    focused: Option<WindowId>,
    minimized: BTreeSet<WindowId>,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id`, or bring it to the front if it is already open.
    ///
    /// Returns `true` when a new entry was created. An already-open window
    /// keeps its entry (and its geometry) and is only activated.
    pub fn open(&mut self, id: WindowId) -> bool {
        if self.contains(&id) {
            self.activate(&id);
            return false;
        }
        tracing::debug!(%id, "window opened");
        self.order.push(id.clone());
        self.launched.push(id.clone());
        self.focused = Some(id);
        true
    }

    /// Move `id` to the top and focus it. Unknown IDs are ignored.
    ///
    /// Activating a minimized window restores it.
    pub fn activate(&mut self, id: &WindowId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let id = self.order.remove(index);
        self.minimized.remove(&id);
        self.order.push(id.clone());
        tracing::debug!(%id, "window activated");
        self.focused = Some(id);
    }

    /// Remove `id` from the open set.
    ///
    /// If it had focus, focus passes to the topmost remaining window that
    /// isn't minimized, or to nobody. Returns `true` if the window was open.
    pub fn close(&mut self, id: &WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.order.remove(index);
        self.launched.retain(|open| open != id);
        self.minimized.remove(id);
        if self.focused.as_ref() == Some(id) {
            self.focused = self.topmost_visible().cloned();
        }
        tracing::debug!(%id, focused = ?self.focused, "window closed");
        true
    }

    /// Hide `id` to the taskbar.
    ///
    /// If it had focus, focus passes as in [`WindowHost::close`].
    pub fn minimize(&mut self, id: &WindowId) {
        if !self.contains(id) || !self.minimized.insert(id.clone()) {
            return;
        }
        if self.focused.as_ref() == Some(id) {
            self.focused = self.topmost_visible().cloned();
        }
        tracing::debug!(%id, focused = ?self.focused, "window minimized");
    }

    /// Close every window
    pub fn close_all(&mut self) {
        self.order.clear();
        self.launched.clear();
        self.minimized.clear();
        self.focused = None;
    }

    /// Open windows, bottom to top
    pub fn order(&self) -> &[WindowId] {
        &self.order
    }

    /// Open windows in the order they were opened
    pub fn launch_order(&self) -> &[WindowId] {
        &self.launched
    }

    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, id: &WindowId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.order.contains(id)
    }

    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.minimized.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Highest window in the stack that isn't minimized
    pub fn topmost_visible(&self) -> Option<&WindowId> {
        self.order.iter().rev().find(|id| !self.minimized.contains(*id))
    }

    /// Windows that are drawn, bottom to top
    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &WindowId> {
        self.order
            .iter()
            .filter(move |id| !self.minimized.contains(*id))
    }

    /// One taskbar entry per open window, in launch order.
    ///
    /// Buttons keep their place when focus changes. `describe` supplies
    /// title and icon; windows it doesn't know are labelled with their ID.
    pub fn taskbar_view<'a, F>(&self, describe: F) -> Vec<TaskbarEntry>
    where
        F: Fn(&WindowId) -> Option<&'a WindowDescriptor>,
    {
        self.launched
            .iter()
            .map(|id| {
                let descriptor = describe(id);
                TaskbarEntry {
                    id: id.clone(),
                    title: descriptor
                        .map(|d| d.title.clone())
                        .unwrap_or_else(|| id.to_string()),
                    icon: descriptor.and_then(|d| d.icon.clone()),
                    focused: self.is_focused(id),
                    minimized: self.is_minimized(id),
                }
            })
            .collect()
    }

    fn index_of(&self, id: &WindowId) -> Option<usize> {
        self.order.iter().position(|open| open == id)
    }
}
