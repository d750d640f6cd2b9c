//! Desktop engine
//!
//! Coordinates the pieces of the shell:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    DesktopEngine                     │
//! │  ┌──────────┐ ┌────────────┐ ┌────────────────────┐  │
//! │  │ Catalog  │ │ WindowHost │ │ Window (per open)  │  │
//! │  │ + icons  │ │ order/focus│ │ geometry + gesture │  │
//! │  └──────────┘ └────────────┘ └────────────────────┘  │
//! │  ┌───────────────┐ ┌──────────────────────────────┐  │
//! │  │ PointerCapture│ │ Session + SessionStore       │  │
//! │  └───────────────┘ └──────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Windows only ever emit [`WindowEvent`]s; the engine is the one place
//! those become host mutations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{DesktopConfig, FRAME_STYLE};
use crate::desktop::{DesktopIcon, IconAction};
use crate::error::{DesktopError, DesktopResult};
use crate::host::{TaskbarEntry, WindowHost};
use crate::input::{InputResult, PointerCapture};
use crate::math::{Size, Vec2};
use crate::session::{Session, SessionStore};
use crate::types::WindowId;
use crate::window::{
    catalog_from_json, Window, WindowDescriptor, WindowEvent, WindowRegion, WorkArea,
};

/// Render-ready state of one open window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub title: String,
    pub icon: Option<String>,
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub maximized: bool,
    pub focused: bool,
    pub minimized: bool,
    /// Stacking position, 0 = bottom
    pub z_index: usize,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
}

/// The window manager and login state behind one desktop
pub struct DesktopEngine {
    config: DesktopConfig,
    area: WorkArea,
    catalog: BTreeMap<WindowId, WindowDescriptor>,
    icons: Vec<DesktopIcon>,
    host: WindowHost,
    windows: BTreeMap<WindowId, Window>,
    capture: PointerCapture,
    session: Session,
    store: Box<dyn SessionStore>,
    start_menu_open: bool,
}

impl DesktopEngine {
    /// Create an engine with an empty catalog, logged out
    pub fn new(config: DesktopConfig, store: impl SessionStore + 'static) -> Self {
        let area = WorkArea::new(config.viewport, config.taskbar_height);
        let session = Session::new(config.storage_key.clone());
        Self {
            config,
            area,
            catalog: BTreeMap::new(),
            icons: Vec::new(),
            host: WindowHost::new(),
            windows: BTreeMap::new(),
            capture: PointerCapture::new(),
            session,
            store: Box::new(store),
            start_menu_open: false,
        }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn work_area(&self) -> &WorkArea {
        &self.area
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Add a window to the catalog, replacing any descriptor with the same ID.
    ///
    /// An already-open window keeps the descriptor it was opened with.
    pub fn register(&mut self, descriptor: WindowDescriptor) {
        self.catalog.insert(descriptor.id.clone(), descriptor);
    }

    /// Register every descriptor in a JSON array
    pub fn register_json(&mut self, json: &str) -> DesktopResult<usize> {
        let descriptors = catalog_from_json(json)?;
        let count = descriptors.len();
        for descriptor in descriptors {
            self.register(descriptor);
        }
        Ok(count)
    }

    pub fn descriptor(&self, id: &WindowId) -> Option<&WindowDescriptor> {
        self.catalog.get(id)
    }

    /// Place an icon on the desktop
    pub fn add_icon(&mut self, icon: DesktopIcon) {
        self.icons.push(icon);
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    /// Launch a desktop icon. The start menu closes either way.
    pub fn activate_icon(&mut self, icon_id: &str) -> DesktopResult<()> {
        self.start_menu_open = false;
        let action = self
            .icons
            .iter()
            .find(|icon| icon.id == icon_id)
            .map(|icon| icon.action.clone())
            .ok_or_else(|| DesktopError::IconNotFound(icon_id.to_string()))?;
        match action {
            IconAction::Open(window_id) => self.open_window(&window_id),
            IconAction::Logout => self.logout(),
        }
    }

    // =========================================================================
    // Window lifecycle and focus
    // =========================================================================

    /// Open a catalog window, or bring it to the front if already open.
    ///
    /// An open window is never duplicated and its geometry is never reset.
    pub fn open_window(&mut self, id: &WindowId) -> DesktopResult<()> {
        let Some(descriptor) = self.catalog.get(id) else {
            tracing::warn!(%id, "open requested for unregistered window");
            return Err(DesktopError::WindowNotFound(id.clone()));
        };
        if self.host.open(id.clone()) {
            let window = Window::new(descriptor.clone(), self.config.min_window_size, &self.area);
            self.windows.insert(id.clone(), window);
        }
        Ok(())
    }

    /// Bring a window to the front. Unknown IDs are ignored.
    pub fn activate_window(&mut self, id: &WindowId) {
        self.host.activate(id);
    }

    /// Close a window and discard its geometry. Unknown IDs are ignored.
    pub fn close_window(&mut self, id: &WindowId) {
        if self.host.close(id) {
            self.windows.remove(id);
            self.capture.release_if(id);
        }
    }

    /// Minimize a window that offers minimize
    pub fn minimize_window(&mut self, id: &WindowId) {
        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if !window.descriptor().minimizable {
            return;
        }
        window.pointer_up();
        self.capture.release_if(id);
        self.host.minimize(id);
    }

    /// Maximize or restore a window
    pub fn toggle_maximize(&mut self, id: &WindowId) {
        if let Some(window) = self.windows.get_mut(id) {
            window.toggle_maximize(&self.area);
            self.capture.release_if(id);
        }
    }

    /// Apply a request emitted by a window
    pub fn dispatch(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::ActivateRequested(id) => {
                if !self.host.is_focused(&id) {
                    self.host.activate(&id);
                }
            }
            WindowEvent::CloseRequested(id) => self.close_window(&id),
        }
    }

    /// Taskbar button pressed
    pub fn taskbar_click(&mut self, id: &WindowId) {
        self.host.activate(id);
    }

    // =========================================================================
    // Start menu
    // =========================================================================

    /// Start button pressed
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
        tracing::debug!(open = self.start_menu_open, "start menu toggled");
    }

    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    pub fn is_start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Primary button pressed at `pos` (viewport coordinates).
    ///
    /// Any press on the desktop or its windows dismisses the start menu.
    pub fn pointer_down(&mut self, pos: Vec2) -> InputResult {
        // A press while a gesture is still live means we missed its release
        self.pointer_up();
        self.start_menu_open = false;

        let Some((id, region)) = self.hit_test(pos) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                if let Some(window) = self.windows.get(&id) {
                    let event = window.request_close();
                    self.dispatch(event);
                }
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize_window(&id);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(&id);
                self.dispatch(WindowEvent::ActivateRequested(id));
                InputResult::Handled
            }
            WindowRegion::TitleBar | WindowRegion::Resize(_) => {
                let started = self.windows.get_mut(&id).and_then(|window| match region {
                    WindowRegion::Resize(edge) => window.begin_resize(pos, edge),
                    _ => window.begin_drag(pos),
                });
                let event = match started {
                    Some(event) => {
                        self.capture.capture(id);
                        event
                    }
                    None => WindowEvent::ActivateRequested(id),
                };
                self.dispatch(event);
                InputResult::Handled
            }
            WindowRegion::Content => {
                let local = match self.windows.get(&id) {
                    Some(window) => pos - window.position(),
                    None => return InputResult::Unhandled,
                };
                self.dispatch(WindowEvent::ActivateRequested(id.clone()));
                InputResult::Forward {
                    window_id: id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
        }
    }

    /// Pointer moved to `pos`
    pub fn pointer_move(&mut self, pos: Vec2) -> InputResult {
        let Some(owner) = self.capture.owner() else {
            return InputResult::Unhandled;
        };
        match self.windows.get_mut(owner) {
            Some(window) => {
                window.pointer_move(pos, &self.area);
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Primary button released
    pub fn pointer_up(&mut self) -> InputResult {
        let Some(owner) = self.capture.release() else {
            return InputResult::Unhandled;
        };
        if let Some(window) = self.windows.get_mut(&owner) {
            window.pointer_up();
        }
        InputResult::Handled
    }

    /// Double-click at `pos`; on a title bar this maximizes or restores
    pub fn double_click(&mut self, pos: Vec2) -> InputResult {
        match self.hit_test(pos) {
            Some((id, WindowRegion::TitleBar)) => {
                if let Some(window) = self.windows.get_mut(&id) {
                    window.title_bar_double_click(&self.area);
                }
                InputResult::Handled
            }
            Some((id, WindowRegion::Content)) => match self.windows.get(&id) {
                Some(window) => {
                    let local = pos - window.position();
                    InputResult::Forward {
                        window_id: id,
                        local_x: local.x,
                        local_y: local.y,
                    }
                }
                None => InputResult::Unhandled,
            },
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// True while a window is being dragged or resized
    pub fn is_dragging(&self) -> bool {
        self.capture.is_captured()
    }

    /// Topmost visible window region under `pos`
    fn hit_test(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.host.visible().rev().find_map(|id| {
            self.windows
                .get(id)
                .and_then(|window| window.region_at(pos, &FRAME_STYLE))
                .map(|region| (id.clone(), region))
        })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// The browser viewport changed size
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.area = WorkArea::new(Size::new(width, height), self.config.taskbar_height);
        for window in self.windows.values_mut() {
            window.viewport_resized(&self.area);
        }
        tracing::debug!(width, height, "viewport resized");
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Resume a stored session; returns whether a user was found
    pub fn restore_session(&mut self) -> DesktopResult<bool> {
        self.session.restore(self.store.as_ref())
    }

    pub fn login(&mut self, username: &str) -> DesktopResult<()> {
        self.session.login(self.store.as_ref(), username)
    }

    /// Log out: forget the stored user and close every window
    pub fn logout(&mut self) -> DesktopResult<()> {
        self.session.logout(self.store.as_ref())?;
        self.start_menu_open = false;
        self.capture.release();
        self.host.close_all();
        self.windows.clear();
        Ok(())
    }

    pub fn username(&self) -> Option<&str> {
        self.session.username()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn host(&self) -> &WindowHost {
        &self.host
    }

    pub fn window(&self, id: &WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Open windows, bottom to top, minimized ones included
    pub fn windows_in_z_order(&self) -> Vec<&Window> {
        self.host
            .order()
            .iter()
            .filter_map(|id| self.windows.get(id))
            .collect()
    }

    /// Everything a renderer needs to draw the open windows
    pub fn snapshots(&self) -> Vec<WindowSnapshot> {
        self.windows_in_z_order()
            .into_iter()
            .enumerate()
            .map(|(z_index, window)| {
                let d = window.descriptor();
                let rect = window.rect();
                WindowSnapshot {
                    id: d.id.clone(),
                    title: d.title.clone(),
                    icon: d.icon.clone(),
                    content: d.content.clone(),
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                    maximized: window.is_maximized(),
                    focused: self.host.is_focused(&d.id),
                    minimized: self.host.is_minimized(&d.id),
                    z_index,
                    resizable: d.resizable,
                    minimizable: d.minimizable,
                    maximizable: d.maximizable,
                }
            })
            .collect()
    }

    /// Taskbar buttons, one per open window
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.host
            .taskbar_view(|id| self.windows.get(id).map(Window::descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::window::ResizeEdge;

    fn id(s: &str) -> WindowId {
        WindowId::from(s)
    }

    fn engine() -> DesktopEngine {
        let mut engine = DesktopEngine::new(DesktopConfig::default(), MemoryStore::new());
        engine.register(
            WindowDescriptor::new("trainer", "Vision Trainer")
                .at(100.0, 100.0)
                .sized(300.0, 200.0),
        );
        engine.register(
            WindowDescriptor::new("help", "Help")
                .at(200.0, 150.0)
                .sized(350.0, 250.0),
        );
        engine
    }

    #[test]
    fn test_open_unknown_window_fails() {
        let mut engine = engine();
        assert_eq!(
            engine.open_window(&id("nope")),
            Err(DesktopError::WindowNotFound(id("nope")))
        );
        assert!(engine.host().is_empty());
    }

    #[test]
    fn test_reopen_keeps_geometry() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();

        // Drag by the title bar
        assert_eq!(engine.pointer_down(Vec2::new(150.0, 110.0)), InputResult::Handled);
        engine.pointer_move(Vec2::new(250.0, 160.0));
        engine.pointer_up();
        let moved = engine.window(&id("trainer")).unwrap().position();
        assert_eq!(moved, Vec2::new(200.0, 150.0));

        engine.open_window(&id("help")).unwrap();
        engine.open_window(&id("trainer")).unwrap();
        assert_eq!(engine.host().len(), 2);
        assert_eq!(engine.host().focused(), Some(&id("trainer")));
        assert_eq!(engine.window(&id("trainer")).unwrap().position(), moved);
    }

    #[test]
    fn test_close_discards_geometry() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.toggle_maximize(&id("trainer"));
        engine.close_window(&id("trainer"));
        assert!(engine.window(&id("trainer")).is_none());

        engine.open_window(&id("trainer")).unwrap();
        let window = engine.window(&id("trainer")).unwrap();
        assert!(!window.is_maximized());
        assert_eq!(window.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_press_on_lower_window_activates_it() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.open_window(&id("help")).unwrap();

        // (120, 200) lies inside trainer only
        let result = engine.pointer_down(Vec2::new(120.0, 200.0));
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: id("trainer"),
                local_x: 20.0,
                local_y: 100.0,
            }
        );
        assert_eq!(engine.host().focused(), Some(&id("trainer")));
        assert_eq!(engine.host().order(), &[id("help"), id("trainer")]);
    }

    #[test]
    fn test_resize_through_handle() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();

        // South-east corner of trainer at (400, 300)
        engine.pointer_down(Vec2::new(398.0, 298.0));
        assert!(engine.is_dragging());
        assert!(engine.window(&id("trainer")).unwrap().is_resizing());

        engine.pointer_move(Vec2::new(898.0, 798.0));
        engine.pointer_up();
        assert!(!engine.is_dragging());
        assert_eq!(
            engine.window(&id("trainer")).unwrap().size(),
            Size::new(800.0, 640.0)
        );
    }

    #[test]
    fn test_close_button() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        // Close button spans x 381..397 on a 300-wide frame at x=100
        engine.pointer_down(Vec2::new(390.0, 110.0));
        assert!(engine.host().is_empty());
    }

    #[test]
    fn test_minimize_and_taskbar_restore() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.open_window(&id("help")).unwrap();
        engine.minimize_window(&id("help"));
        assert_eq!(engine.host().focused(), Some(&id("trainer")));

        // Minimized windows don't take hits
        let inside_help_only = Vec2::new(500.0, 350.0);
        assert_eq!(engine.pointer_down(inside_help_only), InputResult::Unhandled);

        engine.taskbar_click(&id("help"));
        assert_eq!(engine.host().focused(), Some(&id("help")));
        assert!(!engine.host().is_minimized(&id("help")));
    }

    #[test]
    fn test_double_click_title_bar_toggles_maximize() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.double_click(Vec2::new(150.0, 110.0));
        assert!(engine.window(&id("trainer")).unwrap().is_maximized());

        engine.resize_viewport(800.0, 600.0);
        assert_eq!(
            engine.window(&id("trainer")).unwrap().size(),
            Size::new(800.0, 572.0)
        );

        engine.double_click(Vec2::new(150.0, 10.0));
        let window = engine.window(&id("trainer")).unwrap();
        assert!(!window.is_maximized());
        assert_eq!(window.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_dispatch_close_request() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        let event = engine.window(&id("trainer")).unwrap().request_close();
        engine.dispatch(event);
        assert!(engine.host().is_empty());
    }

    #[test]
    fn test_closing_captured_window_releases_capture() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.pointer_down(Vec2::new(150.0, 110.0));
        assert!(engine.is_dragging());
        engine.close_window(&id("trainer"));
        assert!(!engine.is_dragging());
        assert_eq!(engine.pointer_move(Vec2::new(10.0, 10.0)), InputResult::Unhandled);
    }

    #[test]
    fn test_taskbar_and_snapshots() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.open_window(&id("help")).unwrap();

        let taskbar = engine.taskbar();
        assert_eq!(taskbar.len(), 2);
        assert_eq!(taskbar[0].title, "Vision Trainer");
        assert!(!taskbar[0].focused);
        assert!(taskbar[1].focused);

        let snapshots = engine.snapshots();
        assert_eq!(snapshots[1].id, id("help"));
        assert_eq!(snapshots[1].z_index, 1);
        assert!(snapshots[1].focused);
    }

    #[test]
    fn test_icons_and_logout() {
        let mut engine = engine();
        engine.add_icon(DesktopIcon::opens("vision-trainer", "Vision Trainer", "trainer"));
        engine.add_icon(DesktopIcon::logout("logout", "Log Off"));

        engine.login("dave").unwrap();
        engine.activate_icon("vision-trainer").unwrap();
        assert!(engine.host().contains(&id("trainer")));

        assert_eq!(
            engine.activate_icon("missing"),
            Err(DesktopError::IconNotFound("missing".to_string()))
        );

        engine.activate_icon("logout").unwrap();
        assert!(!engine.is_logged_in());
        assert!(engine.host().is_empty());
        assert!(engine.window(&id("trainer")).is_none());
    }

    #[test]
    fn test_taskbar_click_keeps_button_order() {
        let mut engine = engine();
        engine.open_window(&id("trainer")).unwrap();
        engine.open_window(&id("help")).unwrap();

        let titles = |engine: &DesktopEngine| {
            engine
                .taskbar()
                .into_iter()
                .map(|entry| entry.title)
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(&engine), vec!["Vision Trainer", "Help"]);

        engine.taskbar_click(&id("trainer"));
        assert_eq!(engine.host().focused(), Some(&id("trainer")));
        assert_eq!(titles(&engine), vec!["Vision Trainer", "Help"]);
        assert!(engine.taskbar()[0].focused);
    }

    #[test]
    fn test_start_menu_toggle_and_dismiss() {
        let mut engine = engine();
        assert!(!engine.is_start_menu_open());
        engine.toggle_start_menu();
        assert!(engine.is_start_menu_open());
        engine.toggle_start_menu();
        assert!(!engine.is_start_menu_open());

        // Empty desktop click
        engine.toggle_start_menu();
        assert_eq!(engine.pointer_down(Vec2::new(900.0, 700.0)), InputResult::Unhandled);
        assert!(!engine.is_start_menu_open());

        // Icon launch, even when it fails
        engine.add_icon(DesktopIcon::opens("vision-trainer", "Vision Trainer", "trainer"));
        engine.toggle_start_menu();
        engine.activate_icon("vision-trainer").unwrap();
        assert!(!engine.is_start_menu_open());
        engine.toggle_start_menu();
        assert!(engine.activate_icon("missing").is_err());
        assert!(!engine.is_start_menu_open());

        // Press on a window
        engine.toggle_start_menu();
        engine.pointer_down(Vec2::new(150.0, 110.0));
        assert!(!engine.is_start_menu_open());

        engine.toggle_start_menu();
        engine.logout().unwrap();
        assert!(!engine.is_start_menu_open());
    }

    #[test]
    fn test_resize_edge_is_ignored_for_fixed_window() {
        let mut engine = engine();
        engine.register(
            WindowDescriptor::new("dialog", "Dialog")
                .at(100.0, 100.0)
                .sized(300.0, 200.0)
                .fixed_size(),
        );
        engine.open_window(&id("dialog")).unwrap();
        let window = engine.window(&id("dialog")).unwrap();
        assert_ne!(
            window.region_at(Vec2::new(398.0, 298.0), &FRAME_STYLE),
            Some(WindowRegion::Resize(ResizeEdge::SE))
        );
    }
}
