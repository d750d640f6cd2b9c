//! Window geometry state machine
//!
//! ```text
//!              begin_drag                      begin_resize
//!   Dragging <──────────── Idle ──────────────────> Resizing
//!      │                  ▲    ▲                        │
//!      └──── end_drag ────┘    └──────── end_resize ────┘
//!            pointer_up                  pointer_up
//! ```
//!
//! Gestures only start from `Idle` in `Normal` mode. Maximizing cancels any
//! gesture. Pointer moves outside a gesture are ignored.

use super::descriptor::WindowDescriptor;
use super::edge::ResizeEdge;
use super::event::WindowEvent;
use super::region::{Chrome, WindowRegion};
use super::work_area::WorkArea;
use crate::config::FrameStyle;
use crate::math::{Rect, Size, Vec2};
use crate::types::WindowId;

/// Display mode of a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowMode {
    /// Free-floating at its own position and size
    Normal,
    /// Filling the work area; `restore` is the geometry to return to
    Maximized { restore: Rect },
}

/// Pointer gesture in progress on a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    /// Title bar drag; `offset` is pointer minus top-left at drag start
    Dragging { offset: Vec2 },
    /// Handle drag; geometry and pointer are snapshotted at resize start
    Resizing {
        edge: ResizeEdge,
        start: Rect,
        pointer: Vec2,
    },
}

/// A single floating window
#[derive(Clone, Debug)]
pub struct Window {
    descriptor: WindowDescriptor,
    min_size: Size,
    position: Vec2,
    size: Size,
    mode: WindowMode,
    gesture: Gesture,
}

impl Window {
    /// Open a window from its descriptor.
    ///
    /// The descriptor's geometry is floored at the minimum size and clamped
    /// into the work area.
    pub fn new(descriptor: WindowDescriptor, default_min_size: Size, area: &WorkArea) -> Self {
        let min_size = descriptor.min_size.unwrap_or(default_min_size);
        let size = descriptor.size.max(min_size);
        let position = area.clamp_position(descriptor.position, size);
        Self {
            descriptor,
            min_size,
            position,
            size,
            mode: WindowMode::Normal,
            gesture: Gesture::Idle,
        }
    }

    pub fn id(&self) -> &WindowId {
        &self.descriptor.id
    }

    pub fn descriptor(&self) -> &WindowDescriptor {
        &self.descriptor
    }

    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.descriptor.icon.as_deref()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self.mode, WindowMode::Maximized { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    /// Geometry to restore to, present only while maximized
    pub fn saved_rect(&self) -> Option<Rect> {
        match self.mode {
            WindowMode::Maximized { restore } => Some(restore),
            WindowMode::Normal => None,
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start moving the window from a title bar press at `pointer`.
    ///
    /// Returns an activation request when the drag starts.
    pub fn begin_drag(&mut self, pointer: Vec2) -> Option<WindowEvent> {
        if self.is_maximized() || self.gesture != Gesture::Idle {
            return None;
        }
        self.gesture = Gesture::Dragging {
            offset: pointer - self.position,
        };
        tracing::trace!(id = %self.id(), "drag started");
        Some(self.request_activate())
    }

    /// Start resizing from `edge` with the pointer at `pointer`.
    ///
    /// Returns an activation request when the resize starts.
    pub fn begin_resize(&mut self, pointer: Vec2, edge: ResizeEdge) -> Option<WindowEvent> {
        if self.is_maximized() || !self.descriptor.resizable || self.gesture != Gesture::Idle {
            return None;
        }
        self.gesture = Gesture::Resizing {
            edge,
            start: self.rect(),
            pointer,
        };
        tracing::trace!(id = %self.id(), edge = edge.tag(), "resize started");
        Some(self.request_activate())
    }

    /// Track the pointer during a drag or resize.
    ///
    /// Resizing keeps the edge opposite the handle in place. A window left
    /// overhanging by a viewport shrink is the exception: the final
    /// position clamp pulls it back inside, anchored edge included.
    pub fn pointer_move(&mut self, pointer: Vec2, area: &WorkArea) {
        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { offset } => {
                self.position = area.clamp_position(pointer - offset, self.size);
            }
            Gesture::Resizing {
                edge,
                start,
                pointer: origin,
            } => {
                let delta = pointer - origin;
                let rule = edge.rule();
                let (x, width) = rule.horizontal.apply(
                    start.x,
                    start.width,
                    delta.x,
                    self.min_size.width,
                    area.width(),
                );
                let (y, height) = rule.vertical.apply(
                    start.y,
                    start.height,
                    delta.y,
                    self.min_size.height,
                    area.height(),
                );
                self.size = Size::new(width, height);
                self.position = area.clamp_position(Vec2::new(x, y), self.size);
            }
        }
    }

    /// Finish a drag. Does nothing when not dragging.
    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            self.gesture = Gesture::Idle;
            tracing::trace!(id = %self.id(), "drag ended");
        }
    }

    /// Finish a resize. Does nothing when not resizing.
    pub fn end_resize(&mut self) {
        if self.is_resizing() {
            self.gesture = Gesture::Idle;
            tracing::trace!(id = %self.id(), "resize ended");
        }
    }

    /// Pointer released: whatever gesture is active ends, keeping the
    /// geometry computed so far.
    pub fn pointer_up(&mut self) {
        self.end_drag();
        self.end_resize();
    }

    // =========================================================================
    // Maximize / viewport
    // =========================================================================

    /// Maximize, or restore when already maximized.
    ///
    /// Ignored for windows that don't offer maximize.
    pub fn toggle_maximize(&mut self, area: &WorkArea) {
        if !self.descriptor.maximizable {
            return;
        }
        self.gesture = Gesture::Idle;
        match self.mode {
            WindowMode::Normal => {
                self.mode = WindowMode::Maximized {
                    restore: self.rect(),
                };
                self.fill(area);
                tracing::debug!(id = %self.id(), "maximized");
            }
            WindowMode::Maximized { restore } => {
                self.position = restore.position();
                self.size = restore.size();
                self.mode = WindowMode::Normal;
                tracing::debug!(id = %self.id(), "restored");
            }
        }
    }

    /// Title bar double-click
    pub fn title_bar_double_click(&mut self, area: &WorkArea) {
        self.toggle_maximize(area);
    }

    /// The viewport changed size.
    ///
    /// Maximized windows refill the new work area. Normal windows keep
    /// their geometry even if they now overhang; the next gesture clamps.
    pub fn viewport_resized(&mut self, area: &WorkArea) {
        if self.is_maximized() {
            self.fill(area);
        }
    }

    fn fill(&mut self, area: &WorkArea) {
        let rect = area.maximized_rect();
        self.position = rect.position();
        self.size = rect.size().max(self.min_size);
    }

    // =========================================================================
    // Host requests
    // =========================================================================

    /// Ask the host to close this window. There is no veto.
    pub fn request_close(&self) -> WindowEvent {
        WindowEvent::CloseRequested(self.id().clone())
    }

    /// Ask the host to bring this window to the front
    pub fn request_activate(&self) -> WindowEvent {
        WindowEvent::ActivateRequested(self.id().clone())
    }

    /// Which part of the frame, if any, lies under `point`
    pub fn region_at(&self, point: Vec2, style: &FrameStyle) -> Option<WindowRegion> {
        let chrome = Chrome {
            handles: self.descriptor.resizable && !self.is_maximized(),
            minimize: self.descriptor.minimizable,
            maximize: self.descriptor.maximizable,
        };
        WindowRegion::locate(self.rect(), chrome, style, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRAME_STYLE;

    const MIN: Size = Size::new(200.0, 150.0);

    fn area() -> WorkArea {
        WorkArea::new(Size::new(1024.0, 768.0), 28.0)
    }

    fn window() -> Window {
        let descriptor = WindowDescriptor::new("trainer", "Vision Trainer")
            .at(100.0, 100.0)
            .sized(300.0, 200.0);
        Window::new(descriptor, MIN, &area())
    }

    #[test]
    fn test_new_clamps_descriptor_geometry() {
        let descriptor = WindowDescriptor::new("big", "Big")
            .at(900.0, 700.0)
            .sized(100.0, 80.0);
        let w = Window::new(descriptor, MIN, &area());
        assert_eq!(w.size(), MIN);
        assert_eq!(w.position(), Vec2::new(824.0, 590.0));
    }

    #[test]
    fn test_descriptor_min_size_overrides_default() {
        let descriptor = WindowDescriptor::new("tiny", "Tiny")
            .sized(100.0, 80.0)
            .with_min_size(150.0, 100.0);
        let w = Window::new(descriptor, MIN, &area());
        assert_eq!(w.size(), Size::new(150.0, 100.0));
    }

    #[test]
    fn test_drag_clamps_to_right_edge() {
        let mut w = window();
        let event = w.begin_drag(Vec2::new(150.0, 150.0));
        assert_eq!(event, Some(WindowEvent::ActivateRequested("trainer".into())));
        assert!(w.is_dragging());

        w.pointer_move(Vec2::new(2000.0, 150.0), &area());
        assert_eq!(w.position(), Vec2::new(724.0, 100.0));

        w.end_drag();
        assert_eq!(w.gesture(), Gesture::Idle);
        w.end_drag();
        assert_eq!(w.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_drag_keeps_clear_of_taskbar() {
        let mut w = window();
        w.begin_drag(Vec2::new(150.0, 150.0));
        w.pointer_move(Vec2::new(150.0, 5000.0), &area());
        assert_eq!(w.position().y, 768.0 - 200.0 - 28.0);
        w.pointer_move(Vec2::new(-500.0, -500.0), &area());
        assert_eq!(w.position(), Vec2::ZERO);
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut w = window();
        w.pointer_move(Vec2::new(500.0, 500.0), &area());
        assert_eq!(w.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_resize_se_caps_at_work_area() {
        let mut w = window();
        w.begin_resize(Vec2::new(400.0, 300.0), ResizeEdge::SE);
        w.pointer_move(Vec2::new(900.0, 800.0), &area());

        assert_eq!(w.position(), Vec2::new(100.0, 100.0));
        assert_eq!(w.size(), Size::new(800.0, 640.0));
        assert!(w.rect().right() <= 1024.0);
        assert!(w.rect().bottom() <= 740.0);
    }

    #[test]
    fn test_resize_west_keeps_east_edge() {
        let mut w = window();
        w.begin_resize(Vec2::new(100.0, 200.0), ResizeEdge::W);
        w.pointer_move(Vec2::new(60.0, 200.0), &area());
        assert_eq!(w.position().x, 60.0);
        assert_eq!(w.size().width, 340.0);

        // Past the minimum: width floors, east edge holds at 400
        w.pointer_move(Vec2::new(390.0, 200.0), &area());
        assert_eq!(w.size().width, 200.0);
        assert_eq!(w.rect().right(), 400.0);
    }

    #[test]
    fn test_resize_north_keeps_bottom_edge() {
        let mut w = window();
        w.begin_resize(Vec2::new(200.0, 100.0), ResizeEdge::N);
        w.pointer_move(Vec2::new(200.0, 1000.0), &area());
        assert_eq!(w.size().height, 150.0);
        assert_eq!(w.rect().bottom(), 300.0);
        assert_eq!(w.size().width, 300.0);
    }

    #[test]
    fn test_resize_of_overhanging_window_is_pulled_inside() {
        let descriptor = WindowDescriptor::new("wide", "Wide")
            .at(600.0, 100.0)
            .sized(300.0, 200.0);
        let mut w = Window::new(descriptor, MIN, &area());
        let small = WorkArea::new(Size::new(800.0, 600.0), 28.0);
        w.viewport_resized(&small);
        assert_eq!(w.rect().right(), 900.0);

        w.begin_resize(Vec2::new(600.0, 200.0), ResizeEdge::W);
        w.pointer_move(Vec2::new(580.0, 200.0), &small);
        assert_eq!(w.size(), Size::new(320.0, 200.0));
        assert_eq!(w.position(), Vec2::new(480.0, 100.0));
        assert_eq!(w.rect().right(), 800.0);
    }

    #[test]
    fn test_resize_rejected_when_not_resizable() {
        let descriptor = WindowDescriptor::new("fixed", "Fixed")
            .at(100.0, 100.0)
            .sized(300.0, 200.0)
            .fixed_size();
        let mut w = Window::new(descriptor, MIN, &area());
        assert_eq!(w.begin_resize(Vec2::new(400.0, 300.0), ResizeEdge::SE), None);
        assert_eq!(w.gesture(), Gesture::Idle);
        assert_eq!(w.region_at(Vec2::new(399.0, 299.0), &FRAME_STYLE), Some(WindowRegion::Content));
    }

    #[test]
    fn test_gestures_do_not_nest() {
        let mut w = window();
        w.begin_resize(Vec2::new(400.0, 300.0), ResizeEdge::E);
        assert_eq!(w.begin_drag(Vec2::new(150.0, 110.0)), None);
        assert!(w.is_resizing());

        // end_drag must not cancel the resize
        w.end_drag();
        assert!(w.is_resizing());
        w.pointer_up();
        assert_eq!(w.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_maximize_and_restore() {
        let mut w = window();
        w.toggle_maximize(&area());
        assert!(w.is_maximized());
        assert_eq!(w.rect(), Rect::new(0.0, 0.0, 1024.0, 740.0));
        assert_eq!(w.saved_rect(), Some(Rect::new(100.0, 100.0, 300.0, 200.0)));

        // No gestures while maximized
        assert_eq!(w.begin_drag(Vec2::new(10.0, 10.0)), None);
        assert_eq!(w.begin_resize(Vec2::new(10.0, 10.0), ResizeEdge::SE), None);

        w.title_bar_double_click(&area());
        assert!(!w.is_maximized());
        assert_eq!(w.saved_rect(), None);
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 300.0, 200.0));
    }

    #[test]
    fn test_maximize_ignored_when_not_offered() {
        let descriptor = WindowDescriptor::new("dialog", "Dialog").without_maximize();
        let mut w = Window::new(descriptor, MIN, &area());
        let before = w.rect();
        w.toggle_maximize(&area());
        assert!(!w.is_maximized());
        assert_eq!(w.rect(), before);
    }

    #[test]
    fn test_maximize_cancels_gesture() {
        let mut w = window();
        w.begin_drag(Vec2::new(150.0, 110.0));
        w.toggle_maximize(&area());
        assert_eq!(w.gesture(), Gesture::Idle);
    }

    #[test]
    fn test_viewport_resize() {
        let mut w = window();
        let small = WorkArea::new(Size::new(800.0, 600.0), 28.0);

        // Normal windows are left alone
        w.viewport_resized(&small);
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 300.0, 200.0));

        w.toggle_maximize(&area());
        w.viewport_resized(&small);
        assert_eq!(w.rect(), Rect::new(0.0, 0.0, 800.0, 572.0));

        w.toggle_maximize(&small);
        assert_eq!(w.rect(), Rect::new(100.0, 100.0, 300.0, 200.0));
    }

    #[test]
    fn test_requests() {
        let w = window();
        assert_eq!(w.request_close(), WindowEvent::CloseRequested("trainer".into()));
        assert_eq!(
            w.request_activate(),
            WindowEvent::ActivateRequested("trainer".into())
        );
    }

    #[test]
    fn test_no_handles_while_maximized() {
        let mut w = window();
        w.toggle_maximize(&area());
        // Bottom-right corner of the maximized frame is content, not a handle
        assert_eq!(
            w.region_at(Vec2::new(1023.0, 739.0), &FRAME_STYLE),
            Some(WindowRegion::Content)
        );
    }
}
