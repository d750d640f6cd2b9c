//! Work area: the viewport net of the taskbar reservation

use crate::math::{Rect, Size, Vec2};

/// The region windows live in
///
/// The viewport belongs to the embedding page; the work area is the part
/// of it above the taskbar strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkArea {
    viewport: Size,
    taskbar_height: f32,
}

impl WorkArea {
    /// Create a work area for a viewport with a taskbar of the given height
    pub fn new(viewport: Size, taskbar_height: f32) -> Self {
        Self {
            viewport,
            taskbar_height,
        }
    }

    /// Full viewport size, taskbar included
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Height of the taskbar reservation
    pub fn taskbar_height(&self) -> f32 {
        self.taskbar_height
    }

    /// Usable width
    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    /// Usable height (viewport minus taskbar)
    pub fn height(&self) -> f32 {
        (self.viewport.height - self.taskbar_height).max(0.0)
    }

    /// Largest top-left position that keeps a window of `size` inside
    pub fn max_position(&self, size: Size) -> Vec2 {
        Vec2::new(self.width() - size.width, self.height() - size.height)
    }

    /// Clamp a top-left position so the whole window stays inside.
    ///
    /// A window larger than the work area is pinned to the origin.
    pub fn clamp_position(&self, position: Vec2, size: Size) -> Vec2 {
        let max = self.max_position(size);
        Vec2::new(
            position.x.min(max.x).max(0.0),
            position.y.min(max.y).max(0.0),
        )
    }

    /// Rectangle a maximized window occupies
    pub fn maximized_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> WorkArea {
        WorkArea::new(Size::new(1024.0, 768.0), 28.0)
    }

    #[test]
    fn test_clamp_position() {
        let size = Size::new(300.0, 200.0);
        assert_eq!(
            area().clamp_position(Vec2::new(1850.0, 100.0), size),
            Vec2::new(724.0, 100.0)
        );
        assert_eq!(
            area().clamp_position(Vec2::new(-40.0, 900.0), size),
            Vec2::new(0.0, 540.0)
        );
    }

    #[test]
    fn test_oversized_window_pins_to_origin() {
        let size = Size::new(2000.0, 2000.0);
        assert_eq!(
            area().clamp_position(Vec2::new(50.0, 50.0), size),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_maximized_rect_excludes_taskbar() {
        assert_eq!(area().maximized_rect(), Rect::new(0.0, 0.0, 1024.0, 740.0));
    }
}
