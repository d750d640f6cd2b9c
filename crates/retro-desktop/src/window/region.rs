//! Hit testing of window chrome

use serde::Serialize;

use super::edge::ResizeEdge;
use crate::config::FrameStyle;
use crate::math::{Rect, Vec2};

/// Part of a window frame under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    TitleBar,
    CloseButton,
    MaximizeButton,
    MinimizeButton,
    Content,
    Resize(ResizeEdge),
}

/// Which chrome affordances a frame currently offers
#[derive(Clone, Copy, Debug)]
pub(crate) struct Chrome {
    pub handles: bool,
    pub minimize: bool,
    pub maximize: bool,
}

impl WindowRegion {
    /// Locate `point` within a frame at `rect`.
    ///
    /// Resize handles sit on top of everything else (corners over edges),
    /// then the title bar buttons, then the title bar, then content.
    pub(crate) fn locate(
        rect: Rect,
        chrome: Chrome,
        style: &FrameStyle,
        point: Vec2,
    ) -> Option<WindowRegion> {
        if !rect.contains(point) {
            return None;
        }
        let local = point - rect.position();

        if chrome.handles {
            if let Some(edge) = handle_at(rect, style, local) {
                return Some(WindowRegion::Resize(edge));
            }
        }

        if local.y >= style.title_bar_height {
            return Some(WindowRegion::Content);
        }

        // Buttons are laid out right to left: close, maximize, minimize
        let top = (style.title_bar_height - style.button_height) * 0.5;
        let mut right = rect.width - style.button_margin;
        let mut buttons = vec![WindowRegion::CloseButton];
        if chrome.maximize {
            buttons.push(WindowRegion::MaximizeButton);
        }
        if chrome.minimize {
            buttons.push(WindowRegion::MinimizeButton);
        }
        for button in buttons {
            let left = right - style.button_width;
            if local.x >= left
                && local.x < right
                && local.y >= top
                && local.y < top + style.button_height
            {
                return Some(button);
            }
            right = left - style.button_spacing;
        }

        Some(WindowRegion::TitleBar)
    }
}

fn handle_at(rect: Rect, style: &FrameStyle, local: Vec2) -> Option<ResizeEdge> {
    let c = style.corner_handle_size;
    let near_left = local.x < c;
    let near_right = local.x >= rect.width - c;
    let near_top = local.y < c;
    let near_bottom = local.y >= rect.height - c;

    match (near_top, near_bottom, near_left, near_right) {
        (true, _, true, _) => return Some(ResizeEdge::NW),
        (true, _, _, true) => return Some(ResizeEdge::NE),
        (_, true, true, _) => return Some(ResizeEdge::SW),
        (_, true, _, true) => return Some(ResizeEdge::SE),
        _ => {}
    }

    let e = style.edge_handle_size;
    if local.y < e {
        Some(ResizeEdge::N)
    } else if local.y >= rect.height - e {
        Some(ResizeEdge::S)
    } else if local.x < e {
        Some(ResizeEdge::W)
    } else if local.x >= rect.width - e {
        Some(ResizeEdge::E)
    } else {
        None
    }
}
