//! Resize handles
//!
//! Each of the eight handles is described by an [`EdgeRule`]: how the
//! horizontal and vertical extents react to pointer movement. The resize
//! math is written once per axis in [`EdgeMotion::apply`] instead of once
//! per handle.

use serde::{Deserialize, Serialize};

/// One of the eight resize handles around a window frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeEdge {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

/// How one axis of the window responds to a resize drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMotion {
    /// Axis is untouched
    Fixed,
    /// Near edge (left/top) follows the pointer; far edge stays put
    Leading,
    /// Far edge (right/bottom) follows the pointer; near edge stays put
    Trailing,
}

/// Per-axis behavior of a resize handle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRule {
    pub horizontal: EdgeMotion,
    pub vertical: EdgeMotion,
}

impl ResizeEdge {
    /// All handles
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::N,
        ResizeEdge::S,
        ResizeEdge::E,
        ResizeEdge::W,
        ResizeEdge::NE,
        ResizeEdge::NW,
        ResizeEdge::SE,
        ResizeEdge::SW,
    ];

    /// Axis behavior for this handle
    pub fn rule(self) -> EdgeRule {
        use EdgeMotion::{Fixed, Leading, Trailing};

        let (horizontal, vertical) = match self {
            ResizeEdge::N => (Fixed, Leading),
            ResizeEdge::S => (Fixed, Trailing),
            ResizeEdge::E => (Trailing, Fixed),
            ResizeEdge::W => (Leading, Fixed),
            ResizeEdge::NE => (Trailing, Leading),
            ResizeEdge::NW => (Leading, Leading),
            ResizeEdge::SE => (Trailing, Trailing),
            ResizeEdge::SW => (Leading, Trailing),
        };
        EdgeRule {
            horizontal,
            vertical,
        }
    }

    /// Parse a handle tag as sent by the renderer ("n", "se", ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "n" => Some(ResizeEdge::N),
            "s" => Some(ResizeEdge::S),
            "e" => Some(ResizeEdge::E),
            "w" => Some(ResizeEdge::W),
            "ne" => Some(ResizeEdge::NE),
            "nw" => Some(ResizeEdge::NW),
            "se" => Some(ResizeEdge::SE),
            "sw" => Some(ResizeEdge::SW),
            _ => None,
        }
    }

    /// Handle tag, the inverse of [`ResizeEdge::from_tag`]
    pub fn tag(self) -> &'static str {
        match self {
            ResizeEdge::N => "n",
            ResizeEdge::S => "s",
            ResizeEdge::E => "e",
            ResizeEdge::W => "w",
            ResizeEdge::NE => "ne",
            ResizeEdge::NW => "nw",
            ResizeEdge::SE => "se",
            ResizeEdge::SW => "sw",
        }
    }
}

impl EdgeMotion {
    /// Resolve one axis of a resize.
    ///
    /// Takes the extent at gesture start (`start_pos`, `start_len`), the
    /// pointer travel along this axis, the minimum length and the work-area
    /// extent. Returns the new `(pos, len)`.
    ///
    /// Growth is capped by the room between the anchored edge and the
    /// work-area boundary, and the result is floored at `min_len`. The
    /// moving edge is derived from the clamped length, so the anchored edge
    /// stays where it was as long as it started inside the work area.
    pub fn apply(
        self,
        start_pos: f32,
        start_len: f32,
        delta: f32,
        min_len: f32,
        limit: f32,
    ) -> (f32, f32) {
        match self {
            EdgeMotion::Fixed => (start_pos, start_len),
            EdgeMotion::Trailing => {
                let room = (limit - start_pos).max(start_len);
                let len = (start_len + delta).min(room).max(min_len);
                (start_pos, len)
            }
            EdgeMotion::Leading => {
                let far_edge = start_pos + start_len;
                let room = far_edge.max(start_len);
                let len = (start_len - delta).min(room).max(min_len);
                (far_edge - len, len)
            }
        }
    }
}
