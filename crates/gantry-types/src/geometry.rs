//! Integer screen geometry.

use serde::Serialize;

/// Sentinel for a coordinate or size that no layout pass has written yet.
pub const UNSET: i32 = -1;

/// Screen or parent extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Position and size of a widget, in absolute screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// A rect whose four fields are all [`UNSET`].
    pub const UNSET: Self = Self::new(UNSET, UNSET, UNSET, UNSET);

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The rect covering a whole screen of the given size.
    pub const fn screen(size: Size) -> Self {
        Self::new(0, 0, size.w, size.h)
    }

    /// Whether either coordinate still holds the sentinel.
    pub fn has_unset_position(&self) -> bool {
        self.x == UNSET || self.y == UNSET
    }

    /// Whether either extent is smaller than one pixel.
    pub fn is_degenerate(&self) -> bool {
        self.w < 1 || self.h < 1
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::UNSET
    }
}
