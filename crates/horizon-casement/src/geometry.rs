//! Integer geometry in logical pixels.
//!
//! Window frames, content areas and screen regions are all expressed with
//! these types. Coordinates use a top-left origin.
//!
//! Edge and inset arithmetic saturates at the `i32` limits, so callers may
//! pass any rectangle without risking overflow.

use serde::{Deserialize, Serialize};

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in logical pixels.
    pub width: i32,
    /// Height in logical pixels.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A zero size.
    pub const ZERO: Size = Size::new(0, 0);

    /// Returns `true` if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position of the top-left corner.
    pub x: i32,
    /// Y position of the top-left corner.
    pub y: i32,
    /// Width in logical pixels.
    pub width: i32,
    /// Height in logical pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// The top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The x coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check whether a point lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grow (positive) or shrink (negative) the rectangle by the given insets.
    pub fn outset(&self, insets: Insets) -> Self {
        Self::new(
            self.x.saturating_sub(insets.left),
            self.y.saturating_sub(insets.top),
            self.width.saturating_add(insets.width()),
            self.height.saturating_add(insets.height()),
        )
    }

    /// Shrink the rectangle by the given insets.
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.width.saturating_sub(insets.width()),
            self.height.saturating_sub(insets.height()),
        )
    }

    /// Return a rectangle of the same size whose center matches `area`'s center.
    pub fn centered_in(&self, area: Rect) -> Self {
        Self::new(
            area.x.saturating_add(area.width.saturating_sub(self.width) / 2),
            area.y.saturating_add(area.height.saturating_sub(self.height) / 2),
            self.width,
            self.height,
        )
    }
}

/// Edge thicknesses separating a window frame from its content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    /// Top edge thickness.
    pub top: i32,
    /// Left edge thickness.
    pub left: i32,
    /// Bottom edge thickness.
    pub bottom: i32,
    /// Right edge thickness.
    pub right: i32,
}

impl Insets {
    /// Create new insets.
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Zero insets.
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    /// Total horizontal thickness.
    pub fn width(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical thickness.
    pub fn height(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}
