//! Signed geometry primitives for widget layout
//!
//! Layout math runs in `i32` so that items scrolled above or below the
//! viewport still have representable coordinates. Conversion to ratatui's
//! unsigned `Rect` happens only at the renderer boundary.

use ratatui::layout::{Position, Rect};
use serde::{Deserialize, Serialize};

/// A point in widget space (x = column, y = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<Position> for Point {
    fn from(pos: Position) -> Self {
        Self::new(i32::from(pos.x), i32::from(pos.y))
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether a point lies inside the rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Overlapping area of two rectangles, empty (zero-sized) when disjoint
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return Rectangle::new(left, top, 0, 0);
        }
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// Shrink by the given insets, never producing a negative size
    pub fn shrink(&self, insets: Thickness) -> Rectangle {
        Rectangle::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal()).max(0),
            (self.height - insets.vertical()).max(0),
        )
    }

    /// Convert to a ratatui `Rect`, clamping to the non-negative `u16` range.
    ///
    /// Returns `None` when nothing of the rectangle is on the positive quadrant.
    pub fn to_rect(&self) -> Option<Rect> {
        let positive = self.intersection(&Rectangle::new(
            0,
            0,
            i32::from(u16::MAX),
            i32::from(u16::MAX),
        ));
        if positive.is_empty() {
            return None;
        }
        Some(Rect::new(
            clamp_u16(positive.x),
            clamp_u16(positive.y),
            clamp_u16(positive.width),
            clamp_u16(positive.height),
        ))
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        Self::new(
            i32::from(rect.x),
            i32::from(rect.y),
            i32::from(rect.width),
            i32::from(rect.height),
        )
    }
}

fn clamp_u16(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// Insets on the four sides of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Thickness {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
}

impl Thickness {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every side
    pub const fn uniform(all: i32) -> Self {
        Self::new(all, all, all, all)
    }

    /// `horizontal` on left/right, `vertical` on top/bottom
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
