use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle with integer coordinates (millimeters).
/// `(x, y)` is the corner closest to the sheet origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn try_new(x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "invalid rectangle, x: {x}, y: {y}, width: {width}, height: {height}"
        );
        Ok(Rect::new(x, y, width, height))
    }

    pub fn x_max(&self) -> u32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True if `self` can hold a `width` x `height` rectangle at its origin.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.width >= width && self.height >= height
    }

    /// True if the interiors of both rectangles overlap.
    /// Rectangles that only share an edge or a corner do not collide.
    pub fn collides_with(&self, other: &Rect) -> bool {
        u32::max(self.x, other.x) < u32::min(self.x_max(), other.x_max())
            && u32::max(self.y, other.y) < u32::min(self.y_max(), other.y_max())
    }

    /// True if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x_max() >= other.x_max()
            && self.y_max() >= other.y_max()
    }

    /// Returns a copy grown by `margin` on the trailing (right and bottom) edges.
    pub fn inflate_trailing(self, margin: u32) -> Self {
        Rect {
            width: self.width + margin,
            height: self.height + margin,
            ..self
        }
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x = u32::max(a.x, b.x);
        let y = u32::max(a.y, b.y);
        let x_max = u32::min(a.x_max(), b.x_max());
        let y_max = u32::min(a.y_max(), b.y_max());
        if x < x_max && y < y_max {
            Some(Rect::new(x, y, x_max - x, y_max - y))
        } else {
            None
        }
    }
}
