use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A piece that has been assigned a position on a [`Sheet`](crate::entities::Sheet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub x: u32,
    pub y: u32,
    /// Width of the footprint on the sheet, after rotation
    pub width: u32,
    /// Height of the footprint on the sheet, after rotation
    pub height: u32,
    pub rotated: bool,
    /// Identity of the [`Part`](crate::entities::Part) this piece was cut for
    pub part_id: usize,
}

impl PlacedPiece {
    /// The area occupied by the piece itself
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The footprint including the cutting clearance on the right and bottom edges
    pub fn kerf_footprint(&self, kerf: u32) -> Rect {
        self.footprint().inflate_trailing(kerf)
    }

    pub fn area(&self) -> u64 {
        self.footprint().area()
    }
}
