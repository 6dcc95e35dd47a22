use crate::entities::{PackResult, Part};
use crate::packing;

/// A validated cutting job: the usable sheet area, the kerf and the ordered list of parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    /// Usable sheet width, after any edge trim
    pub sheet_width: u32,
    /// Usable sheet height, after any edge trim
    pub sheet_height: u32,
    pub kerf: u32,
    pub parts: Vec<Part>,
}

impl Job {
    /// Packs all parts of the job onto as many sheets as needed.
    pub fn pack(&self) -> PackResult {
        packing::pack(self.sheet_width, self.sheet_height, self.kerf, &self.parts)
    }

    pub fn part(&self, id: usize) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Total number of pieces requested across all parts
    pub fn total_part_qty(&self) -> usize {
        self.parts.iter().map(|p| p.quantity).sum()
    }

    pub fn total_part_area(&self) -> u64 {
        self.parts.iter().map(|p| p.area() * p.quantity as u64).sum()
    }
}
