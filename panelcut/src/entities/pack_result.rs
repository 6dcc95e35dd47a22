use crate::entities::{PieceInstance, Sheet};

/// Outcome of a packing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackResult {
    /// Sheets which received at least one piece, in the order they were opened
    pub sheets: Vec<Sheet>,
    /// Pieces that could not be placed, not even on an empty sheet
    pub unplaced: Vec<PieceInstance>,
}

impl PackResult {
    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn n_placed(&self) -> usize {
        self.sheets.iter().map(|s| s.placed_pieces().len()).sum()
    }

    /// True if every requested piece was placed
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn total_used_area(&self) -> u64 {
        self.sheets.iter().map(|s| s.used_area()).sum()
    }

    pub fn total_sheet_area(&self) -> u64 {
        self.sheets.iter().map(|s| s.area()).sum()
    }

    /// Percentage of the area of all used sheets covered by pieces.
    /// Zero if no sheet was used.
    pub fn total_efficiency(&self) -> f64 {
        match self.total_sheet_area() {
            0 => 0.0,
            sheet_area => self.total_used_area() as f64 / sheet_area as f64 * 100.0,
        }
    }

    pub fn total_cuts(&self) -> usize {
        self.sheets.iter().map(|s| s.cutting_count()).sum()
    }

    pub fn total_distinct_cut_lines(&self) -> usize {
        self.sheets.iter().map(|s| s.distinct_cut_lines()).sum()
    }

    /// Number of pieces of the given part that were placed
    pub fn placed_qty(&self, part_id: usize) -> usize {
        self.sheets
            .iter()
            .flat_map(|s| s.placed_pieces())
            .filter(|p| p.part_id == part_id)
            .count()
    }

    /// Number of pieces of the given part that could not be placed
    pub fn unplaced_qty(&self, part_id: usize) -> usize {
        self.unplaced.iter().filter(|p| p.part_id == part_id).count()
    }
}
