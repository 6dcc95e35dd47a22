use crate::entities::{FreeRegionStore, PieceInstance, PlacedPiece};
use crate::geometry::Rect;
use crate::packing::{CutLine, select, split};
use crate::util::assertions;
use log::trace;
use std::collections::BTreeSet;

/// One piece of stock material, with the pieces placed on it so far.
///
/// The dimensions are those of the usable area: any margin trimmed off the board
/// is expected to be subtracted before the sheet is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    pub width: u32,
    pub height: u32,
    /// Cutting clearance reserved on the trailing edges of every placed piece
    pub kerf: u32,
    free_regions: FreeRegionStore,
    placed_pieces: Vec<PlacedPiece>,
    cutting_count: usize,
    cut_lines: BTreeSet<CutLine>,
}

impl Sheet {
    pub fn new(width: u32, height: u32, kerf: u32) -> Self {
        Sheet {
            width,
            height,
            kerf,
            free_regions: FreeRegionStore::new(width, height),
            placed_pieces: vec![],
            cutting_count: 0,
            cut_lines: BTreeSet::new(),
        }
    }

    /// Tries to place the piece in the best free region of this sheet.
    /// Returns the placement on success, `None` if the piece fits nowhere in either allowed orientation.
    pub fn insert(&mut self, piece: &PieceInstance) -> Option<PlacedPiece> {
        let selection = select(&self.free_regions, piece, self.kerf)?;

        let placed = PlacedPiece {
            x: selection.x,
            y: selection.y,
            width: selection.width,
            height: selection.height,
            rotated: selection.rotated,
            part_id: piece.part_id,
        };

        let cuts = split(
            &mut self.free_regions,
            selection.region_idx,
            placed.width + self.kerf,
            placed.height + self.kerf,
        );
        trace!(
            "[SHEET] split region {} into {} fragment(s), {} free region(s) left",
            selection.region_idx,
            cuts.len(),
            self.free_regions.len()
        );

        self.cutting_count += cuts.len();
        self.cut_lines.extend(cuts);
        self.placed_pieces.push(placed);

        debug_assert!(assertions::sheet_is_feasible(self));

        Some(placed)
    }

    pub fn placed_pieces(&self) -> &[PlacedPiece] {
        &self.placed_pieces
    }

    pub fn free_regions(&self) -> &FreeRegionStore {
        &self.free_regions
    }

    /// Number of free-region fragments emitted by the splitter on this sheet.
    /// Used as the cut count for cost estimation, it does not necessarily match the number of saw passes.
    pub fn cutting_count(&self) -> usize {
        self.cutting_count
    }

    /// Number of distinct vertical and horizontal lines along which regions were split
    pub fn distinct_cut_lines(&self) -> usize {
        self.cut_lines.len()
    }

    pub fn cut_lines(&self) -> impl Iterator<Item = &CutLine> {
        self.cut_lines.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_pieces.is_empty()
    }

    pub fn bbox(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn area(&self) -> u64 {
        self.bbox().area()
    }

    /// Sum of the areas of the placed pieces
    pub fn used_area(&self) -> u64 {
        self.placed_pieces.iter().map(|p| p.area()).sum()
    }

    pub fn waste_area(&self) -> u64 {
        self.area() - self.used_area()
    }

    /// Percentage of the sheet covered by placed pieces
    pub fn efficiency(&self) -> f64 {
        self.used_area() as f64 / self.area() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Part;

    fn piece(width: u32, height: u32, rotatable: bool) -> PieceInstance {
        PieceInstance::from(&Part::new(0, width, height, 1, rotatable))
    }

    #[test]
    fn first_piece_goes_to_origin() {
        let mut sheet = Sheet::new(1000, 1000, 0);
        let placed = sheet.insert(&piece(600, 400, true)).unwrap();

        assert_eq!((placed.x, placed.y, placed.width, placed.height), (0, 0, 600, 400));
        assert!(!placed.rotated);
        assert_eq!(sheet.cutting_count(), 2);
        assert_eq!(sheet.distinct_cut_lines(), 2);
        assert_eq!(
            sheet.cut_lines().copied().collect::<Vec<_>>(),
            vec![CutLine::Vertical(600), CutLine::Horizontal(400)]
        );
        assert_eq!(sheet.used_area(), 240_000);
        assert_eq!(sheet.waste_area(), 760_000);
        assert_eq!(sheet.free_regions().total_area(), 760_000);
    }

    #[test]
    fn exact_fit_emits_no_cuts() {
        let mut sheet = Sheet::new(500, 300, 0);
        assert!(sheet.insert(&piece(500, 300, false)).is_some());

        assert_eq!(sheet.cutting_count(), 0);
        assert!(sheet.free_regions().is_empty());
        assert_eq!(sheet.efficiency(), 100.0);
        assert!(sheet.insert(&piece(1, 1, true)).is_none());
    }

    #[test]
    fn kerf_is_reserved_on_trailing_edges() {
        // a 100 wide piece plus 5 kerf does not fit twice in 205
        let mut sheet = Sheet::new(205, 100, 5);
        assert!(sheet.insert(&piece(100, 95, false)).is_some());
        assert_eq!(sheet.free_regions().regions(), &[Rect::new(105, 0, 100, 100)]);
        assert!(sheet.insert(&piece(100, 95, false)).is_none());
        assert!(sheet.insert(&piece(99, 95, false)).is_none());
        assert!(sheet.insert(&piece(95, 95, false)).is_some());

        let [a, b] = sheet.placed_pieces() else {
            panic!("expected two placed pieces");
        };
        assert_eq!(b.x, a.x + a.width + 5);
    }

    #[test]
    fn rejected_piece_leaves_sheet_untouched() {
        let mut sheet = Sheet::new(100, 100, 0);
        let before = sheet.clone();
        assert!(sheet.insert(&piece(150, 50, false)).is_none());
        assert_eq!(sheet, before);
    }
}
