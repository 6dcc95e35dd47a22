use crate::entities::{PackResult, Part, PieceInstance, Sheet, expand_parts};
use crate::util::assertions;
use log::{debug, warn};

/// Packs the parts onto as many `sheet_width` x `sheet_height` sheets as needed.
///
/// Never fails: pieces which do not fit on an empty sheet end up in [`PackResult::unplaced`].
/// The result only depends on the arguments (including the order of `parts`).
pub fn pack(sheet_width: u32, sheet_height: u32, kerf: u32, parts: &[Part]) -> PackResult {
    let result = SheetOrchestrator::new(sheet_width, sheet_height, kerf, parts).solve();

    debug_assert!(assertions::quantities_conserved(parts, &result));
    debug_assert!(assertions::result_is_feasible(&result));

    result
}

/// Progress of a [`SheetOrchestrator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackState {
    /// Instances expanded, no sheet opened yet
    AwaitingInstances,
    /// The last pass placed at least one instance and some remain
    PackingCurrentSheet,
    /// A pass over a fresh sheet placed nothing, all remaining instances are unplaced
    SheetExhausted,
    /// Every instance was placed
    AllPlaced,
}

impl PackState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PackState::SheetExhausted | PackState::AllPlaced)
    }
}

/// Drives the placement of piece instances over successive sheets.
///
/// Each [`step`](SheetOrchestrator::step) opens a fresh sheet and makes a single pass over the remaining
/// instances in order. Instances that do not fit are only retried on the next sheet.
/// A pass without any placement terminates the run, so an empty sheet never loops forever.
#[derive(Clone, Debug)]
pub struct SheetOrchestrator {
    sheet_width: u32,
    sheet_height: u32,
    kerf: u32,
    remaining: Vec<PieceInstance>,
    sheets: Vec<Sheet>,
    unplaced: Vec<PieceInstance>,
    state: PackState,
}

impl SheetOrchestrator {
    pub fn new(sheet_width: u32, sheet_height: u32, kerf: u32, parts: &[Part]) -> Self {
        let remaining = expand_parts(parts);
        let state = match remaining.is_empty() {
            true => PackState::AllPlaced,
            false => PackState::AwaitingInstances,
        };
        Self {
            sheet_width,
            sheet_height,
            kerf,
            remaining,
            sheets: vec![],
            unplaced: vec![],
            state,
        }
    }

    pub fn state(&self) -> PackState {
        self.state
    }

    /// Instances not yet placed nor declared unplaced
    pub fn remaining(&self) -> &[PieceInstance] {
        &self.remaining
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Performs one pass over a new sheet and returns the resulting state.
    /// Does nothing once a terminal state is reached.
    pub fn step(&mut self) -> PackState {
        if self.state.is_terminal() {
            return self.state;
        }

        let mut sheet = Sheet::new(self.sheet_width, self.sheet_height, self.kerf);
        let sheet_idx = self.sheets.len();
        debug!(
            "[PACK] opening sheet {sheet_idx} ({} instances remaining)",
            self.remaining.len()
        );

        let mut not_placed = vec![];
        for piece in self.remaining.drain(..) {
            match sheet.insert(&piece) {
                Some(p) => debug!(
                    "[PACK] part {} placed on sheet {sheet_idx} at ({}, {}) as {}x{}{}",
                    p.part_id,
                    p.x,
                    p.y,
                    p.width,
                    p.height,
                    if p.rotated { " (rotated)" } else { "" }
                ),
                None => not_placed.push(piece),
            }
        }

        self.state = if sheet.is_empty() {
            // nothing fits even on an empty sheet, the sheet is discarded
            warn!(
                "[PACK] {} instance(s) do not fit on an empty {}x{} sheet",
                not_placed.len(),
                self.sheet_width,
                self.sheet_height
            );
            self.unplaced = not_placed;
            PackState::SheetExhausted
        } else {
            debug!(
                "[PACK] sheet {sheet_idx} closed with {} piece(s), {:.1}% efficiency, {} cut(s)",
                sheet.placed_pieces().len(),
                sheet.efficiency(),
                sheet.cutting_count()
            );
            self.sheets.push(sheet);
            self.remaining = not_placed;
            match self.remaining.is_empty() {
                true => PackState::AllPlaced,
                false => PackState::PackingCurrentSheet,
            }
        };
        self.state
    }

    /// Runs until a terminal state is reached.
    pub fn solve(mut self) -> PackResult {
        while !self.step().is_terminal() {}
        PackResult {
            sheets: self.sheets,
            unplaced: self.unplaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_part_list_is_all_placed() {
        let result = pack(1000, 1000, 3, &[]);
        assert_eq!(result.n_sheets(), 0);
        assert!(result.is_complete());
        assert_eq!(result.total_efficiency(), 0.0);
    }

    #[test]
    fn stepping_reports_states() {
        let parts = [Part::new(0, 600, 600, 2, false)];
        let mut orchestrator = SheetOrchestrator::new(1000, 1000, 0, &parts);
        assert_eq!(orchestrator.state(), PackState::AwaitingInstances);
        assert_eq!(orchestrator.remaining().len(), 2);

        assert_eq!(orchestrator.step(), PackState::PackingCurrentSheet);
        assert_eq!(orchestrator.sheets().len(), 1);
        assert_eq!(orchestrator.remaining().len(), 1);

        assert_eq!(orchestrator.step(), PackState::AllPlaced);
        assert_eq!(orchestrator.step(), PackState::AllPlaced);
        assert_eq!(orchestrator.sheets().len(), 2);
    }

    #[test]
    fn oversized_instances_exhaust_after_progress() {
        let parts = [Part::new(0, 100, 100, 1, true), Part::new(1, 2000, 10, 2, true)];
        let mut orchestrator = SheetOrchestrator::new(1000, 1000, 0, &parts);

        assert_eq!(orchestrator.step(), PackState::PackingCurrentSheet);
        assert_eq!(orchestrator.step(), PackState::SheetExhausted);

        let result = orchestrator.solve();
        assert_eq!(result.n_sheets(), 1);
        assert_eq!(result.unplaced.len(), 2);
        assert_eq!(result.unplaced_qty(1), 2);
    }

    #[test]
    fn failed_instance_is_not_retried_on_the_same_sheet() {
        // the 800 piece moves on to the second sheet while the smaller piece listed after it still lands on the first
        let parts = [
            Part::new(0, 900, 900, 1, false),
            Part::new(1, 800, 800, 1, false),
            Part::new(2, 50, 50, 1, false),
        ];
        let result = pack(1000, 1000, 0, &parts);
        assert_eq!(result.n_sheets(), 2);
        assert_eq!(result.sheets[0].placed_pieces().len(), 2);
        assert_eq!(result.sheets[0].placed_pieces()[1].part_id, 2);
        assert_eq!(result.sheets[1].placed_pieces()[0].part_id, 1);
    }
}
