use crate::entities::{PackResult, Sheet};
use crate::io::ext_repr::{ExtPackSolution, ExtPlacedPiece, ExtSheet, ExtUnplacedPiece};
use std::time::Instant;

/// Exports a packing result out of the library
pub fn export(result: &PackResult, start: Instant) -> ExtPackSolution {
    ExtPackSolution {
        sheets: result.sheets.iter().map(export_sheet).collect(),
        unplaced: result
            .unplaced
            .iter()
            .map(|p| ExtUnplacedPiece {
                part_id: p.part_id as u64,
                width: p.width,
                height: p.height,
            })
            .collect(),
        n_sheets: result.n_sheets(),
        total_efficiency: result.total_efficiency(),
        total_cuts: result.total_cuts(),
        run_time_ms: start.elapsed().as_millis() as u64,
    }
}

pub fn export_sheet(sheet: &Sheet) -> ExtSheet {
    ExtSheet {
        width: sheet.width,
        height: sheet.height,
        kerf: sheet.kerf,
        placed_pieces: sheet
            .placed_pieces()
            .iter()
            .map(|p| ExtPlacedPiece {
                part_id: p.part_id as u64,
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
                rotated: p.rotated,
            })
            .collect(),
        cutting_count: sheet.cutting_count(),
        distinct_cut_lines: sheet.distinct_cut_lines(),
        efficiency: sheet.efficiency(),
    }
}
