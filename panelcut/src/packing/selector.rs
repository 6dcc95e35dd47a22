use crate::entities::{FreeRegionStore, PieceInstance};

/// A chosen free region and orientation for a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Index of the chosen region in the [`FreeRegionStore`]
    pub region_idx: usize,
    /// Origin of the chosen region, where the piece will be placed
    pub x: u32,
    pub y: u32,
    /// Oriented footprint of the piece, without kerf
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
    /// Smallest leftover side, lower is better
    pub score: u32,
}

/// Best short side fit: finds the free region (and orientation) in which the piece leaves the
/// smallest leftover on its shorter side.
///
/// A region admits a `w` x `h` footprint if it is at least `w + kerf` wide and `h + kerf` high.
/// Regions are scanned in store order, the unrotated orientation before the rotated one.
/// Only a strictly lower score replaces the current best, so ties go to the first candidate found.
pub fn select(store: &FreeRegionStore, piece: &PieceInstance, kerf: u32) -> Option<Selection> {
    let orientations: &[bool] = match piece.rotatable {
        true => &[false, true],
        false => &[false],
    };

    let mut best: Option<Selection> = None;

    for (region_idx, region) in store.regions().iter().enumerate() {
        for &rotated in orientations {
            let (w, h) = match rotated {
                false => (piece.width, piece.height),
                true => (piece.height, piece.width),
            };
            if !region.fits(w.saturating_add(kerf), h.saturating_add(kerf)) {
                continue;
            }
            let score = u32::min(region.width - w, region.height - h);
            if best.is_none_or(|b| score < b.score) {
                best = Some(Selection {
                    region_idx,
                    x: region.x,
                    y: region.y,
                    width: w,
                    height: h,
                    rotated,
                    score,
                });
            }
        }
    }
    best
}
