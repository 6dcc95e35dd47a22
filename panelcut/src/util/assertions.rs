use crate::entities::{PackResult, Part, Sheet};
use crate::geometry::Rect;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every placed piece (kerf included) and every free region lies within the sheet,
/// no two kerf-inflated pieces overlap and no free region overlaps a piece or another region.
/// Together, the free regions and the kerf-inflated pieces cover the sheet exactly.
pub fn sheet_is_feasible(sheet: &Sheet) -> bool {
    let bbox = sheet.bbox();
    let footprints = sheet
        .placed_pieces()
        .iter()
        .map(|p| p.kerf_footprint(sheet.kerf))
        .collect_vec();
    let regions = sheet.free_regions().regions();

    if let Some(p) = sheet
        .placed_pieces()
        .iter()
        .find(|p| !bbox.contains(&p.footprint()))
    {
        error!("placed piece {p:?} exceeds sheet {bbox:?}");
        return false;
    }
    if let Some(fp) = footprints.iter().find(|fp| !bbox.contains(fp)) {
        error!("kerf footprint {fp:?} exceeds sheet {bbox:?}");
        return false;
    }
    if let Some(r) = regions.iter().find(|r| !bbox.contains(r)) {
        error!("free region {r:?} exceeds sheet {bbox:?}");
        return false;
    }
    if let Some((a, b)) = footprints
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.collides_with(b))
    {
        error!(
            "kerf footprints {a:?} and {b:?} overlap in {:?}",
            Rect::intersection(*a, *b)
        );
        return false;
    }
    if let Some((a, b)) = regions
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.collides_with(b))
    {
        error!(
            "free regions {a:?} and {b:?} overlap in {:?}",
            Rect::intersection(*a, *b)
        );
        return false;
    }
    if let Some((r, fp)) = regions
        .iter()
        .cartesian_product(footprints.iter())
        .find(|(r, fp)| r.collides_with(fp))
    {
        error!(
            "free region {r:?} overlaps placed piece {fp:?} in {:?}",
            Rect::intersection(*r, *fp)
        );
        return false;
    }
    let covered = sheet.free_regions().total_area()
        + footprints.iter().map(|fp| fp.area()).sum::<u64>();
    if covered != sheet.area() {
        error!(
            "free regions and kerf footprints cover {covered} mm², sheet area is {}",
            sheet.area()
        );
        return false;
    }
    true
}

/// For every part, placed and unplaced instances add up to the requested quantity.
pub fn quantities_conserved(parts: &[Part], result: &PackResult) -> bool {
    let n_requested = parts.iter().map(|p| p.quantity).sum::<usize>();
    if result.n_placed() + result.unplaced.len() != n_requested {
        error!(
            "{} placed + {} unplaced != {} requested",
            result.n_placed(),
            result.unplaced.len(),
            n_requested
        );
        return false;
    }
    parts.iter().into_group_map_by(|p| p.id).into_iter().all(|(id, ps)| {
        let requested = ps.iter().map(|p| p.quantity).sum::<usize>();
        let accounted = result.placed_qty(id) + result.unplaced_qty(id);
        if accounted != requested {
            error!("part {id}: {accounted} pieces accounted for, {requested} requested");
        }
        accounted == requested
    })
}

/// All sheets are feasible and non-empty, and share the same dimensions and kerf.
pub fn result_is_feasible(result: &PackResult) -> bool {
    let dims_consistent = result
        .sheets
        .iter()
        .map(|s| (s.width, s.height, s.kerf))
        .all_equal();
    dims_consistent
        && result
            .sheets
            .iter()
            .all(|s| !s.is_empty() && sheet_is_feasible(s))
}
