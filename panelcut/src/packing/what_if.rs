use crate::entities::{PackResult, Part};
use crate::packing::pack;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Packs the same parts once for every kerf value, e.g. to compare blades.
/// Runs share no state, with the `parallel` feature they are executed on the rayon thread pool.
/// Results are returned in the order of `kerfs`.
pub fn pack_kerf_variants(
    sheet_width: u32,
    sheet_height: u32,
    kerfs: &[u32],
    parts: &[Part],
) -> Vec<(u32, PackResult)> {
    #[cfg(feature = "parallel")]
    let iter = kerfs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = kerfs.iter();

    iter.map(|&kerf| (kerf, pack(sheet_width, sheet_height, kerf, parts)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_match_individual_runs() {
        let parts = [
            Part::new(0, 1000, 600, 6, true),
            Part::new(1, 300, 200, 5, false),
        ];
        let kerfs = [0, 3, 5, 10];
        let variants = pack_kerf_variants(2440, 1220, &kerfs, &parts);

        assert_eq!(variants.len(), kerfs.len());
        for ((kerf, result), expected_kerf) in variants.iter().zip(kerfs) {
            assert_eq!(*kerf, expected_kerf);
            assert_eq!(*result, pack(2440, 1220, expected_kerf, &parts));
        }
    }
}
