use crate::geometry::Rect;

/// Candidate placement regions of a single sheet.
///
/// Regions are never merged: the store tolerates fragmentation.
/// Newly added regions are appended and removal keeps the relative order of the others,
/// so the scan order (and with it tie-breaking during selection) is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeRegionStore {
    regions: Vec<Rect>,
}

impl FreeRegionStore {
    /// A store with a single region spanning the whole sheet.
    pub fn new(width: u32, height: u32) -> Self {
        FreeRegionStore {
            regions: vec![Rect::new(0, 0, width, height)],
        }
    }

    pub fn regions(&self) -> &[Rect] {
        &self.regions
    }

    pub fn add(&mut self, region: Rect) {
        debug_assert!(region.width > 0 && region.height > 0, "empty region: {region:?}");
        self.regions.push(region);
    }

    pub fn remove(&mut self, index: usize) -> Rect {
        self.regions.remove(index)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn total_area(&self) -> u64 {
        self.regions.iter().map(|r| r.area()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_whole_sheet() {
        let store = FreeRegionStore::new(2440, 1220);
        assert_eq!(store.regions(), &[Rect::new(0, 0, 2440, 1220)]);
        assert_eq!(store.total_area(), 2440 * 1220);
    }

    #[test]
    fn removal_keeps_scan_order() {
        let mut store = FreeRegionStore::new(100, 100);
        store.add(Rect::new(0, 0, 10, 10));
        store.add(Rect::new(20, 20, 5, 5));

        let removed = store.remove(0);
        assert_eq!(removed, Rect::new(0, 0, 100, 100));
        assert_eq!(
            store.regions(),
            &[Rect::new(0, 0, 10, 10), Rect::new(20, 20, 5, 5)]
        );
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
