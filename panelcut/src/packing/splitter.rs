use crate::entities::FreeRegionStore;
use crate::geometry::Rect;

/// A line along which a free region was divided, in sheet coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CutLine {
    /// Vertical line at `x`
    Vertical(u32),
    /// Horizontal line at `y`
    Horizontal(u32),
}

/// Consumes the region at `index`, of which a `used_width` x `used_height` block at its origin is now occupied
/// (kerf included), and adds the leftover strips back to the store.
///
/// When the leftover width is the smaller one, a right strip as high as the used block is emitted first,
/// followed by a bottom strip spanning the full region width.
/// Otherwise a bottom strip as wide as the used block comes first, followed by a right strip spanning the full region height.
/// Empty strips are skipped. Returns one [`CutLine`] per emitted strip.
pub fn split(
    store: &mut FreeRegionStore,
    index: usize,
    used_width: u32,
    used_height: u32,
) -> Vec<CutLine> {
    let region = store.regions()[index];
    debug_assert!(region.fits(used_width, used_height));

    let lw = region.width - used_width;
    let lh = region.height - used_height;

    let right_x = region.x + used_width;
    let bottom_y = region.y + used_height;

    let mut cuts = Vec::with_capacity(2);
    if lw <= lh {
        if lw > 0 {
            store.add(Rect::new(right_x, region.y, lw, used_height));
            cuts.push(CutLine::Vertical(right_x));
        }
        if lh > 0 {
            store.add(Rect::new(region.x, bottom_y, region.width, lh));
            cuts.push(CutLine::Horizontal(bottom_y));
        }
    } else {
        if lh > 0 {
            store.add(Rect::new(region.x, bottom_y, used_width, lh));
            cuts.push(CutLine::Horizontal(bottom_y));
        }
        if lw > 0 {
            store.add(Rect::new(right_x, region.y, lw, region.height));
            cuts.push(CutLine::Vertical(right_x));
        }
    }
    store.remove(index);
    cuts
}
