mod free_regions;
mod job;
mod pack_result;
mod part;
mod placed_piece;
mod sheet;

#[doc(inline)]
pub use free_regions::FreeRegionStore;

#[doc(inline)]
pub use job::Job;

#[doc(inline)]
pub use pack_result::PackResult;

#[doc(inline)]
pub use part::Part;

#[doc(inline)]
pub use part::PieceInstance;

#[doc(inline)]
pub use part::expand_parts;

#[doc(inline)]
pub use placed_piece::PlacedPiece;

#[doc(inline)]
pub use sheet::Sheet;
