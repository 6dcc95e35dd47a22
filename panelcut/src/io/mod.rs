mod export;
mod import;

/// External (serializable) representations of jobs and packing results.
pub mod ext_repr;

#[doc(inline)]
pub use export::export;

#[doc(inline)]
pub use export::export_sheet;

#[doc(inline)]
pub use import::Importer;
