mod orchestrator;
mod selector;
mod splitter;
mod what_if;

#[doc(inline)]
pub use orchestrator::{PackState, SheetOrchestrator, pack};

#[doc(inline)]
pub use selector::{Selection, select};

#[doc(inline)]
pub use splitter::{CutLine, split};

#[doc(inline)]
pub use what_if::pack_kerf_variants;
