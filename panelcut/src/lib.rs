#![doc = document_features::document_features!()]
//! `panelcut` packs rectangular parts onto fixed-size sheets with a guillotine-style
//! free-region allocator (best short side fit).

/// Entities to model sheet cutting jobs and their results
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// The packing engine: placement selection, region splitting and the multi-sheet orchestrator
pub mod packing;

/// Importing jobs into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
