//! Paint ordering module
//!
//! Turns a populated paint session into a draw chain: buckets are
//! concatenated, then each quadrant boundary is resolved with the overlap
//! predicate of the current camera rotation.

mod arranger;
mod boundary_resolver;
mod chain_builder;
mod draw_chain;
mod overlap;
mod rotation;

pub use arranger::Arranger;
pub use draw_chain::{ChainIter, DrawChain};
pub use overlap::{
    overlaps, predicate_for, OverlapFn, OVERLAP_TABLE,
    overlaps_r0, overlaps_r90, overlaps_r180, overlaps_r270,
};
pub use rotation::Rotation;
