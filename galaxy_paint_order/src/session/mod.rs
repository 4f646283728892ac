//! Paint session module
//!
//! Provides the per-frame session (node arena, quadrant buckets, populated
//! range) and the node types it stores.

mod bound_box;
mod paint_node;
mod paint_session;

pub use bound_box::BoundBox;
pub use paint_node::{AttachedImage, PaintNode, PaintNodeKey, QuadrantFlags};
pub use paint_session::{
    PaintSession, QuadrantRange, SessionConfig,
    DEFAULT_NODE_CAPACITY, DEFAULT_QUADRANT_COUNT,
};
pub(crate) use paint_session::QuadrantTable;
