/// Paint session: one frame's worth of paint nodes.
///
/// Holds the node arena (through the DrawChain), the quadrant bucket table
/// and the populated quadrant range. A session is filled by the populator,
/// arranged once by the Arranger, then walked by the renderer.

use crate::error::{Error, Result};
use crate::paint_err;
use crate::sort::{ChainIter, DrawChain};
use super::paint_node::{AttachedImage, PaintNode, PaintNodeKey};

/// Default arena size (nodes per frame)
pub const DEFAULT_NODE_CAPACITY: usize = 4000;
/// Default number of quadrant buckets
pub const DEFAULT_QUADRANT_COUNT: u32 = 512;

/// Session sizing and checking options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of nodes (children included)
    pub node_capacity: usize,
    /// Number of quadrant buckets; valid indices are `0..quadrant_count`
    pub quadrant_count: u32,
    /// Walk the chain after arrangement and report cycles / lost nodes
    pub verify_chain: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            node_capacity: DEFAULT_NODE_CAPACITY,
            quadrant_count: DEFAULT_QUADRANT_COUNT,
            verify_chain: cfg!(debug_assertions),
        }
    }
}

/// Lowest and highest populated quadrant (both inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantRange {
    pub back: u32,
    pub front: u32,
}

impl QuadrantRange {
    fn widened(range: Option<QuadrantRange>, index: u32) -> QuadrantRange {
        match range {
            None => QuadrantRange { back: index, front: index },
            Some(r) => QuadrantRange {
                back: r.back.min(index),
                front: r.front.max(index),
            },
        }
    }
}

/// Bucket heads and tails, one pair per quadrant
#[derive(Debug, Clone)]
pub(crate) struct QuadrantTable {
    heads: Vec<Option<PaintNodeKey>>,
    tails: Vec<Option<PaintNodeKey>>,
}

impl QuadrantTable {
    fn new(quadrant_count: u32) -> Self {
        Self {
            heads: vec![None; quadrant_count as usize],
            tails: vec![None; quadrant_count as usize],
        }
    }

    fn clear(&mut self) {
        self.heads.fill(None);
        self.tails.fill(None);
    }

    /// First node of a bucket
    pub(crate) fn head(&self, quadrant: u32) -> Option<PaintNodeKey> {
        self.heads.get(quadrant as usize).copied().flatten()
    }
}

/// One frame of paint nodes awaiting arrangement
#[derive(Debug, Clone)]
pub struct PaintSession {
    config: SessionConfig,
    chain: DrawChain,
    quadrants: QuadrantTable,
    range: Option<QuadrantRange>,
    /// Nodes placed in buckets (children excluded)
    bucketed_count: usize,
}

impl PaintSession {
    /// Create an empty session sized by `config`
    pub fn new(config: SessionConfig) -> Self {
        Self {
            chain: DrawChain::with_capacity(config.node_capacity),
            quadrants: QuadrantTable::new(config.quadrant_count),
            range: None,
            bucketed_count: 0,
            config,
        }
    }

    /// Reset for the next frame, keeping every allocation
    pub fn clear(&mut self) {
        self.chain.clear();
        self.quadrants.clear();
        self.range = None;
        self.bucketed_count = 0;
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Populated quadrant range, `None` when no node was added this frame
    pub fn quadrant_range(&self) -> Option<QuadrantRange> {
        self.range
    }

    /// Number of nodes in buckets (what the arranged chain threads)
    pub fn bucketed_count(&self) -> usize {
        self.bucketed_count
    }

    /// Number of nodes in the arena (children included)
    pub fn node_count(&self) -> usize {
        self.chain.node_count()
    }

    /// Get a node by key
    pub fn node(&self, key: PaintNodeKey) -> Option<&PaintNode> {
        self.chain.node(key)
    }

    /// Iterate over nodes in draw order (valid after arrangement)
    pub fn draw_order(&self) -> ChainIter<'_> {
        self.chain.iter()
    }

    /// Read access to the chain
    pub fn chain(&self) -> &DrawChain {
        &self.chain
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut DrawChain, &QuadrantTable) {
        (&mut self.chain, &self.quadrants)
    }

    /// Keys of one bucket, in bucket order
    pub fn bucket(&self, quadrant: u32) -> impl Iterator<Item = PaintNodeKey> + '_ {
        let mut cursor = self.quadrants.head(quadrant);
        std::iter::from_fn(move || {
            let key = cursor?;
            cursor = self.chain.bucket_next(key);
            Some(key)
        })
    }

    // ===== POPULATOR API =====

    /// Add a node to the end of its quadrant bucket
    ///
    /// # Errors
    ///
    /// - `QuadrantOutOfRange` if `node.quadrant_index >= quadrant_count`
    /// - `CapacityExceeded` if the arena is full
    pub fn add_node(&mut self, node: PaintNode) -> Result<PaintNodeKey> {
        let quadrant = node.quadrant_index;
        if quadrant >= self.config.quadrant_count {
            return Err(paint_err!("galaxy_paint::PaintSession", Error::QuadrantOutOfRange {
                index: quadrant,
                quadrant_count: self.config.quadrant_count,
            }));
        }
        let key = self.insert_node(node)?;

        let slot = quadrant as usize;
        match self.quadrants.tails[slot] {
            Some(tail) => self.chain.set_bucket_next(tail, Some(key)),
            None => self.quadrants.heads[slot] = Some(key),
        }
        self.quadrants.tails[slot] = Some(key);

        self.range = Some(QuadrantRange::widened(self.range, quadrant));
        self.bucketed_count += 1;
        Ok(key)
    }

    /// Add a child node under `parent`
    ///
    /// Children take an arena slot but are never placed in a bucket, so the
    /// sorter never moves them; the renderer draws them with their parent.
    ///
    /// # Errors
    ///
    /// - `InvalidNode` if `parent` is not a node of this session
    /// - `CapacityExceeded` if the arena is full
    pub fn add_child(&mut self, parent: PaintNodeKey, child: PaintNode) -> Result<PaintNodeKey> {
        if self.chain.node(parent).is_none() {
            return Err(paint_err!("galaxy_paint::PaintSession",
                Error::InvalidNode(format!("parent {:?} is not in this session", parent))));
        }
        let key = self.insert_node(child)?;
        if let Some(parent_node) = self.chain.node_mut(parent) {
            parent_node.children.push(key);
        }
        Ok(key)
    }

    /// Attach a decoration image to a node
    ///
    /// # Errors
    ///
    /// Returns `InvalidNode` if `key` is not a node of this session
    pub fn attach_image(&mut self, key: PaintNodeKey, image: AttachedImage) -> Result<()> {
        match self.chain.node_mut(key) {
            Some(node) => {
                node.attached.push(image);
                Ok(())
            }
            None => Err(paint_err!("galaxy_paint::PaintSession",
                Error::InvalidNode(format!("{:?} is not in this session", key)))),
        }
    }

    fn insert_node(&mut self, mut node: PaintNode) -> Result<PaintNodeKey> {
        if self.chain.node_count() >= self.config.node_capacity {
            return Err(paint_err!("galaxy_paint::PaintSession", Error::CapacityExceeded {
                capacity: self.config.node_capacity,
            }));
        }
        node.next = None;
        node.bucket_next = None;
        node.quadrant_flags = super::QuadrantFlags::empty();
        Ok(self.chain.insert(node))
    }
}

#[cfg(test)]
#[path = "paint_session_tests.rs"]
mod tests;
