/// Draw chain: the node arena plus the singly linked draw order.
///
/// The chain starts at a sentinel node stored in the arena. The sentinel is
/// never drawn and never yielded by iteration; it only gives the resolver a
/// cursor position in front of the first real node.

use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::session::{BoundBox, PaintNode, PaintNodeKey, QuadrantFlags};

/// Arena of paint nodes threaded in draw order.
///
/// All links are `PaintNodeKey`s into the arena, so splicing is O(1) and a
/// stale link can at worst address a wrong node, never freed memory.
#[derive(Debug, Clone)]
pub struct DrawChain {
    /// Node arena (sentinel included)
    nodes: SlotMap<PaintNodeKey, PaintNode>,
    /// Sentinel key
    head: PaintNodeKey,
}

impl DrawChain {
    /// Create an empty chain able to hold `capacity` nodes without reallocating
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = SlotMap::with_capacity_and_key(capacity + 1);
        let head = nodes.insert(PaintNode::sentinel());
        Self { nodes, head }
    }

    /// Drop every node but keep the arena allocation.
    ///
    /// Keys handed out before the call become invalid.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = self.nodes.insert(PaintNode::sentinel());
    }

    pub(crate) fn insert(&mut self, node: PaintNode) -> PaintNodeKey {
        self.nodes.insert(node)
    }

    /// Sentinel key (the cursor in front of the first node)
    pub fn head(&self) -> PaintNodeKey {
        self.head
    }

    /// Number of nodes in the arena, sentinel excluded
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Get a node by key (`None` for the sentinel and foreign keys)
    pub fn node(&self, key: PaintNodeKey) -> Option<&PaintNode> {
        if key == self.head {
            return None;
        }
        self.nodes.get(key)
    }

    pub(crate) fn node_mut(&mut self, key: PaintNodeKey) -> Option<&mut PaintNode> {
        if key == self.head {
            return None;
        }
        self.nodes.get_mut(key)
    }

    // ===== LINK ACCESS (keys produced by this chain only) =====

    #[inline]
    pub(crate) fn next(&self, key: PaintNodeKey) -> Option<PaintNodeKey> {
        self.nodes[key].next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, key: PaintNodeKey, next: Option<PaintNodeKey>) {
        self.nodes[key].next = next;
    }

    #[inline]
    pub(crate) fn bucket_next(&self, key: PaintNodeKey) -> Option<PaintNodeKey> {
        self.nodes[key].bucket_next
    }

    #[inline]
    pub(crate) fn set_bucket_next(&mut self, key: PaintNodeKey, next: Option<PaintNodeKey>) {
        self.nodes[key].bucket_next = next;
    }

    #[inline]
    pub(crate) fn quadrant(&self, key: PaintNodeKey) -> u32 {
        self.nodes[key].quadrant_index
    }

    #[inline]
    pub(crate) fn bounds(&self, key: PaintNodeKey) -> &BoundBox {
        &self.nodes[key].bounds
    }

    #[inline]
    pub(crate) fn flags(&self, key: PaintNodeKey) -> QuadrantFlags {
        self.nodes[key].quadrant_flags
    }

    #[inline]
    pub(crate) fn set_flags(&mut self, key: PaintNodeKey, flags: QuadrantFlags) {
        self.nodes[key].quadrant_flags = flags;
    }

    /// Unlink `node` (currently following `prev`) and relink it directly
    /// after `anchor`.
    ///
    /// `anchor` must not lie between `node` and the chain end reachable from
    /// `node`. When `prev == anchor` the chain is unchanged.
    pub(crate) fn move_after(&mut self, prev: PaintNodeKey, node: PaintNodeKey, anchor: PaintNodeKey) {
        debug_assert_eq!(self.next(prev), Some(node));
        debug_assert_ne!(node, anchor);

        let after = self.next(node);
        self.set_next(prev, after);
        let anchor_next = self.next(anchor);
        self.set_next(node, anchor_next);
        self.set_next(anchor, Some(node));
    }

    // ===== TRAVERSAL =====

    /// Iterate over nodes in draw order (sentinel excluded)
    ///
    /// Iteration stops after `node_count()` steps even if the links were
    /// corrupted into a cycle.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: self.next(self.head),
            remaining: self.node_count(),
        }
    }

    /// Whether quadrant indices never decrease along the chain
    pub fn is_quadrant_sorted(&self) -> bool {
        let mut previous = 0;
        for (_, node) in self.iter() {
            if node.quadrant_index < previous {
                return false;
            }
            previous = node.quadrant_index;
        }
        true
    }

    /// Walk the chain and check that it ends after exactly `expected` nodes.
    ///
    /// # Errors
    ///
    /// Returns `MalformedChain` if the walk revisits a node (cycle) or the
    /// chain length differs from `expected`.
    pub fn verify(&self, expected: usize) -> Result<()> {
        let limit = self.node_count();
        let mut count = 0usize;
        let mut cursor = self.next(self.head);

        while let Some(key) = cursor {
            if count == limit {
                return Err(Error::MalformedChain(format!(
                    "chain longer than its {} node arena (cycle)",
                    limit
                )));
            }
            count += 1;
            cursor = self.next(key);
        }

        if count != expected {
            return Err(Error::MalformedChain(format!(
                "chain threads {} nodes, expected {}",
                count, expected
            )));
        }
        Ok(())
    }
}

/// Draw-order iterator over a DrawChain
pub struct ChainIter<'a> {
    chain: &'a DrawChain,
    cursor: Option<PaintNodeKey>,
    remaining: usize,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (PaintNodeKey, &'a PaintNode);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let key = self.cursor?;
        let node = &self.chain.nodes[key];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((key, node))
    }
}

#[cfg(test)]
#[path = "draw_chain_tests.rs"]
mod tests;
