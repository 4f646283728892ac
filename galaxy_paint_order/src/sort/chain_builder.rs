/// Chain building: concatenate quadrant buckets into one draw chain.

use crate::session::{PaintNodeKey, QuadrantFlags, QuadrantRange, QuadrantTable};
use super::draw_chain::DrawChain;

/// Thread every bucket from `range.back` to `range.front` after the chain
/// sentinel, in increasing quadrant order, keeping each bucket's own order.
///
/// Resets the resolver state of every threaded node. With `range == None`
/// the chain is left as the sentinel alone.
///
/// Returns the number of threaded nodes. One pass over the nodes, no
/// allocation.
pub(crate) fn build_chain(
    chain: &mut DrawChain,
    quadrants: &QuadrantTable,
    range: Option<QuadrantRange>,
) -> usize {
    let head = chain.head();
    chain.set_next(head, None);

    let Some(range) = range else {
        return 0;
    };

    let mut tail: PaintNodeKey = head;
    let mut count = 0usize;

    for quadrant in range.back..=range.front {
        let mut cursor = quadrants.head(quadrant);
        while let Some(key) = cursor {
            chain.set_next(tail, Some(key));
            chain.set_flags(key, QuadrantFlags::empty());
            tail = key;
            count += 1;
            cursor = chain.bucket_next(key);
        }
    }

    chain.set_next(tail, None);
    count
}

#[cfg(test)]
#[path = "chain_builder_tests.rs"]
mod tests;
