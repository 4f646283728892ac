/// Boundary resolution: fix draw order across one quadrant boundary.
///
/// Buckets order nodes by quadrant only. Where a node of quadrant `q` or
/// `q + 1` overlaps a later node of the adjacent band, the later node is
/// spliced to directly follow it. One call handles one boundary `q`:
///
/// 1. **Seek** from the cursor to the anchor, the last node before the
///    first node with quadrant >= `q`.
/// 2. **Classify** the window after the anchor (quadrants up to `q + 1`).
/// 3. **Resolve** every tie in the window against the nodes after it.
///
/// The anchor is returned and becomes the next call's cursor, so a sweep
/// over all boundaries seeks through the chain once.

use crate::session::{PaintNodeKey, QuadrantFlags};
use super::draw_chain::DrawChain;
use super::overlap::{predicate_for, OverlapFn};
use super::rotation::Rotation;

/// Resolve the boundary between quadrant `quadrant` and `quadrant + 1`.
///
/// # Arguments
///
/// * `chain` - Chain to reorder in place
/// * `cursor` - Where to start seeking (the sentinel, or the previous call's result)
/// * `quadrant` - Boundary quadrant `q`
/// * `classify_same` - Also let nodes of quadrant `q` be spliced (first boundary only)
/// * `rotation` - Selects the overlap predicate
///
/// # Returns
///
/// The anchor for the next call. If the chain ends before reaching `q`,
/// the last node, with nothing classified.
pub(crate) fn resolve_boundary(
    chain: &mut DrawChain,
    cursor: PaintNodeKey,
    quadrant: u32,
    classify_same: bool,
    rotation: Rotation,
) -> PaintNodeKey {
    let Some(anchor) = seek(chain, cursor, quadrant) else {
        return last_node(chain, cursor);
    };

    classify(chain, anchor, quadrant, classify_same);

    let overlaps = predicate_for(rotation);
    while let Some(occluder) = next_pending(chain, anchor) {
        let flags = chain.flags(occluder) - QuadrantFlags::PENDING;
        chain.set_flags(occluder, flags);
        splice_overlapped(chain, occluder, overlaps);
    }

    anchor
}

/// Advance from `cursor` until the next node is in quadrant >= `quadrant`.
///
/// Returns `None` when the chain ends first.
fn seek(chain: &DrawChain, cursor: PaintNodeKey, quadrant: u32) -> Option<PaintNodeKey> {
    let mut current = cursor;
    loop {
        let next = chain.next(current)?;
        if chain.quadrant(next) >= quadrant {
            return Some(current);
        }
        current = next;
    }
}

fn last_node(chain: &DrawChain, cursor: PaintNodeKey) -> PaintNodeKey {
    let mut current = cursor;
    while let Some(next) = chain.next(current) {
        current = next;
    }
    current
}

/// Tag the nodes following `anchor`, up to and including the first node
/// beyond `quadrant + 1`.
fn classify(chain: &mut DrawChain, anchor: PaintNodeKey, quadrant: u32, classify_same: bool) {
    let adjacent = quadrant.saturating_add(1);
    let same = if classify_same {
        QuadrantFlags::PENDING | QuadrantFlags::NEXT
    } else {
        QuadrantFlags::PENDING
    };

    let mut cursor = chain.next(anchor);
    while let Some(key) = cursor {
        let index = chain.quadrant(key);
        if index > adjacent {
            chain.set_flags(key, QuadrantFlags::FARTHER);
            break;
        }
        let flags = if index == adjacent {
            QuadrantFlags::PENDING | QuadrantFlags::NEXT
        } else if index == quadrant {
            same
        } else {
            // Displaced by the previous boundary; already resolved there
            QuadrantFlags::BEHIND
        };
        chain.set_flags(key, flags);
        cursor = chain.next(key);
    }
}

/// First untreated tie after `anchor`
fn next_pending(chain: &DrawChain, anchor: PaintNodeKey) -> Option<PaintNodeKey> {
    let mut cursor = chain.next(anchor);
    while let Some(key) = cursor {
        let flags = chain.flags(key);
        if flags.contains(QuadrantFlags::FARTHER) {
            return None;
        }
        if flags.contains(QuadrantFlags::PENDING) {
            return Some(key);
        }
        cursor = chain.next(key);
    }
    None
}

/// Splice every candidate the occluder overlaps to directly after it.
///
/// The scan ends at the window edge (`FARTHER`), at a node of an earlier
/// quadrant (`BEHIND`) or at the chain end. Spliced nodes land behind the
/// scan position, so each node ahead is visited once.
fn splice_overlapped(chain: &mut DrawChain, occluder: PaintNodeKey, overlaps: OverlapFn) {
    let occluder_box = *chain.bounds(occluder);
    let mut prev = occluder;

    while let Some(candidate) = chain.next(prev) {
        let flags = chain.flags(candidate);
        if flags.intersects(QuadrantFlags::FARTHER | QuadrantFlags::BEHIND) {
            break;
        }
        let hit = flags.contains(QuadrantFlags::NEXT) && overlaps(&occluder_box, chain.bounds(candidate));
        if hit && prev != occluder {
            chain.move_after(prev, candidate, occluder);
        } else {
            prev = candidate;
        }
    }
}

#[cfg(test)]
#[path = "boundary_resolver_tests.rs"]
mod tests;
