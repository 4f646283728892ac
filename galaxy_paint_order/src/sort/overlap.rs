/// Rotation-specific overlap predicates.
///
/// `overlaps(rotation, occluder, candidate)` decides whether `candidate`
/// must be drawn right behind `occluder` at a quadrant boundary. The four
/// variants differ only in which horizontal axes compare with `>=` and
/// which with `<`, following the direction that faces the camera.
///
/// All predicates are total: degenerate and inverted boxes simply compare
/// their bounds.

use crate::session::BoundBox;
use super::rotation::Rotation;

/// Signature shared by the four predicates
pub type OverlapFn = fn(&BoundBox, &BoundBox) -> bool;

/// Dispatch table indexed by `Rotation::index()`
pub const OVERLAP_TABLE: [OverlapFn; 4] = [overlaps_r0, overlaps_r90, overlaps_r180, overlaps_r270];

/// Evaluate the predicate for `rotation`
#[inline]
pub fn overlaps(rotation: Rotation, occluder: &BoundBox, candidate: &BoundBox) -> bool {
    OVERLAP_TABLE[rotation.index()](occluder, candidate)
}

/// Predicate for a rotation, for callers that evaluate it in a loop
#[inline]
pub fn predicate_for(rotation: Rotation) -> OverlapFn {
    OVERLAP_TABLE[rotation.index()]
}

pub fn overlaps_r0(occ: &BoundBox, cand: &BoundBox) -> bool {
    occ.z_end >= cand.z
        && occ.y_end >= cand.y
        && occ.x_end >= cand.x
        && !(occ.z < cand.z_end && occ.y < cand.y_end && occ.x < cand.x_end)
}

pub fn overlaps_r90(occ: &BoundBox, cand: &BoundBox) -> bool {
    occ.z_end >= cand.z
        && occ.y_end >= cand.y
        && occ.x_end < cand.x
        && !(occ.z < cand.z_end && occ.y < cand.y_end && occ.x >= cand.x_end)
}

pub fn overlaps_r180(occ: &BoundBox, cand: &BoundBox) -> bool {
    occ.z_end >= cand.z
        && occ.y_end < cand.y
        && occ.x_end < cand.x
        && !(occ.z < cand.z_end && occ.y >= cand.y_end && occ.x >= cand.x_end)
}

pub fn overlaps_r270(occ: &BoundBox, cand: &BoundBox) -> bool {
    occ.z_end >= cand.z
        && occ.y_end < cand.y
        && occ.x_end >= cand.x
        && !(occ.z < cand.z_end && occ.y >= cand.y_end && occ.x < cand.x_end)
}

#[cfg(test)]
#[path = "overlap_tests.rs"]
mod tests;
