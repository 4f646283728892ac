use super::*;

// ============================================================================
// Construction tests
// ============================================================================

#[test]
fn test_from_origin_size() {
    let bb = BoundBox::from_origin_size(IVec3::new(32, 64, 8), IVec3::new(32, 32, 16));
    assert_eq!(bb, BoundBox::new(32, 64, 8, 64, 96, 24));
    assert_eq!(bb.origin(), IVec3::new(32, 64, 8));
    assert_eq!(bb.end(), IVec3::new(64, 96, 24));
}

#[test]
fn test_default_is_degenerate_at_origin() {
    let bb = BoundBox::default();
    assert_eq!(bb.origin(), IVec3::ZERO);
    assert!(bb.is_degenerate());
}

// ============================================================================
// Degenerate tests
// ============================================================================

#[test]
fn test_unit_box_is_not_degenerate() {
    let bb = BoundBox::new(0, 0, 0, 1, 1, 1);
    assert!(!bb.is_degenerate());
}

#[test]
fn test_flat_box_is_degenerate() {
    // Floor decal: zero height
    let bb = BoundBox::from_origin_size(IVec3::new(0, 0, 16), IVec3::new(32, 32, 0));
    assert!(bb.is_degenerate());
}

#[test]
fn test_inverted_box_is_degenerate() {
    let bb = BoundBox::new(10, 0, 0, 5, 10, 10);
    assert!(bb.is_degenerate());
}
