use super::*;
use crate::session::{BoundBox, QuadrantFlags};
use glam::IVec2;

// ============================================================================
// TEST HELPERS
// ============================================================================

fn small_config(node_capacity: usize, quadrant_count: u32) -> SessionConfig {
    SessionConfig {
        node_capacity,
        quadrant_count,
        verify_chain: true,
    }
}

fn node(image_id: u32, quadrant: u32) -> PaintNode {
    PaintNode::new(image_id, BoundBox::new(0, 0, 0, 32, 32, 16), quadrant)
}

// ============================================================================
// Config tests
// ============================================================================

#[test]
fn test_default_config() {
    let config = SessionConfig::default();
    assert_eq!(config.node_capacity, 4000);
    assert_eq!(config.quadrant_count, 512);
    assert_eq!(config.verify_chain, cfg!(debug_assertions));
}

#[test]
fn test_new_session_is_empty() {
    let session = PaintSession::new(SessionConfig::default());
    assert_eq!(session.node_count(), 0);
    assert_eq!(session.bucketed_count(), 0);
    assert!(session.quadrant_range().is_none());
    assert_eq!(session.draw_order().count(), 0);
}

// ============================================================================
// add_node tests
// ============================================================================

#[test]
fn test_add_node_appends_to_bucket_in_insertion_order() {
    let mut session = PaintSession::new(small_config(8, 16));
    let a = session.add_node(node(1, 4)).unwrap();
    let b = session.add_node(node(2, 4)).unwrap();
    let c = session.add_node(node(3, 4)).unwrap();

    assert_eq!(session.bucket(4).collect::<Vec<_>>(), vec![a, b, c]);
    assert_eq!(session.bucket(5).count(), 0);
}

#[test]
fn test_add_node_widens_range() {
    let mut session = PaintSession::new(small_config(8, 16));
    session.add_node(node(1, 7)).unwrap();
    assert_eq!(session.quadrant_range(), Some(QuadrantRange { back: 7, front: 7 }));

    session.add_node(node(2, 3)).unwrap();
    session.add_node(node(3, 11)).unwrap();
    assert_eq!(session.quadrant_range(), Some(QuadrantRange { back: 3, front: 11 }));
}

#[test]
fn test_add_node_rejects_quadrant_out_of_range() {
    let mut session = PaintSession::new(small_config(8, 16));
    let err = session.add_node(node(1, 16)).unwrap_err();
    assert_eq!(err, Error::QuadrantOutOfRange { index: 16, quadrant_count: 16 });
    assert_eq!(session.node_count(), 0);
    assert!(session.quadrant_range().is_none());
}

#[test]
fn test_add_node_rejects_over_capacity() {
    let mut session = PaintSession::new(small_config(2, 16));
    session.add_node(node(1, 0)).unwrap();
    session.add_node(node(2, 0)).unwrap();
    let err = session.add_node(node(3, 0)).unwrap_err();
    assert_eq!(err, Error::CapacityExceeded { capacity: 2 });
    assert_eq!(session.bucketed_count(), 2);
}

#[test]
fn test_add_node_resets_resolver_state() {
    let mut session = PaintSession::new(small_config(2, 4));
    let mut stale = node(1, 0);
    stale.quadrant_flags = QuadrantFlags::FARTHER;
    let key = session.add_node(stale).unwrap();
    assert_eq!(session.node(key).unwrap().quadrant_flags(), QuadrantFlags::empty());
    assert!(session.node(key).unwrap().next().is_none());
}

// ============================================================================
// Auxiliary data tests
// ============================================================================

#[test]
fn test_add_child_uses_arena_but_not_buckets() {
    let mut session = PaintSession::new(small_config(4, 4));
    let parent = session.add_node(node(1, 2)).unwrap();
    let child = session.add_child(parent, node(2, 2)).unwrap();

    assert_eq!(session.node_count(), 2);
    assert_eq!(session.bucketed_count(), 1);
    assert_eq!(session.node(parent).unwrap().children, vec![child]);
    assert_eq!(session.bucket(2).collect::<Vec<_>>(), vec![parent]);
}

#[test]
fn test_add_child_counts_against_capacity() {
    let mut session = PaintSession::new(small_config(1, 4));
    let parent = session.add_node(node(1, 0)).unwrap();
    assert!(matches!(
        session.add_child(parent, node(2, 0)),
        Err(Error::CapacityExceeded { .. })
    ));
}

#[test]
fn test_attach_image() {
    let mut session = PaintSession::new(small_config(4, 4));
    let key = session.add_node(node(1, 0)).unwrap();
    session.attach_image(key, AttachedImage::new(77, IVec2::new(0, -8))).unwrap();

    let attached = &session.node(key).unwrap().attached;
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].image_id, 77);
    assert_eq!(attached[0].screen_offset, IVec2::new(0, -8));
}

#[test]
fn test_foreign_keys_are_rejected() {
    let mut other = PaintSession::new(small_config(4, 4));
    let foreign = other.add_node(node(1, 0)).unwrap();
    other.clear();

    let mut session = PaintSession::new(small_config(4, 4));
    assert!(matches!(
        session.attach_image(foreign, AttachedImage::new(1, IVec2::ZERO)),
        Err(Error::InvalidNode(_))
    ));
    assert!(matches!(session.add_child(foreign, node(2, 0)), Err(Error::InvalidNode(_))));
}

#[test]
fn test_sentinel_key_is_rejected() {
    let mut session = PaintSession::new(small_config(4, 4));
    let head = session.chain().head();
    assert!(matches!(
        session.attach_image(head, AttachedImage::new(1, IVec2::ZERO)),
        Err(Error::InvalidNode(_))
    ));
}

// ============================================================================
// clear tests
// ============================================================================

#[test]
fn test_clear_resets_everything() {
    let mut session = PaintSession::new(small_config(4, 8));
    let key = session.add_node(node(1, 3)).unwrap();
    session.add_node(node(2, 5)).unwrap();

    session.clear();

    assert_eq!(session.node_count(), 0);
    assert_eq!(session.bucketed_count(), 0);
    assert!(session.quadrant_range().is_none());
    assert!(session.node(key).is_none());
    assert_eq!(session.bucket(3).count(), 0);

    // Full capacity available again
    for i in 0..4 {
        session.add_node(node(i, 1)).unwrap();
    }
}
