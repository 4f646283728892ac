/// Paint node types for the paint session.
///
/// A PaintNode is one image to draw, with the world-space box used to decide
/// its draw order. Nodes live in the session arena and are linked by
/// PaintNodeKey; they are never moved or copied once inserted.

use bitflags::bitflags;
use glam::IVec2;
use slotmap::new_key_type;
use super::bound_box::BoundBox;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a PaintNode within a PaintSession.
    ///
    /// Keys stay valid until the session is cleared.
    pub struct PaintNodeKey;
}

// ===== QUADRANT FLAGS =====

bitflags! {
    /// Per-boundary state written by the resolver.
    ///
    /// Only meaningful during one boundary pass; reset when the chain is
    /// rebuilt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QuadrantFlags: u8 {
        /// Tie not yet used as an occluder
        const PENDING = 1 << 0;
        /// May be spliced behind an occluder
        const NEXT    = 1 << 1;
        /// Belongs to an already resolved quadrant; candidate scans stop here
        const BEHIND  = 1 << 2;
        /// Beyond the boundary window
        const FARTHER = 1 << 7;
    }
}

// ===== ATTACHED IMAGE =====

/// Decoration drawn on top of its parent node (never sorted on its own).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachedImage {
    /// Image to draw
    pub image_id: u32,
    /// Optional remap / mask image
    pub colour_image_id: Option<u32>,
    /// Screen position relative to the parent
    pub screen_offset: IVec2,
}

impl AttachedImage {
    pub fn new(image_id: u32, screen_offset: IVec2) -> Self {
        Self {
            image_id,
            colour_image_id: None,
            screen_offset,
        }
    }
}

// ===== PAINT NODE =====

/// One sortable entry of a paint session.
///
/// The sorter only reads `bounds` and `quadrant_index`; the visual data is
/// carried through untouched for the renderer.
#[derive(Debug, Clone)]
pub struct PaintNode {
    /// Image to draw
    pub image_id: u32,
    /// Optional remap / mask image
    pub colour_image_id: Option<u32>,
    /// World-space footprint
    pub bounds: BoundBox,
    /// Screen position of the image
    pub screen_pos: IVec2,
    /// Tile coordinates of the map element that produced the node
    pub map_pos: IVec2,
    /// Draw band, assigned by the populator
    pub quadrant_index: u32,
    /// Decorations drawn with this node
    pub attached: Vec<AttachedImage>,
    /// Child nodes (in the arena, never in a bucket)
    pub children: Vec<PaintNodeKey>,
    /// Resolver state
    pub(crate) quadrant_flags: QuadrantFlags,
    /// Current draw order
    pub(crate) next: Option<PaintNodeKey>,
    /// Bucket membership, written by the populator API only
    pub(crate) bucket_next: Option<PaintNodeKey>,
}

impl PaintNode {
    /// Create a node for `image_id` in quadrant `quadrant_index`
    ///
    /// # Arguments
    ///
    /// * `image_id` - Image to draw
    /// * `bounds` - World-space footprint used for ordering
    /// * `quadrant_index` - Draw band computed by the populator
    pub fn new(image_id: u32, bounds: BoundBox, quadrant_index: u32) -> Self {
        Self {
            image_id,
            colour_image_id: None,
            bounds,
            screen_pos: IVec2::ZERO,
            map_pos: IVec2::ZERO,
            quadrant_index,
            attached: Vec::new(),
            children: Vec::new(),
            quadrant_flags: QuadrantFlags::empty(),
            next: None,
            bucket_next: None,
        }
    }

    /// Chain head placeholder. Never drawn.
    pub(crate) fn sentinel() -> Self {
        Self::new(0, BoundBox::default(), 0)
    }

    pub fn with_screen_pos(mut self, screen_pos: IVec2) -> Self {
        self.screen_pos = screen_pos;
        self
    }

    pub fn with_map_pos(mut self, map_pos: IVec2) -> Self {
        self.map_pos = map_pos;
        self
    }

    pub fn with_colour_image(mut self, colour_image_id: u32) -> Self {
        self.colour_image_id = Some(colour_image_id);
        self
    }

    /// Resolver state left by the last boundary pass that touched this node
    pub fn quadrant_flags(&self) -> QuadrantFlags {
        self.quadrant_flags
    }

    /// Next node in draw order
    pub fn next(&self) -> Option<PaintNodeKey> {
        self.next
    }
}
