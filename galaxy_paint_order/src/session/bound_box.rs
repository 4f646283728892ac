/// World-space bounding box of a paint node.
///
/// Half-open on every axis: a box covers `x..x_end`, `y..y_end`, `z..z_end`.
/// Boxes are set once by the populator and never modified by the sorter.

use glam::IVec3;

/// Axis-aligned 3D interval in world units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundBox {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub x_end: i32,
    pub y_end: i32,
    pub z_end: i32,
}

impl BoundBox {
    /// Create a box from its six bounds
    pub const fn new(x: i32, y: i32, z: i32, x_end: i32, y_end: i32, z_end: i32) -> Self {
        Self { x, y, z, x_end, y_end, z_end }
    }

    /// Create a box from an origin corner and a size
    ///
    /// # Arguments
    ///
    /// * `origin` - Lowest corner (x, y, z)
    /// * `size` - Extent along each axis (may be zero)
    pub fn from_origin_size(origin: IVec3, size: IVec3) -> Self {
        let end = origin + size;
        Self::new(origin.x, origin.y, origin.z, end.x, end.y, end.z)
    }

    /// Lowest corner (x, y, z)
    pub fn origin(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Exclusive upper corner (x_end, y_end, z_end)
    pub fn end(&self) -> IVec3 {
        IVec3::new(self.x_end, self.y_end, self.z_end)
    }

    /// Whether the box has no volume (some axis is empty or inverted).
    ///
    /// Flat sprites (floor decals, walls seen edge-on) are degenerate; the
    /// overlap predicates still accept them.
    pub fn is_degenerate(&self) -> bool {
        self.x_end <= self.x || self.y_end <= self.y || self.z_end <= self.z
    }
}

#[cfg(test)]
#[path = "bound_box_tests.rs"]
mod tests;
