/// Camera rotation in quarter turns.

use crate::error::Error;

/// Viewing direction of the isometric camera
///
/// Each quarter turn changes which horizontal axis points toward the
/// camera, and therefore which overlap predicate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rotation {
    R0 = 0,
    R90 = 1,
    R180 = 2,
    R270 = 3,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Quarter-turn count (0..=3)
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Rotation {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rotation::R0),
            1 => Ok(Rotation::R90),
            2 => Ok(Rotation::R180),
            3 => Ok(Rotation::R270),
            other => Err(Error::InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> u8 {
        rotation as u8
    }
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
