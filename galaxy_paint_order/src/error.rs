//! Error types for Galaxy paint ordering
//!
//! Arrangement performs no I/O, so every error here is a violated
//! precondition: bad rotation, bad quadrant index, full arena, or a chain
//! that no longer threads the nodes it was built from.

use std::fmt;

/// Result type for paint ordering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Paint ordering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Camera rotation outside 0..=3
    InvalidRotation(u8),

    /// Quadrant index does not fit in the session's bucket table
    QuadrantOutOfRange {
        /// Offending quadrant index
        index: u32,
        /// Number of buckets in the table
        quadrant_count: u32,
    },

    /// Node arena is full
    CapacityExceeded {
        /// Maximum number of nodes the session accepts
        capacity: usize,
    },

    /// Node key does not belong to the session
    InvalidNode(String),

    /// Chain contains a cycle or lost / gained nodes
    MalformedChain(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRotation(rotation) => {
                write!(f, "Invalid rotation: {} (expected 0..=3)", rotation)
            }
            Error::QuadrantOutOfRange { index, quadrant_count } => write!(
                f,
                "Quadrant index {} out of range (table holds {} quadrants)",
                index, quadrant_count
            ),
            Error::CapacityExceeded { capacity } => {
                write!(f, "Paint session capacity exceeded ({} nodes)", capacity)
            }
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::MalformedChain(msg) => write!(f, "Malformed chain: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at the point it is raised and evaluate to it.
///
/// # Example
///
/// ```ignore
/// return Err(paint_err!("galaxy_paint::Arranger", Error::InvalidRotation(7)));
/// ```
#[macro_export]
macro_rules! paint_err {
    ($source:expr, $error:expr) => {{
        let error: $crate::galaxy_paint::Error = $error;
        $crate::paint_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
