/*!
# Galaxy Paint Order

Draw-order resolution for isometric paint sessions.

Paint nodes are bucketed by quadrant (a diagonal distance band relative to
the camera) before they reach this crate. Bucketing alone misorders nodes
whose boxes overlap across a band boundary; the arranger merges the buckets
into one draw chain and re-splices those nodes.

## Architecture

- **PaintSession**: per-frame node arena, quadrant buckets and populated range
- **DrawChain**: the arena threaded in draw order behind a sentinel
- **Rotation** / **overlaps**: the four rotation-specific overlap predicates
- **Arranger**: builds the chain and resolves every quadrant boundary

Sessions share no state, so independent sessions can be arranged on
separate threads.
*/

// Internal modules
mod error;
pub mod log;
pub mod session;
pub mod sort;

// Main galaxy_paint namespace module
pub mod galaxy_paint {
    // Error types
    pub use crate::error::{Error, Result};

    // Session types
    pub use crate::session::{
        AttachedImage, BoundBox, PaintNode, PaintNodeKey, PaintSession,
        QuadrantFlags, QuadrantRange, SessionConfig,
    };

    // Sorting
    pub use crate::sort::{Arranger, DrawChain, Rotation};

    // Logging sub-module (types and global logger API, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_max_severity, max_severity, is_enabled,
        };
    }

    // Overlap predicates sub-module
    pub mod overlap {
        pub use crate::sort::{
            overlaps, predicate_for, OverlapFn, OVERLAP_TABLE,
            overlaps_r0, overlaps_r90, overlaps_r180, overlaps_r270,
        };
    }
}

// Re-export math library at crate root
pub use glam;
