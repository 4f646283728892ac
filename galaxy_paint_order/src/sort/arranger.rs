/// Arranger: public entry point of paint ordering.
///
/// Builds the draw chain from the session's buckets, then sweeps the
/// quadrant boundaries from back to front, reusing the resolver cursor from
/// one boundary to the next.

use crate::error::{Error, Result};
use crate::session::PaintSession;
use super::boundary_resolver::resolve_boundary;
use super::chain_builder::build_chain;
use super::rotation::Rotation;

/// Paint session arranger
///
/// # Example
///
/// ```
/// use galaxy_paint_order::galaxy_paint::{Arranger, BoundBox, PaintNode, PaintSession, SessionConfig};
///
/// let mut session = PaintSession::new(SessionConfig::default());
/// session.add_node(PaintNode::new(1, BoundBox::new(0, 0, 0, 32, 32, 8), 10))?;
/// session.add_node(PaintNode::new(2, BoundBox::new(32, 0, 0, 64, 32, 8), 11))?;
///
/// Arranger::arrange(&mut session, 0)?;
/// for (_key, node) in session.draw_order() {
///     // draw node.image_id at node.screen_pos...
/// #   let _ = node;
/// }
/// # Ok::<(), galaxy_paint_order::galaxy_paint::Error>(())
/// ```
pub struct Arranger;

impl Arranger {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::paint_error!("galaxy_paint::Arranger", "Arrangement rejected: {}", error);
        error
    }

    /// Arrange a session for a raw camera rotation
    ///
    /// # Arguments
    ///
    /// * `session` - Session filled by the populator
    /// * `rotation` - Camera rotation in quarter turns (0..=3)
    ///
    /// # Errors
    ///
    /// - `InvalidRotation` if `rotation > 3` (the session is left untouched)
    /// - `MalformedChain` if chain verification is enabled and fails
    pub fn arrange(session: &mut PaintSession, rotation: u8) -> Result<()> {
        let rotation = Rotation::try_from(rotation).map_err(Self::log_and_return_error)?;
        Self::arrange_with_rotation(session, rotation)
    }

    /// Arrange a session for an already validated rotation
    ///
    /// Rebuilds the chain from the buckets, so arranging twice yields the
    /// same order as arranging once.
    pub fn arrange_with_rotation(session: &mut PaintSession, rotation: Rotation) -> Result<()> {
        let range = session.quadrant_range();
        let verify = session.config().verify_chain;
        let expected = session.bucketed_count();

        let (chain, quadrants) = session.parts_mut();
        let threaded = build_chain(chain, quadrants, range);

        if let Some(range) = range {
            let mut cursor = chain.head();
            for quadrant in range.back..range.front {
                let classify_same = quadrant == range.back;
                cursor = resolve_boundary(chain, cursor, quadrant, classify_same, rotation);
            }

            crate::paint_debug!(
                "galaxy_paint::Arranger",
                "Arranged {} nodes over quadrants {}..={} ({:?})",
                threaded, range.back, range.front, rotation
            );
        }

        if verify {
            if threaded != expected {
                return Err(Self::log_and_return_error(Error::MalformedChain(format!(
                    "buckets thread {} nodes, session holds {}",
                    threaded, expected
                ))));
            }
            chain.verify(expected).map_err(Self::log_and_return_error)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "arranger_tests.rs"]
mod tests;
