use slidemenu_ui_graphics::{Rect, Size};

use crate::Constraints;

/// A child node as seen by a slidemenu container.
///
/// The host view tree implements this for whatever it mounts into a slot.
/// Containers call `measure` then `place`, and read `bounds` back for hit
/// testing.
pub trait LayoutChild {
    /// Measures the child under `constraints` and returns its measured size.
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// Size reported by the most recent `measure`.
    fn measured_size(&self) -> Size;

    /// Positions the child in its parent's coordinate space.
    fn place(&mut self, bounds: Rect);

    /// Where the child was last placed.
    fn bounds(&self) -> Rect;

    /// Gone children take no space and are not placed.
    fn is_gone(&self) -> bool {
        false
    }
}
