use slidemenu_ui_graphics::{Rect, Size};
use slidemenu_ui_layout::{Constraints, LayoutChild};

/// The two fixed slots a panel manager can mount panels into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Underneath the sliding surface, revealed when open.
    Menu,
    /// The sliding surface's single child.
    Content,
}

/// Frame that hosts whatever panel the manager mounts into a [`SlotId`].
///
/// Fills its parent unless a width override is set. Panel content is swapped
/// by the manager; the slot itself lives as long as the container.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSlot {
    id: SlotId,
    width_override: Option<f32>,
    measured_size: Size,
    bounds: Rect,
    gone: bool,
    invalidations: u32,
}

impl PanelSlot {
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            width_override: None,
            measured_size: Size::ZERO,
            bounds: Rect::default(),
            gone: false,
            invalidations: 0,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn width_override(&self) -> Option<f32> {
        self.width_override
    }

    pub fn set_width_override(&mut self, width: Option<f32>) {
        self.width_override = width;
    }

    pub fn set_gone(&mut self, gone: bool) {
        self.gone = gone;
    }

    /// Marks the slot's content as needing a redraw.
    pub fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    pub fn invalidation_count(&self) -> u32 {
        self.invalidations
    }
}

impl LayoutChild for PanelSlot {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let wanted_width = self.width_override.unwrap_or(constraints.max_width);
        let (width, height) = constraints.constrain(wanted_width, constraints.max_height);
        self.measured_size = Size::new(width, height);
        self.measured_size
    }

    fn measured_size(&self) -> Size {
        self.measured_size
    }

    fn place(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn is_gone(&self) -> bool {
        self.gone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_parent_by_default() {
        let mut slot = PanelSlot::new(SlotId::Content);
        let size = slot.measure(Constraints::tight(480.0, 800.0));
        assert_eq!(size, Size::new(480.0, 800.0));
    }

    #[test]
    fn width_override_is_clamped_to_constraints() {
        let mut slot = PanelSlot::new(SlotId::Menu);
        slot.set_width_override(Some(408.0));
        assert_eq!(
            slot.measure(Constraints::loose(480.0, 800.0)),
            Size::new(408.0, 800.0)
        );

        slot.set_width_override(Some(900.0));
        assert_eq!(
            slot.measure(Constraints::loose(480.0, 800.0)),
            Size::new(480.0, 800.0)
        );
    }
}
