use std::time::Duration;

use slidemenu_animation::Scroller;
use slidemenu_ui_graphics::{Rect, Size};
use slidemenu_ui_layout::{Constraints, LayoutChild};

use super::SlidingSurface;
use crate::SlidingError;

impl<C: LayoutChild, S: Scroller> SlidingSurface<C, S> {
    /// Measures the surface and its child with the same exact constraints.
    ///
    /// The first pass snaps closed. A later pass at a new width (rotation,
    /// window resize) or with a new slider width fraction corrects the offset
    /// on the next frame, keeping the open/closed state.
    pub fn measure(&mut self, constraints: Constraints) -> Result<Size, SlidingError> {
        if let Some(axis) = constraints.first_inexact_axis() {
            log::warn!("sliding surface measured with inexact {axis}: {constraints:?}");
            return Err(SlidingError::InexactConstraints { axis });
        }

        let size = Size::new(constraints.max_width, constraints.max_height);
        if let Some(child) = self.child.as_mut() {
            child.measure(constraints);
        }

        let width = size.width.round() as i32;
        self.measured_width = width;

        let extent = (width, self.actual_slider_width());
        if self.first_layout {
            self.first_layout = false;
            self.set_current_state(false, false);
        } else if self.last_seen_extent != Some(extent) {
            self.reflow(extent);
        }
        self.last_seen_extent = Some(extent);

        self.drain_requests();
        Ok(size)
    }

    /// `extent` is the measured width paired with the actual slider width.
    fn reflow(&mut self, extent: (i32, i32)) {
        let target = self.target_offset(self.open);
        log::debug!(
            "extent changed {:?} -> {extent:?}; correcting offset {} -> {target}",
            self.last_seen_extent,
            self.scroll_x
        );
        self.scroller.start(self.scroll_x, target, Duration::ZERO);
        self.invalidate();
    }

    /// Places the child one slider width to the right of the surface origin.
    pub fn layout(&mut self) {
        let left = self.actual_slider_width() as f32;
        if let Some(child) = self.child.as_mut().filter(|child| !child.is_gone()) {
            let size = child.measured_size();
            child.place(Rect::new(left, 0.0, size.width, size.height));
        }
    }
}
