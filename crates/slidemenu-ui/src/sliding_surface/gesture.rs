//! Touch handling: the interception decision and the surface's own drag.
//!
//! The host offers each event to [`SlidingSurface::on_intercept_touch_event`]
//! while a descendant owns the gesture, and delivers it to
//! [`SlidingSurface::on_touch_event`] once the surface does. Horizontal drags
//! are taken over; once a gesture is classified vertical, the descendants
//! keep it until it ends.

use slidemenu_animation::Scroller;
use slidemenu_foundation::{TouchAction, TouchEvent};
use slidemenu_ui_graphics::Point;
use slidemenu_ui_layout::LayoutChild;

use super::SlidingSurface;
use crate::TouchState;

impl<C: LayoutChild, S: Scroller> SlidingSurface<C, S> {
    /// Returns true when the surface takes over the rest of the gesture.
    pub fn on_intercept_touch_event(&mut self, event: &TouchEvent) -> bool {
        let intercept = match event.action {
            TouchAction::Down => {
                self.last_motion = event.position;
                self.touch_state = TouchState::Rest;
                // While open, every gesture belongs to the surface so a tap can close it.
                self.open
            }
            TouchAction::Move => match self.touch_state {
                TouchState::HorizontalScrolling => true,
                TouchState::VerticalScrolling => false,
                TouchState::Rest => self.classify_move(event),
            },
            TouchAction::Up | TouchAction::Cancel => {
                self.touch_state = TouchState::Rest;
                false
            }
        };

        // Own velocity tracking starts with the first event we handle ourselves.
        self.velocity.clear();
        intercept
    }

    fn classify_move(&mut self, event: &TouchEvent) -> bool {
        let (dx, dy) = event.position.delta_from(self.last_motion);
        let slop = self.config.view_configuration.touch_slop;
        self.touch_state = self.touch_state.classify(dx, dy, slop);

        match self.touch_state {
            TouchState::HorizontalScrolling => {
                log::debug!("horizontal drag detected (dx {dx}, dy {dy}); intercepting");
                self.last_motion.x = event.x();
                true
            }
            TouchState::VerticalScrolling => {
                log::debug!("vertical drag detected (dx {dx}, dy {dy}); leaving it to content");
                self.last_motion.y = event.y();
                false
            }
            TouchState::Rest => false,
        }
    }

    /// Handles an event the surface owns. Returns false when the surface
    /// declines the gesture.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.velocity.add_movement(event.event_time_ms, event.x());

        let handled = match event.action {
            TouchAction::Down => self.handle_down(event),
            TouchAction::Move => {
                self.handle_move(event);
                true
            }
            TouchAction::Up => {
                self.handle_up(event);
                true
            }
            TouchAction::Cancel => {
                self.handle_cancel();
                true
            }
        };

        self.drain_requests();
        handled
    }

    fn handle_down(&mut self, event: &TouchEvent) -> bool {
        // Catching a moving surface continues straight into a drag.
        let caught_animation = !self.scroller.is_finished();
        if caught_animation {
            self.scroller.abort();
            log::debug!("touch down caught animation at {}", self.scroll_x);
        }

        self.last_motion.x = event.x();
        self.touch_state = if caught_animation {
            TouchState::HorizontalScrolling
        } else {
            TouchState::Rest
        };

        if !self.is_on_child(event.position) {
            self.velocity.clear();
            self.touch_state = TouchState::Rest;
            return false;
        }
        true
    }

    fn handle_move(&mut self, event: &TouchEvent) {
        let dx = event.x() - self.last_motion.x;
        let slop = self.config.view_configuration.touch_slop;
        if self.touch_state == TouchState::Rest {
            self.touch_state = self.touch_state.classify(dx, 0.0, slop);
        }

        if self.touch_state.is_horizontal() {
            let delta = (self.last_motion.x - event.x()) as i32;
            // Keep the sub-pixel remainder for the next move.
            self.last_motion.x -= delta as f32;
            self.scroll_by_clamped(delta);
        }
    }

    fn handle_up(&mut self, event: &TouchEvent) {
        match self.touch_state {
            TouchState::HorizontalScrolling => {
                let max = self.config.view_configuration.maximum_fling_velocity;
                let velocity = self.velocity.velocity_clamped(max) as i32;

                if velocity > self.snap_velocity {
                    log::debug!("fling {velocity} px/s toward open");
                    self.snap_to_state(true, None);
                } else if velocity < -self.snap_velocity {
                    log::debug!("fling {velocity} px/s toward closed");
                    self.snap_to_state(false, None);
                } else {
                    self.snap_to_destination();
                }
            }
            TouchState::Rest if event.gesture_duration_ms() < self.config.max_click_delay_ms() => {
                log::debug!("tap on surface; closing");
                self.set_current_state(false, true);
            }
            _ => {}
        }

        self.velocity.clear();
        self.touch_state = TouchState::Rest;
    }

    fn handle_cancel(&mut self) {
        self.velocity.clear();
        if !self.scroller.is_finished() {
            self.scroller.abort();
            log::debug!("gesture cancelled; animation frozen at {}", self.scroll_x);
        }
        self.touch_state = TouchState::Rest;
    }

    /// Scrolls by `delta`, but never past fully open or fully closed.
    fn scroll_by_clamped(&mut self, delta: i32) {
        let applied = if delta < 0 {
            delta.max(-self.scroll_x).min(0)
        } else {
            let available = self.max_scroll_x() - self.scroll_x;
            delta.min(available).max(0)
        };

        if applied != 0 {
            log::trace!("drag scroll by {applied}");
            self.scroll_x += applied;
            self.invalidate();
        }
    }

    /// The closed bound: child's right edge minus the viewport width.
    fn max_scroll_x(&self) -> i32 {
        match self.child.as_ref().filter(|child| !child.is_gone()) {
            Some(child) => (child.bounds().right().round() as i32 - self.measured_width).max(0),
            None => self.actual_slider_width(),
        }
    }

    /// True when `position` lands on the child as currently scrolled into view.
    fn is_on_child(&self, position: Point) -> bool {
        self.child
            .as_ref()
            .filter(|child| !child.is_gone())
            .is_some_and(|child| {
                child
                    .bounds()
                    .translate(-(self.scroll_x as f32), 0.0)
                    .contains(position)
            })
    }
}
