//! The single-child surface that slides over the menu.
//!
//! Scroll offset convention: `0` shows the menu fully (open), and
//! [`SlidingSurface::actual_slider_width`] hides it (closed). The child is
//! laid out at `actual_slider_width` and never moves; only the viewport does.

mod gesture;
mod layout;

use std::time::Duration;

use slidemenu_animation::{Scroller, TweenScroller};
use slidemenu_foundation::VelocityTracker;
use slidemenu_ui_graphics::Point;
use slidemenu_ui_layout::LayoutChild;

use crate::listener::{ListenerSlot, StateRequester};
use crate::{SlidingError, SurfaceConfig, TouchState, DEFAULT_SLIDER_WIDTH};

/// Rounds of listener-issued requests applied per operation. Anything queued
/// beyond that waits for the next operation or frame.
const MAX_REQUEST_ROUNDS: usize = 8;

pub struct SlidingSurface<C, S = TweenScroller> {
    config: SurfaceConfig,
    child: Option<C>,
    slider_width: f32,
    open: bool,
    touch_state: TouchState,
    scroll_x: i32,
    measured_width: i32,
    /// Measured width and actual slider width from the last measure pass.
    last_seen_extent: Option<(i32, i32)>,
    first_layout: bool,
    scroller: S,
    last_motion: Point,
    velocity: VelocityTracker,
    snap_velocity: i32,
    listener: ListenerSlot,
    requests: StateRequester,
    redraw_requested: bool,
}

impl<C: LayoutChild> SlidingSurface<C> {
    pub fn new(config: SurfaceConfig) -> Self {
        let scroller = TweenScroller::new(config.easing);
        Self::with_scroller(config, scroller)
    }

    /// A surface that starts out holding `child`.
    pub fn with_child(config: SurfaceConfig, child: C) -> Self {
        let mut surface = Self::new(config);
        surface.child = Some(child);
        surface
    }
}

impl<C: LayoutChild, S: Scroller> SlidingSurface<C, S> {
    pub fn with_scroller(config: SurfaceConfig, scroller: S) -> Self {
        let mut slider_width = config.slider_width_fraction;
        if !(0.0..=1.0).contains(&slider_width) {
            log::warn!("configured slider width {slider_width} out of range; using {DEFAULT_SLIDER_WIDTH}");
            slider_width = DEFAULT_SLIDER_WIDTH;
        }
        Self {
            slider_width,
            snap_velocity: config.snap_velocity_px(),
            config,
            child: None,
            open: false,
            touch_state: TouchState::Rest,
            scroll_x: 0,
            measured_width: 0,
            last_seen_extent: None,
            first_layout: true,
            scroller,
            last_motion: Point::ZERO,
            velocity: VelocityTracker::new(),
            listener: ListenerSlot::default(),
            requests: StateRequester::default(),
            redraw_requested: false,
        }
    }

    /// Attaches the surface's only child.
    ///
    /// A second attach is rejected and the first child stays in place.
    pub fn attach_child(&mut self, child: C) -> Result<(), SlidingError> {
        if self.child.is_some() {
            log::warn!("rejecting second child for sliding surface");
            return Err(SlidingError::ChildAlreadyAttached);
        }
        self.child = Some(child);
        self.invalidate();
        Ok(())
    }

    pub fn child(&self) -> Option<&C> {
        self.child.as_ref()
    }

    pub fn child_mut(&mut self) -> Option<&mut C> {
        self.child.as_mut()
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_x(&self) -> i32 {
        self.scroll_x
    }

    pub fn touch_state(&self) -> TouchState {
        self.touch_state
    }

    pub fn is_animating(&self) -> bool {
        !self.scroller.is_finished()
    }

    pub fn measured_width(&self) -> i32 {
        self.measured_width
    }

    /// Fraction of the width the menu takes up when open.
    pub fn slider_width(&self) -> f32 {
        self.slider_width
    }

    /// Accepts fractions in `[0, 1]`; anything else leaves the current value.
    ///
    /// Takes effect from the next measure pass, which also moves the offset
    /// onto the new open or closed position.
    pub fn set_slider_width(&mut self, fraction: f32) -> Result<(), SlidingError> {
        if !(0.0..=1.0).contains(&fraction) {
            log::warn!("rejecting slider width {fraction}");
            return Err(SlidingError::InvalidMenuWidth(fraction));
        }
        self.slider_width = fraction;
        Ok(())
    }

    /// Pixel distance between the open and closed offsets.
    pub fn actual_slider_width(&self) -> i32 {
        (self.measured_width as f32 * self.slider_width).round() as i32
    }

    /// Replaces the state listener. It is called with the new state on every
    /// state change, including changes to the state the surface is already in.
    pub fn set_on_state_changed_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener.replace(Some(Box::new(listener)));
    }

    pub fn clear_on_state_changed_listener(&mut self) {
        self.listener.replace(None);
    }

    /// Handle through which listeners queue follow-up state changes.
    pub fn state_requester(&self) -> StateRequester {
        self.requests.clone()
    }

    pub fn open(&mut self) {
        self.set_current_state(true, false);
        self.drain_requests();
    }

    pub fn animate_open(&mut self) {
        self.set_current_state(true, true);
        self.drain_requests();
    }

    pub fn close(&mut self) {
        self.set_current_state(false, false);
        self.drain_requests();
    }

    pub fn animate_close(&mut self) {
        self.set_current_state(false, true);
        self.drain_requests();
    }

    pub fn toggle(&mut self) {
        self.set_current_state(!self.open, false);
        self.drain_requests();
    }

    pub fn animate_toggle(&mut self) {
        self.set_current_state(!self.open, true);
        self.drain_requests();
    }

    /// Advances the running animation to `frame_time_nanos`.
    ///
    /// Returns true while another frame is needed.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        if let Some(tick) = self.scroller.tick(frame_time_nanos) {
            log::trace!("scroll tick -> {}", tick.offset);
            self.scroll_x = tick.offset;
            self.invalidate();
            if tick.finished {
                log::debug!("settled at {} (open: {})", self.scroll_x, self.open);
            }
            self.drain_requests();
        }
        self.is_animating()
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }

    fn target_offset(&self, open: bool) -> i32 {
        if open {
            0
        } else {
            self.actual_slider_width()
        }
    }

    fn set_current_state(&mut self, open: bool, animate: bool) {
        if animate {
            self.snap_to_state(open, Some(self.config.animation_duration));
        } else {
            self.open = open;
            self.listener.notify(open);
            self.scroller.abort();
            self.scroll_x = self.target_offset(open);
        }
        self.invalidate();
    }

    /// Decides the release target from position alone.
    fn snap_to_destination(&mut self) {
        let threshold = self.measured_width / self.config.swipe_fraction_denominator.max(1);
        let delta = self.scroll_x - self.target_offset(self.open);

        let open = if self.open && threshold < delta {
            false
        } else if !self.open && threshold < -delta {
            true
        } else {
            self.open
        };
        log::debug!("release at {} (drag {delta}), snapping open: {open}", self.scroll_x);
        self.snap_to_state(open, None);
    }

    /// Animates to `open`. Without an explicit duration the animation takes
    /// the share of the base duration matching the distance left.
    fn snap_to_state(&mut self, open: bool, duration: Option<Duration>) {
        self.open = open;
        self.listener.notify(open);

        let target = self.target_offset(open);
        let delta = target - self.scroll_x;
        let duration = duration.unwrap_or_else(|| self.proportional_duration(delta));
        self.scroller.start(self.scroll_x, target, duration);
        self.invalidate();
    }

    fn proportional_duration(&self, delta: i32) -> Duration {
        if self.measured_width <= 0 {
            return Duration::ZERO;
        }
        let share = f64::from(delta.unsigned_abs()) / f64::from(self.measured_width);
        self.config.animation_duration.mul_f64(share)
    }

    /// Applies requests queued by listeners, without recursing into itself.
    fn drain_requests(&mut self) {
        for _ in 0..MAX_REQUEST_ROUNDS {
            let pending = self.requests.take_all();
            if pending.is_empty() {
                return;
            }
            for request in pending {
                let open = request.resolve(self.open);
                if open == self.open {
                    log::debug!("dropping {request:?}: already in that state");
                    continue;
                }
                self.set_current_state(open, request.animate());
            }
        }
        let left = self.requests.pending();
        if left > 0 {
            log::warn!("{left} state requests still queued after {MAX_REQUEST_ROUNDS} rounds");
        }
    }
}

impl<C, S> std::fmt::Debug for SlidingSurface<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingSurface")
            .field("open", &self.open)
            .field("scroll_x", &self.scroll_x)
            .field("touch_state", &self.touch_state)
            .field("slider_width", &self.slider_width)
            .field("measured_width", &self.measured_width)
            .field("has_child", &self.child.is_some())
            .finish()
    }
}
