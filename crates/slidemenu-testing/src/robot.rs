//! Robot-style driver for touch gestures and frames.
//!
//! The robot owns a virtual clock in milliseconds. Each gesture helper
//! returns the events it produced so tests can feed them to a surface, a
//! dispatcher, or a whole container.
//!
//! ```
//! use slidemenu_testing::robot::{laid_out_surface, GestureRobot};
//! use slidemenu_ui::SurfaceConfig;
//!
//! let mut surface = laid_out_surface(SurfaceConfig::default(), 480.0, 800.0);
//! let mut robot = GestureRobot::new();
//!
//! surface.open();
//! let tap = robot.tap(470.0, 400.0);
//! robot.feed(&mut surface, &tap);
//! robot.settle(&mut surface);
//!
//! assert!(!surface.is_open());
//! ```

use slidemenu_animation::Scroller;
use slidemenu_foundation::{TouchAction, TouchEvent};
use slidemenu_ui::{PanelSlot, SlidingSurface, SlotId, SurfaceConfig};
use slidemenu_ui_graphics::Point;
use slidemenu_ui_layout::{Constraints, LayoutChild};

/// Frame interval used when settling animations (~60 FPS).
pub const FRAME_MS: u64 = 16;

/// Upper bound on frames [`GestureRobot::settle`] will run.
const MAX_SETTLE_FRAMES: usize = 1_000;

#[derive(Debug, Clone, Default)]
pub struct GestureRobot {
    now_ms: u64,
    down_time_ms: u64,
    position: Point,
}

impl GestureRobot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the virtual clock at `now_ms`.
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.now_ms * 1_000_000
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    fn event(&self, action: TouchAction) -> TouchEvent {
        TouchEvent::new(action, self.position, self.now_ms, self.down_time_ms)
    }

    pub fn down(&mut self, x: f32, y: f32) -> TouchEvent {
        self.position = Point::new(x, y);
        self.down_time_ms = self.now_ms;
        self.event(TouchAction::Down)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> TouchEvent {
        self.position = Point::new(x, y);
        self.event(TouchAction::Move)
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> TouchEvent {
        self.move_to(self.position.x + dx, self.position.y + dy)
    }

    pub fn up(&mut self) -> TouchEvent {
        self.event(TouchAction::Up)
    }

    pub fn cancel(&mut self) -> TouchEvent {
        self.event(TouchAction::Cancel)
    }

    /// Down, then `steps` evenly spaced moves `step_ms` apart, then Up at `to`.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32, step_ms: u64) -> Vec<TouchEvent> {
        let steps = steps.max(1);
        let mut events = vec![self.down(from.x, from.y)];
        for step in 1..=steps {
            self.advance(step_ms);
            let fraction = step as f32 / steps as f32;
            events.push(self.move_to(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            ));
        }
        events.push(self.up());
        events
    }

    /// A quick horizontal swipe by `dx`: 5 moves, 8 ms apart.
    pub fn fling(&mut self, x: f32, y: f32, dx: f32) -> Vec<TouchEvent> {
        self.drag(Point::new(x, y), Point::new(x + dx, y), 5, 8)
    }

    /// A slow horizontal drag by `dx` that pauses before release, so the
    /// release carries no velocity.
    pub fn slow_drag(&mut self, x: f32, y: f32, dx: f32) -> Vec<TouchEvent> {
        let mut events = self.drag(Point::new(x, y), Point::new(x + dx, y), 10, 30);
        let up = events.pop().expect("drag ends with up");
        self.advance(200);
        events.push(TouchEvent {
            event_time_ms: self.now_ms,
            ..up
        });
        events
    }

    /// Down and Up in place, 50 ms apart.
    pub fn tap(&mut self, x: f32, y: f32) -> Vec<TouchEvent> {
        let down = self.down(x, y);
        self.advance(50);
        vec![down, self.up()]
    }

    /// Delivers `events` straight to the surface's own handler.
    pub fn feed<C: LayoutChild, S: Scroller>(
        &self,
        surface: &mut SlidingSurface<C, S>,
        events: &[TouchEvent],
    ) -> Vec<bool> {
        events
            .iter()
            .map(|event| surface.on_touch_event(event))
            .collect()
    }

    /// Offers `events` to the surface's interception check, returning each verdict.
    pub fn offer<C: LayoutChild, S: Scroller>(
        &self,
        surface: &mut SlidingSurface<C, S>,
        events: &[TouchEvent],
    ) -> Vec<bool> {
        events
            .iter()
            .map(|event| surface.on_intercept_touch_event(event))
            .collect()
    }

    /// Runs frames until the surface stops animating. Returns the frame count.
    pub fn settle<C: LayoutChild, S: Scroller>(&mut self, surface: &mut SlidingSurface<C, S>) -> usize {
        let mut frames = 0;
        while frames < MAX_SETTLE_FRAMES {
            frames += 1;
            if !surface.tick(self.frame_time_nanos()) {
                break;
            }
            self.advance(FRAME_MS);
        }
        frames
    }

    /// Like [`GestureRobot::settle`], recording the offset after every frame.
    pub fn settle_recording<C: LayoutChild, S: Scroller>(
        &mut self,
        surface: &mut SlidingSurface<C, S>,
    ) -> Vec<i32> {
        let mut offsets = Vec::new();
        while offsets.len() < MAX_SETTLE_FRAMES {
            let running = surface.tick(self.frame_time_nanos());
            offsets.push(surface.scroll_x());
            if !running {
                break;
            }
            self.advance(FRAME_MS);
        }
        offsets
    }
}

/// A surface holding a content slot, measured and laid out at `width` x `height`.
pub fn laid_out_surface(config: SurfaceConfig, width: f32, height: f32) -> SlidingSurface<PanelSlot> {
    let mut surface = SlidingSurface::with_child(config, PanelSlot::new(SlotId::Content));
    surface
        .measure(Constraints::tight(width, height))
        .expect("tight constraints are exact");
    surface.layout();
    surface
}
