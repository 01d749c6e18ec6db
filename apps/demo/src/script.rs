use slidemenu_ui::{PanelContainer, Point, TouchAction, TouchEvent, TouchTarget};

/// Upper bound on frames for one settle step.
const MAX_FRAMES: usize = 600;

pub enum Step {
    Click,
    /// Event with times relative to the start of its gesture.
    Touch(TouchEvent),
    Wait(u64),
    Settle,
}

/// Stand-in for a mounted panel: consumes everything and counts it.
pub struct Panel {
    name: &'static str,
    events: usize,
}

impl Panel {
    pub fn new(name: &'static str) -> Self {
        Self { name, events: 0 }
    }

    pub fn events(&self) -> usize {
        self.events
    }
}

impl TouchTarget for Panel {
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.events += 1;
        log::trace!("{} got {:?}", self.name, event.action);
        true
    }
}

/// Session clock. Gesture-relative event times are shifted onto it.
#[derive(Default)]
pub struct Timeline {
    now_ms: u64,
    gesture_start_ms: u64,
}

impl Timeline {
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn stamp(&mut self, event: TouchEvent) -> TouchEvent {
        if event.action == TouchAction::Down {
            self.gesture_start_ms = self.now_ms;
        }
        let event_time_ms = self.gesture_start_ms + event.event_time_ms;
        self.now_ms = self.now_ms.max(event_time_ms);
        TouchEvent {
            event_time_ms,
            down_time_ms: self.gesture_start_ms,
            ..event
        }
    }

    pub fn settle(&mut self, container: &mut PanelContainer, frame_ms: u64) -> usize {
        let mut frames = 0;
        while frames < MAX_FRAMES {
            frames += 1;
            if !container.tick(self.now_ms * 1_000_000) {
                break;
            }
            self.advance(frame_ms);
        }
        frames
    }
}

fn touch(action: TouchAction, x: f32, y: f32, at_ms: u64) -> Step {
    Step::Touch(TouchEvent::new(action, Point::new(x, y), at_ms, 0))
}

/// Horizontal gesture from `from_x` to `to_x` in `moves` steps `step_ms` apart.
fn swipe(from_x: f32, to_x: f32, y: f32, moves: u64, step_ms: u64, hold_ms: u64) -> Vec<Step> {
    let mut steps = vec![touch(TouchAction::Down, from_x, y, 0)];
    for step in 1..=moves {
        let x = from_x + (to_x - from_x) * step as f32 / moves as f32;
        steps.push(touch(TouchAction::Move, x, y, step * step_ms));
    }
    steps.push(touch(TouchAction::Up, to_x, y, moves * step_ms + hold_ms));
    steps
}

pub fn session(width: f32, height: f32) -> Vec<Step> {
    let y = height / 2.0;
    let content_strip = width - 40.0;

    let mut steps = vec![Step::Click, Step::Settle, Step::Wait(500)];

    // Tap the content strip left visible while open.
    steps.push(touch(TouchAction::Down, content_strip, y, 0));
    steps.push(touch(TouchAction::Up, content_strip, y, 60));
    steps.extend([Step::Settle, Step::Wait(500)]);

    // Drag a little, pause, release: not far enough to open.
    steps.extend(swipe(80.0, 180.0, y, 10, 30, 250));
    steps.extend([Step::Settle, Step::Wait(500)]);

    // Quick swipe to the right: opens.
    steps.extend(swipe(80.0, 200.0, y, 6, 8, 0));
    steps.push(Step::Settle);
    steps
}
