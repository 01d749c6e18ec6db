use slidemenu_ui_graphics::Point;

/// Phase of a single-pointer touch gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

impl TouchAction {
    /// Up and Cancel both end the gesture.
    pub fn ends_gesture(self) -> bool {
        matches!(self, TouchAction::Up | TouchAction::Cancel)
    }
}

/// A touch sample in the receiving widget's local coordinates.
///
/// Times are host milliseconds. `down_time_ms` is the time of the Down that
/// started the gesture and is repeated on every event of that gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub position: Point,
    pub event_time_ms: u64,
    pub down_time_ms: u64,
}

impl TouchEvent {
    pub fn new(action: TouchAction, position: Point, event_time_ms: u64, down_time_ms: u64) -> Self {
        Self {
            action,
            position,
            event_time_ms,
            down_time_ms,
        }
    }

    /// Starts a gesture: a Down whose down time is its own event time.
    pub fn down(position: Point, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, position, time_ms, time_ms)
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Milliseconds since the gesture's Down.
    pub fn gesture_duration_ms(&self) -> u64 {
        self.event_time_ms.saturating_sub(self.down_time_ms)
    }

    /// Same sample re-labelled, e.g. turned into a Cancel for a child losing the gesture.
    pub fn with_action(self, action: TouchAction) -> Self {
        Self { action, ..self }
    }
}

/// Anything the host can deliver touch events to.
///
/// Returns true when the event was consumed.
pub trait TouchTarget {
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool;
}

impl<F> TouchTarget for F
where
    F: FnMut(&TouchEvent) -> bool,
{
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_duration_saturates() {
        let event = TouchEvent::new(TouchAction::Up, Point::ZERO, 10, 40);
        assert_eq!(event.gesture_duration_ms(), 0);

        let event = TouchEvent::new(TouchAction::Up, Point::ZERO, 740, 40);
        assert_eq!(event.gesture_duration_ms(), 700);
    }

    #[test]
    fn closures_are_touch_targets() {
        let mut seen = Vec::new();
        let mut target = |event: &TouchEvent| {
            seen.push(event.action);
            true
        };
        let down = TouchEvent::down(Point::new(1.0, 2.0), 0);
        assert!(target.on_touch_event(&down));
        assert!(target.on_touch_event(&down.with_action(TouchAction::Cancel)));
        assert_eq!(seen, vec![TouchAction::Down, TouchAction::Cancel]);
    }
}
