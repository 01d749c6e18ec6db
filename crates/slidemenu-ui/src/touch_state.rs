/// What the current gesture has been classified as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TouchState {
    /// No drag detected yet (or no gesture in progress).
    #[default]
    Rest,
    /// The surface owns the gesture.
    HorizontalScrolling,
    /// Nested content owns the gesture.
    VerticalScrolling,
}

impl TouchState {
    /// Advances the classification from the displacement since the touch origin.
    ///
    /// Only `Rest` can change; horizontal movement is tested first, so a move
    /// that crosses both thresholds at once belongs to the surface.
    pub fn classify(self, dx: f32, dy: f32, touch_slop: f32) -> TouchState {
        match self {
            TouchState::Rest if exceeds_slop(dx, touch_slop) => TouchState::HorizontalScrolling,
            TouchState::Rest if exceeds_slop(dy, touch_slop) => TouchState::VerticalScrolling,
            decided => decided,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == TouchState::HorizontalScrolling
    }
}

/// Whole-pixel comparison: a 10.6 px move against a 10 px slop does not count.
fn exceeds_slop(delta: f32, touch_slop: f32) -> bool {
    delta.abs().trunc() > touch_slop
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: f32 = 10.0;

    #[test]
    fn horizontal_move_beyond_slop_claims_gesture() {
        assert_eq!(
            TouchState::Rest.classify(20.0, 5.0, SLOP),
            TouchState::HorizontalScrolling
        );
        assert_eq!(
            TouchState::Rest.classify(-20.0, 5.0, SLOP),
            TouchState::HorizontalScrolling
        );
    }

    #[test]
    fn vertical_move_beyond_slop_yields_gesture() {
        assert_eq!(
            TouchState::Rest.classify(5.0, 20.0, SLOP),
            TouchState::VerticalScrolling
        );
    }

    #[test]
    fn jitter_stays_at_rest() {
        assert_eq!(TouchState::Rest.classify(10.0, -10.9, SLOP), TouchState::Rest);
    }

    #[test]
    fn horizontal_wins_when_both_cross() {
        assert_eq!(
            TouchState::Rest.classify(30.0, 30.0, SLOP),
            TouchState::HorizontalScrolling
        );
    }

    #[test]
    fn decided_states_are_absorbing() {
        assert_eq!(
            TouchState::VerticalScrolling.classify(100.0, 0.0, SLOP),
            TouchState::VerticalScrolling
        );
        assert_eq!(
            TouchState::HorizontalScrolling.classify(0.0, 100.0, SLOP),
            TouchState::HorizontalScrolling
        );
    }
}
