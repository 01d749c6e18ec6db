//! Offset animators polled once per frame.

use std::time::Duration;

use crate::Easing;

/// One sample of a running scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTick {
    /// Offset the owner should scroll to for this frame.
    pub offset: i32,
    /// True on the frame that lands on the target; the scroller is idle afterwards.
    pub finished: bool,
}

/// Host-provided physics primitive that drives a scroll offset toward a target.
///
/// The start time is anchored on the first `tick` after `start`, so callers
/// never need a clock at the moment they kick an animation off.
pub trait Scroller {
    /// Begins animating from `from` to `to`, replacing any running animation.
    fn start(&mut self, from: i32, to: i32, duration: Duration);

    /// Samples the animation at `frame_time_nanos`. Returns `None` when idle.
    fn tick(&mut self, frame_time_nanos: u64) -> Option<ScrollTick>;

    /// Stops the animation where it is. The owner keeps its last applied offset.
    fn abort(&mut self);

    fn is_finished(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct ScrollRun {
    from: i32,
    to: i32,
    duration_nanos: u64,
    start_frame_time_nanos: Option<u64>,
}

impl ScrollRun {
    fn sample(&mut self, frame_time_nanos: u64, easing: Easing) -> ScrollTick {
        let start = *self.start_frame_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start);

        if self.duration_nanos == 0 || elapsed >= self.duration_nanos {
            return ScrollTick {
                offset: self.to,
                finished: true,
            };
        }

        let fraction = elapsed as f64 / self.duration_nanos as f64;
        let eased = easing.transform(fraction as f32);
        let distance = (self.to - self.from) as f32;
        ScrollTick {
            offset: self.from + (distance * eased).round() as i32,
            finished: false,
        }
    }
}

/// Time-based scroller that eases between two offsets.
#[derive(Debug, Clone, Default)]
pub struct TweenScroller {
    easing: Easing,
    run: Option<ScrollRun>,
}

impl TweenScroller {
    pub fn new(easing: Easing) -> Self {
        Self { easing, run: None }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Target of the running animation, if any.
    pub fn final_offset(&self) -> Option<i32> {
        self.run.map(|run| run.to)
    }
}

impl Scroller for TweenScroller {
    fn start(&mut self, from: i32, to: i32, duration: Duration) {
        let duration_nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        log::trace!("scroller start {from} -> {to} over {duration:?}");
        self.run = Some(ScrollRun {
            from,
            to,
            duration_nanos,
            start_frame_time_nanos: None,
        });
    }

    fn tick(&mut self, frame_time_nanos: u64) -> Option<ScrollTick> {
        let run = self.run.as_mut()?;
        let tick = run.sample(frame_time_nanos, self.easing);
        if tick.finished {
            self.run = None;
        }
        Some(tick)
    }

    fn abort(&mut self) {
        if self.run.take().is_some() {
            log::trace!("scroller aborted");
        }
    }

    fn is_finished(&self) -> bool {
        self.run.is_none()
    }
}

#[cfg(test)]
#[path = "tests/scroller_tests.rs"]
mod tests;
