//! Scroll animation for slidemenu
//!
//! A [`Scroller`] moves an integer offset from one value to another over a
//! duration. It is polled once per display frame by its owner; nothing here
//! schedules frames or blocks.

mod easing;
mod scroller;

pub use easing::*;
pub use scroller::*;

pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::scroller::{ScrollTick, Scroller, TweenScroller};
}
