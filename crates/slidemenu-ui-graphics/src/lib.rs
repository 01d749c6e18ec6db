//! Pure geometry and unit math for slidemenu
//!
//! Points, sizes and rectangles in pixel space, plus the density-independent
//! units the gesture thresholds are expressed in.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
