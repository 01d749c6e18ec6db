//! Touch input primitives for slidemenu
//!
//! Event types delivered by the host, the velocity sampler used at release
//! time, and the platform-scaled gesture thresholds.

mod touch;
mod velocity_tracker;
mod view_configuration;

pub use touch::*;
pub use velocity_tracker::*;
pub use view_configuration::*;

pub use slidemenu_ui_graphics::{Dp, Point, Rect, Size};

pub mod prelude {
    pub use crate::touch::{TouchAction, TouchEvent, TouchTarget};
    pub use crate::velocity_tracker::VelocityTracker;
    pub use crate::view_configuration::{DisplayMetrics, ViewConfiguration};
}
