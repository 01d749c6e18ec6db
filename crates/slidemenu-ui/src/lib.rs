//! Drawer-style sliding menu for slidemenu
//!
//! [`PanelContainer`] stacks a menu slot underneath a [`SlidingSurface`]
//! that carries the content slot. Dragging, flinging or animating the
//! surface horizontally reveals or hides the menu.
//!
//! Everything runs on the host's UI thread: touch callbacks, per-frame
//! [`SlidingSurface::tick`] calls and layout passes are never concurrent.

mod config;
mod dispatch;
mod error;
mod listener;
mod panel_container;
mod panel_manager;
mod panel_slot;
mod sliding_surface;
mod touch_state;

pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use listener::*;
pub use panel_container::*;
pub use panel_manager::*;
pub use panel_slot::*;
pub use sliding_surface::*;
pub use touch_state::*;

pub use slidemenu_animation::{Easing, ScrollTick, Scroller, TweenScroller};
pub use slidemenu_foundation::{
    DisplayMetrics, TouchAction, TouchEvent, TouchTarget, ViewConfiguration,
};
pub use slidemenu_ui_graphics::{Dp, Point, Rect, Size};
pub use slidemenu_ui_layout::{Axis, Constraints, LayoutChild};

pub mod prelude {
    pub use crate::config::SurfaceConfig;
    pub use crate::panel_container::PanelContainer;
    pub use crate::panel_manager::PanelManager;
    pub use crate::panel_slot::{PanelSlot, SlotId};
    pub use crate::sliding_surface::SlidingSurface;
    pub use crate::touch_state::TouchState;
    pub use crate::SlidingError;
}
