//! Host-style routing of one touch gesture across the surface, the content
//! it carries, and the menu underneath.

use slidemenu_animation::Scroller;
use slidemenu_foundation::{TouchAction, TouchEvent, TouchTarget};
use slidemenu_ui_layout::LayoutChild;

use crate::SlidingSurface;

/// Who ended up receiving an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchRoute {
    /// The sliding surface's own drag handling.
    Surface,
    /// The content panel (and any nested scrollables in it).
    Content,
    /// The menu panel underneath the surface.
    Menu,
}

/// Remembers which target owns the gesture in progress.
///
/// On Down, the surface is asked first whether it intercepts; otherwise the
/// content is offered the event, then the surface itself, then the menu.
/// While content owns a gesture, each later event is offered to the
/// surface's interception check first; when it intercepts, the content gets
/// a Cancel and the surface handles the rest of the gesture.
#[derive(Debug, Default)]
pub struct TouchDispatcher {
    route: Option<TouchRoute>,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the gesture in progress, if any.
    pub fn route(&self) -> Option<TouchRoute> {
        self.route
    }

    pub fn dispatch<C, S>(
        &mut self,
        surface: &mut SlidingSurface<C, S>,
        event: &TouchEvent,
        content: &mut dyn TouchTarget,
        menu: Option<&mut dyn TouchTarget>,
    ) -> Option<TouchRoute>
    where
        C: LayoutChild,
        S: Scroller,
    {
        let delivered_to = if event.action == TouchAction::Down {
            self.route = Self::route_down(surface, event, content, menu);
            self.route
        } else {
            self.route_within_gesture(surface, event, content, menu)
        };

        if event.action.ends_gesture() {
            self.route = None;
        }
        delivered_to
    }

    fn route_down<C: LayoutChild, S: Scroller>(
        surface: &mut SlidingSurface<C, S>,
        event: &TouchEvent,
        content: &mut dyn TouchTarget,
        menu: Option<&mut dyn TouchTarget>,
    ) -> Option<TouchRoute> {
        let intercepted = surface.on_intercept_touch_event(event);
        if !intercepted && content.on_touch_event(event) {
            return Some(TouchRoute::Content);
        }
        if surface.on_touch_event(event) {
            return Some(TouchRoute::Surface);
        }
        let menu = menu?;
        menu.on_touch_event(event).then_some(TouchRoute::Menu)
    }

    fn route_within_gesture<C: LayoutChild, S: Scroller>(
        &mut self,
        surface: &mut SlidingSurface<C, S>,
        event: &TouchEvent,
        content: &mut dyn TouchTarget,
        menu: Option<&mut dyn TouchTarget>,
    ) -> Option<TouchRoute> {
        match self.route? {
            TouchRoute::Content => {
                if surface.on_intercept_touch_event(event) {
                    log::debug!("surface took the gesture from content");
                    content.on_touch_event(&event.with_action(TouchAction::Cancel));
                    self.route = Some(TouchRoute::Surface);
                    Some(TouchRoute::Surface)
                } else {
                    content.on_touch_event(event);
                    Some(TouchRoute::Content)
                }
            }
            TouchRoute::Surface => {
                surface.on_touch_event(event);
                Some(TouchRoute::Surface)
            }
            TouchRoute::Menu => {
                if let Some(menu) = menu {
                    menu.on_touch_event(event);
                }
                Some(TouchRoute::Menu)
            }
        }
    }
}
