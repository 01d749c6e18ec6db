//! Composition shell: menu slot underneath, sliding content on top.

use slidemenu_animation::{Scroller, TweenScroller};
use slidemenu_foundation::{TouchEvent, TouchTarget};
use slidemenu_ui_graphics::{Rect, Size};
use slidemenu_ui_layout::{Constraints, LayoutChild};

use crate::{
    PanelManager, PanelSlot, SlidingError, SlidingSurface, SlotId, StateRequester,
    SurfaceConfig, TouchDispatcher, TouchRoute,
};

/// A sliding menu widget.
///
/// Panels themselves are owned by the host's [`PanelManager`]; the container
/// only owns the two slots they are mounted into and the surface that slides.
pub struct PanelContainer<S = TweenScroller> {
    menu: PanelSlot,
    surface: SlidingSurface<PanelSlot, S>,
    dispatcher: TouchDispatcher,
    size: Size,
    /// Size and menu fraction the menu slot was last resized for.
    menu_sized_for: Option<(Size, f32)>,
}

impl PanelContainer {
    pub fn new(config: SurfaceConfig) -> Self {
        let surface = SlidingSurface::with_child(config, PanelSlot::new(SlotId::Content));
        Self::assemble(surface)
    }
}

impl Default for PanelContainer {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl<S: Scroller> PanelContainer<S> {
    /// Wraps an empty surface, attaching the content slot as its child.
    ///
    /// Fails with [`SlidingError::ChildAlreadyAttached`] when the surface
    /// already holds a child.
    pub fn from_surface(mut surface: SlidingSurface<PanelSlot, S>) -> Result<Self, SlidingError> {
        surface.attach_child(PanelSlot::new(SlotId::Content))?;
        Ok(Self::assemble(surface))
    }

    fn assemble(surface: SlidingSurface<PanelSlot, S>) -> Self {
        Self {
            menu: PanelSlot::new(SlotId::Menu),
            surface,
            dispatcher: TouchDispatcher::new(),
            size: Size::ZERO,
            menu_sized_for: None,
        }
    }

    pub fn attach_content_panel<M: PanelManager>(&mut self, panel: M::Panel, manager: &mut M) {
        log::debug!("mounting content panel");
        manager.replace(SlotId::Content, panel);
    }

    pub fn content_panel<'m, M: PanelManager>(&self, manager: &'m M) -> Option<&'m M::Panel> {
        manager.find(SlotId::Content)
    }

    pub fn attach_menu_panel<M: PanelManager>(&mut self, panel: M::Panel, manager: &mut M) {
        log::debug!("mounting menu panel");
        manager.replace(SlotId::Menu, panel);
    }

    pub fn menu_panel<'m, M: PanelManager>(&self, manager: &'m M) -> Option<&'m M::Panel> {
        manager.find(SlotId::Menu)
    }

    /// Sets the menu width relative to the container, between 0 and 1.
    pub fn set_menu_width_fraction(&mut self, fraction: f32) -> Result<(), SlidingError> {
        self.surface.set_slider_width(fraction)
    }

    pub fn menu_width_fraction(&self) -> f32 {
        self.surface.slider_width()
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_open()
    }

    pub fn open(&mut self) {
        self.surface.open();
    }

    pub fn animate_open(&mut self) {
        self.surface.animate_open();
    }

    pub fn close(&mut self) {
        self.surface.close();
    }

    pub fn animate_close(&mut self) {
        self.surface.animate_close();
    }

    pub fn toggle(&mut self) {
        self.surface.toggle();
    }

    pub fn animate_toggle(&mut self) {
        self.surface.animate_toggle();
    }

    /// Click on the sliding surface: toggles with animation.
    pub fn perform_click(&mut self) {
        self.surface.animate_toggle();
    }

    pub fn set_on_state_changed_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.surface.set_on_state_changed_listener(listener);
    }

    pub fn state_requester(&self) -> StateRequester {
        self.surface.state_requester()
    }

    /// Advances the slide animation; true while more frames are needed.
    pub fn tick(&mut self, frame_time_nanos: u64) -> bool {
        self.surface.tick(frame_time_nanos)
    }

    /// Measures the container. The surface enforces exact constraints; the
    /// menu slot is sized during [`PanelContainer::layout`].
    pub fn measure(&mut self, constraints: Constraints) -> Result<Size, SlidingError> {
        let size = self.surface.measure(constraints)?;
        self.size = size;
        Ok(size)
    }

    /// Lays out the menu at the origin and the surface over the full bounds.
    ///
    /// Whenever the container's size or the menu fraction changed since the
    /// last pass, the menu slot is resized to `width * fraction` and redrawn.
    pub fn layout(&mut self) {
        let fraction = self.surface.slider_width();
        let width = (self.size.width * fraction).round();
        self.menu.set_width_override(Some(width));
        let menu_size = self.menu.measure(Constraints::tight(width, self.size.height));

        if self.menu_sized_for != Some((self.size, fraction)) {
            log::debug!("resizing menu slot to {width}px ({fraction} of {})", self.size.width);
            self.menu.invalidate();
            self.menu_sized_for = Some((self.size, fraction));
        }

        self.menu.place(Rect::from_size(menu_size));
        self.surface.layout();
    }

    /// Routes one touch event to the surface, the content panel, or the menu.
    pub fn dispatch_touch_event(
        &mut self,
        event: &TouchEvent,
        content: &mut dyn TouchTarget,
        menu: &mut dyn TouchTarget,
    ) -> Option<TouchRoute> {
        self.dispatcher.dispatch(&mut self.surface, event, content, Some(menu))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn menu_slot(&self) -> &PanelSlot {
        &self.menu
    }

    pub fn content_slot(&self) -> Option<&PanelSlot> {
        self.surface.child()
    }

    pub fn surface(&self) -> &SlidingSurface<PanelSlot, S> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut SlidingSurface<PanelSlot, S> {
        &mut self.surface
    }
}
