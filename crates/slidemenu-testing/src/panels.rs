//! Stand-ins for the host's panel manager and touch targets.

use std::collections::HashMap;

use slidemenu_foundation::{TouchAction, TouchEvent, TouchTarget};
use slidemenu_ui::{PanelManager, SlotId};

/// Panel manager that keeps mounted panels in memory and logs every replace.
#[derive(Debug, Clone)]
pub struct MemoryPanelManager<P> {
    mounted: HashMap<SlotId, P>,
    history: Vec<SlotId>,
}

impl<P> Default for MemoryPanelManager<P> {
    fn default() -> Self {
        Self {
            mounted: HashMap::new(),
            history: Vec::new(),
        }
    }
}

impl<P> MemoryPanelManager<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots replaced so far, in call order.
    pub fn history(&self) -> &[SlotId] {
        &self.history
    }
}

impl<P> PanelManager for MemoryPanelManager<P> {
    type Panel = P;

    fn replace(&mut self, slot: SlotId, panel: P) {
        self.mounted.insert(slot, panel);
        self.history.push(slot);
    }

    fn find(&self, slot: SlotId) -> Option<&P> {
        self.mounted.get(&slot)
    }
}

/// Touch target that records what it receives and consumes according to a policy.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    received: Vec<TouchAction>,
    consumes: bool,
}

impl RecordingTarget {
    /// Consumes every event, like a nested scrollable or clickable panel.
    pub fn consuming() -> Self {
        Self {
            received: Vec::new(),
            consumes: true,
        }
    }

    /// Declines every event, like an inert background.
    pub fn ignoring() -> Self {
        Self::default()
    }

    pub fn received(&self) -> &[TouchAction] {
        &self.received
    }

    pub fn was_cancelled(&self) -> bool {
        self.received.last() == Some(&TouchAction::Cancel)
    }
}

impl TouchTarget for RecordingTarget {
    fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        self.received.push(event.action);
        self.consumes
    }
}
