use crate::SlotId;

/// The host's panel (fragment) manager.
///
/// The container never owns panels; it only tells the manager which slot a
/// panel belongs in and asks it what is currently mounted there.
pub trait PanelManager {
    type Panel;

    /// Mounts `panel` into `slot`, replacing whatever was there.
    fn replace(&mut self, slot: SlotId, panel: Self::Panel);

    /// Panel currently mounted in `slot`.
    fn find(&self, slot: SlotId) -> Option<&Self::Panel>;
}
