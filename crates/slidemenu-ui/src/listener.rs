//! State-change notification and deferred state requests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Observer invoked with the new open state on every state change.
pub type StateChangedListener = Box<dyn FnMut(bool)>;

/// Single-slot observer holder; setting a listener replaces the previous one.
#[derive(Default)]
pub(crate) struct ListenerSlot {
    listener: Option<StateChangedListener>,
}

impl ListenerSlot {
    pub(crate) fn replace(&mut self, listener: Option<StateChangedListener>) {
        self.listener = listener;
    }

    pub(crate) fn is_set(&self) -> bool {
        self.listener.is_some()
    }

    pub(crate) fn notify(&mut self, open: bool) {
        if let Some(listener) = self.listener.as_mut() {
            listener(open);
        }
    }
}

impl fmt::Debug for ListenerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// A state change asked for from outside the surface's own call stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateRequest {
    Open { animate: bool },
    Close { animate: bool },
    Toggle { animate: bool },
}

impl StateRequest {
    /// Open state this request leads to, given the state when it is applied.
    pub fn resolve(self, currently_open: bool) -> bool {
        match self {
            StateRequest::Open { .. } => true,
            StateRequest::Close { .. } => false,
            StateRequest::Toggle { .. } => !currently_open,
        }
    }

    pub fn animate(self) -> bool {
        match self {
            StateRequest::Open { animate }
            | StateRequest::Close { animate }
            | StateRequest::Toggle { animate } => animate,
        }
    }
}

/// Cloneable handle for queueing state changes, typically captured by a listener.
///
/// The surface cannot be borrowed again while it is notifying, so listeners
/// hand their follow-up requests to this queue. The surface applies them once
/// the operation that triggered the notification has committed.
#[derive(Clone, Default)]
pub struct StateRequester {
    queue: Rc<RefCell<VecDeque<StateRequest>>>,
}

impl StateRequester {
    pub fn request(&self, request: StateRequest) {
        self.queue.borrow_mut().push_back(request);
    }

    pub fn request_open(&self, animate: bool) {
        self.request(StateRequest::Open { animate });
    }

    pub fn request_close(&self, animate: bool) {
        self.request(StateRequest::Close { animate });
    }

    pub fn request_toggle(&self, animate: bool) {
        self.request(StateRequest::Toggle { animate });
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn take_all(&self) -> Vec<StateRequest> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

impl fmt::Debug for StateRequester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRequester")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn replacing_listener_drops_previous() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = ListenerSlot::default();

        let counter = Rc::clone(&first);
        slot.replace(Some(Box::new(move |_| counter.set(counter.get() + 1))));
        slot.notify(true);

        let counter = Rc::clone(&second);
        slot.replace(Some(Box::new(move |_| counter.set(counter.get() + 1))));
        slot.notify(false);

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
        assert_eq!(Rc::strong_count(&first), 1);
    }

    #[test]
    fn toggle_resolves_against_current_state() {
        let toggle = StateRequest::Toggle { animate: true };
        assert!(toggle.resolve(false));
        assert!(!toggle.resolve(true));
        assert!(toggle.animate());
        assert!(StateRequest::Open { animate: false }.resolve(true));
    }

    #[test]
    fn requester_clones_share_one_queue() {
        let requester = StateRequester::default();
        let captured = requester.clone();
        captured.request_close(true);
        captured.request_open(false);

        assert_eq!(requester.pending(), 2);
        assert_eq!(
            requester.take_all(),
            vec![
                StateRequest::Close { animate: true },
                StateRequest::Open { animate: false }
            ]
        );
        assert_eq!(captured.pending(), 0);
    }
}
