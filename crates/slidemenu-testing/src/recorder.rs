use std::cell::RefCell;
use std::rc::Rc;

/// Collects the states a surface reports to its listener.
#[derive(Debug, Clone, Default)]
pub struct StateRecorder {
    states: Rc<RefCell<Vec<bool>>>,
}

impl StateRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener closure that appends to this recorder.
    pub fn listener(&self) -> impl FnMut(bool) + 'static {
        let states = Rc::clone(&self.states);
        move |open| states.borrow_mut().push(open)
    }

    pub fn states(&self) -> Vec<bool> {
        self.states.borrow().clone()
    }

    pub fn last(&self) -> Option<bool> {
        self.states.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.states.borrow().len()
    }

    pub fn clear(&self) {
        self.states.borrow_mut().clear();
    }
}
