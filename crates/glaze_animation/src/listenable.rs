//! Listener registration for value-change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Key for a registered listener.
    pub struct ListenerId;
}

/// Shared, re-invokable value-change callback.
pub type ListenerCallback = Rc<RefCell<dyn FnMut(f32)>>;

/// Registry of value-change listeners.
///
/// Callers notify in two phases: [`ListenerList::snapshot`] the current
/// callbacks, release any outer borrow, then invoke. That way a callback
/// may subscribe or unsubscribe re-entrantly without invalidating the
/// iteration.
#[derive(Default)]
pub struct ListenerList {
    listeners: SlotMap<ListenerId, ListenerCallback>,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, returning the key that removes it.
    pub fn add(&mut self, listener: impl FnMut(f32) + 'static) -> ListenerId {
        self.listeners.insert(Rc::new(RefCell::new(listener)))
    }

    /// Remove a callback. Removing an already removed key is a no-op.
    pub fn remove(&mut self, id: ListenerId) {
        self.listeners.remove(id);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Clone out the current callbacks for invocation.
    ///
    /// Most nodes register one or two listeners, so the snapshot stays off
    /// the heap in the common case.
    pub fn snapshot(&self) -> SmallVec<[ListenerCallback; 2]> {
        self.listeners.values().cloned().collect()
    }
}
