//! Animation value sources.
//!
//! Paint-time state is driven by any source exposing a current value in
//! `[0, 1]` plus value-change subscription. [`AnimationController`] is the
//! standard implementation; [`CurvedAnimation`] reshapes another source
//! through a [`Curve`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

use crate::curve::Curve;
use crate::listenable::{ListenerId, ListenerList};

/// A time-varying value in `[0, 1]` with change notifications.
///
/// Notification and unsubscription are both synchronous; sources run on
/// the single UI thread in the cooperative, frame-driven model, so there
/// is no locking anywhere in this contract.
pub trait AnimationSource {
    /// Current value, in `[0, 1]`.
    fn value(&self) -> f32;

    /// Subscribe to value changes. The callback receives the new value as
    /// this source exposes it.
    fn add_listener(&self, listener: Box<dyn FnMut(f32)>) -> ListenerId;

    /// Remove a previously registered listener.
    fn remove_listener(&self, id: ListenerId);
}

/// Owns an animation value and notifies listeners when it changes.
pub struct AnimationController {
    value: Cell<f32>,
    listeners: RefCell<ListenerList>,
}

impl AnimationController {
    /// Controller starting at `value`, clamped to `[0, 1]`.
    pub fn new(value: f32) -> Self {
        Self {
            value: Cell::new(value.clamp(0.0, 1.0)),
            listeners: RefCell::new(ListenerList::new()),
        }
    }

    /// Set the value, clamping to `[0, 1]`. Listeners are notified only
    /// when the stored value actually changes.
    pub fn set_value(&self, value: f32) {
        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            trace!(value, "animation value clamped to [0, 1]");
        }
        if clamped == self.value.get() {
            return;
        }
        self.value.set(clamped);
        self.notify_listeners(clamped);
    }

    fn notify_listeners(&self, value: f32) {
        // Snapshot outside the borrow so listeners can subscribe or
        // unsubscribe from inside the callback.
        let snapshot = self.listeners.borrow().snapshot();
        for listener in snapshot {
            (listener.borrow_mut())(value);
        }
    }
}

impl AnimationSource for AnimationController {
    fn value(&self) -> f32 {
        self.value.get()
    }

    fn add_listener(&self, listener: Box<dyn FnMut(f32)>) -> ListenerId {
        self.listeners.borrow_mut().add(listener)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().remove(id);
    }
}

/// Reshapes a parent source's value through a [`Curve`].
///
/// Subscription is delegated to the parent; listeners registered here see
/// the curved value, and a curved animation carries no listener state of
/// its own.
pub struct CurvedAnimation {
    parent: Rc<dyn AnimationSource>,
    curve: Curve,
}

impl CurvedAnimation {
    pub fn new(parent: Rc<dyn AnimationSource>, curve: Curve) -> Self {
        Self { parent, curve }
    }
}

impl AnimationSource for CurvedAnimation {
    fn value(&self) -> f32 {
        self.curve.transform(self.parent.value())
    }

    fn add_listener(&self, mut listener: Box<dyn FnMut(f32)>) -> ListenerId {
        let curve = self.curve;
        self.parent
            .add_listener(Box::new(move |value| listener(curve.transform(value))))
    }

    fn remove_listener(&self, id: ListenerId) {
        self.parent.remove_listener(id);
    }
}
