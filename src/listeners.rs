//! Listener Registry
//!
//! Explicit subscribe/unsubscribe for page-level events. Each subscriber
//! holds a `Subscription`; dropping it removes the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct RegistryInner<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
}

/// Fan-out point for one kind of event
pub struct ListenerRegistry<E: 'static> {
    inner: Rc<RefCell<RegistryInner<E>>>,
}

impl<E: 'static> Clone for ListenerRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };

        let registry: Weak<RefCell<RegistryInner<E>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().listeners.retain(|(i, _)| *i != id);
                }
            })),
        }
    }

    /// Call every listener registered at the moment of dispatch
    pub fn dispatch(&self, event: &E) {
        // Listeners may subscribe or unsubscribe while running.
        let snapshot: Vec<Listener<E>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration token; unsubscribes when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
