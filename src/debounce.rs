//! Debouncer
//!
//! Collapses bursts of calls into a single delayed invocation that receives
//! the arguments of the last call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::runtime::Runtime;

/// Wrap `action` so it only runs after `delay_ms` of quiet
pub fn debounce<A, R, F>(runtime: R, delay_ms: u32, action: F) -> Debouncer<A, R>
where
    A: 'static,
    R: Runtime,
    F: Fn(A) + 'static,
{
    Debouncer {
        inner: Rc::new(Inner {
            action: Box::new(action),
            delay_ms,
            runtime,
            timer: RefCell::new(None),
            pending: Cell::new(false),
        }),
    }
}

struct Inner<A, R: Runtime> {
    action: Box<dyn Fn(A)>,
    delay_ms: u32,
    runtime: R,
    /// The only timer this instance owns
    timer: RefCell<Option<R::TimerHandle>>,
    pending: Cell<bool>,
}

/// Handle to a debounced action; clones share the same timer
pub struct Debouncer<A: 'static, R: Runtime> {
    inner: Rc<Inner<A, R>>,
}

impl<A: 'static, R: Runtime> Clone for Debouncer<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static, R: Runtime> Debouncer<A, R> {
    /// Restart the quiet window with `args` as the latest arguments
    pub fn call(&self, args: A) {
        // Dropping the old handle cancels it if it has not fired.
        drop(self.inner.timer.borrow_mut().take());

        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.runtime.schedule(
            self.inner.delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.pending.set(false);
                    (inner.action)(args);
                }
            }),
        );
        self.inner.pending.set(true);
        *self.inner.timer.borrow_mut() = Some(handle);
    }

    /// Drop the pending invocation, if any
    pub fn cancel(&self) {
        drop(self.inner.timer.borrow_mut().take());
        self.inner.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.inner.pending.get()
    }
}
