use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::signal::{Signal, SubscriptionHandle};

/// One-shot cleanup action shared between clones.
#[derive(Clone)]
pub struct Dispose(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Dispose {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Cleanup that drops `handle` from `signal`.
    pub fn subscription<T: 'static>(signal: &Signal<T>, handle: SubscriptionHandle) -> Self {
        let signal = signal.clone();
        Self::new(move || {
            signal.unsubscribe(handle);
        })
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        let f = self.0.borrow_mut().take();
        if let Some(f) = f {
            f()
        }
    }

    pub fn is_spent(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl fmt::Debug for Dispose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispose").field("spent", &self.is_spent()).finish()
    }
}

/// Subscribes `f` and returns the guard that removes it again.
pub fn observe<T: 'static>(signal: &Signal<T>, f: impl Fn(&T) + 'static) -> Dispose {
    let handle = signal.subscribe(f);
    Dispose::subscription(signal, handle)
}
