use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

pub type SubId = u64;

/// Returned by [`Signal::subscribe`]; pass it back to [`Signal::unsubscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(SubId);

type Subscriber<T> = (SubId, Rc<dyn Fn(&T)>);

/// Observable value with an ordered subscriber list.
///
/// Every `set` notifies every subscriber, in subscription order, even when the
/// new value equals the old one. A `set` issued while this signal is already
/// notifying is queued and applied once the running chain has finished.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<SmallVec<[Subscriber<T>; 2]>>,
    next_sub: Cell<SubId>,
    notifying: Cell<bool>,
    pending: RefCell<VecDeque<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.0.value.borrow())
            .field("subscribers", &self.0.subs.borrow().len())
            .finish()
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(SmallVec::new()),
            next_sub: Cell::new(0),
            notifying: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        }))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.value.borrow())
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        if self.0.notifying.get() {
            log::trace!("signal: nested set queued");
            self.0.pending.borrow_mut().push_back(v);
            return;
        }

        // Resets the chain even if a subscriber unwinds; queued writes die with it.
        struct Guard<'a, T>(&'a Inner<T>);
        impl<T> Drop for Guard<'_, T> {
            fn drop(&mut self) {
                self.0.notifying.set(false);
                self.0.pending.borrow_mut().clear();
            }
        }
        self.0.notifying.set(true);
        let _guard = Guard(&*self.0);

        let mut next = Some(v);
        while let Some(v) = next {
            *self.0.value.borrow_mut() = v;
            let current = self.get();
            let snapshot: SmallVec<[Subscriber<T>; 2]> = self.0.subs.borrow().iter().cloned().collect();
            for (id, sub) in snapshot {
                // A subscriber may have been removed by an earlier one in this chain.
                if self.0.subs.borrow().iter().any(|(live, _)| *live == id) {
                    sub(&current);
                }
            }
            next = self.0.pending.borrow_mut().pop_front();
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let mut v = self.get();
        f(&mut v);
        self.set(v);
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubscriptionHandle {
        let id = self.0.next_sub.get();
        self.0.next_sub.set(id + 1);
        self.0.subs.borrow_mut().push((id, Rc::new(f)));
        SubscriptionHandle(id)
    }

    /// Returns `false` if the handle was already removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut subs = self.0.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|(id, _)| *id != handle.0);
        subs.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.subs.borrow().len()
    }

    /// True when both handles share the same underlying value.
    pub fn ptr_eq(&self, other: &Signal<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal(Rc::downgrade(&self.0))
    }

    /// Derived signal that is recomputed on every write to `self`.
    pub fn map<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Signal<U> {
        let out = Signal::new(self.with(&f));
        let target = out.clone();
        self.subscribe(move |v| target.set(f(v)));
        out
    }
}

/// Non-owning handle, for closures that live inside views rendered from the signal itself.
pub struct WeakSignal<T: 'static>(Weak<Inner<T>>);

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> WeakSignal<T> {
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.0.upgrade().map(Signal)
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}

/// Type-erased view of a `Signal`, used by widget state maps.
pub trait AnySignal {
    /// Re-sets the signal to its own current value, firing every subscriber.
    fn renotify(&self);
    fn subscriber_count(&self) -> usize;
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Clone + 'static> AnySignal for Signal<T> {
    fn renotify(&self) {
        self.set(self.get());
    }

    fn subscriber_count(&self) -> usize {
        Signal::subscriber_count(self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
