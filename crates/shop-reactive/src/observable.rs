//! Shared observable value with weakly-held subscribers.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

struct Listener<T> {
    callback: Box<dyn Fn(&T)>,
}

struct Inner<T> {
    value: T,
    version: u64,
    listeners: Vec<Weak<Listener<T>>>,
}

/// A shared, version-tracked value.
///
/// Cloning an `Observable` yields another handle onto the same value; a
/// `set` through any handle is visible through all of them immediately.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Create an observable holding `value` at version 0.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning it.
    ///
    /// `f` must not write to this observable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of completed writes.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        let (snapshot, version) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
            (inner.value.clone(), inner.version)
        };
        self.notify(&snapshot, version);
    }

    /// Replace the value with one computed from the current value.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.set(next);
    }

    /// Edit the value in place and notify subscribers.
    ///
    /// Counts as one write. `f` must not touch this observable.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        let (snapshot, version) = {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
            inner.version += 1;
            (inner.value.clone(), inner.version)
        };
        self.notify(&snapshot, version);
    }

    /// Register `callback` to run after every write.
    ///
    /// The callback lives as long as the returned guard.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let listener = Rc::new(Listener {
            callback: Box::new(callback),
        });
        let mut inner = self.inner.borrow_mut();
        inner.listeners.retain(|l| l.strong_count() > 0);
        inner.listeners.push(Rc::downgrade(&listener));
        Subscription { _listener: listener }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self, value: &T, version: u64) {
        let live: Vec<Rc<Listener<T>>> = {
            let mut inner = self.inner.borrow_mut();
            inner.listeners.retain(|l| l.strong_count() > 0);
            inner.listeners.iter().filter_map(Weak::upgrade).collect()
        };
        trace!(version, listeners = live.len(), "observable changed");
        for listener in live {
            (listener.callback)(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .finish()
    }
}

/// Keeps a subscriber callback alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _listener: Rc<dyn Any>,
}

impl Subscription {
    /// Stop receiving notifications.
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
