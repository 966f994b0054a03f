//! Boolean visibility flags.

use crate::{Observable, Subscription};

/// A boolean flag flipped by [`Toggle::toggle`].
#[derive(Debug, Clone)]
pub struct Toggle {
    state: Observable<bool>,
}

impl Toggle {
    /// Create a flag starting at `initial`.
    pub fn new(initial: bool) -> Self {
        Self {
            state: Observable::new(initial),
        }
    }

    /// Current state.
    pub fn get(&self) -> bool {
        self.state.get()
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&self) -> bool {
        self.state.update(|on| !on);
        self.state.get()
    }

    /// Force the flag to `on`. Subscribers run even if it was already `on`.
    pub fn set(&self, on: bool) {
        self.state.set(on);
    }

    /// Run `callback` with the new state after every flip or set.
    pub fn subscribe(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.state.subscribe(callback)
    }
}
