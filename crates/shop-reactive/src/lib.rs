//! Single-threaded observable state for Shopfront views.
//!
//! - [`Observable`]: shared, version-tracked value with subscriber callbacks.
//! - [`Subscription`]: RAII guard; dropping it unsubscribes.
//! - [`Computed`]: value derived from an `Observable`, recomputed whenever
//!   the source version moved.
//! - [`Toggle`]: boolean observable flipped by `toggle()`.
//!
//! # Invariants
//!
//! 1. Every `set` bumps the version exactly once.
//! 2. Subscribers run in registration order, after the new value is visible.
//! 3. No borrow is held while subscribers run, so they may read (or write)
//!    the observable they are attached to.
//! 4. `Computed::get()` never returns a value older than its source.

mod computed;
mod observable;
mod toggle;

pub use computed::Computed;
pub use observable::{Observable, Subscription};
pub use toggle::Toggle;
