//! Values derived from an observable source.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Observable;

/// A derived value over an [`Observable`].
///
/// The cache is keyed by the source version, so a read after any write
/// recomputes and a read with no intervening write reuses the last result.
pub struct Computed<S, T> {
    source: Observable<S>,
    compute: Rc<dyn Fn(&S) -> T>,
    cache: Rc<RefCell<Option<(u64, T)>>>,
}

impl<S, T> Clone for Computed<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            compute: Rc::clone(&self.compute),
            cache: Rc::clone(&self.cache),
        }
    }
}

impl<S: Clone + 'static, T: Clone + 'static> Computed<S, T> {
    /// Derive a value from `source` with the pure function `compute`.
    pub fn new(source: &Observable<S>, compute: impl Fn(&S) -> T + 'static) -> Self {
        Self {
            source: source.clone(),
            compute: Rc::new(compute),
            cache: Rc::new(RefCell::new(None)),
        }
    }

    /// The value for the source's current state.
    pub fn get(&self) -> T {
        let version = self.source.version();
        let cached = match &*self.cache.borrow() {
            Some((at, value)) if *at == version => Some(value.clone()),
            _ => None,
        };
        if let Some(value) = cached {
            return value;
        }

        let value = self.source.with(|s| (self.compute)(s));
        *self.cache.borrow_mut() = Some((version, value.clone()));
        value
    }

    /// Whether the cached value matches the source's current version.
    pub fn is_fresh(&self) -> bool {
        matches!(&*self.cache.borrow(), Some((at, _)) if *at == self.source.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_tracks_source_writes() {
        let items = Observable::new(vec![1, 2, 3]);
        let sum = Computed::new(&items, |v: &Vec<i32>| v.iter().sum::<i32>());

        assert_eq!(sum.get(), 6);
        items.set(vec![10]);
        assert_eq!(sum.get(), 10);
    }

    #[test]
    fn test_reuses_result_between_writes() {
        let source = Observable::new(2);
        let calls = Rc::new(Cell::new(0));
        let doubled = {
            let calls = Rc::clone(&calls);
            Computed::new(&source, move |v: &i32| {
                calls.set(calls.get() + 1);
                v * 2
            })
        };

        assert!(!doubled.is_fresh());
        assert_eq!(doubled.get(), 4);
        assert_eq!(doubled.get(), 4);
        assert_eq!(calls.get(), 1);
        assert!(doubled.is_fresh());

        source.set(5);
        assert!(!doubled.is_fresh());
        assert_eq!(doubled.get(), 10);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_clones_share_cache() {
        let source = Observable::new(1);
        let a = Computed::new(&source, |v: &i32| v + 1);
        let b = a.clone();

        assert_eq!(a.get(), 2);
        assert!(b.is_fresh());
    }
}
