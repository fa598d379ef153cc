//! Observable in-memory store.
//!
//! [`Store`] owns one value behind `get`/`set` accessors and notifies
//! subscribers whenever the value actually changes. Cloning a store clones the
//! handle, not the value, so the same store can be injected into several
//! services and views.
//!
//! ```rust
//! use std::{cell::Cell, rc::Rc};
//!
//! use tareas_core::Store;
//!
//! let store = Store::new(vec![1, 2]);
//! let seen = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&seen);
//! let _subscription = store.subscribe(move |items: &Vec<i32>| counter.set(items.len()));
//!
//! store.update(|items| items.push(3));
//! assert_eq!(seen.get(), 3);
//!
//! // Setting an equal value does not notify
//! seen.set(0);
//! store.set(vec![1, 2, 3]);
//! assert_eq!(seen.get(), 0);
//! ```

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use log::debug;

use crate::models::Task;

type Observer<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<(u64, Observer<T>)>>,
    next_id: Cell<u64>,
}

/// Shared, observable value with equality-based change notification.
pub struct Store<T> {
    inner: Rc<Inner<T>>,
}

/// The store holding the application's task list.
pub type TaskStore = Store<Vec<Task>>;

impl<T: Clone + PartialEq + 'static> Store<T> {
    /// Create a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replace the value. Subscribers are notified only when the new value
    /// differs from the old one; the return value says whether it did.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.notify();
        true
    }

    /// Mutate a copy of the value with `f` and store it with [`Store::set`]
    /// semantics.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Register `observer`, called with the new value after every change.
    ///
    /// The observer stays registered while the returned [`Subscription`] is
    /// alive.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, observer: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let observer: Observer<T> = Rc::new(RefCell::new(observer));
        self.inner.observers.borrow_mut().push((id, observer));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            id,
            detach: Some(Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    inner.observers.borrow_mut().retain(|(oid, _)| *oid != id);
                }
            })),
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.get();
        // Observers may subscribe, unsubscribe or read the store while being
        // notified, so iterate over a copy of the list.
        let observers: Vec<Observer<T>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        debug!("store changed, notifying {} subscriber(s)", observers.len());

        for observer in observers {
            // An observer that is already running (it changed the store from
            // inside its own callback) is skipped for the nested change.
            if let Ok(mut callback) = observer.try_borrow_mut() {
                (*callback)(&snapshot);
            }
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.observers.borrow().len())
            .finish()
    }
}

/// Handle to a store subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    detach: Option<Box<dyn FnOnce(u64)>>,
}

impl Subscription {
    /// Stop receiving notifications.
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_set_notifies_on_change_only() {
        let store = Store::new(1);
        let calls = Rc::new(RefCell::new(Vec::new()));

        let seen = Rc::clone(&calls);
        let _sub = store.subscribe(move |v: &i32| seen.borrow_mut().push(*v));

        assert!(store.set(2));
        assert!(!store.set(2));
        assert!(store.set(3));

        assert_eq!(*calls.borrow(), vec![2, 3]);
    }

    #[test]
    fn test_update_with_no_change_does_not_notify() {
        let store = Store::new(vec!["a".to_string()]);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let _sub = store.subscribe(move |_: &Vec<String>| counter.set(counter.get() + 1));

        assert!(!store.update(|_| {}));
        assert!(store.update(|v| v.push("b".to_string())));
        assert_eq!(calls.get(), 1);
        assert_eq!(store.get().len(), 2);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let store = Store::new(0);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_: &i32| counter.set(counter.get() + 1));
        assert_eq!(store.subscriber_count(), 1);

        store.set(1);
        drop(sub);
        store.set(2);

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let store = Store::new(0);
        let sub = store.subscribe(|_: &i32| {});
        sub.unsubscribe();
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_the_value() {
        let store = Store::new(10);
        let handle = store.clone();

        handle.set(11);
        assert_eq!(store.get(), 11);
    }

    #[test]
    fn test_observer_can_read_store_while_notified() {
        let store = Store::new(1);
        let reader = store.clone();
        let seen = Rc::new(Cell::new(0));

        let out = Rc::clone(&seen);
        let _sub = store.subscribe(move |_: &i32| out.set(reader.get()));

        store.set(5);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_subscription_outliving_store_is_harmless() {
        let store = Store::new(0);
        let sub = store.subscribe(|_: &i32| {});
        drop(store);
        drop(sub);
    }
}
