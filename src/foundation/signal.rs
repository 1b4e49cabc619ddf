//! Single-threaded observable cell with scoped subscriptions.
//!
//! Everything frame- or event-driven in the crate (scroll position, theme) is published
//! through a [`Signal`]. Listeners are detached by dropping the [`Subscription`] returned
//! from [`Signal::subscribe`], so a torn-down view can never keep receiving writes.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    struct ListenerKey;
}

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    listeners: SlotMap<ListenerKey, Listener<T>>,
}

/// Shared observable value. Cloning a `Signal` yields another handle to the same cell.
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Signal<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T> Signal<T>
where
    T: Clone + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                listeners: SlotMap::with_key(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replace the value and notify every live listener.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Mutate the value in place and notify every live listener.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    /// Register `listener`; it runs after every change until the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&T) + 'static,
    {
        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        let key = self.inner.borrow_mut().listeners.insert(listener);
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.remove(key);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Snapshot so listeners may read, write or unsubscribe without aliasing the cell.
        let (value, listeners): (T, Vec<(ListenerKey, Listener<T>)>) = {
            let inner = self.inner.borrow();
            let listeners = inner
                .listeners
                .iter()
                .map(|(k, l)| (k, Rc::clone(l)))
                .collect();
            (inner.value.clone(), listeners)
        };

        for (key, listener) in listeners {
            if !self.inner.borrow().listeners.contains_key(key) {
                continue;
            }
            let Ok(mut f) = listener.try_borrow_mut() else {
                tracing::debug!("skipping re-entrant signal listener");
                continue;
            };
            (&mut *f)(&value);
        }
    }
}

/// Scoped listener registration. Dropping it (or calling [`Subscription::release`])
/// detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Combine several guards into one that releases all of them.
    pub fn merge(subs: Vec<Subscription>) -> Self {
        Self::new(move || drop(subs))
    }

    /// Explicitly detach. Equivalent to dropping the guard.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/signal.rs"]
mod tests;
