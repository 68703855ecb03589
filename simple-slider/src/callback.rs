//! User hooks fired by the slider.
//!
//! ## Usage
//!
//! Attach `on_init` and `on_change` hooks to a [`SliderConfig`](crate::SliderConfig).

use std::sync::Arc;

/// Shared handle to any callable trait object.
///
/// Compares by identity (`Arc::ptr_eq`), so configs holding hooks can still
/// be compared without comparing closures.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Wraps an already shared callable.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Returns the callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Hook taking no arguments, used for `on_init`.
#[derive(Clone, PartialEq, Eq)]
pub struct Callback {
    slot: Slot<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Creates a hook from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invokes the hook.
    pub fn call(&self) {
        let handler = self.slot.shared();
        handler();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Hook taking one argument, used for `on_change`.
pub struct CallbackWith<T> {
    slot: Slot<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Creates a hook from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invokes the hook with `value`.
    pub fn call(&self, value: T) {
        let handler = self.slot.shared();
        handler(value);
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> std::fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}
