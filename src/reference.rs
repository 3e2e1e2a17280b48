//! Non-owning reference projections.
//!
//! `Ref` and `RefMut` hand out a view of a value that lives somewhere else,
//! typically inside an [`Optional`](crate::optional::Optional) or
//! [`Fallible`](crate::fallible::Fallible). The `'a` lifetime ties every
//! projection to the binding it was taken from, so a projection can never be
//! built from a temporary or outlive its source.
//!
//! Call forwarding for invocable targets goes through `Deref`:
//!
//! ```
//! use sumcell::Ref;
//!
//! let double = |x: i32| x * 2;
//! let projected = Ref::new(&double);
//! assert_eq!((projected.get())(21), 42);
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

/// Shared projection of an existing value.
pub struct Ref<'a, T: ?Sized> {
    value: &'a T,
}

impl<'a, T: ?Sized> Ref<'a, T> {
    /// Projects a named binding.
    pub const fn new(value: &'a T) -> Self {
        Self { value }
    }

    /// Returns the underlying reference with its full lifetime.
    pub const fn get(&self) -> &'a T {
        self.value
    }
}

impl<T: ?Sized> Clone for Ref<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Ref<'_, T> {}

impl<T: ?Sized> Deref for Ref<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<'a, T: ?Sized> From<&'a T> for Ref<'a, T> {
    fn from(value: &'a T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Ref<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: ?Sized + Eq> Eq for Ref<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Exclusive projection of an existing value.
pub struct RefMut<'a, T: ?Sized> {
    value: &'a mut T,
}

impl<'a, T: ?Sized> RefMut<'a, T> {
    /// Projects a named binding.
    pub const fn new(value: &'a mut T) -> Self {
        Self { value }
    }

    /// Immutable borrow of the target.
    pub const fn get(&self) -> &T {
        self.value
    }

    /// Mutable borrow of the target.
    pub const fn get_mut(&mut self) -> &mut T {
        self.value
    }

    /// Recovers the underlying reference with its full lifetime.
    pub fn into_mut(self) -> &'a mut T {
        self.value
    }
}

impl<T: ?Sized> Deref for RefMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T: ?Sized> DerefMut for RefMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for RefMut<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized + PartialEq> PartialEq for RefMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        *self.value == *other.value
    }
}

impl<T: ?Sized + Eq> Eq for RefMut<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for RefMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
