//! `Fallible`: success-or-error facade over tagged storage.

use core::fmt;

use crate::optional::Optional;
use crate::panic;
use crate::payload::Payload;
use crate::reference::{Ref, RefMut};
use crate::storage::{Slot, TaggedStorage};

/// Contains either a success value (`Ok`) or an error (`Err`).
///
/// Unlike [`Optional`] there is no default state: a `Fallible` is fixed at
/// construction and only reassignment installs the other kind. The
/// combinator surface mirrors `Optional`'s with an error payload in place of
/// absence.
///
/// ```
/// use sumcell::Fallible;
///
/// let message: Fallible<i32, String> = Fallible::from_err("bad".to_string());
/// let upper = message.map_err(|e| e.to_uppercase()).unwrap_err();
/// assert_eq!(upper, "BAD");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Fallible<T, E> {
    storage: TaggedStorage<T, E>,
}

impl<T, E> Fallible<T, E> {
    /// Creates a `Fallible` holding a success value.
    pub const fn from_ok(value: T) -> Self {
        Self {
            storage: TaggedStorage::primary(Payload::new(value)),
        }
    }

    /// Creates a `Fallible` holding an error.
    pub const fn from_err(error: E) -> Self {
        Self {
            storage: TaggedStorage::secondary(Payload::new(error)),
        }
    }

    /// Whether a success value is contained.
    pub const fn is_ok(&self) -> bool {
        matches!(self.storage.slot(), Slot::Primary(_))
    }

    /// Whether an error is contained.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Whether a success value is contained and satisfies `predicate`.
    pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self.storage.slot() {
            Slot::Primary(payload) => predicate(payload.get()),
            Slot::Secondary(_) => false,
        }
    }

    /// Whether an error is contained and satisfies `predicate`.
    pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
        match self.storage.slot() {
            Slot::Primary(_) => false,
            Slot::Secondary(payload) => predicate(payload.get()),
        }
    }

    /// Alias for [`is_ok_and`](Self::is_ok_and).
    pub fn exists(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        self.is_ok_and(predicate)
    }

    /// Alias for [`is_err_and`](Self::is_err_and).
    pub fn exists_err(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
        self.is_err_and(predicate)
    }

    /// Whether the success value equals `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self.storage.slot() {
            Slot::Primary(payload) => payload.get() == value,
            Slot::Secondary(_) => false,
        }
    }

    /// Whether the error equals `error`.
    pub fn contains_err<U>(&self, error: &U) -> bool
    where
        E: PartialEq<U>,
    {
        match self.storage.slot() {
            Slot::Primary(_) => false,
            Slot::Secondary(payload) => payload.get() == error,
        }
    }

    /// Projects the success side, discarding the error.
    pub fn ok(self) -> Optional<T> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Optional::some(payload.into_inner()),
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Projects the error side, discarding the success value.
    pub fn err(self) -> Optional<E> {
        match self.storage.into_slot() {
            Slot::Primary(_) => Optional::none(),
            Slot::Secondary(payload) => Optional::some(payload.into_inner()),
        }
    }

    /// Projects both sides as non-owning borrows.
    pub fn as_ref(&self) -> Fallible<Ref<'_, T>, Ref<'_, E>> {
        match self.storage.slot() {
            Slot::Primary(payload) => Fallible::from_ok(Ref::new(payload.get())),
            Slot::Secondary(payload) => Fallible::from_err(Ref::new(payload.get())),
        }
    }

    /// Projects both sides as exclusive non-owning borrows.
    pub fn as_mut(&mut self) -> Fallible<RefMut<'_, T>, RefMut<'_, E>> {
        match self.storage.slot_mut() {
            Slot::Primary(payload) => Fallible::from_ok(RefMut::new(payload.get_mut())),
            Slot::Secondary(payload) => Fallible::from_err(RefMut::new(payload.get_mut())),
        }
    }

    /// Transforms the success value, passing errors through.
    pub fn map<U>(self, function: impl FnOnce(T) -> U) -> Fallible<U, E> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Fallible::from_ok(function(payload.into_inner())),
            Slot::Secondary(payload) => Fallible::from_err(payload.into_inner()),
        }
    }

    /// Transforms the error, passing success values through.
    pub fn map_err<F>(self, function: impl FnOnce(E) -> F) -> Fallible<T, F> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Fallible::from_ok(payload.into_inner()),
            Slot::Secondary(payload) => Fallible::from_err(function(payload.into_inner())),
        }
    }

    /// Transforms the success value, or returns `default` on error.
    pub fn map_or<U>(self, default: U, function: impl FnOnce(T) -> U) -> U {
        match self.storage.into_slot() {
            Slot::Primary(payload) => function(payload.into_inner()),
            Slot::Secondary(_) => default,
        }
    }

    /// Transforms the success value, or computes the fallback from the
    /// error.
    pub fn map_or_else<U>(
        self,
        default: impl FnOnce(E) -> U,
        function: impl FnOnce(T) -> U,
    ) -> U {
        match self.storage.into_slot() {
            Slot::Primary(payload) => function(payload.into_inner()),
            Slot::Secondary(payload) => default(payload.into_inner()),
        }
    }

    /// Returns `other` on success, the error otherwise.
    pub fn and<U>(self, other: Fallible<U, E>) -> Fallible<U, E> {
        match self.storage.into_slot() {
            Slot::Primary(_) => other,
            Slot::Secondary(payload) => Fallible::from_err(payload.into_inner()),
        }
    }

    /// Chains a fallible computation, flattening the result. `function` is
    /// not invoked when the receiver holds an error.
    pub fn and_then<U>(self, function: impl FnOnce(T) -> Fallible<U, E>) -> Fallible<U, E> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => function(payload.into_inner()),
            Slot::Secondary(payload) => Fallible::from_err(payload.into_inner()),
        }
    }

    /// Returns self on success, `other` otherwise.
    pub fn or<F>(self, other: Fallible<T, F>) -> Fallible<T, F> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Fallible::from_ok(payload.into_inner()),
            Slot::Secondary(_) => other,
        }
    }

    /// Returns self on success, or recovers from the error through
    /// `function`.
    pub fn or_else<F>(self, function: impl FnOnce(E) -> Fallible<T, F>) -> Fallible<T, F> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Fallible::from_ok(payload.into_inner()),
            Slot::Secondary(payload) => function(payload.into_inner()),
        }
    }

    /// Observes the success value without altering state.
    pub fn inspect(self, function: impl FnOnce(&T)) -> Self {
        if let Slot::Primary(payload) = self.storage.slot() {
            function(payload.get());
        }

        self
    }

    /// Observes the error without altering state.
    pub fn inspect_err(self, function: impl FnOnce(&E)) -> Self {
        if let Slot::Secondary(payload) = self.storage.slot() {
            function(payload.get());
        }

        self
    }

    /// Returns the success value; reports `message` through the panic hook
    /// on error.
    pub fn expect(self, message: &str) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => panic::failed_expect("Fallible", "Ok", message),
        }
    }

    /// Returns the error; reports `message` through the panic hook on
    /// success.
    pub fn expect_err(self, message: &str) -> E {
        match self.storage.into_slot() {
            Slot::Primary(_) => panic::failed_expect("Fallible", "Err", message),
            Slot::Secondary(payload) => payload.into_inner(),
        }
    }

    /// Returns the success value; fatal on error.
    pub fn unwrap(self) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => panic::failed_unwrap("Fallible", "Err"),
        }
    }

    /// Returns the error; fatal on success.
    pub fn unwrap_err(self) -> E {
        match self.storage.into_slot() {
            Slot::Primary(_) => panic::failed_unwrap("Fallible", "Ok"),
            Slot::Secondary(payload) => payload.into_inner(),
        }
    }

    /// Returns the success value, or `alternative` on error. Never fatal.
    pub fn unwrap_or(self, alternative: T) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => alternative,
        }
    }

    /// Returns the success value, or computes the fallback from the error.
    pub fn unwrap_or_else(self, alternative: impl FnOnce(E) -> T) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(payload) => alternative(payload.into_inner()),
        }
    }

    /// Returns the success value, or `T::default()` on error.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the error, or `E::default()` on success.
    pub fn unwrap_err_or_default(self) -> E
    where
        E: Default,
    {
        match self.storage.into_slot() {
            Slot::Primary(_) => E::default(),
            Slot::Secondary(payload) => payload.into_inner(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Fallible<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.storage.slot() {
            Slot::Primary(payload) => f.debug_tuple("Ok").field(payload.get()).finish(),
            Slot::Secondary(payload) => f.debug_tuple("Err").field(payload.get()).finish(),
        }
    }
}
