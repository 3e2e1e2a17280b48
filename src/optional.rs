//! `Optional`: value-or-absence facade over tagged storage.

use core::fmt;

use crate::fallible::Fallible;
use crate::panic;
use crate::payload::{Payload, Unit};
use crate::reference::{Ref, RefMut};
use crate::storage::{Slot, TaggedStorage};

/// Contains either a value (`Some`) or nothing (`None`).
///
/// Queries borrow, mutators edit in place, combinators consume the facade
/// and move the payload into their result. A combinator never invokes its
/// caller-supplied function unless the receiver holds the state the function
/// is for.
///
/// ```
/// use sumcell::Optional;
///
/// let value = Optional::some(5)
///     .filter(|x| *x > 3)
///     .map(|x| x * 2)
///     .unwrap_or(0);
/// assert_eq!(value, 10);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Optional<T> {
    storage: TaggedStorage<T, Unit>,
}

impl<T> Optional<T> {
    /// Creates an `Optional` containing `value`.
    pub const fn some(value: T) -> Self {
        Self {
            storage: TaggedStorage::primary(Payload::new(value)),
        }
    }

    /// Creates an empty `Optional`.
    pub const fn none() -> Self {
        Self {
            storage: TaggedStorage::secondary(Payload::new(Unit)),
        }
    }

    /// Whether a value is contained.
    pub const fn is_some(&self) -> bool {
        matches!(self.storage.slot(), Slot::Primary(_))
    }

    /// Whether nothing is contained.
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Whether a value is contained and satisfies `predicate`.
    pub fn is_some_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self.storage.slot() {
            Slot::Primary(payload) => predicate(payload.get()),
            Slot::Secondary(_) => false,
        }
    }

    /// Whether the contained value equals `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self.storage.slot() {
            Slot::Primary(payload) => payload.get() == value,
            Slot::Secondary(_) => false,
        }
    }

    /// Whether a value is contained and satisfies `predicate`.
    /// Alias of [`is_some_and`](Self::is_some_and).
    pub fn exists(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        self.is_some_and(predicate)
    }

    /// Projects the contained value as a non-owning borrow.
    pub fn as_ref(&self) -> Optional<Ref<'_, T>> {
        match self.storage.slot() {
            Slot::Primary(payload) => Optional::some(Ref::new(payload.get())),
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Projects the contained value as an exclusive non-owning borrow.
    pub fn as_mut(&mut self) -> Optional<RefMut<'_, T>> {
        match self.storage.slot_mut() {
            Slot::Primary(payload) => Optional::some(RefMut::new(payload.get_mut())),
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Returns the value; reports `message` through the panic hook if empty.
    pub fn expect(self, message: &str) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => panic::failed_expect("Optional", "Some", message),
        }
    }

    /// Asserts emptiness; reports `message` through the panic hook if a
    /// value is contained.
    pub fn expect_none(self, message: &str) {
        if self.is_some() {
            panic::failed_expect("Optional", "None", message);
        }
    }

    /// Returns the value; fatal if empty.
    pub fn unwrap(self) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => panic::failed_unwrap("Optional", "None"),
        }
    }

    /// Asserts emptiness; fatal if a value is contained.
    pub fn unwrap_none(self) {
        if self.is_some() {
            panic::failed_unwrap("Optional", "Some");
        }
    }

    /// Returns the value, or `alternative` if empty. Never fatal.
    pub fn unwrap_or(self, alternative: T) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => alternative,
        }
    }

    /// Returns the value, or the result of `alternative` if empty.
    pub fn unwrap_or_else(self, alternative: impl FnOnce() -> T) -> T {
        match self.storage.into_slot() {
            Slot::Primary(payload) => payload.into_inner(),
            Slot::Secondary(_) => alternative(),
        }
    }

    /// Returns the value, or `T::default()` if empty.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Runs `handler` if a value is contained, consuming the facade.
    pub fn unwrap_none_or_else(self, handler: impl FnOnce()) {
        if self.is_some() {
            handler();
        }
    }

    /// Transforms the contained value, keeping `None` as is.
    pub fn map<U>(self, function: impl FnOnce(T) -> U) -> Optional<U> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Optional::some(function(payload.into_inner())),
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Observes the contained value without altering state.
    pub fn inspect(self, function: impl FnOnce(&T)) -> Self {
        if let Slot::Primary(payload) = self.storage.slot() {
            function(payload.get());
        }

        self
    }

    /// Transforms the contained value, or returns `default` if empty.
    pub fn map_or<U>(self, default: U, function: impl FnOnce(T) -> U) -> U {
        match self.storage.into_slot() {
            Slot::Primary(payload) => function(payload.into_inner()),
            Slot::Secondary(_) => default,
        }
    }

    /// Transforms the contained value, or computes a default if empty.
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, function: impl FnOnce(T) -> U) -> U {
        match self.storage.into_slot() {
            Slot::Primary(payload) => function(payload.into_inner()),
            Slot::Secondary(_) => default(),
        }
    }

    /// Converts to [`Fallible`], substituting `error` for absence.
    pub fn ok_or<E>(self, error: E) -> Fallible<T, E> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Fallible::from_ok(payload.into_inner()),
            Slot::Secondary(_) => Fallible::from_err(error),
        }
    }

    /// Converts to [`Fallible`], computing the error lazily.
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Fallible<T, E> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Fallible::from_ok(payload.into_inner()),
            Slot::Secondary(_) => Fallible::from_err(error()),
        }
    }

    /// Returns `other` if a value is contained, `None` otherwise.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self.storage.into_slot() {
            Slot::Primary(_) => other,
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Chains a computation that is itself optional, flattening the result.
    /// `function` is not invoked when the receiver is empty.
    pub fn and_then<U>(self, function: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self.storage.into_slot() {
            Slot::Primary(payload) => function(payload.into_inner()),
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self.storage.into_slot() {
            Slot::Primary(payload) => {
                if predicate(payload.get()) {
                    Optional::some(payload.into_inner())
                } else {
                    Optional::none()
                }
            }
            Slot::Secondary(_) => Optional::none(),
        }
    }

    /// Returns self if a value is contained, `other` otherwise.
    pub fn or(self, other: Self) -> Self {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Optional::some(payload.into_inner()),
            Slot::Secondary(_) => other,
        }
    }

    /// Returns self if a value is contained, the result of `alternative`
    /// otherwise.
    pub fn or_else(self, alternative: impl FnOnce() -> Self) -> Self {
        match self.storage.into_slot() {
            Slot::Primary(payload) => Optional::some(payload.into_inner()),
            Slot::Secondary(_) => alternative(),
        }
    }

    /// Contains a value iff exactly one of self and `other` does.
    pub fn xor(self, other: Self) -> Self {
        match (self.storage.into_slot(), other.storage.into_slot()) {
            (Slot::Primary(payload), Slot::Secondary(_)) => {
                Optional::some(payload.into_inner())
            }
            (Slot::Secondary(_), Slot::Primary(payload)) => {
                Optional::some(payload.into_inner())
            }
            _ => Optional::none(),
        }
    }

    /// Pairs two contained values; `None` if either side is empty.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self.storage.into_slot(), other.storage.into_slot()) {
            (Slot::Primary(left), Slot::Primary(right)) => {
                Optional::some((left.into_inner(), right.into_inner()))
            }
            _ => Optional::none(),
        }
    }

    /// Combines two contained values through `function`; `None` if either
    /// side is empty.
    pub fn zip_with<U, R>(
        self,
        other: Optional<U>,
        function: impl FnOnce(T, U) -> R,
    ) -> Optional<R> {
        match (self.storage.into_slot(), other.storage.into_slot()) {
            (Slot::Primary(left), Slot::Primary(right)) => {
                Optional::some(function(left.into_inner(), right.into_inner()))
            }
            _ => Optional::none(),
        }
    }

    /// Forces a value in and returns a borrow of it.
    pub fn insert(&mut self, value: T) -> &mut T {
        self.storage.assign_primary(value)
    }

    /// Returns a borrow of the value, first inserting `value` if empty.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        if self.is_none() {
            self.storage.assign_primary(value);
        }

        match self.storage.slot_mut() {
            Slot::Primary(payload) => payload.get_mut(),
            Slot::Secondary(_) => unreachable!(),
        }
    }

    /// Returns a borrow of the value, first inserting `T::default()` if
    /// empty.
    pub fn get_or_insert_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.get_or_insert_with(T::default)
    }

    /// Returns a borrow of the value, first inserting the result of
    /// `function` if empty. `function` is not invoked when a value is
    /// already contained.
    pub fn get_or_insert_with(&mut self, function: impl FnOnce() -> T) -> &mut T {
        if self.is_none() {
            self.storage.assign_primary(function());
        }

        match self.storage.slot_mut() {
            Slot::Primary(payload) => payload.get_mut(),
            Slot::Secondary(_) => unreachable!(),
        }
    }

    /// Moves the state out, leaving `None` behind.
    pub fn take(&mut self) -> Self {
        Self {
            storage: self
                .storage
                .replace(TaggedStorage::secondary(Payload::new(Unit))),
        }
    }

    /// Moves the state out if `predicate` accepts the contained value,
    /// leaving `None` behind; returns `None` otherwise.
    pub fn take_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Self {
        let accepted = match self.storage.slot_mut() {
            Slot::Primary(payload) => predicate(payload.get_mut()),
            Slot::Secondary(_) => false,
        };

        if accepted { self.take() } else { Self::none() }
    }

    /// Installs `value` and returns the prior state, which may be `None`.
    pub fn replace(&mut self, value: T) -> Self {
        Self {
            storage: self
                .storage
                .replace(TaggedStorage::primary(Payload::new(value))),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.storage.slot() {
            Slot::Primary(payload) => f.debug_tuple("Some").field(payload.get()).finish(),
            Slot::Secondary(_) => f.write_str("None"),
        }
    }
}
