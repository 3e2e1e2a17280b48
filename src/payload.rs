//! Payload boxes: single-value ownership cells.
//!
//! Core types: `Payload` (owns exactly one value), `Unit` (absence marker).

/// Owns exactly one value and exposes copy/borrow/move accessors.
///
/// Which slot of a [`TaggedStorage`](crate::storage::TaggedStorage) a payload
/// occupies is the storage's concern; the box itself only guards access to
/// its value. Consumption-after-move is rejected by the compiler, so no
/// moved-from state needs tracking here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Payload<V> {
    value: V,
}

impl<V> Payload<V> {
    /// Boxes a value.
    pub const fn new(value: V) -> Self {
        Self { value }
    }

    /// Returns a duplicate of the value.
    pub fn dup(&self) -> V
    where
        V: Clone,
    {
        self.value.clone()
    }

    /// Immutable borrow of the value.
    pub const fn get(&self) -> &V {
        &self.value
    }

    /// Mutable borrow of the value.
    pub const fn get_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Transfers the value out of the box.
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Replaces the value in place, dropping the previous one.
    pub fn set(&mut self, value: V) {
        self.value = value;
    }
}

impl<V> From<V> for Payload<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

/// Zero-sized absence marker, the secondary payload of
/// [`Optional`](crate::optional::Optional).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Unit;
