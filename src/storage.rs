//! Two-slot tagged storage cell.
//!
//! `TaggedStorage<V, W>` holds either a `Payload<V>` (primary) or a
//! `Payload<W>` (secondary), never both. The cell is a native two-variant
//! enum, so the compiler maintains the single-active-payload invariant and
//! the drop glue destroys exactly the active payload; no manual
//! construct/destroy sequencing and no trivial-payload fast path is needed.
//!
//! Reassignment keeps the storage contract of the facades:
//! - same-tag transitions forward to the payload's own [`Payload::set`],
//!   reusing the slot;
//! - cross-tag transitions overwrite the whole cell, dropping the old
//!   payload before the new slot is recorded.

use crate::payload::Payload;

/// Discriminant naming the active slot.
///
/// Facades read it as `Some`/`None` and `Ok`/`Err` respectively.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Tag {
    Primary,
    Secondary,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum Slot<V, W> {
    Primary(Payload<V>),
    Secondary(Payload<W>),
}

/// Tagged union of two payload slots.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TaggedStorage<V, W> {
    slot: Slot<V, W>,
}

impl<V, W> TaggedStorage<V, W> {
    /// First-time construction with an active primary payload.
    pub const fn primary(payload: Payload<V>) -> Self {
        Self {
            slot: Slot::Primary(payload),
        }
    }

    /// First-time construction with an active secondary payload.
    pub const fn secondary(payload: Payload<W>) -> Self {
        Self {
            slot: Slot::Secondary(payload),
        }
    }

    /// Which slot is active.
    pub const fn tag(&self) -> Tag {
        match self.slot {
            Slot::Primary(_) => Tag::Primary,
            Slot::Secondary(_) => Tag::Secondary,
        }
    }

    /// Installs a primary value and returns a borrow of it.
    ///
    /// If the primary slot is already active the value is assigned in place;
    /// otherwise the secondary payload is dropped and the cell switches tag.
    pub fn assign_primary(&mut self, value: V) -> &mut V {
        match &mut self.slot {
            Slot::Primary(payload) => payload.set(value),
            Slot::Secondary(_) => self.slot = Slot::Primary(Payload::new(value)),
        }

        match &mut self.slot {
            Slot::Primary(payload) => payload.get_mut(),
            Slot::Secondary(_) => unreachable!(),
        }
    }

    /// Installs a secondary value and returns a borrow of it.
    ///
    /// Mirror of [`assign_primary`](Self::assign_primary).
    pub fn assign_secondary(&mut self, value: W) -> &mut W {
        match &mut self.slot {
            Slot::Secondary(payload) => payload.set(value),
            Slot::Primary(_) => self.slot = Slot::Secondary(Payload::new(value)),
        }

        match &mut self.slot {
            Slot::Secondary(payload) => payload.get_mut(),
            Slot::Primary(_) => unreachable!(),
        }
    }

    /// Swaps in a whole new cell and returns the previous one.
    pub fn replace(&mut self, storage: Self) -> Self {
        core::mem::replace(self, storage)
    }

    pub(crate) const fn slot(&self) -> &Slot<V, W> {
        &self.slot
    }

    pub(crate) const fn slot_mut(&mut self) -> &mut Slot<V, W> {
        &mut self.slot
    }

    pub(crate) fn into_slot(self) -> Slot<V, W> {
        self.slot
    }
}
