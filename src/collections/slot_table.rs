//! `SlotTable` - id-addressed record storage with free-list recycling.
//!
//! Records live in a single `Vec` of slots and never move once inserted.
//! Erased slots are threaded into an intrusive free list (terminated by
//! `usize::MAX`) and reused by later insertions, most recently freed first.
//!
//! Live slots are threaded into a second, doubly linked list in insertion
//! order. That list defines the *table order* used by iteration and by the
//! `*_occupied` stepping methods, so neither ever skips over free slots.
//!
//! Every slot carries a generation counter that is bumped when the slot is
//! freed, so a [`SlotId`] captured before an erasure stops resolving once its
//! slot is recycled.
//!
//! # Performance
//! - `insert`: O(1) amortized
//! - `remove`: O(1), surviving records keep their index
//! - `get` / `find`: O(1)
//! - stepping: O(1); iteration: O(len)

use core::fmt;
use core::iter::FusedIterator;
use serde::{Deserialize, Serialize};

const NO_SLOT: usize = usize::MAX;

/// A handle into a [`SlotTable`]: slot index plus the generation it was issued at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId {
    index: usize,
    generation: u32,
}

impl SlotId {
    #[inline]
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The slot index. Unique among live records, reused after erasure.
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }

    /// The generation of the slot when this id was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Clone)]
enum Slot<T> {
    Occupied {
        generation: u32,
        prev: usize,
        next: usize,
        value: T,
    },
    Free {
        generation: u32,
        next_free: usize,
    },
}

/// Id-addressed storage of homogeneous records.
#[derive(Clone)]
pub struct SlotTable<T> {
    slots: Vec<Slot<T>>,
    free_head: usize,
    // Ends of the live list.
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> SlotTable<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: NO_SLOT,
            head: NO_SLOT,
            tail: NO_SLOT,
            len: 0,
        }
    }

    /// Number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no record is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated (live plus free). Only `clear` shrinks it.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The index the next call to [`insert`](Self::insert) will use.
    #[inline]
    pub fn next_index(&self) -> usize {
        if self.free_head == NO_SLOT {
            self.slots.len()
        } else {
            self.free_head
        }
    }

    /// Inserts a value last in table order and returns its id.
    pub fn insert(&mut self, value: T) -> SlotId {
        let prev = self.tail;
        let (index, generation) = if self.free_head == NO_SLOT {
            let index = self.slots.len();
            self.slots.push(Slot::Occupied {
                generation: 0,
                prev,
                next: NO_SLOT,
                value,
            });
            (index, 0)
        } else {
            let index = self.free_head;
            let slot = &mut self.slots[index];
            let (generation, next_free) = match *slot {
                Slot::Free {
                    generation,
                    next_free,
                } => (generation, next_free),
                Slot::Occupied { .. } => panic!("free list points at occupied slot {index}"),
            };
            *slot = Slot::Occupied {
                generation,
                prev,
                next: NO_SLOT,
                value,
            };
            self.free_head = next_free;
            (index, generation)
        };

        self.set_next(prev, index);
        self.tail = index;
        self.len += 1;
        SlotId::new(index, generation)
    }

    /// Removes the record named by `id`, returning it.
    ///
    /// Returns `None` if `id` is stale or was never issued by this table.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.contains(id) {
            return None;
        }
        self.remove_at(id.index)
    }

    /// Removes whatever record currently occupies `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let generation = match self.slots.get(index)? {
            Slot::Occupied { generation, .. } => *generation,
            Slot::Free { .. } => return None,
        };

        let freed = Slot::Free {
            generation: generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let old = core::mem::replace(&mut self.slots[index], freed);
        self.free_head = index;
        self.len -= 1;

        match old {
            Slot::Occupied {
                prev, next, value, ..
            } => {
                self.set_next(prev, next);
                self.set_prev(next, prev);
                Some(value)
            }
            Slot::Free { .. } => None,
        }
    }

    /// Returns `true` if `id` names a live record.
    #[inline]
    pub fn contains(&self, id: SlotId) -> bool {
        matches!(
            self.slots.get(id.index),
            Some(Slot::Occupied { generation, .. }) if *generation == id.generation
        )
    }

    /// Shared access to the record named by `id`.
    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.index)? {
            Slot::Occupied {
                generation, value, ..
            } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the record named by `id`.
    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.index)? {
            Slot::Occupied {
                generation, value, ..
            } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Shared access to whatever record currently occupies `index`.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        match self.slots.get(index)? {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Mutable access to whatever record currently occupies `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index)? {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Recovers the full id of the record at `index`, if that slot is live.
    #[inline]
    pub fn find(&self, index: usize) -> Option<SlotId> {
        match self.slots.get(index)? {
            Slot::Occupied { generation, .. } => Some(SlotId::new(index, *generation)),
            Slot::Free { .. } => None,
        }
    }

    /// Index of the first live slot in table order.
    #[inline]
    pub fn first_occupied(&self) -> Option<usize> {
        some_slot(self.head)
    }

    /// Index of the last live slot in table order.
    #[inline]
    pub fn last_occupied(&self) -> Option<usize> {
        some_slot(self.tail)
    }

    /// Index of the live slot after `index` in table order.
    ///
    /// Returns `None` at the end, or if `index` is not live.
    #[inline]
    pub fn next_occupied(&self, index: usize) -> Option<usize> {
        match self.slots.get(index)? {
            Slot::Occupied { next, .. } => some_slot(*next),
            Slot::Free { .. } => None,
        }
    }

    /// Index of the live slot before `index` in table order.
    ///
    /// Returns `None` at the start, or if `index` is not live.
    #[inline]
    pub fn prev_occupied(&self, index: usize) -> Option<usize> {
        match self.slots.get(index)? {
            Slot::Occupied { prev, .. } => some_slot(*prev),
            Slot::Free { .. } => None,
        }
    }

    fn set_next(&mut self, index: usize, next: usize) {
        if index == NO_SLOT {
            self.head = next;
        } else if let Slot::Occupied { next: link, .. } = &mut self.slots[index] {
            *link = next;
        }
    }

    fn set_prev(&mut self, index: usize, prev: usize) {
        if index == NO_SLOT {
            self.tail = prev;
        } else if let Slot::Occupied { prev: link, .. } = &mut self.slots[index] {
            *link = prev;
        }
    }

    /// Drops every record and releases the backing storage.
    ///
    /// Ids issued before the clear must not be used afterwards: generations
    /// restart, so they may alias new records.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_head = NO_SLOT;
        self.head = NO_SLOT;
        self.tail = NO_SLOT;
        self.len = 0;
    }

    /// Iterates over live records in table order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

#[inline]
fn some_slot(index: usize) -> Option<usize> {
    (index != NO_SLOT).then_some(index)
}

impl<T> Default for SlotTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(id, value)| (id.index, value)))
            .finish()
    }
}

/// Double-ended iterator over the live records of a [`SlotTable`].
///
/// Follows the live list from both ends; `remaining` tells the two ends when
/// they have met.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let index = self.front;
        match &slots[index] {
            Slot::Occupied {
                generation,
                next,
                value,
                ..
            } => {
                self.front = *next;
                self.remaining -= 1;
                Some((SlotId::new(index, *generation), value))
            }
            Slot::Free { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slots = self.slots;
        let index = self.back;
        match &slots[index] {
            Slot::Occupied {
                generation,
                prev,
                value,
                ..
            } => {
                self.back = *prev;
                self.remaining -= 1;
                Some((SlotId::new(index, *generation), value))
            }
            Slot::Free { .. } => None,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
