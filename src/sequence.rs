//! Growable circular queue with list-style indexed access.
//!
//! [`RingSequence`] keeps its elements in a boxed slice of slots addressed through a
//! wrapping `head` cursor.  Appending and polling never move other elements; inserting
//! or removing in the middle shifts whichever side of the ring is shorter, so the cost
//! is `O(min(k, n - k))`.
//!
//! The backing array only grows.  When it is full and another element arrives, it is
//! reallocated to `capacity * 3 / 2 + 1` slots and the logical window is unwrapped so
//! that `head == 0` again.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};
use core::slice;

use tracing::{debug, trace};

use crate::error::{Result, RingError};

/// Capacity used by [`RingSequence::new`].
pub const DEFAULT_CAPACITY: usize = 1;

/// A growable array-backed circular queue.
///
/// Logical index `i` lives in physical slot `(head + i) % capacity`.  Slots outside the
/// logical window always hold `None`, so removed elements are dropped as soon as they
/// leave the container.
///
/// | Operation | Cost |
/// |-----------|------|
/// | [`enter`](Self::enter), [`poll`](Self::poll), [`peek`](Self::peek), [`get`](Self::get) | `O(1)` (amortized for `enter`) |
/// | [`enter_at`](Self::enter_at), [`remove`](Self::remove) | `O(min(k, n - k))` |
/// | [`index_of`](Self::index_of), [`clear`](Self::clear) | `O(n)` |
#[derive(Clone)]
pub struct RingSequence<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

/// Which part of the ring moves to make room for (or close the gap after) an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    /// The target is the free tail slot (insert) or the last element (remove).
    None,
    /// The target is the head slot: move `head` one step instead of shifting.
    Head,
    /// Shift the segment between `head` and the target by one slot.
    Front,
    /// Shift the segment between the target and the tail by one slot.
    Back,
}

/// Ring geometry an insert or a removal is planned against.
#[derive(Debug, Clone, Copy)]
struct Placement {
    head: usize,
    /// Free tail slot for inserts, last occupied slot for removals.
    edge: usize,
    target: usize,
    index: usize,
    len: usize,
}

impl Placement {
    /// Insert decision table, first matching row wins:
    ///
    /// | Condition | Shift |
    /// |-----------|-------|
    /// | `target == tail` | `None` |
    /// | `target == head` | `Head` (prepend) |
    /// | `target < head` or `head == 0` | `Back` |
    /// | `target > tail` | `Front` |
    /// | `index < len / 2` | `Front` |
    /// | otherwise | `Back` |
    ///
    /// `head == 0` forces `Back` because the slot before `head` would wrap to the end of
    /// the array and the front segment could not be moved in one contiguous block.
    fn plan_insert(self) -> Shift {
        if self.target == self.edge {
            Shift::None
        } else if self.target == self.head {
            Shift::Head
        } else if self.target < self.head || self.head == 0 {
            Shift::Back
        } else if self.target > self.edge || self.index < self.len / 2 {
            Shift::Front
        } else {
            Shift::Back
        }
    }

    /// Removal decision table, first matching row wins:
    ///
    /// | Condition | Shift |
    /// |-----------|-------|
    /// | `target == last` | `None` |
    /// | `target == head` | `Head` (advance) |
    /// | `target < head` | `Back` |
    /// | `target > last` | `Front` |
    /// | `index < len / 2` | `Front` |
    /// | otherwise | `Back` |
    fn plan_remove(self) -> Shift {
        if self.target == self.edge {
            Shift::None
        } else if self.target == self.head {
            Shift::Head
        } else if self.target < self.head {
            Shift::Back
        } else if self.target > self.edge || self.index < self.len / 2 {
            Shift::Front
        } else {
            Shift::Back
        }
    }
}

/// Capacity after one growth step: `capacity * 3 / 2 + 1`.
///
/// # Panics
/// Panics if the new capacity overflows `usize`.
#[inline]
fn grown_capacity(capacity: usize) -> usize {
    match capacity
        .checked_add(capacity / 2)
        .and_then(|c| c.checked_add(1))
    {
        Some(c) => c,
        None => panic!("RingSequence capacity overflow"),
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T> RingSequence<T> {
    /// Creates an empty sequence with room for [`DEFAULT_CAPACITY`] element.
    pub fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` elements before the first
    /// reallocation.
    ///
    /// Returns [`RingError::ZeroCapacity`] when `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            debug!("rejected RingSequence with zero initial capacity");
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self {
            slots: empty_slots(capacity),
            head: 0,
            len: 0,
        })
    }

    /// Returns the number of elements in the sequence.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing array.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Maps a logical index to its physical slot.
    ///
    /// Valid for `index <= capacity`, which covers every logical index plus the tail.
    /// Never computes `head + index` when it could reach past the array, so it cannot
    /// overflow even for capacities near `usize::MAX`.
    #[inline(always)]
    fn physical(&self, index: usize) -> usize {
        let room = self.slots.len() - self.head;
        if index >= room {
            index - room
        } else {
            self.head + index
        }
    }

    #[inline(always)]
    fn wrap_inc(&self, slot: usize) -> usize {
        if slot + 1 == self.slots.len() { 0 } else { slot + 1 }
    }

    #[inline(always)]
    fn wrap_dec(&self, slot: usize) -> usize {
        if slot == 0 { self.slots.len() - 1 } else { slot - 1 }
    }

    #[inline(always)]
    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(RingError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Takes the element out of an occupied slot.
    fn take_slot(&mut self, slot: usize) -> T {
        match self.slots[slot].take() {
            Some(item) => item,
            None => unreachable!("Logic Error: slot {slot} inside the window was empty"),
        }
    }

    /// Grows the backing array if it is full.
    #[inline(always)]
    fn ensure_capacity(&mut self) {
        if self.len == self.slots.len() {
            self.grow();
        }
    }

    /// Cold path: reallocates and unwraps the logical window to start at slot 0.
    ///
    /// Only called when the array is full, so `[head, capacity)` followed by
    /// `[0, head)` is exactly the logical order.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = grown_capacity(old_capacity);

        let mut slots = Vec::with_capacity(new_capacity);
        let (wrapped, leading) = self.slots.split_at_mut(self.head);
        slots.extend(leading.iter_mut().map(Option::take));
        slots.extend(wrapped.iter_mut().map(Option::take));
        slots.resize_with(new_capacity, || None);

        trace!(
            old_capacity,
            new_capacity,
            len = self.len,
            "grew RingSequence backing array"
        );

        self.slots = slots.into_boxed_slice();
        self.head = 0;
    }

    /// Appends `item` at the tail.
    pub fn enter(&mut self, item: T) {
        self.ensure_capacity();
        let tail = self.physical(self.len);
        self.slots[tail] = Some(item);
        self.len += 1;
    }

    /// List-style alias for [`enter`](Self::enter).
    #[inline]
    pub fn add(&mut self, item: T) {
        self.enter(item);
    }

    /// Inserts `item` so that it ends up at logical `index`, shifting the shorter side.
    ///
    /// `index == len()` appends and `index == 0` prepends without moving anything.
    /// Returns [`RingError::IndexOutOfBounds`] when `index > len()`.
    pub fn enter_at(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index, self.len + 1)?;
        self.ensure_capacity();

        let mut target = self.physical(index);
        let tail = self.physical(self.len);
        let placement = Placement {
            head: self.head,
            edge: tail,
            target,
            index,
            len: self.len,
        };

        match placement.plan_insert() {
            Shift::None => {}
            Shift::Head => {
                self.head = self.wrap_dec(self.head);
                target = self.head;
            }
            Shift::Front => {
                // `head > 0` here, so [head - 1, target) is contiguous and its first
                // slot is free.
                self.slots[self.head - 1..target].rotate_left(1);
                self.head -= 1;
                target -= 1;
            }
            Shift::Back => {
                // [target, tail] is contiguous and `tail` is free.
                self.slots[target..=tail].rotate_right(1);
            }
        }

        self.slots[target] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// List-style alias for [`enter_at`](Self::enter_at).
    #[inline]
    pub fn add_at(&mut self, index: usize, item: T) -> Result<()> {
        self.enter_at(index, item)
    }

    /// Returns the head element without removing it, or `None` if empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.head].as_ref()
        }
    }

    /// Alias for [`peek`](Self::peek).
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.peek()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        match self.len {
            0 => None,
            len => self.get(len - 1).ok(),
        }
    }

    /// Removes and returns the head element, or `None` if empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.take_slot(self.head);
        self.head = self.wrap_inc(self.head);
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        Some(item)
    }

    /// Returns the element at logical `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.len)?;
        match self.slots[self.physical(index)].as_ref() {
            Some(item) => Ok(item),
            None => unreachable!("Logic Error: slot for index {index} was empty"),
        }
    }

    /// Returns an exclusive reference to the element at logical `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, self.len)?;
        let slot = self.physical(index);
        match self.slots[slot].as_mut() {
            Some(item) => Ok(item),
            None => unreachable!("Logic Error: slot for index {index} was empty"),
        }
    }

    /// Removes and returns the element at logical `index`, shifting the shorter side to
    /// close the gap.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;

        let target = self.physical(index);
        let last = self.physical(self.len - 1);
        let placement = Placement {
            head: self.head,
            edge: last,
            target,
            index,
            len: self.len,
        };
        let removed = self.take_slot(target);

        match placement.plan_remove() {
            Shift::None => {}
            Shift::Head => self.head = self.wrap_inc(self.head),
            Shift::Front => {
                // [head, target] is contiguous; the hole moves to `head`.
                self.slots[self.head..=target].rotate_right(1);
                self.head = self.wrap_inc(self.head);
            }
            Shift::Back => {
                // [target, last] is contiguous; the hole moves to `last`.
                self.slots[target..=last].rotate_left(1);
            }
        }

        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        Ok(removed)
    }

    /// Removes every element.  The backing array keeps its capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        trace!(capacity = self.slots.len(), len = self.len, "cleared RingSequence");
        self.head = 0;
        self.len = 0;
    }

    /// Returns the logical index of the first element equal to `item`.
    ///
    /// This is a pure lookup; use [`take_item`](Self::take_item) to find and remove in
    /// one step.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    /// Returns `true` if some element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning the index it occupied and
    /// the element itself.
    pub fn take_item(&mut self, item: &T) -> Option<(usize, T)>
    where
        T: PartialEq,
    {
        let index = self.index_of(item)?;
        self.remove(index).ok().map(|removed| (index, removed))
    }

    /// Removes the first element equal to `item`.  Returns whether one was found.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.take_item(item).is_some()
    }

    /// Splits the logical window into its leading `[head, ..)` and wrapped `[0, ..)` runs.
    fn window(&self) -> (&[Option<T>], &[Option<T>]) {
        let room = self.slots.len() - self.head;
        if self.len <= room {
            (&self.slots[self.head..self.head + self.len], &[])
        } else {
            (&self.slots[self.head..], &self.slots[..self.len - room])
        }
    }

    fn window_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let room = self.slots.len() - self.head;
        if self.len <= room {
            (&mut self.slots[self.head..self.head + self.len], &mut [])
        } else {
            let (wrapped, leading) = self.slots.split_at_mut(self.head);
            (leading, &mut wrapped[..self.len - room])
        }
    }

    /// Returns a front-to-back iterator over shared references.
    pub fn iter(&self) -> Iter<'_, T> {
        let (leading, wrapped) = self.window();
        Iter {
            leading: leading.iter(),
            wrapped: wrapped.iter(),
        }
    }

    /// Returns a front-to-back iterator over exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (leading, wrapped) = self.window_mut();
        IterMut {
            leading: leading.iter_mut(),
            wrapped: wrapped.iter_mut(),
        }
    }
}

// ─── iterators ────────────────────────────────────────────────────────────────

/// Borrowing iterator returned by [`RingSequence::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    leading: slice::Iter<'a, Option<T>>,
    wrapped: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = match self.leading.next() {
            Some(slot) => slot,
            None => self.wrapped.next()?,
        };
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = match self.wrapped.next_back() {
            Some(slot) => slot,
            None => self.leading.next_back()?,
        };
        slot.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.leading.len() + self.wrapped.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`RingSequence::iter_mut`].
pub struct IterMut<'a, T> {
    leading: slice::IterMut<'a, Option<T>>,
    wrapped: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let slot = match self.leading.next() {
            Some(slot) => slot,
            None => self.wrapped.next()?,
        };
        slot.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = match self.wrapped.next_back() {
            Some(slot) => slot,
            None => self.leading.next_back()?,
        };
        slot.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.leading.len() + self.wrapped.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator that drains the sequence from the head.
pub struct IntoIter<T> {
    inner: RingSequence<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.poll()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len, Some(self.inner.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        match self.inner.len {
            0 => None,
            len => self.inner.remove(len - 1).ok(),
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// ─── std traits ───────────────────────────────────────────────────────────────

impl<T> Default for RingSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingSequence<T> {}

impl<T: Hash> Hash for RingSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> Index<usize> for RingSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for RingSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for RingSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enter(item);
        }
    }
}

impl<T> FromIterator<T> for RingSequence<T> {
    /// Sizes the backing array to the element count (at least one slot).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut slots: Vec<Option<T>> = iter.into_iter().map(Some).collect();
        let len = slots.len();
        if slots.is_empty() {
            slots.push(None);
        }
        Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            len,
        }
    }
}
