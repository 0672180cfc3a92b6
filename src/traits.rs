//! Capability traits over queue-like and list-like containers.
//!
//! [`Queue`] is the narrow enqueue/dequeue surface; [`List`] extends it with indexed
//! access and mid-sequence mutation.  Both are object-safe and are implemented by
//! [`RingSequence`] and `VecDeque`, so callers can be written against a capability
//! without naming a backend.

use std::collections::VecDeque;

use crate::error::{Result, RingError};
use crate::sequence::RingSequence;

/// An object-safe FIFO queue.
pub trait Queue<T> {
    /// Returns the number of elements in the queue.
    fn len(&self) -> usize;
    /// Returns `true` if the queue contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Appends an element at the tail.
    fn enter(&mut self, item: T);
    /// Removes and returns the head element, or `None` if empty.
    fn poll(&mut self) -> Option<T>;
    /// Returns the head element, or `None` if empty.
    fn peek(&self) -> Option<&T>;
}

/// An object-safe indexed sequence.
pub trait List<T>: Queue<T> {
    /// Appends an element at the end.
    fn add(&mut self, item: T) {
        self.enter(item);
    }
    /// Inserts an element at `index`; `index == len()` appends.
    fn add_at(&mut self, index: usize, item: T) -> Result<()>;
    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;
    /// Removes and returns the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T>;
    /// Removes all elements.
    fn clear(&mut self);

    /// Returns the index of the first element equal to `item` without modifying the list.
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Removes the first element equal to `item`.  Returns whether one was found.
    fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T> Queue<T> for RingSequence<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn enter(&mut self, item: T) {
        self.enter(item);
    }
    fn poll(&mut self) -> Option<T> {
        self.poll()
    }
    fn peek(&self) -> Option<&T> {
        self.peek()
    }
}

impl<T> List<T> for RingSequence<T> {
    fn add_at(&mut self, index: usize, item: T) -> Result<()> {
        self.enter_at(index, item)
    }
    fn get(&self, index: usize) -> Result<&T> {
        self.get(index)
    }
    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.remove(index)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of(item)
    }
    fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_item(item)
    }
}

impl<T> Queue<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn enter(&mut self, item: T) {
        self.push_back(item);
    }
    fn poll(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<&T> {
        self.front()
    }
}

impl<T> List<T> for VecDeque<T> {
    fn add_at(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len() {
            return Err(RingError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        self.insert(index, item);
        Ok(())
    }
    fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.get(index)
            .ok_or(RingError::IndexOutOfBounds { index, len })
    }
    fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        self.remove(index)
            .ok_or(RingError::IndexOutOfBounds { index, len })
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_queue(queue: &mut dyn Queue<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(x) = queue.poll() {
            out.push(x);
        }
        out
    }

    fn exercise_list(list: &mut dyn List<i32>) {
        list.add(1);
        list.add(3);
        list.add_at(1, 2).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Ok(&2));
        assert_eq!(list.index_of(&3), Some(2));
        assert_eq!(list.len(), 3);
        assert!(list.remove_item(&1));
        assert!(!list.remove_item(&1));
        assert_eq!(list.remove_at(0), Ok(2));
        assert_eq!(
            list.add_at(5, 0),
            Err(RingError::IndexOutOfBounds { index: 5, len: 1 })
        );
        assert_eq!(
            list.get(1),
            Err(RingError::IndexOutOfBounds { index: 1, len: 1 })
        );
        list.clear();
        assert!(list.is_empty());
    }

    // ─── Queue trait dispatch ─────────────────────────────────────────────────
    #[test]
    fn test_traits_queue_dyn() {
        let mut seq: RingSequence<i32> = RingSequence::new();
        let q: &mut dyn Queue<i32> = &mut seq;
        q.enter(1);
        q.enter(2);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.len(), 2);
        assert_eq!(drain_queue(q), vec![1, 2]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_traits_queue_vecdeque() {
        let mut d: VecDeque<i32> = VecDeque::new();
        Queue::enter(&mut d, 7);
        Queue::enter(&mut d, 8);
        assert_eq!(drain_queue(&mut d), vec![7, 8]);
    }

    // ─── List trait dispatch ──────────────────────────────────────────────────
    #[test]
    fn test_traits_list_ring_sequence() {
        let mut seq: RingSequence<i32> = RingSequence::new();
        exercise_list(&mut seq);
    }

    #[test]
    fn test_traits_list_vecdeque() {
        let mut d: VecDeque<i32> = VecDeque::new();
        exercise_list(&mut d);
    }

    #[test]
    fn test_traits_list_as_queue() {
        fn first<L: List<i32> + ?Sized>(list: &mut L) -> Option<i32> {
            list.poll()
        }
        let mut seq: RingSequence<i32> = [4, 5].into_iter().collect();
        assert_eq!(first(&mut seq), Some(4));
    }
}
