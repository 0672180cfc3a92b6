//! # Ring Sequence
//!
//! A growable, array-backed circular queue that doubles as an indexed list.
//!
//! [`RingSequence`] supports `O(1)` amortized append, `O(1)` removal from the head and
//! `O(min(k, n - k))` insertion or removal at any index by shifting whichever side of
//! the ring is shorter.  Unlike a linked list it never allocates per element; the
//! backing array grows by `capacity * 3 / 2 + 1` when full and never shrinks.
//!
//! ## Key Features
//!
//! * **Queue and list in one:** [`Queue`] is the narrow enqueue/dequeue capability,
//!   [`List`] adds indexed access.  Both are object-safe and also implemented for
//!   `std::collections::VecDeque`.
//! * **Checked indices:** out-of-range access returns [`RingError::IndexOutOfBounds`]
//!   before anything is modified.
//! * **No stale references:** vacated slots are cleared immediately, so removed
//!   elements drop as soon as they leave the container.
//! * **Optional `serde`:** enable the `serde` feature to (de)serialize as a sequence.
//!
//! ## Examples
//!
//! ### As a queue
//!
//! ```rust
//! use ring_sequence::RingSequence;
//!
//! let mut queue = RingSequence::new();
//! queue.enter("a");
//! queue.enter("b");
//!
//! assert_eq!(queue.peek(), Some(&"a"));
//! assert_eq!(queue.poll(), Some("a"));
//! assert_eq!(queue.poll(), Some("b"));
//! assert_eq!(queue.poll(), None);
//! ```
//!
//! ### As a list
//!
//! ```rust
//! use ring_sequence::{RingError, RingSequence};
//!
//! let mut list = RingSequence::with_capacity(4)?;
//! list.add(10);
//! list.add(30);
//! list.add_at(1, 20)?;
//!
//! assert_eq!(list.get(1), Ok(&20));
//! assert_eq!(list.index_of(&30), Some(2));
//! assert_eq!(list.remove(0)?, 10);
//! assert!(list.remove_item(&30));
//! assert_eq!(
//!     list.get(5),
//!     Err(RingError::IndexOutOfBounds { index: 5, len: 1 })
//! );
//! # Ok::<(), RingError>(())
//! ```
//!
//! ### Against a capability
//!
//! ```rust
//! use ring_sequence::{Queue, RingSequence};
//! use std::collections::VecDeque;
//!
//! fn drain(queue: &mut dyn Queue<u32>) -> u32 {
//!     let mut total = 0;
//!     while let Some(x) = queue.poll() {
//!         total += x;
//!     }
//!     total
//! }
//!
//! let mut ring: RingSequence<u32> = (1..=4).collect();
//! let mut deque: VecDeque<u32> = (1..=4).collect();
//! assert_eq!(drain(&mut ring), 10);
//! assert_eq!(drain(&mut deque), 10);
//! ```

// --- Module Declarations ---

pub mod error;
pub mod sequence;
pub mod traits;

mod serde_impl;

// --- Re-exports ---

pub use error::{Result, RingError};
pub use sequence::{DEFAULT_CAPACITY, IntoIter, Iter, IterMut, RingSequence};
pub use traits::{List, Queue};
