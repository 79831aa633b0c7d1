//! A fixed-capacity FIFO queue over a ring of [`ConstrainedArray`] slots.
//!
//! The queue never grows on its own: enqueueing into a full queue fails with
//! [`Error::QueueFull`] until [`CircularQueue::resize`] is called.
//!
//! # Examples
//!
//! ```
//! use classic_collections::{queue::CircularQueue, Error};
//!
//! let mut queue = CircularQueue::with_capacity(2);
//! queue.enqueue('a').unwrap();
//! queue.enqueue('b').unwrap();
//! assert_eq!(queue.enqueue('c'), Err(Error::QueueFull));
//!
//! queue.resize(4).unwrap();
//! queue.enqueue('c').unwrap();
//! assert_eq!(queue.dequeue(), Ok('a'));
//! assert_eq!(queue.to_string(), "b, c");
//! ```

use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::array::ConstrainedArray;
use crate::error::{Error, Result};

/// Capacity of a queue made with [`CircularQueue::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A ring buffer queue. The occupied slots run from `head` for `len` slots,
/// wrapping around the end of the backing array.
#[derive(Clone)]
pub struct CircularQueue<T> {
    data: ConstrainedArray<T>,
    head: usize,
    len: usize,
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularQueue<T> {
    /// An empty queue with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: ConstrainedArray::with_slots(capacity),
            head: 0,
            len: 0,
        }
    }

    /// The number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// How many elements fit before the queue is full.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Adds `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::QueueFull);
        }
        let tail = (self.head + self.len) % self.capacity();
        self.data.set(tail, Some(value))?;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::QueueEmpty);
        }
        let value = self
            .data
            .take(self.head)?
            .ok_or(Error::VacantSlot { index: self.head })?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(value)
    }

    /// Moves the queue into a larger backing array. The front of the queue
    /// lands in slot 0. Shrinking (or keeping the size) is rejected.
    pub fn resize(&mut self, capacity: usize) -> Result<()> {
        let current = self.capacity();
        if capacity <= current {
            return Err(Error::InvalidCapacity {
                current,
                requested: capacity,
            });
        }

        let mut data = ConstrainedArray::with_slots(capacity);
        for offset in 0..self.len {
            let moved = self.data.take((self.head + offset) % current)?;
            data.set(offset, moved)?;
        }
        debug!(from = current, to = capacity, len = self.len, "resized queue");

        self.data = data;
        self.head = 0;
        Ok(())
    }

    /// The queued elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`CircularQueue`].
pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.queue.len {
            return None;
        }
        let slot = (self.queue.head + self.offset) % self.queue.capacity();
        self.offset += 1;
        self.queue.data.get(slot).ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
