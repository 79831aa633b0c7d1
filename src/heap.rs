//! A binary max-heap ordered by a priority function chosen at construction.
//!
//! The heap is a dense array read as a complete binary tree: the node at
//! index `i` has its children at `2i + 1` and `2i + 2`. Every parent has a
//! priority at least as large as its children, so the top of the heap is
//! always at index 0.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Reverse;
//! use classic_collections::heap::PriorityHeap;
//!
//! // Natural order gives a max-heap...
//! let mut max = PriorityHeap::new();
//! max.extend([3, 1, 4, 1, 5]);
//! assert_eq!(max.extract_top(), Ok(5));
//!
//! // ...and a reversed projection of the same order gives a min-heap.
//! let mut min = PriorityHeap::with_priority(|x: &i32| Reverse(*x));
//! min.extend([3, 1, 4, 1, 5]);
//! assert_eq!(min.extract_top(), Ok(1));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// Decides which of two elements belongs nearer the top of a heap.
///
/// Any `Fn(&T) -> K` with `K: Ord` is a priority: elements are compared by
/// the key it projects.
pub trait Priority<T> {
    /// Compares the priorities of `a` and `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, K, F> Priority<T> for F
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a).cmp(&self(b))
    }
}

/// The identity priority: elements are compared by their own [`Ord`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Priority<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A binary heap whose top is the element of greatest priority.
///
/// Elements of equal priority come out in no particular order.
pub struct PriorityHeap<T, P = Natural> {
    data: Vec<T>,
    priority: P,
}

impl<T: Ord> Default for PriorityHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityHeap<T> {
    /// Generates an empty max-heap using the natural order of `T`.
    pub fn new() -> Self {
        Self::with_priority(Natural)
    }
}

impl<T, P> fmt::Debug for PriorityHeap<T, P>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T, P> PriorityHeap<T, P>
where
    P: Priority<T>,
{
    /// Generates an empty heap ordered by `priority`. The priority is used
    /// for every comparison for the lifetime of the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::heap::PriorityHeap;
    ///
    /// let mut heap = PriorityHeap::with_priority(|s: &&str| s.len());
    /// heap.insert("hello");
    /// heap.insert("hi");
    /// heap.insert("abracadabra");
    ///
    /// assert_eq!(heap.peek(), Ok(&"abracadabra"));
    /// ```
    pub fn with_priority(priority: P) -> Self {
        Self {
            data: Vec::new(),
            priority,
        }
    }

    /// The number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The elements in heap (array) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Adds `item`, moving it up past every parent of strictly lower priority.
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// The element of greatest priority, or [`Error::EmptyHeap`].
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyHeap)
    }

    /// Removes and returns the element of greatest priority, or fails with
    /// [`Error::EmptyHeap`].
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::{heap::PriorityHeap, Error};
    ///
    /// let mut heap: PriorityHeap<i32> = [2, 9, 4].into_iter().collect();
    ///
    /// assert_eq!(heap.extract_top(), Ok(9));
    /// assert_eq!(heap.extract_top(), Ok(4));
    /// assert_eq!(heap.extract_top(), Ok(2));
    /// assert_eq!(heap.extract_top(), Err(Error::EmptyHeap));
    /// ```
    pub fn extract_top(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    fn outranks(&self, a: usize, b: usize) -> bool {
        self.priority.compare(&self.data[a], &self.data[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.outranks(idx, parent) {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;

            let mut largest = idx;
            if left < len && self.outranks(left, largest) {
                largest = left;
            }
            if right < len && self.outranks(right, largest) {
                largest = right;
            }
            if largest == idx {
                break;
            }
            self.data.swap(idx, largest);
            idx = largest;
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, P: Priority<T>> Extend<T> for PriorityHeap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
