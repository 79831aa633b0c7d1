//! This crate exposes a handful of classic in-memory data structures, mostly
//! for educational purposes.
//!
//! ## Ordered map
//!
//! [`OrderedMap`](map::OrderedMap) is a Binary Search Tree used as a map. A
//! BST is defined recursively using the notion of a `Node`, which stores a
//! key, a value, and sometimes child `Node`s. Its invariants are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching therefore takes `O(height)`, and visiting the left subtree, then
//! the subtree root, then the right subtree yields the keys in sorted order.
//!
//! ## Heaps and running medians
//!
//! [`PriorityHeap`](heap::PriorityHeap) is an array-backed binary heap whose
//! order comes from a priority function picked at construction.
//! [`RunningMedianTracker`](median::RunningMedianTracker) pairs a max-heap
//! with a min-heap to report the median of a stream after every value in
//! `O(lg N)`.
//!
//! ## Linear structures
//!
//! [`ArrayList`](list::ArrayList) and [`CircularQueue`](queue::CircularQueue)
//! are built on the bare-bones [`ConstrainedArray`](array::ConstrainedArray).
//! [`Stack`](stack::Stack) is a singly linked list and drives the parsers in
//! [`parse`].
//!
//! Every fallible operation returns this crate's [`Error`] and leaves the
//! structure untouched when it fails. Notable events are emitted through
//! [`tracing`]; install a subscriber to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod array;
pub mod error;
pub mod heap;
pub mod list;
pub mod map;
pub mod median;
pub mod parse;
pub mod queue;
pub mod stack;

pub use error::{Error, Result};
