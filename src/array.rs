//! A deliberately minimal array of slots.
//!
//! `ConstrainedArray` only lets you read or write a slot that already exists,
//! grow by one vacant slot at the end, or drop the last slot. It is the
//! backing store for [`ArrayList`](crate::list::ArrayList) and
//! [`CircularQueue`](crate::queue::CircularQueue), which have to build every
//! other operation out of these primitives.

use crate::error::{Error, Result};

/// A bounds-checked sequence of slots, each holding a value or vacant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstrainedArray<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for ConstrainedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ConstrainedArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }
}

impl<T> ConstrainedArray<T> {
    /// An array without any slots.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// An array of `len` vacant slots.
    pub fn with_slots(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// The number of slots, vacant or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The content of slot `index`; `None` if the slot is vacant.
    pub fn get(&self, index: usize) -> Result<Option<&T>> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Stores `value` in slot `index` and returns what the slot held before.
    pub fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>> {
        match self.slots.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(self.out_of_bounds(index)),
        }
    }

    /// Vacates slot `index`, returning its content.
    pub fn take(&mut self, index: usize) -> Result<Option<T>> {
        self.set(index, None)
    }

    /// Grows the array by one vacant slot at the end.
    pub fn push_slot(&mut self) {
        self.slots.push(None);
    }

    /// Removes the last slot, returning its content.
    pub fn pop_slot(&mut self) -> Result<Option<T>> {
        self.slots.pop().ok_or(Error::IndexOutOfBounds { index: 0, len: 0 })
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index: index as isize,
            len: self.len(),
        }
    }
}
