//! A growable list built only from the primitives of [`ConstrainedArray`].
//!
//! Indices are signed. A negative index counts from the end of the list and
//! is clamped to 0 if it reaches past the front, so `-1` is the last element
//! and `-len - 5` is the first one.
//!
//! # Examples
//!
//! ```
//! use classic_collections::list::ArrayList;
//!
//! let mut list: ArrayList<_> = (1..=4).collect();
//! list.insert(0, 0).unwrap();
//! assert_eq!(list.get(-1), Ok(&4));
//! assert_eq!(list.pop(1), Ok(1));
//! assert_eq!(list.to_string(), "[0, 2, 3, 4]");
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Add;

use crate::array::ConstrainedArray;
use crate::error::{Error, Result};

/// A dense, index-addressable list. Every slot of the backing array holds a
/// value.
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    data: ConstrainedArray<T>,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<ConstrainedArray<T>> for ArrayList<T> {
    /// Wraps an existing array. Vacant slots in it surface as
    /// [`Error::VacantSlot`] when read.
    fn from(data: ConstrainedArray<T>) -> Self {
        Self { data }
    }
}

impl<T> ArrayList<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            data: ConstrainedArray::new(),
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element at `index`.
    pub fn get(&self, index: isize) -> Result<&T> {
        self.slot(self.position(index)?)
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let position = self.position(index)?;
        self.data
            .set(position, Some(value))?
            .ok_or(Error::VacantSlot { index: position })
    }

    /// Appends `value` to the end of the list.
    pub fn push(&mut self, value: T) {
        let last = self.data.len();
        self.data.push_slot();
        let previous = self.data.set(last, Some(value));
        debug_assert!(matches!(previous, Ok(None)));
    }

    /// Inserts `value` before the element at `index`, shifting everything
    /// after it one place to the right. `index` may equal the length, which
    /// appends; negative or larger indices are rejected.
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        let len = self.len();
        let position = usize::try_from(index)
            .ok()
            .filter(|&position| position <= len)
            .ok_or(Error::IndexOutOfBounds { index, len })?;

        self.data.push_slot();
        for i in (position + 1..=len).rev() {
            let moved = self.data.take(i - 1)?;
            self.data.set(i, moved)?;
        }
        self.data.set(position, Some(value))?;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one place to the left.
    pub fn pop(&mut self, index: isize) -> Result<T> {
        let position = self.position(index)?;
        let removed = self.take_slot(position)?;
        for i in position + 1..self.len() {
            let moved = self.data.take(i)?;
            self.data.set(i - 1, moved)?;
        }
        self.data.pop_slot()?;
        Ok(removed)
    }

    /// Deletes the element at `index`, shifting everything after it left.
    pub fn remove_at(&mut self, index: isize) -> Result<()> {
        self.pop(index).map(drop)
    }

    /// Removes and returns the last element.
    pub fn pop_last(&mut self) -> Result<T> {
        self.pop(-1)
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let position = self
            .iter()
            .position(|x| x == value)
            .ok_or(Error::ValueNotFound)?;
        self.pop(position as isize)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    /// How many elements equal `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&x| x == value).count()
    }

    /// The position of the first element equal to `value` within
    /// `start..end` (both normalised like any other index; `end` defaults to
    /// the length).
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::{list::ArrayList, Error};
    ///
    /// let list: ArrayList<_> = [1, 2, 1, 2, 1, 1, 1, 2, 1].into_iter().collect();
    /// assert_eq!(list.index(&2, 0, None), Ok(1));
    /// assert_eq!(list.index(&2, 4, Some(-1)), Ok(7));
    /// assert_eq!(list.index(&2, 4, Some(-2)), Err(Error::ValueNotFound));
    /// ```
    pub fn index(&self, value: &T, start: isize, end: Option<isize>) -> Result<usize>
    where
        T: PartialEq,
    {
        let len = self.len();
        let start = self.normalize(start) as usize;
        let end = end.map_or(len, |end| (self.normalize(end) as usize).min(len));

        for position in start..end {
            if self.slot(position)? == value {
                return Ok(position);
            }
        }
        Err(Error::ValueNotFound)
    }

    /// The smallest element, if any.
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().min()
    }

    /// The largest element, if any.
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.iter().max()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.data = ConstrainedArray::new();
    }

    /// The elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            data: &self.data,
            front: 0,
        }
    }

    fn normalize(&self, index: isize) -> isize {
        if index < 0 {
            (index + self.len() as isize).max(0)
        } else {
            index
        }
    }

    fn position(&self, index: isize) -> Result<usize> {
        let len = self.len();
        let index = self.normalize(index);
        match usize::try_from(index) {
            Ok(position) if position < len => Ok(position),
            _ => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    fn slot(&self, position: usize) -> Result<&T> {
        self.data
            .get(position)?
            .ok_or(Error::VacantSlot { index: position })
    }

    fn take_slot(&mut self, position: usize) -> Result<T> {
        self.data
            .take(position)?
            .ok_or(Error::VacantSlot { index: position })
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Concatenation: the elements of `self` followed by those of `other`.
impl<T> Add for ArrayList<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            data: self.data,
            front: 0,
        }
    }
}

/// Borrowing iterator over an [`ArrayList`], front to back.
pub struct Iter<'a, T> {
    data: &'a ConstrainedArray<T>,
    front: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            front: self.front,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.data.get(self.front).ok().flatten()?;
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.front);
        (0, Some(remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`ArrayList`], front to back.
pub struct IntoIter<T> {
    data: ConstrainedArray<T>,
    front: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.data.take(self.front).ok().flatten()?;
        self.front += 1;
        Some(value)
    }
}
