//! A LIFO stack stored as a singly linked list.
//!
//! # Examples
//!
//! ```
//! use classic_collections::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.to_string(), "--> 1");
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Error, Result};

type Link<T> = Option<Box<Frame<T>>>;

struct Frame<T> {
    value: T,
    next: Link<T>,
}

/// A last-in, first-out stack.
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(mut frame) = link {
            link = frame.next.take();
        }
    }
}

impl<T> Stack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Puts `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Frame { value, next }));
        self.len += 1;
    }

    /// Removes and returns the top value, or fails with
    /// [`Error::EmptyStack`].
    pub fn pop(&mut self) -> Result<T> {
        let frame = self.top.take().ok_or(Error::EmptyStack)?;
        let Frame { value, next } = *frame;
        self.top = next;
        self.len -= 1;
        Ok(value)
    }

    /// The top value, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|frame| &frame.value)
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The values from top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            f.write_str(if i == 0 { "--> " } else { ", " })?;
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Top-to-bottom iterator over a [`Stack`].
pub struct Iter<'a, T> {
    next: Option<&'a Frame<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.next.as_deref();
        Some(&frame.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
