//! The error type shared by every collection in this crate.

use thiserror::Error;

/// Everything that can go wrong when operating on one of the collections.
///
/// Every variant is recoverable: the operation that returned it left the
/// collection exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The key is not present in an [`OrderedMap`](crate::map::OrderedMap).
    #[error("key not found")]
    KeyNotFound,

    /// `peek` or `extract_top` was called on an empty
    /// [`PriorityHeap`](crate::heap::PriorityHeap).
    #[error("heap is empty")]
    EmptyHeap,

    /// An index fell outside the slots of an array or list.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index, after normalisation.
        index: isize,
        /// The number of slots at the time of the access.
        len: usize,
    },

    /// A list slot that must hold a value was vacant.
    #[error("slot {index} is vacant")]
    VacantSlot {
        /// The vacant slot.
        index: usize,
    },

    /// The searched value is not present in the list.
    #[error("value not found")]
    ValueNotFound,

    /// The queue has no free slot left.
    #[error("queue is full")]
    QueueFull,

    /// The queue holds no elements.
    #[error("queue is empty")]
    QueueEmpty,

    /// A resize did not grow the queue.
    #[error("cannot resize a queue of capacity {current} to {requested}")]
    InvalidCapacity {
        /// Capacity before the resize.
        current: usize,
        /// Capacity that was asked for.
        requested: usize,
    },

    /// `pop` was called on an empty [`Stack`](crate::stack::Stack).
    #[error("stack is empty")]
    EmptyStack,

    /// A closing parenthesis had no opener, or an opener was never closed.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// A token that is neither an operand, an operator nor a parenthesis.
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
