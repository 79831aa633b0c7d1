//! The running median of a stream of numbers, kept up to date in O(lg N) per
//! value with two heaps.
//!
//! The smaller half of the values lives in a max-heap (`low`) and the larger
//! half in a min-heap (`high`), so the middle of the stream is always at the
//! top of one or both heaps. The sizes of the two heaps never differ by more
//! than one.
//!
//! # Examples
//!
//! ```
//! use classic_collections::median::running_medians;
//!
//! assert_eq!(running_medians([3, 1, 9, 25, 12]), [3.0, 2.0, 3.0, 6.0, 9.0]);
//! assert_eq!(running_medians([8, 4, 11, 18]).last(), Some(&9.5));
//! ```

use std::cmp::{Ordering, Reverse};

use tracing::trace;

use crate::heap::PriorityHeap;

/// A heap whose top is its smallest element.
type MinHeap<T> = PriorityHeap<T, fn(&T) -> Reverse<T>>;

fn reversed<T: Copy>(item: &T) -> Reverse<T> {
    Reverse(*item)
}

/// Tracks the median of every value observed so far.
#[derive(Debug)]
pub struct RunningMedianTracker<T> {
    low: PriorityHeap<T>,
    high: MinHeap<T>,
    current: f64,
}

impl<T> Default for RunningMedianTracker<T>
where
    T: Ord + Copy + Into<f64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RunningMedianTracker<T>
where
    T: Ord + Copy + Into<f64>,
{
    /// Generates a tracker that has not observed anything yet.
    pub fn new() -> Self {
        Self {
            low: PriorityHeap::new(),
            high: PriorityHeap::with_priority(reversed::<T> as fn(&T) -> Reverse<T>),
            current: 0.0,
        }
    }

    /// The number of values observed.
    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    /// Whether nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The median of everything observed so far, if anything has been.
    pub fn median(&self) -> Option<f64> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Adds `value` to the stream and returns the new median.
    ///
    /// A value below the current median joins the lower half; anything else,
    /// including a value equal to the median, joins the upper half.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::median::RunningMedianTracker;
    ///
    /// let mut tracker = RunningMedianTracker::new();
    /// assert_eq!(tracker.observe(8), 8.0);
    /// assert_eq!(tracker.observe(4), 6.0);
    /// assert_eq!(tracker.observe(11), 8.0);
    /// assert_eq!(tracker.observe(18), 9.5);
    /// ```
    pub fn observe(&mut self, value: T) -> f64 {
        let as_float: f64 = value.into();
        if as_float < self.current {
            self.low.insert(value);
        } else {
            self.high.insert(value);
        }

        self.rebalance();
        self.current = self.compute_median();
        self.current
    }

    fn rebalance(&mut self) {
        if self.low.len() > self.high.len() + 1 {
            if let Ok(top) = self.low.extract_top() {
                trace!(low = self.low.len(), high = self.high.len(), "moved low top to high");
                self.high.insert(top);
            }
        } else if self.high.len() > self.low.len() + 1 {
            if let Ok(top) = self.high.extract_top() {
                trace!(low = self.low.len(), high = self.high.len(), "moved high top to low");
                self.low.insert(top);
            }
        }
    }

    fn compute_median(&self) -> f64 {
        let low: Option<f64> = self.low.peek().ok().map(|&top| top.into());
        let high: Option<f64> = self.high.peek().ok().map(|&top| top.into());

        match (self.low.len().cmp(&self.high.len()), low, high) {
            (Ordering::Equal, Some(low), Some(high)) => (low + high) / 2.0,
            (Ordering::Greater, Some(low), _) => low,
            (Ordering::Less, _, Some(high)) => high,
            // Only reachable before the first observation.
            _ => self.current,
        }
    }
}

impl<T> Extend<T> for RunningMedianTracker<T>
where
    T: Ord + Copy + Into<f64>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.observe(value);
        }
    }
}

/// The running median after each value of `values`: the output has one entry
/// per input, and entry `i` is the median of the first `i + 1` values.
pub fn running_medians<T, I>(values: I) -> Vec<f64>
where
    T: Ord + Copy + Into<f64>,
    I: IntoIterator<Item = T>,
{
    let mut tracker = RunningMedianTracker::new();
    values
        .into_iter()
        .map(|value| tracker.observe(value))
        .collect()
}
