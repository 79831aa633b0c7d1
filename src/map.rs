//! An ordered map backed by an (unbalanced) Binary Search Tree.
//!
//! Each node owns its two children outright, so there are no parent pointers.
//! Operations that restructure the tree take a subtree by value (or by `&mut`
//! link) and hand back the possibly replaced subtree.
//!
//! # Examples
//!
//! ```
//! use classic_collections::map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set(0, "zero");
//! map.set(5, "five");
//! map.set(2, "two");
//!
//! assert_eq!(map.get(&5), Ok(&"five"));
//!
//! // Setting an existing key only replaces its value.
//! map.set(5, "FIVE!!!");
//! assert_eq!(map.len(), 3);
//!
//! let items: Vec<_> = map.items().collect();
//! assert_eq!(items, [(&0, &"zero"), (&2, &"two"), (&5, &"FIVE!!!")]);
//!
//! map.delete(&2).unwrap();
//! assert_eq!(map.len(), 2);
//! assert!(!map.contains(&2));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

use crate::error::{Error, Result};

type Link<K, V> = Option<Box<Node<K, V>>>;

/// A mapping from unique, totally ordered keys to values which can be
/// traversed in ascending key order.
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for OrderedMap<K, V> {
    // A tree built from sorted keys is a linked list, so dropping it
    // recursively could blow the stack.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K, V> Clone for OrderedMap<K, V>
where
    K: Clone,
    V: Clone,
{
    // TODO stack based Clone, same as `Drop`.
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items()).finish()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Generates a new, empty `OrderedMap`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of distinct keys in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value stored at `key`, or [`Error::KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::{map::OrderedMap, Error};
    ///
    /// let mut map = OrderedMap::new();
    /// map.set(1, 2);
    ///
    /// assert_eq!(map.get(&1), Ok(&2));
    /// assert_eq!(map.get(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Ok(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        Err(Error::KeyNotFound)
    }

    /// Like [`get`](Self::get) but hands out a mutable reference.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Ok(&mut node.value),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        Err(Error::KeyNotFound)
    }

    /// Whether a node with the given key exists.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get(key).is_ok()
    }

    /// Associates `value` with `key`. If the key was already present only its
    /// value is replaced (and returned); the length does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// assert_eq!(map.set(1, 2), None);
    /// assert_eq!(map.set(1, 3), Some(2));
    /// assert_eq!(map.get(&1), Ok(&3));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let (root, replaced) = Node::insert(self.root.take(), key, value);
        self.root = Some(root);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Removes the node with the given key and returns its value. A node with
    /// two children takes over the key and value of its in-order predecessor,
    /// which is then unlinked from the left subtree instead.
    ///
    /// Fails with [`Error::KeyNotFound`] (leaving the map untouched) if the
    /// key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::{map::OrderedMap, Error};
    ///
    /// let mut map = OrderedMap::new();
    /// map.set(1, 2);
    ///
    /// assert_eq!(map.delete(&1), Ok(2));
    /// assert_eq!(map.delete(&1), Err(Error::KeyNotFound));
    /// assert!(map.is_empty());
    /// ```
    pub fn delete(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let removed = Node::remove(&mut self.root, key).ok_or(Error::KeyNotFound)?;
        self.len -= 1;
        Ok(removed)
    }

    /// The number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.items())
    }

    /// Values in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.items())
    }

    /// Key/value pairs in ascending key order.
    pub fn items(&self) -> Items<'_, K, V> {
        Items::new(self.root.as_deref(), self.len)
    }

    /// Renders the tree level by level, one line per level. Every key is
    /// centred in a field `width / 2^level` columns wide and missing nodes
    /// are drawn as `-` down to the deepest level.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::map::OrderedMap;
    ///
    /// let map: OrderedMap<_, _> = [(2, ()), (1, ())].into_iter().collect();
    /// assert_eq!(map.pretty(8), "   2    \n 1   -  ");
    /// ```
    pub fn pretty(&self, width: usize) -> String
    where
        K: fmt::Display,
    {
        let height = self.height();
        let mut pending = VecDeque::from([(self.root.as_deref(), 0usize)]);
        let mut previous_level = 0;
        let mut rendered = String::new();

        while let Some((node, level)) = pending.pop_front() {
            if level != previous_level {
                previous_level = level;
                rendered.push('\n');
            }
            let field = u32::try_from(level)
                .ok()
                .and_then(|shift| width.checked_shr(shift))
                .unwrap_or(0);
            let above_deepest = level + 1 < height;

            match node {
                None => {
                    if above_deepest {
                        pending.push_back((None, level + 1));
                        pending.push_back((None, level + 1));
                    }
                    rendered.push_str(&format!("{:^w$}", "-", w = field));
                }
                Some(node) => {
                    if node.left.is_some() || above_deepest {
                        pending.push_back((node.left.as_deref(), level + 1));
                    }
                    if node.right.is_some() || above_deepest {
                        pending.push_back((node.right.as_deref(), level + 1));
                    }
                    rendered.push_str(&format!("{:^w$}", node.key.to_string(), w = field));
                }
            }
        }

        rendered
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Iterating a map by reference visits its keys, like [`OrderedMap::keys`].
impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.height());
        let right = self.right.as_ref().map_or(0, |n| n.height());
        left.max(right) + 1
    }

    /// Inserts into the subtree rooted at `link`, returning the new subtree
    /// root and the value that was replaced, if any.
    fn insert(link: Link<K, V>, key: K, value: V) -> (Box<Self>, Option<V>)
    where
        K: Ord,
    {
        let mut node = match link {
            None => {
                trace!("created tree node");
                return (Self::new_boxed(key, value), None);
            }
            Some(node) => node,
        };

        let replaced = match key.cmp(&node.key) {
            Ordering::Less => {
                let (left, replaced) = Self::insert(node.left.take(), key, value);
                node.left = Some(left);
                replaced
            }
            Ordering::Equal => Some(mem::replace(&mut node.value, value)),
            Ordering::Greater => {
                let (right, replaced) = Self::insert(node.right.take(), key, value);
                node.right = Some(right);
                replaced
            }
        };

        if let Some(left) = &node.left {
            debug_assert!(left.key < node.key);
        }
        if let Some(right) = &node.right {
            debug_assert!(right.key > node.key);
        }

        (node, replaced)
    }

    /// Removes `key` from the subtree behind `link`, rewriting the link in
    /// place. Returns `None` without touching anything if the key is absent.
    fn remove(link: &mut Link<K, V>, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let node = link.as_mut()?;
        match key.cmp(&node.key) {
            Ordering::Less => return Self::remove(&mut node.left, key),
            Ordering::Greater => return Self::remove(&mut node.right, key),
            Ordering::Equal => {}
        }

        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => Some(node.value),
            (Some(child), None) | (None, Some(child)) => {
                *link = Some(child);
                Some(node.value)
            }
            // With two children the predecessor (the largest key in the left
            // subtree) moves into this node. It has no right child, so
            // unlinking it is one of the easy cases above.
            (Some(left), right @ Some(_)) => {
                let (key, value, left) = Self::take_largest(left);
                trace!("spliced in-order predecessor");
                node.key = key;
                node.left = left;
                node.right = right;
                let removed = mem::replace(&mut node.value, value);
                *link = Some(node);
                Some(removed)
            }
        }
    }

    /// Returns the key and value of the largest node and a new subtree without that largest node.
    fn take_largest(mut node: Box<Self>) -> (K, V, Link<K, V>) {
        match node.right.take() {
            Some(right) => {
                let (key, value, rest) = Self::take_largest(right);
                node.right = rest;
                (key, value, Some(node))
            }
            None => {
                let Self {
                    key, value, left, ..
                } = *node;
                (key, value, left)
            }
        }
    }
}

/// In-order iterator over the key/value pairs of an [`OrderedMap`].
///
/// Holds the chain of nodes whose left subtrees are being visited, so every
/// step costs O(1) amortized.
pub struct Items<'a, K, V> {
    pending: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Items<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut items = Self {
            pending: Vec::new(),
            remaining: len,
        };
        items.descend_left(root);
        items
    }

    fn descend_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.pending.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<K, V> Clone for Items<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Items<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Items<'_, K, V> {}
impl<K, V> FusedIterator for Items<'_, K, V> {}

/// Ascending iterator over the keys of an [`OrderedMap`].
pub struct Keys<'a, K, V>(Items<'a, K, V>);

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`OrderedMap`], ordered by key.
pub struct Values<'a, K, V>(Items<'a, K, V>);

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
