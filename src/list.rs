use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::iter::{ArrayListCursor, ArrayListIter, ArrayListRevIter};
use crate::policy::ResizePolicy;

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

/// A growable list backed by a single contiguous buffer
///
/// Slots `[0, len)` always hold an element, slots `[len, capacity)` are empty.
#[derive(Clone)]
pub struct ArrayList<T> {
    buffer: Box<[Option<T>]>,
    size: usize,
    policy: ResizePolicy,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default resize policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(ResizePolicy::default())
    }

    /// Creates an empty list that grows and shrinks according to `policy`.
    #[must_use]
    pub fn with_policy(policy: ResizePolicy) -> Self {
        Self {
            buffer: empty_slots(0),
            size: 0,
            policy,
        }
    }

    /// Creates an empty list with exactly `capacity` slots preallocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: empty_slots(capacity),
            size: 0,
            policy: ResizePolicy::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots, always `>= len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    pub(crate) fn live_slots(&self) -> &[Option<T>] {
        &self.buffer[..self.size]
    }

    fn within_range(&self, index: usize) -> bool {
        index < self.size
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live_slots().get(index)?.as_ref()
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buffer[..self.size].get_mut(index)?.as_mut()
    }

    /// Appends one element to the end of the list.
    pub fn push(&mut self, value: T) {
        self.grow_by(1);
        self.write_tail(value);
    }

    /// Appends all `values` to the end of the list, preserving their order.
    ///
    /// The buffer is grown at most once for the whole batch.
    pub fn add<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        self.grow_by(values.len());
        for value in values {
            self.write_tail(value);
        }
    }

    /// Overwrites the element at `index`.
    ///
    /// `index == len()` appends instead. Larger indices are ignored.
    pub fn set(&mut self, index: usize, value: T) {
        if self.within_range(index) {
            self.buffer[index] = Some(value);
        } else if index == self.size {
            self.push(value);
        }
    }

    /// Inserts `values` at `index`, shifting the element at that position and
    /// everything after it to the right.
    ///
    /// `index == len()` appends. Larger indices are ignored.
    pub fn insert<I>(&mut self, index: usize, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        if index > self.size {
            return;
        }
        if index == self.size {
            self.add(values);
            return;
        }

        let values = values.into_iter();
        self.grow_by(values.len());
        let old_size = self.size;
        for value in values {
            self.write_tail(value);
        }
        // New values were written at the tail; rotate them into place
        self.buffer[index..self.size].rotate_right(self.size - old_size);
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// Returns `None` and leaves the list untouched if the index is out of
    /// bounds. May shrink the buffer according to the resize policy.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if !self.within_range(index) {
            return None;
        }

        let removed = self.buffer[index].take();
        self.buffer[index..self.size].rotate_left(1);
        self.size -= 1;
        self.shrink();

        removed
    }

    /// Swaps the elements at `i` and `j`. Does nothing unless both are in range.
    pub fn swap(&mut self, i: usize, j: usize) {
        if self.within_range(i) && self.within_range(j) {
            self.buffer.swap(i, j);
        }
    }

    /// Removes all elements and releases the buffer.
    pub fn clear(&mut self) {
        tracing::debug!(
            old_capacity = self.capacity(),
            len = self.size,
            "clearing array list"
        );
        self.size = 0;
        self.buffer = empty_slots(0);
    }

    /// Sorts the list in place with a three-way comparator.
    ///
    /// The sort is not stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.size < 2 {
            return;
        }
        self.buffer[..self.size].sort_unstable_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        });
    }

    /// Sorts the list in place with a strict less-than predicate.
    pub fn sort_by_less<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Returns an iterator over the elements in the list.
    #[must_use]
    pub fn iter(&self) -> ArrayListIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements from last to first.
    #[must_use]
    pub fn iter_rev(&self) -> ArrayListRevIter<'_, T> {
        ArrayListRevIter::new(self)
    }

    /// Returns a bidirectional cursor positioned before the first element.
    #[must_use]
    pub fn cursor(&self) -> ArrayListCursor<'_, T> {
        ArrayListCursor::new(self)
    }

    /// Replaces the whole content, leaving capacity exactly `values.len()`.
    pub(crate) fn replace_with(&mut self, values: Vec<T>) {
        self.size = values.len();
        self.buffer = values.into_iter().map(Some).collect();
    }

    fn write_tail(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow_by(1);
        }
        self.buffer[self.size] = Some(value);
        self.size += 1;
    }

    fn grow_by(&mut self, additional: usize) {
        if let Some(capacity) = self
            .policy
            .grown_capacity(self.size, self.capacity(), additional)
        {
            self.reallocate(capacity);
        }
    }

    fn shrink(&mut self) {
        if let Some(capacity) = self.policy.shrunk_capacity(self.size, self.capacity()) {
            self.reallocate(capacity);
        }
    }

    fn reallocate(&mut self, capacity: usize) {
        tracing::debug!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            len = self.size,
            "reallocating array list buffer"
        );
        let mut buffer = empty_slots(capacity);
        for (dst, src) in buffer.iter_mut().zip(self.buffer[..self.size].iter_mut()) {
            *dst = src.take();
        }
        self.buffer = buffer;
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Checks that every one of `values` is present in the list.
    ///
    /// An empty query is always contained.
    #[must_use]
    pub fn contains(&self, values: &[T]) -> bool {
        values
            .iter()
            .all(|value| self.iter().any(|element| element == value))
    }

    /// Returns the position of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }
}

impl<T: Clone> ArrayList<T> {
    /// Returns a copy of the elements in order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> ArrayList<T> {
    /// Sorts the list in place by the natural order of `T`.
    pub fn sort(&mut self) {
        self.sort_by(T::cmp);
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        let mut list = Self::new();
        list.replace_with(values);
        list
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live_slots() == other.live_slots()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ArrayList")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
