use core::slice;

use crate::list::ArrayList;

/// Iterator over elements in an `ArrayList`
///
/// This iterator implements `Clone`.
pub struct ArrayListIter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for ArrayListIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for ArrayListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for ArrayListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = ArrayListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        ArrayListIter {
            slots: self.live_slots().iter(),
        }
    }
}

/// Reverse iterator over elements in an `ArrayList`
///
/// This iterator implements `Clone`.
pub struct ArrayListRevIter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> ArrayListRevIter<'a, T> {
    pub(crate) fn new(list: &'a ArrayList<T>) -> Self {
        Self {
            slots: list.live_slots().iter(),
        }
    }
}

impl<T> Clone for ArrayListRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for ArrayListRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for ArrayListRevIter<'_, T> {}

/// Stateful bidirectional cursor over an `ArrayList`
///
/// The cursor moves over the positions `before-first, 0, 1, .., len-1,
/// after-last`. It starts before the first element. `next()` and `prev()`
/// return whether the cursor landed on an element, after which `index()` and
/// `value()` report it.
///
/// The cursor borrows the list, so the list cannot be mutated while the
/// cursor is alive.
///
/// ```
/// # use arraylist::ArrayList;
/// let list: ArrayList<i32> = [10, 20, 30].into_iter().collect();
/// let mut cursor = list.cursor();
///
/// let mut seen = Vec::new();
/// while cursor.next() {
///     seen.push((cursor.index().unwrap(), *cursor.value().unwrap()));
/// }
/// assert_eq!(seen, vec![(0, 10), (1, 20), (2, 30)]);
///
/// assert!(cursor.last());
/// assert_eq!(cursor.value(), Some(&30));
/// ```
pub struct ArrayListCursor<'a, T> {
    list: &'a ArrayList<T>,
    // Shifted by one: 0 is before-first, len + 1 is after-last
    position: usize,
}

impl<T> Clone for ArrayListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            position: self.position,
        }
    }
}

impl<'a, T> ArrayListCursor<'a, T> {
    pub(crate) fn new(list: &'a ArrayList<T>) -> Self {
        Self { list, position: 0 }
    }

    fn on_element(&self) -> bool {
        (1..=self.list.len()).contains(&self.position)
    }

    /// Moves the cursor before the first element.
    pub fn begin(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor past the last element.
    pub fn end(&mut self) {
        self.position = self.list.len() + 1;
    }

    /// Advances the cursor, stopping at the after-last position.
    ///
    /// Returns true if the cursor is now on an element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.position <= self.list.len() {
            self.position += 1;
        }
        self.on_element()
    }

    /// Moves the cursor back, stopping at the before-first position.
    ///
    /// Returns true if the cursor is now on an element.
    pub fn prev(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
        }
        self.on_element()
    }

    /// Moves to the first element. Returns false if the list is empty.
    pub fn first(&mut self) -> bool {
        self.begin();
        self.next()
    }

    /// Moves to the last element. Returns false if the list is empty.
    pub fn last(&mut self) -> bool {
        self.end();
        self.prev()
    }

    /// Index of the current element, `None` at either sentinel position.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.on_element().then(|| self.position - 1)
    }

    /// The current element, `None` at either sentinel position.
    #[must_use]
    pub fn value(&self) -> Option<&'a T> {
        self.list.get(self.index()?)
    }

    /// Advances to the next element for which `predicate(index, value)` holds.
    ///
    /// Returns false, leaving the cursor after the last element, if no
    /// further element matches.
    pub fn next_to<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        while self.next() {
            let index = self.position - 1;
            if self
                .list
                .get(index)
                .is_some_and(|value| predicate(index, value))
            {
                return true;
            }
        }
        false
    }

    /// Moves back to the previous element for which `predicate(index, value)`
    /// holds.
    ///
    /// Returns false, leaving the cursor before the first element, if no
    /// earlier element matches.
    pub fn prev_to<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(usize, &T) -> bool,
    {
        while self.prev() {
            let index = self.position - 1;
            if self
                .list
                .get(index)
                .is_some_and(|value| predicate(index, value))
            {
                return true;
            }
        }
        false
    }
}
