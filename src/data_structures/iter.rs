//! Forward cursors over the stored entries of a sparse matrix.
//!
//! Both cursor kinds are thin wrappers around the not-yet-visited tail of
//! the entry sequence, so two cursors sit at the same position exactly when
//! their tails start at the same address. That makes them comparable within
//! and across kinds. `Iterator::next` yields the current entry and then
//! advances (post-increment), `advance` only moves (pre-increment).

use std::{mem, ptr};

use crate::data_structures::entry::Entry;

/// Read-only cursor.
pub struct Iter<'a, T> {
    rest: &'a [Entry<T>],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(rest: &'a [Entry<T>]) -> Self {
        Self { rest }
    }

    /// Entry under the cursor, `None` at the end.
    pub fn get(&self) -> Option<&'a Entry<T>> {
        self.rest.first()
    }

    pub fn advance(&mut self) -> &mut Self {
        if let Some((_, tail)) = self.rest.split_first() {
            self.rest = tail;
        }
        self
    }

    pub fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    fn position(&self) -> *const Entry<T> {
        self.rest.as_ptr()
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Iter<'a, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, tail) = self.rest.split_first()?;
        self.rest = tail;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Mutable cursor. Only entry values can be changed through it; coordinates
/// are fixed, so the row-major order of the sequence is never disturbed.
pub struct IterMut<'a, T> {
    rest: &'a mut [Entry<T>],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(rest: &'a mut [Entry<T>]) -> Self {
        Self { rest }
    }

    pub fn get(&self) -> Option<&Entry<T>> {
        self.rest.first()
    }

    pub fn get_mut(&mut self) -> Option<&mut Entry<T>> {
        self.rest.first_mut()
    }

    pub fn advance(&mut self) -> &mut Self {
        self.next();
        self
    }

    pub fn is_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Read-only cursor at the same position, borrowing this one.
    pub fn as_iter(&self) -> Iter<'_, T> {
        Iter::new(&*self.rest)
    }

    fn position(&self) -> *const Entry<T> {
        self.rest.as_ptr()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // an exhausted cursor must keep pointing one past the last entry
        if self.rest.is_empty() {
            return None;
        }
        let rest = mem::take(&mut self.rest);
        let (first, tail) = rest.split_first_mut()?;
        self.rest = tail;
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest.len(), Some(self.rest.len()))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> From<IterMut<'a, T>> for Iter<'a, T> {
    fn from(it: IterMut<'a, T>) -> Self {
        Iter::new(it.rest)
    }
}

impl<'a, 'b, T> PartialEq<Iter<'b, T>> for Iter<'a, T> {
    fn eq(&self, other: &Iter<'b, T>) -> bool {
        ptr::eq(self.position(), other.position())
    }
}

impl<'a, 'b, T> PartialEq<IterMut<'b, T>> for Iter<'a, T> {
    fn eq(&self, other: &IterMut<'b, T>) -> bool {
        ptr::eq(self.position(), other.position())
    }
}

impl<'a, 'b, T> PartialEq<IterMut<'b, T>> for IterMut<'a, T> {
    fn eq(&self, other: &IterMut<'b, T>) -> bool {
        ptr::eq(self.position(), other.position())
    }
}

impl<'a, 'b, T> PartialEq<Iter<'b, T>> for IterMut<'a, T> {
    fn eq(&self, other: &Iter<'b, T>) -> bool {
        ptr::eq(self.position(), other.position())
    }
}
